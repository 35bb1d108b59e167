use soroban_sdk::{contracttype, Address, Env, String, Symbol};

/// Category a proposal declares at creation. Only `TreasurySpend` can release funds.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalType {
    TreasurySpend,
    AddAsset,
    UpgradeRule,
    EmergencyPause,
}

impl ProposalType {
    const ALL: [ProposalType; 4] = [
        ProposalType::TreasurySpend,
        ProposalType::AddAsset,
        ProposalType::UpgradeRule,
        ProposalType::EmergencyPause,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalType::TreasurySpend => "treasury-spend",
            ProposalType::AddAsset => "add-asset",
            ProposalType::UpgradeRule => "upgrade-rule",
            ProposalType::EmergencyPause => "emergency-pause",
        }
    }

    /// Parses the wire name (`"treasury-spend"`, ...). Unknown names yield `None`.
    pub fn from_string(env: &Env, value: &String) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| *value == String::from_str(env, kind.as_str()))
    }
}

/// A governance proposal as stored by the proposal manager.
///
/// The treasury receives this record by value and trusts only its fields; it never
/// reads proposal storage itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub title: String,
    pub description: String,
    pub proposal_type: ProposalType,
    pub target_contract: Address,
    pub target_function: Symbol,
    pub target_value: i128,
    /// First ledger sequence at which votes are accepted.
    pub start_block: u32,
    /// First ledger sequence at which votes are rejected and execution opens.
    pub end_block: u32,
    pub yes_votes: i128,
    pub no_votes: i128,
    pub executed: bool,
    pub passed: bool,
}

/// Lifecycle stage, derived from the ledger sequence. Never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Voting,
    Closed,
    Executed,
}

impl Proposal {
    pub fn status(&self, current_block: u32) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if current_block < self.start_block {
            ProposalStatus::Pending
        } else if current_block < self.end_block {
            ProposalStatus::Voting
        } else {
            ProposalStatus::Closed
        }
    }

    pub fn is_voting_open(&self, current_block: u32) -> bool {
        self.start_block <= current_block && current_block < self.end_block
    }

    pub fn total_votes(&self) -> Option<i128> {
        self.yes_votes.checked_add(self.no_votes)
    }

    /// A quarter of all cast weight, rounded down.
    pub fn quorum(&self) -> Option<i128> {
        self.total_votes().map(|total| total / 4)
    }
}

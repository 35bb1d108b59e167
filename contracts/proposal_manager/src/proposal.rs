use governance_common::{
    char_count, read_executor, require_executor, transfer_executor, ttl, write_executor, Proposal,
    ProposalStatus, ProposalType, MAX_UTF8_CHAR_BYTES,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};

use crate::errors::ProposalError;
use crate::events;
use crate::types::{DataKey, Vote};

// Text limits count characters.
pub const MAX_TITLE_LEN: u32 = 80;
pub const MAX_DESCRIPTION_LEN: u32 = 2000;
const MAX_TITLE_BYTES: usize = MAX_TITLE_LEN as usize * MAX_UTF8_CHAR_BYTES;
const MAX_DESCRIPTION_BYTES: usize = MAX_DESCRIPTION_LEN as usize * MAX_UTF8_CHAR_BYTES;
/// Exclusive lower bound on the voting period, in ledgers.
pub const MIN_DURATION_BLOCKS: u32 = 100;
/// Inclusive upper bound on the voting period, in ledgers.
pub const MAX_DURATION_BLOCKS: u32 = 10_000;

#[contract]
pub struct ProposalManagerContract;

#[contractimpl]
impl ProposalManagerContract {
    pub fn __constructor(env: Env, executor: Address) {
        write_executor(&env, &executor);
        env.storage().instance().set(&DataKey::NextProposalId, &0u64);
    }

    pub fn set_executor(env: Env, caller: Address, new_executor: Address) -> Result<(), ProposalError> {
        let previous = transfer_executor(&env, &caller, &new_executor, ProposalError::Unauthorized)?;
        events::executor_changed(&env, &previous, &new_executor);
        Ok(())
    }

    /// Opens a proposal whose voting window starts on the next ledger and lasts
    /// `duration_blocks` ledgers.
    pub fn create_proposal(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        proposal_type: String,
        target_contract: Address,
        target_function: Symbol,
        target_value: i128,
        duration_blocks: u32,
    ) -> Result<u64, ProposalError> {
        caller.require_auth();

        match char_count::<MAX_TITLE_BYTES>(&title) {
            Some(chars) if (1..=MAX_TITLE_LEN).contains(&chars) => {}
            _ => return Err(ProposalError::TitleInvalid),
        }

        match char_count::<MAX_DESCRIPTION_BYTES>(&description) {
            Some(chars) if chars <= MAX_DESCRIPTION_LEN => {}
            _ => return Err(ProposalError::DescriptionTooLong),
        }

        let proposal_type =
            ProposalType::from_string(&env, &proposal_type).ok_or(ProposalError::InvalidProposalType)?;

        if duration_blocks <= MIN_DURATION_BLOCKS || duration_blocks > MAX_DURATION_BLOCKS {
            return Err(ProposalError::InvalidDuration);
        }

        let start_block = env.ledger().sequence() + 1;
        let end_block = start_block + duration_blocks;

        let proposal_id = Self::get_next_proposal_id(env.clone());
        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            title,
            description,
            proposal_type,
            target_contract,
            target_function,
            target_value,
            start_block,
            end_block,
            yes_votes: 0,
            no_votes: 0,
            executed: false,
            passed: false,
        };

        Self::write_proposal(&env, &proposal);
        env.storage()
            .instance()
            .set(&DataKey::NextProposalId, &(proposal_id + 1));
        ttl::extend_instance(&env);

        events::proposal_created(&env, proposal_id, &caller, proposal_type, end_block);
        Ok(proposal_id)
    }

    /// Records one weighted vote per voter. Votes cannot be changed or withdrawn.
    pub fn vote_on_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        vote_yes: bool,
        weight: i128,
    ) -> Result<bool, ProposalError> {
        caller.require_auth();

        let mut proposal = Self::load_proposal(&env, proposal_id)?;

        if !proposal.is_voting_open(env.ledger().sequence()) {
            return Err(ProposalError::VotingEnded);
        }

        if proposal.executed {
            return Err(ProposalError::AlreadyExecuted);
        }

        let vote_key = DataKey::Vote(proposal_id, caller.clone());
        if env.storage().persistent().has(&vote_key) {
            return Err(ProposalError::AlreadyVoted);
        }

        if weight <= 0 {
            return Err(ProposalError::InvalidWeight);
        }

        if vote_yes {
            proposal.yes_votes = proposal
                .yes_votes
                .checked_add(weight)
                .ok_or(ProposalError::InvalidWeight)?;
        } else {
            proposal.no_votes = proposal
                .no_votes
                .checked_add(weight)
                .ok_or(ProposalError::InvalidWeight)?;
        }

        // Keep the combined tally representable so the quorum can always be computed.
        if proposal.total_votes().is_none() {
            return Err(ProposalError::InvalidWeight);
        }

        env.storage().persistent().set(
            &vote_key,
            &Vote {
                vote: vote_yes,
                weight,
            },
        );
        ttl::extend_persistent(&env, &vote_key);
        Self::write_proposal(&env, &proposal);

        events::vote_cast(&env, proposal_id, &caller, vote_yes, weight);
        Ok(true)
    }

    /// Finalizes a proposal once its window has closed.
    ///
    /// Passes when yes weight is at least a quarter of all cast weight, so a
    /// proposal nobody voted on passes as well.
    pub fn execute_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<bool, ProposalError> {
        require_executor(&env, &caller, ProposalError::Unauthorized)?;

        let mut proposal = Self::load_proposal(&env, proposal_id)?;

        if env.ledger().sequence() < proposal.end_block {
            return Err(ProposalError::VotingNotEnded);
        }

        if proposal.executed {
            return Err(ProposalError::AlreadyExecuted);
        }

        // Tallies are bounded at vote time.
        let quorum = proposal.quorum().ok_or(ProposalError::QuorumNotReached)?;
        if proposal.yes_votes < quorum {
            log!(&env, "quorum not reached", proposal_id, proposal.yes_votes, quorum);
            return Err(ProposalError::QuorumNotReached);
        }

        proposal.executed = true;
        proposal.passed = true;
        Self::write_proposal(&env, &proposal);

        events::proposal_executed(&env, proposal_id, proposal.yes_votes, proposal.no_votes);
        Ok(true)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        env.storage().persistent().get(&DataKey::Proposal(proposal_id))
    }

    pub fn get_next_proposal_id(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::NextProposalId)
            .unwrap_or(0u64)
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Option<Vote> {
        env.storage()
            .persistent()
            .get(&DataKey::Vote(proposal_id, voter))
    }

    pub fn get_proposal_status(env: Env, proposal_id: u64) -> Option<ProposalStatus> {
        Self::get_proposal(env.clone(), proposal_id).map(|proposal| proposal.status(env.ledger().sequence()))
    }

    pub fn get_executor(env: Env) -> Option<Address> {
        read_executor(&env)
    }

    fn load_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, ProposalError> {
        env.storage()
            .persistent()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(ProposalError::ProposalNotFound)
    }

    fn write_proposal(env: &Env, proposal: &Proposal) {
        let key = DataKey::Proposal(proposal.id);
        env.storage().persistent().set(&key, proposal);
        ttl::extend_persistent(env, &key);
    }
}

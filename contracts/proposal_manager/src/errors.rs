use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalError {
    Unauthorized = 100,
    ProposalNotFound = 101,
    AlreadyVoted = 102,
    VotingEnded = 103,
    AlreadyExecuted = 104,
    QuorumNotReached = 105,
    VotingNotEnded = 106,
    InvalidProposalType = 107,
    InvalidWeight = 109,
    InvalidDuration = 110,
    DescriptionTooLong = 111,
    TitleInvalid = 112,
}

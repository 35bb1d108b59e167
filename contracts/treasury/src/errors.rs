use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TreasuryError {
    Unauthorized = 200,
    InsufficientBalance = 201,
    ProposalNotPassed = 202,
    /// Raised when the referenced proposal has *not* been executed yet.
    AlreadyExecuted = 203,
    InvalidAmount = 204,
    ProposalNotFound = 206,
    TreasuryLocked = 207,
}

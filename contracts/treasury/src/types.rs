use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    State,
    Deposit(Address, u64), // (depositor, nonce)
    Withdrawal(u64),
}

/// Singleton treasury record. `nonce` numbers deposits and withdrawals alike.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreasuryState {
    pub balance: i128,
    pub locked: bool,
    pub nonce: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub amount: i128,
    /// Ledger sequence of the deposit.
    pub timestamp: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub id: u64,
    pub proposal_id: u64,
    pub amount: i128,
    pub recipient: Address,
    pub executed: bool,
    pub timestamp: u32,
}

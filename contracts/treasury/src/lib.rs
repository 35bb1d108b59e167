//! Treasury custody. Deposits are open to anyone; withdrawals are executor-only and
//! must be backed by an executed, passed `treasury-spend` proposal whose target
//! value equals the withdrawn amount.

#![no_std]

mod errors;
mod events;
mod settlement;
mod treasury;
mod types;


pub use errors::TreasuryError;
pub use governance_common::{Proposal, ProposalType};
pub use settlement::validate_and_debit;
pub use treasury::*;
pub use types::{DataKey, Deposit, TreasuryState, Withdrawal};

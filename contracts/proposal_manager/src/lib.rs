//! Proposal lifecycle: creation, time-boxed weighted voting, and quorum-gated
//! execution by the executor.

#![no_std]

mod errors;
mod events;
mod proposal;
mod types;


pub use errors::ProposalError;
pub use governance_common::{Proposal, ProposalStatus, ProposalType};
pub use proposal::*;
pub use types::{DataKey, Vote};

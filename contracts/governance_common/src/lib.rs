//! Types and helpers shared by the energy governance contracts.
//!
//! - [`access`]: the per-contract executor role.
//! - [`proposal`]: the proposal record handed from the proposal manager to the treasury.
//! - [`interface`]: cross-contract clients used by the coordinator.
//! - [`text`]: character-based length limits for user-supplied strings.
//! - [`ttl`]: storage lifetime bumps.

#![no_std]

pub mod access;
pub mod interface;
pub mod proposal;
pub mod text;
pub mod ttl;

pub use access::{is_executor, read_executor, require_executor, transfer_executor, write_executor, AccessKey};
pub use interface::{ProposalReaderClient, TreasurySettlementClient};
pub use proposal::{Proposal, ProposalStatus, ProposalType};
pub use text::{char_count, MAX_UTF8_CHAR_BYTES};

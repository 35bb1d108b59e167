//! Binds the proposal manager to the treasury: looks up the authoritative
//! proposal at call time and spends against it.

#![no_std]

mod coordinator;
mod errors;
mod events;
mod types;

mod test;

pub use coordinator::*;
pub use errors::CoordinatorError;
pub use types::DataKey;

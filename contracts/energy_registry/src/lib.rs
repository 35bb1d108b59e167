//! Registry of physical energy assets: registration, metadata and ownership
//! changes, deactivation, and executor-controlled locking.

#![no_std]

mod errors;
mod events;
mod registry;
mod types;


pub use errors::AssetError;
pub use registry::*;
pub use types::{AssetType, DataKey, EnergyAsset};

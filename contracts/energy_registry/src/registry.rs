use governance_common::{
    char_count, read_executor, require_executor, transfer_executor, ttl, write_executor, MAX_UTF8_CHAR_BYTES,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::errors::AssetError;
use crate::events;
use crate::types::{AssetType, DataKey, EnergyAsset};

/// Characters, not bytes.
pub const MAX_LOCATION_LEN: u32 = 120;
const MAX_LOCATION_BYTES: usize = MAX_LOCATION_LEN as usize * MAX_UTF8_CHAR_BYTES;
pub const METADATA_HASH_LEN: u32 = 64;
/// Most recent registrations kept per location.
pub const LOCATION_INDEX_WINDOW: u32 = 100;

#[contract]
pub struct EnergyRegistryContract;

#[contractimpl]
impl EnergyRegistryContract {
    pub fn __constructor(env: Env, executor: Address) {
        write_executor(&env, &executor);
        env.storage().instance().set(&DataKey::AssetCount, &0u64);
    }

    pub fn set_executor(env: Env, caller: Address, new_executor: Address) -> Result<(), AssetError> {
        let previous = transfer_executor(&env, &caller, &new_executor, AssetError::Unauthorized)?;
        events::executor_changed(&env, &previous, &new_executor);
        Ok(())
    }

    pub fn register_asset(
        env: Env,
        caller: Address,
        asset_type: String,
        capacity_kw: u64,
        location: String,
        metadata_hash: String,
    ) -> Result<u64, AssetError> {
        caller.require_auth();

        let asset_type = AssetType::from_string(&env, &asset_type).ok_or(AssetError::InvalidMetadata)?;

        if capacity_kw == 0 {
            return Err(AssetError::InvalidCapacity);
        }

        match char_count::<MAX_LOCATION_BYTES>(&location) {
            Some(chars) if chars <= MAX_LOCATION_LEN => {}
            _ => return Err(AssetError::InvalidLocation),
        }

        if metadata_hash.len() != METADATA_HASH_LEN {
            return Err(AssetError::InvalidMetadata);
        }

        let asset_id = Self::get_total_assets(env.clone());
        let asset = EnergyAsset {
            id: asset_id,
            owner: caller.clone(),
            asset_type,
            capacity_kw,
            location: location.clone(),
            metadata_hash,
            registered_at: env.ledger().sequence(),
            active: true,
            locked: false,
        };

        Self::write_asset(&env, &asset);
        Self::index_owner(&env, &caller, asset_id);
        Self::index_location(&env, &location, asset_id);

        env.storage().instance().set(&DataKey::AssetCount, &(asset_id + 1));
        ttl::extend_instance(&env);

        events::asset_registered(&env, asset_id, &caller, asset_type, capacity_kw);
        Ok(asset_id)
    }

    pub fn update_asset_metadata(
        env: Env,
        caller: Address,
        asset_id: u64,
        new_hash: String,
    ) -> Result<bool, AssetError> {
        caller.require_auth();

        let mut asset = Self::load_asset(&env, asset_id)?;
        Self::require_owner(&asset, &caller)?;

        if asset.locked {
            return Err(AssetError::AssetLocked);
        }

        if new_hash.len() != METADATA_HASH_LEN {
            return Err(AssetError::InvalidMetadata);
        }

        asset.metadata_hash = new_hash;
        Self::write_asset(&env, &asset);

        events::metadata_updated(&env, asset_id, &asset.metadata_hash);
        Ok(true)
    }

    pub fn transfer_asset_ownership(
        env: Env,
        caller: Address,
        asset_id: u64,
        new_owner: Address,
    ) -> Result<bool, AssetError> {
        caller.require_auth();

        let mut asset = Self::load_asset(&env, asset_id)?;
        Self::require_owner(&asset, &caller)?;

        if asset.locked {
            return Err(AssetError::AssetLocked);
        }

        Self::unindex_owner(&env, &caller, asset_id);
        Self::index_owner(&env, &new_owner, asset_id);

        asset.owner = new_owner.clone();
        Self::write_asset(&env, &asset);

        events::ownership_transferred(&env, asset_id, &caller, &new_owner);
        Ok(true)
    }

    /// Permitted on locked assets. There is no way back to active.
    pub fn deactivate_asset(env: Env, caller: Address, asset_id: u64) -> Result<bool, AssetError> {
        caller.require_auth();

        let mut asset = Self::load_asset(&env, asset_id)?;
        Self::require_owner(&asset, &caller)?;

        asset.active = false;
        Self::write_asset(&env, &asset);

        events::asset_deactivated(&env, asset_id);
        Ok(true)
    }

    pub fn execute_asset_lock(env: Env, caller: Address, asset_id: u64) -> Result<bool, AssetError> {
        require_executor(&env, &caller, AssetError::Unauthorized)?;

        let mut asset = Self::load_asset(&env, asset_id)?;
        asset.locked = true;
        Self::write_asset(&env, &asset);

        events::asset_locked(&env, asset_id, &caller);
        Ok(true)
    }

    pub fn get_asset(env: Env, asset_id: u64) -> Option<EnergyAsset> {
        env.storage().persistent().get(&DataKey::Asset(asset_id))
    }

    /// Count of assets ever registered, including deactivated ones.
    pub fn get_total_assets(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::AssetCount)
            .unwrap_or(0u64)
    }

    pub fn get_assets_by_owner(env: Env, owner: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::AssetsByOwner(owner))
            .unwrap_or(Vec::new(&env))
    }

    /// Up to the last 100 asset ids registered at `location`, oldest first.
    pub fn get_assets_by_location(env: Env, location: String) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::AssetsByLocation(location))
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_executor(env: Env) -> Option<Address> {
        read_executor(&env)
    }

    fn load_asset(env: &Env, asset_id: u64) -> Result<EnergyAsset, AssetError> {
        env.storage()
            .persistent()
            .get(&DataKey::Asset(asset_id))
            .ok_or(AssetError::AssetNotFound)
    }

    fn write_asset(env: &Env, asset: &EnergyAsset) {
        let key = DataKey::Asset(asset.id);
        env.storage().persistent().set(&key, asset);
        ttl::extend_persistent(env, &key);
    }

    fn require_owner(asset: &EnergyAsset, caller: &Address) -> Result<(), AssetError> {
        if asset.owner != *caller {
            return Err(AssetError::NotOwner);
        }
        Ok(())
    }

    fn index_owner(env: &Env, owner: &Address, asset_id: u64) {
        let key = DataKey::AssetsByOwner(owner.clone());
        let mut ids: Vec<u64> = env.storage().persistent().get(&key).unwrap_or(Vec::new(env));
        if ids.first_index_of(asset_id).is_none() {
            ids.push_back(asset_id);
        }
        env.storage().persistent().set(&key, &ids);
        ttl::extend_persistent(env, &key);
    }

    fn unindex_owner(env: &Env, owner: &Address, asset_id: u64) {
        let key = DataKey::AssetsByOwner(owner.clone());
        let mut ids: Vec<u64> = env.storage().persistent().get(&key).unwrap_or(Vec::new(env));
        match ids.first_index_of(asset_id) {
            Some(index) => {
                ids.remove(index);
                env.storage().persistent().set(&key, &ids);
                ttl::extend_persistent(env, &key);
            }
            None => log!(env, "owner index missing asset", asset_id),
        }
    }

    fn index_location(env: &Env, location: &String, asset_id: u64) {
        let key = DataKey::AssetsByLocation(location.clone());
        let mut ids: Vec<u64> = env.storage().persistent().get(&key).unwrap_or(Vec::new(env));
        ids.push_back(asset_id);
        while ids.len() > LOCATION_INDEX_WINDOW {
            ids.pop_front();
        }
        env.storage().persistent().set(&key, &ids);
        ttl::extend_persistent(env, &key);
    }
}

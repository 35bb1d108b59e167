use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::types::AssetType;

const ASSET: Symbol = symbol_short!("asset");
const EXECUTOR: Symbol = symbol_short!("executor");

pub(crate) fn asset_registered(env: &Env, asset_id: u64, owner: &Address, asset_type: AssetType, capacity_kw: u64) {
    env.events().publish(
        (ASSET, symbol_short!("register"), owner.clone()),
        (asset_id, asset_type, capacity_kw),
    );
}

pub(crate) fn metadata_updated(env: &Env, asset_id: u64, metadata_hash: &String) {
    env.events()
        .publish((ASSET, symbol_short!("metadata")), (asset_id, metadata_hash.clone()));
}

pub(crate) fn ownership_transferred(env: &Env, asset_id: u64, from: &Address, to: &Address) {
    env.events()
        .publish((ASSET, symbol_short!("transfer")), (asset_id, from.clone(), to.clone()));
}

pub(crate) fn asset_deactivated(env: &Env, asset_id: u64) {
    env.events().publish((ASSET, symbol_short!("deactiv")), asset_id);
}

pub(crate) fn asset_locked(env: &Env, asset_id: u64, executor: &Address) {
    env.events()
        .publish((ASSET, symbol_short!("lock")), (asset_id, executor.clone()));
}

pub(crate) fn executor_changed(env: &Env, previous: &Address, new_executor: &Address) {
    env.events()
        .publish((EXECUTOR, symbol_short!("set")), (previous.clone(), new_executor.clone()));
}

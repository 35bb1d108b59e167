use soroban_sdk::{contracttype, log, Address, Env};

use crate::ttl;

/// Instance storage key for the executor. Each contract keeps its own holder.
#[contracttype]
#[derive(Clone)]
pub enum AccessKey {
    Executor,
}

pub fn write_executor(env: &Env, executor: &Address) {
    env.storage().instance().set(&AccessKey::Executor, executor);
    ttl::extend_instance(env);
}

pub fn read_executor(env: &Env) -> Option<Address> {
    env.storage().instance().get(&AccessKey::Executor)
}

pub fn is_executor(env: &Env, address: &Address) -> bool {
    read_executor(env).is_some_and(|executor| executor == *address)
}

/// Authenticates `caller` and checks it holds the executor role.
///
/// `err` is the calling contract's own unauthorized code, so every contract keeps
/// reporting errors from its own namespace.
pub fn require_executor<E>(env: &Env, caller: &Address, err: E) -> Result<(), E> {
    caller.require_auth();

    if !is_executor(env, caller) {
        log!(env, "caller is not the executor", caller.clone());
        return Err(err);
    }

    Ok(())
}

/// Hands the executor role to `new_executor`. Only the current holder may do this.
/// Returns the previous holder.
pub fn transfer_executor<E>(
    env: &Env,
    caller: &Address,
    new_executor: &Address,
    err: E,
) -> Result<Address, E> {
    require_executor(env, caller, err)?;
    write_executor(env, new_executor);
    Ok(caller.clone())
}

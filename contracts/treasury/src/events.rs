use soroban_sdk::{symbol_short, Address, Env, Symbol};

const TREASURY: Symbol = symbol_short!("treasury");
const EXECUTOR: Symbol = symbol_short!("executor");

pub(crate) fn deposited(env: &Env, deposit_id: u64, depositor: &Address, amount: i128, balance: i128) {
    env.events().publish(
        (TREASURY, symbol_short!("deposit"), depositor.clone()),
        (deposit_id, amount, balance),
    );
}

pub(crate) fn withdrawn(
    env: &Env,
    withdrawal_id: u64,
    proposal_id: u64,
    recipient: &Address,
    amount: i128,
    balance: i128,
) {
    env.events().publish(
        (TREASURY, symbol_short!("withdraw"), recipient.clone()),
        (withdrawal_id, proposal_id, amount, balance),
    );
}

pub(crate) fn lock_changed(env: &Env, executor: &Address, locked: bool) {
    let action = if locked { symbol_short!("lock") } else { symbol_short!("unlock") };
    env.events().publish((TREASURY, action), executor.clone());
}

pub(crate) fn executor_changed(env: &Env, previous: &Address, new_executor: &Address) {
    env.events()
        .publish((EXECUTOR, symbol_short!("set")), (previous.clone(), new_executor.clone()));
}

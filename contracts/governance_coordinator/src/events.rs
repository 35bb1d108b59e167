use soroban_sdk::{symbol_short, Address, Env, Symbol};

const EXECUTOR: Symbol = symbol_short!("executor");
const SPEND: Symbol = symbol_short!("spend");

pub(crate) fn executor_changed(env: &Env, previous: &Address, new_executor: &Address) {
    env.events().publish(
        (EXECUTOR, symbol_short!("set")),
        (previous.clone(), new_executor.clone()),
    );
}

pub(crate) fn spend_executed(
    env: &Env,
    caller: &Address,
    proposal_id: u64,
    withdrawal_id: u64,
    amount: i128,
    recipient: &Address,
) {
    env.events().publish(
        (SPEND, caller.clone()),
        (proposal_id, withdrawal_id, amount, recipient.clone()),
    );
}

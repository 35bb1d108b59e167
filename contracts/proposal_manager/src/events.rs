use soroban_sdk::{symbol_short, Address, Env, Symbol};

use governance_common::ProposalType;

const PROPOSAL: Symbol = symbol_short!("proposal");
const EXECUTOR: Symbol = symbol_short!("executor");

pub(crate) fn proposal_created(
    env: &Env,
    proposal_id: u64,
    proposer: &Address,
    proposal_type: ProposalType,
    end_block: u32,
) {
    env.events().publish(
        (PROPOSAL, symbol_short!("created"), proposer.clone()),
        (proposal_id, proposal_type, end_block),
    );
}

pub(crate) fn vote_cast(env: &Env, proposal_id: u64, voter: &Address, vote_yes: bool, weight: i128) {
    env.events().publish(
        (PROPOSAL, symbol_short!("voted"), voter.clone()),
        (proposal_id, vote_yes, weight),
    );
}

pub(crate) fn proposal_executed(env: &Env, proposal_id: u64, yes_votes: i128, no_votes: i128) {
    env.events().publish(
        (PROPOSAL, symbol_short!("executed")),
        (proposal_id, yes_votes, no_votes),
    );
}

pub(crate) fn executor_changed(env: &Env, previous: &Address, new_executor: &Address) {
    env.events()
        .publish((EXECUTOR, symbol_short!("set")), (previous.clone(), new_executor.clone()));
}

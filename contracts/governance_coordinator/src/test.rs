#![cfg(test)]

use super::*;
use proposal_manager::{ProposalManagerContract, ProposalManagerContractClient};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Ledger},
    Address, Env, String,
};
use treasury::{TreasuryContract, TreasuryContractClient};

struct Deployment<'a> {
    proposals: ProposalManagerContractClient<'a>,
    treasury: TreasuryContractClient<'a>,
    coordinator: CoordinatorContractClient<'a>,
    governor: Address,
    treasurer: Address,
    operator: Address,
}

fn deploy(env: &Env, lock_treasury: bool) -> Deployment<'_> {
    env.mock_all_auths();
    env.ledger().set_sequence_number(1000);

    let governor = Address::generate(env);
    let treasurer = Address::generate(env);
    let operator = Address::generate(env);

    let proposals_id = env.register(ProposalManagerContract, (governor.clone(),));
    let treasury_id = env.register(TreasuryContract, (treasurer.clone(),));
    let coordinator_id = env.register(
        CoordinatorContract,
        (operator.clone(), proposals_id.clone(), treasury_id.clone()),
    );

    let treasury = TreasuryContractClient::new(env, &treasury_id);
    if lock_treasury {
        treasury.emergency_lock(&treasurer);
    }
    treasury.set_executor(&treasurer, &coordinator_id);

    Deployment {
        proposals: ProposalManagerContractClient::new(env, &proposals_id),
        treasury,
        coordinator: CoordinatorContractClient::new(env, &coordinator_id),
        governor,
        treasurer,
        operator,
    }
}

/// Creates a proposal at ledger 1000 with a 200-ledger window (closes at 1201).
fn propose(deployment: &Deployment, proposal_type: &str, target_value: i128) -> u64 {
    let env = &deployment.proposals.env;
    deployment.proposals.create_proposal(
        &Address::generate(env),
        &String::from_str(env, "Fund battery bank"),
        &String::from_str(env, "Storage for the Village A microgrid"),
        &String::from_str(env, proposal_type),
        &deployment.treasury.address,
        &symbol_short!("withdraw"),
        &target_value,
        &200u32,
    )
}

fn pass(env: &Env, deployment: &Deployment, proposal_id: u64) {
    env.ledger().set_sequence_number(1100);
    deployment
        .proposals
        .vote_on_proposal(&Address::generate(env), &proposal_id, &true, &800);
    deployment
        .proposals
        .vote_on_proposal(&Address::generate(env), &proposal_id, &false, &200);

    env.ledger().set_sequence_number(1201);
    deployment.proposals.execute_proposal(&deployment.governor, &proposal_id);
}

#[test]
fn test_spend_against_passed_proposal() {
    let env = Env::default();
    let deployment = deploy(&env, false);
    let recipient = Address::generate(&env);

    let proposal_id = propose(&deployment, "treasury-spend", 2_000_000);
    pass(&env, &deployment, proposal_id);
    deployment.treasury.deposit(&Address::generate(&env), &5_000_000);

    let withdrawal_id = deployment
        .coordinator
        .execute_spend(&deployment.operator, &proposal_id, &2_000_000, &recipient);

    assert_eq!(withdrawal_id, 1);
    assert_eq!(deployment.treasury.get_treasury_balance(), 3_000_000);

    let withdrawal = deployment.treasury.get_withdrawal(&withdrawal_id).unwrap();
    assert_eq!(withdrawal.proposal_id, proposal_id);
    assert_eq!(withdrawal.amount, 2_000_000);
    assert_eq!(withdrawal.recipient, recipient);
    assert!(withdrawal.executed);
}

#[test]
#[should_panic(expected = "Error(Contract, #203)")]
fn test_spend_before_proposal_execution() {
    let env = Env::default();
    let deployment = deploy(&env, false);

    let proposal_id = propose(&deployment, "treasury-spend", 1_000);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    deployment
        .coordinator
        .execute_spend(&deployment.operator, &proposal_id, &1_000, &Address::generate(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #206)")]
fn test_spend_against_missing_proposal() {
    let env = Env::default();
    let deployment = deploy(&env, false);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    deployment
        .coordinator
        .execute_spend(&deployment.operator, &42, &1_000, &Address::generate(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #200)")]
fn test_spend_against_non_spend_proposal() {
    let env = Env::default();
    let deployment = deploy(&env, false);

    let proposal_id = propose(&deployment, "add-asset", 1_000);
    pass(&env, &deployment, proposal_id);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    deployment
        .coordinator
        .execute_spend(&deployment.operator, &proposal_id, &1_000, &Address::generate(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #204)")]
fn test_spend_amount_must_match_proposal() {
    let env = Env::default();
    let deployment = deploy(&env, false);

    let proposal_id = propose(&deployment, "treasury-spend", 1_000);
    pass(&env, &deployment, proposal_id);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    deployment
        .coordinator
        .execute_spend(&deployment.operator, &proposal_id, &1_500, &Address::generate(&env));
}

#[test]
#[should_panic(expected = "Error(Contract, #207)")]
fn test_spend_while_treasury_locked() {
    let env = Env::default();
    let deployment = deploy(&env, true);

    let proposal_id = propose(&deployment, "treasury-spend", 1_000);
    pass(&env, &deployment, proposal_id);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    deployment
        .coordinator
        .execute_spend(&deployment.operator, &proposal_id, &1_000, &Address::generate(&env));
}

#[test]
fn test_only_operator_can_spend() {
    let env = Env::default();
    let deployment = deploy(&env, false);

    let proposal_id = propose(&deployment, "treasury-spend", 1_000);
    pass(&env, &deployment, proposal_id);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    let result = deployment.coordinator.try_execute_spend(
        &deployment.governor,
        &proposal_id,
        &1_000,
        &Address::generate(&env),
    );
    assert_eq!(result, Err(Ok(CoordinatorError::Unauthorized)));
    assert_eq!(deployment.treasury.get_treasury_balance(), 5_000);
}

#[test]
fn test_treasury_executor_is_the_coordinator() {
    let env = Env::default();
    let deployment = deploy(&env, false);

    assert_eq!(deployment.treasury.get_executor(), Some(deployment.coordinator.address.clone()));
    assert_eq!(deployment.coordinator.get_treasury(), deployment.treasury.address);
    assert_eq!(deployment.coordinator.get_proposal_manager(), deployment.proposals.address);

    // The former treasury executor can no longer spend directly.
    let proposal_id = propose(&deployment, "treasury-spend", 1_000);
    pass(&env, &deployment, proposal_id);
    let proposal = deployment.proposals.get_proposal(&proposal_id);
    let result = deployment.treasury.try_execute_withdrawal(
        &deployment.treasurer,
        &proposal,
        &1_000,
        &Address::generate(&env),
    );
    assert_eq!(result, Err(Ok(treasury::TreasuryError::Unauthorized)));
}

#[test]
fn test_operator_can_be_changed() {
    let env = Env::default();
    let deployment = deploy(&env, false);
    let new_operator = Address::generate(&env);

    deployment.coordinator.set_executor(&deployment.operator, &new_operator);
    assert_eq!(deployment.coordinator.get_executor(), Some(new_operator));

    let result = deployment
        .coordinator
        .try_set_executor(&deployment.operator, &deployment.operator);
    assert_eq!(result, Err(Ok(CoordinatorError::Unauthorized)));
}

#[test]
fn test_passed_proposal_backs_repeated_spends() {
    let env = Env::default();
    let deployment = deploy(&env, false);
    let recipient = Address::generate(&env);

    let proposal_id = propose(&deployment, "treasury-spend", 2_000);
    pass(&env, &deployment, proposal_id);
    deployment.treasury.deposit(&Address::generate(&env), &5_000);

    let spend = |amount: i128| {
        deployment
            .coordinator
            .try_execute_spend(&deployment.operator, &proposal_id, &amount, &recipient)
    };

    assert_eq!(spend(2_000), Ok(Ok(1)));
    assert_eq!(spend(2_000), Ok(Ok(2)));
    assert_eq!(deployment.treasury.get_treasury_balance(), 1_000);
    assert_eq!(deployment.treasury.get_withdrawal(&2).unwrap().proposal_id, proposal_id);

    // Only the remaining balance stops a third spend.
    assert!(spend(2_000).is_err());
    assert_eq!(deployment.treasury.get_treasury_balance(), 1_000);
}

use governance_common::{Proposal, ProposalType};

use crate::errors::TreasuryError;
use crate::types::TreasuryState;

/// Checks a withdrawal against the treasury state and the proposal snapshot the
/// caller supplied, then debits the balance.
///
/// The snapshot is trusted as given. Callers must fetch it from the proposal
/// manager in the same invocation; an older copy would let a withdrawal be replayed
/// against a proposal whose stored state has since moved on.
///
/// Checks run in a fixed order and nothing is modified unless all of them pass.
/// The caller's executor role is checked before this is reached.
pub fn validate_and_debit(
    state: &mut TreasuryState,
    proposal: Option<&Proposal>,
    amount: i128,
) -> Result<u64, TreasuryError> {
    if state.locked {
        return Err(TreasuryError::TreasuryLocked);
    }

    if amount <= 0 {
        return Err(TreasuryError::InvalidAmount);
    }

    let proposal = proposal.ok_or(TreasuryError::ProposalNotFound)?;

    // Only proposals that went through execution may be spent against.
    if !proposal.executed {
        return Err(TreasuryError::AlreadyExecuted);
    }

    if !proposal.passed {
        return Err(TreasuryError::ProposalNotPassed);
    }

    if proposal.proposal_type != ProposalType::TreasurySpend {
        return Err(TreasuryError::Unauthorized);
    }

    if proposal.target_value != amount {
        return Err(TreasuryError::InvalidAmount);
    }

    if state.balance < amount {
        return Err(TreasuryError::InsufficientBalance);
    }

    state.balance -= amount;
    Ok(proposal.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{symbol_short, testutils::Address as _, Address, Env, String};

    fn passed_spend(env: &Env, target_value: i128) -> Proposal {
        Proposal {
            id: 5,
            proposer: Address::generate(env),
            title: String::from_str(env, "Fund battery bank"),
            description: String::from_str(env, ""),
            proposal_type: ProposalType::TreasurySpend,
            target_contract: Address::generate(env),
            target_function: symbol_short!("withdraw"),
            target_value,
            start_block: 1001,
            end_block: 1502,
            yes_votes: 10,
            no_votes: 0,
            executed: true,
            passed: true,
        }
    }

    fn funded(balance: i128) -> TreasuryState {
        TreasuryState {
            balance,
            ..TreasuryState::default()
        }
    }

    #[test]
    fn debits_on_matching_proposal() {
        let env = Env::default();
        let mut state = funded(5_000_000);

        let proposal_id = validate_and_debit(&mut state, Some(&passed_spend(&env, 2_000_000)), 2_000_000);

        assert_eq!(proposal_id, Ok(5));
        assert_eq!(state.balance, 3_000_000);
    }

    #[test]
    fn lock_is_checked_before_anything_else() {
        let mut state = TreasuryState {
            balance: 0,
            locked: true,
            nonce: 0,
        };

        assert_eq!(validate_and_debit(&mut state, None, 0), Err(TreasuryError::TreasuryLocked));
    }

    #[test]
    fn rejects_in_declared_order() {
        let env = Env::default();
        let mut state = funded(100);

        assert_eq!(validate_and_debit(&mut state, None, 0), Err(TreasuryError::InvalidAmount));
        assert_eq!(validate_and_debit(&mut state, None, 10), Err(TreasuryError::ProposalNotFound));

        let mut proposal = passed_spend(&env, 500);
        proposal.executed = false;
        proposal.passed = false;
        proposal.proposal_type = ProposalType::AddAsset;
        assert_eq!(
            validate_and_debit(&mut state, Some(&proposal), 10),
            Err(TreasuryError::AlreadyExecuted)
        );

        proposal.executed = true;
        assert_eq!(
            validate_and_debit(&mut state, Some(&proposal), 10),
            Err(TreasuryError::ProposalNotPassed)
        );

        proposal.passed = true;
        assert_eq!(
            validate_and_debit(&mut state, Some(&proposal), 10),
            Err(TreasuryError::Unauthorized)
        );

        proposal.proposal_type = ProposalType::TreasurySpend;
        assert_eq!(
            validate_and_debit(&mut state, Some(&proposal), 10),
            Err(TreasuryError::InvalidAmount)
        );

        assert_eq!(
            validate_and_debit(&mut state, Some(&proposal), 500),
            Err(TreasuryError::InsufficientBalance)
        );

        assert_eq!(state.balance, 100);
    }

    #[test]
    fn amount_must_match_target_exactly() {
        let env = Env::default();
        let mut state = funded(10_000);
        let proposal = passed_spend(&env, 1_000);

        assert_eq!(validate_and_debit(&mut state, Some(&proposal), 999), Err(TreasuryError::InvalidAmount));
        assert_eq!(validate_and_debit(&mut state, Some(&proposal), 1_001), Err(TreasuryError::InvalidAmount));
        assert_eq!(validate_and_debit(&mut state, Some(&proposal), 1_000), Ok(5));
        assert_eq!(state.balance, 9_000);
    }

    #[test]
    fn can_drain_to_exactly_zero() {
        let env = Env::default();
        let mut state = funded(750);

        assert_eq!(validate_and_debit(&mut state, Some(&passed_spend(&env, 750)), 750), Ok(5));
        assert_eq!(state.balance, 0);
    }
}

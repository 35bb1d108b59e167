use governance_common::{read_executor, require_executor, transfer_executor, ttl, write_executor, Proposal};
use soroban_sdk::{contract, contractimpl, log, Address, Env};

use crate::errors::TreasuryError;
use crate::events;
use crate::settlement::validate_and_debit;
use crate::types::{DataKey, Deposit, TreasuryState, Withdrawal};

#[contract]
pub struct TreasuryContract;

#[contractimpl]
impl TreasuryContract {
    pub fn __constructor(env: Env, executor: Address) {
        write_executor(&env, &executor);
        Self::write_state(&env, &TreasuryState::default());
    }

    pub fn set_executor(env: Env, caller: Address, new_executor: Address) -> Result<(), TreasuryError> {
        let previous = transfer_executor(&env, &caller, &new_executor, TreasuryError::Unauthorized)?;
        events::executor_changed(&env, &previous, &new_executor);
        Ok(())
    }

    /// Accepted even while the treasury is locked; the lock only guards outflows.
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<u64, TreasuryError> {
        caller.require_auth();

        if amount <= 0 {
            return Err(TreasuryError::InvalidAmount);
        }

        let mut state = Self::read_state(&env);
        state.balance = state
            .balance
            .checked_add(amount)
            .ok_or(TreasuryError::InvalidAmount)?;

        let deposit_id = state.nonce;
        state.nonce += 1;

        let key = DataKey::Deposit(caller.clone(), deposit_id);
        env.storage().persistent().set(
            &key,
            &Deposit {
                amount,
                timestamp: env.ledger().sequence(),
            },
        );
        ttl::extend_persistent(&env, &key);
        Self::write_state(&env, &state);

        events::deposited(&env, deposit_id, &caller, amount, state.balance);
        Ok(deposit_id)
    }

    /// Pays `amount` to `recipient` against an executed, passed `treasury-spend`
    /// proposal whose target value is exactly `amount`.
    ///
    /// `proposal` is the record as returned by the proposal manager's
    /// `get_proposal`, fetched by the caller at call time.
    pub fn execute_withdrawal(
        env: Env,
        caller: Address,
        proposal: Option<Proposal>,
        amount: i128,
        recipient: Address,
    ) -> Result<u64, TreasuryError> {
        require_executor(&env, &caller, TreasuryError::Unauthorized)?;

        let mut state = Self::read_state(&env);
        let proposal_id = validate_and_debit(&mut state, proposal.as_ref(), amount).map_err(|err| {
            log!(&env, "withdrawal rejected", err as u32, amount);
            err
        })?;

        let withdrawal_id = state.nonce;
        state.nonce += 1;

        let key = DataKey::Withdrawal(withdrawal_id);
        env.storage().persistent().set(
            &key,
            &Withdrawal {
                id: withdrawal_id,
                proposal_id,
                amount,
                recipient: recipient.clone(),
                executed: true,
                timestamp: env.ledger().sequence(),
            },
        );
        ttl::extend_persistent(&env, &key);
        Self::write_state(&env, &state);

        events::withdrawn(&env, withdrawal_id, proposal_id, &recipient, amount, state.balance);
        Ok(withdrawal_id)
    }

    /// Halts withdrawals until `emergency_unlock` is called.
    pub fn emergency_lock(env: Env, caller: Address) -> Result<bool, TreasuryError> {
        Self::set_locked(&env, &caller, true)
    }

    pub fn emergency_unlock(env: Env, caller: Address) -> Result<bool, TreasuryError> {
        Self::set_locked(&env, &caller, false)
    }

    pub fn get_treasury_balance(env: Env) -> i128 {
        Self::read_state(&env).balance
    }

    pub fn is_locked(env: Env) -> bool {
        Self::read_state(&env).locked
    }

    pub fn get_nonce(env: Env) -> u64 {
        Self::read_state(&env).nonce
    }

    pub fn get_deposit(env: Env, depositor: Address, deposit_id: u64) -> Option<Deposit> {
        env.storage()
            .persistent()
            .get(&DataKey::Deposit(depositor, deposit_id))
    }

    pub fn get_withdrawal(env: Env, withdrawal_id: u64) -> Option<Withdrawal> {
        env.storage()
            .persistent()
            .get(&DataKey::Withdrawal(withdrawal_id))
    }

    pub fn get_executor(env: Env) -> Option<Address> {
        read_executor(&env)
    }

    fn set_locked(env: &Env, caller: &Address, locked: bool) -> Result<bool, TreasuryError> {
        require_executor(env, caller, TreasuryError::Unauthorized)?;

        let mut state = Self::read_state(env);
        state.locked = locked;
        Self::write_state(env, &state);

        events::lock_changed(env, caller, locked);
        Ok(true)
    }

    fn read_state(env: &Env) -> TreasuryState {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .unwrap_or_default()
    }

    fn write_state(env: &Env, state: &TreasuryState) {
        env.storage().instance().set(&DataKey::State, state);
        ttl::extend_instance(env);
    }
}

use governance_common::{
    read_executor, require_executor, transfer_executor, ttl, write_executor, ProposalReaderClient,
    TreasurySettlementClient,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::errors::CoordinatorError;
use crate::events;
use crate::types::DataKey;

#[contract]
pub struct CoordinatorContract;

#[contractimpl]
impl CoordinatorContract {
    /// The treasury's executor must be set to this contract's address before
    /// `execute_spend` can succeed.
    pub fn __constructor(env: Env, executor: Address, proposal_manager: Address, treasury: Address) {
        write_executor(&env, &executor);
        env.storage()
            .instance()
            .set(&DataKey::ProposalManager, &proposal_manager);
        env.storage().instance().set(&DataKey::Treasury, &treasury);
    }

    pub fn set_executor(env: Env, caller: Address, new_executor: Address) -> Result<(), CoordinatorError> {
        let previous = transfer_executor(&env, &caller, &new_executor, CoordinatorError::Unauthorized)?;
        events::executor_changed(&env, &previous, &new_executor);
        Ok(())
    }

    /// Fetches proposal `proposal_id` from the proposal manager and asks the
    /// treasury to pay `amount` to `recipient` against it.
    ///
    /// The lookup happens in this invocation, so the treasury always sees the
    /// stored record. A missing proposal is forwarded as `None` and the treasury
    /// rejects it. Treasury failures abort the call with the treasury's own code.
    ///
    /// The treasury does not track which proposals have been spent. One passed
    /// treasury-spend proposal can back repeated spends until the balance runs out.
    pub fn execute_spend(
        env: Env,
        caller: Address,
        proposal_id: u64,
        amount: i128,
        recipient: Address,
    ) -> Result<u64, CoordinatorError> {
        require_executor(&env, &caller, CoordinatorError::Unauthorized)?;

        let proposals = ProposalReaderClient::new(&env, &Self::proposal_manager(&env));
        let proposal = proposals.get_proposal(&proposal_id);

        let treasury = TreasurySettlementClient::new(&env, &Self::treasury(&env));
        let withdrawal_id = treasury.execute_withdrawal(
            &env.current_contract_address(),
            &proposal,
            &amount,
            &recipient,
        );

        ttl::extend_instance(&env);
        events::spend_executed(&env, &caller, proposal_id, withdrawal_id, amount, &recipient);
        Ok(withdrawal_id)
    }

    pub fn get_executor(env: Env) -> Option<Address> {
        read_executor(&env)
    }

    pub fn get_proposal_manager(env: Env) -> Address {
        Self::proposal_manager(&env)
    }

    pub fn get_treasury(env: Env) -> Address {
        Self::treasury(&env)
    }

    fn proposal_manager(env: &Env) -> Address {
        // Written by the constructor; a missing entry means the instance is corrupt.
        env.storage()
            .instance()
            .get(&DataKey::ProposalManager)
            .unwrap_or_else(|| panic!("proposal manager not configured"))
    }

    fn treasury(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Treasury)
            .unwrap_or_else(|| panic!("treasury not configured"))
    }
}

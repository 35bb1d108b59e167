//! Client interfaces for calling the governance contracts from another contract.
//!
//! Only the entry points the coordinator needs are declared. Signatures mirror the
//! deployed contracts; failures surface as the callee's own contract error.

use soroban_sdk::{contractclient, Address, Env};

use crate::proposal::Proposal;

#[contractclient(name = "ProposalReaderClient")]
pub trait ProposalReader {
    fn get_proposal(env: Env, proposal_id: u64) -> Option<Proposal>;
}

#[contractclient(name = "TreasurySettlementClient")]
pub trait TreasurySettlement {
    fn execute_withdrawal(
        env: Env,
        caller: Address,
        proposal: Option<Proposal>,
        amount: i128,
        recipient: Address,
    ) -> u64;
}

use soroban_sdk::{log, token, Address, Env};

use crate::errors::CrowdfundError;
use crate::storage;

/// Move `amount` from `from` into the contract's custody.
pub fn pull(env: &Env, from: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let contract = env.current_contract_address();
    transfer(env, from, &contract, amount)
}

/// Release `amount` held by the contract to `to`.
///
/// Callers commit their own state before calling this and restore it if the
/// release comes back as `TransferFailed`.
pub fn release(env: &Env, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let contract = env.current_contract_address();
    transfer(env, &contract, to, amount)
}

fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), CrowdfundError> {
    let token_address = storage::get_token(env)?;
    let token_client = token::Client::new(env, &token_address);

    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer rejected", from.clone(), to.clone(), amount);
            Err(CrowdfundError::TransferFailed)
        }
    }
}

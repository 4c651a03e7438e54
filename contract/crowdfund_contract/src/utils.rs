use soroban_sdk::Env;

use crate::errors::CrowdfundError;

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if timestamp is in the future
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() < timestamp
}

/// Check if timestamp has been reached
pub fn has_passed(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() >= timestamp
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, CrowdfundError> {
    a.checked_add(b).ok_or(CrowdfundError::ArithmeticOverflow)
}

pub fn checked_sub(a: i128, b: i128) -> Result<i128, CrowdfundError> {
    a.checked_sub(b).ok_or(CrowdfundError::ArithmeticOverflow)
}

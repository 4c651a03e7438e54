use soroban_sdk::{log, Address, Env, Vec};

use crate::custody;
use crate::errors::CrowdfundError;
use crate::events::{
    self, ContributionMadeEvent, FundsWithdrawnEvent, GoalReachedEvent, RefundIssuedEvent,
};
use crate::storage;
use crate::storage_types::{CampaignDetails, CampaignId, CampaignParams};
use crate::utils;

/// Accepts `amount` from `contributor` into the campaign's custody.
///
/// Checks run in a fixed order and the first failure wins: a zero amount,
/// then the deadline, then the goal latch. A contribution that overshoots the
/// goal is accepted in full.
pub fn contribute(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    amount: i128,
) -> Result<(), CrowdfundError> {
    let params = storage::load_params(env, campaign_id)?;
    let mut state = storage::load_state(env, campaign_id)?;

    if amount <= 0 {
        return Err(CrowdfundError::ZeroContribution);
    }
    if utils::has_passed(env, params.deadline) {
        return Err(CrowdfundError::CampaignEnded);
    }
    if state.goal_reached {
        return Err(CrowdfundError::GoalAlreadyReached);
    }

    let previous = storage::get_contribution(env, campaign_id, contributor);
    let contribution = utils::checked_add(previous.unwrap_or(0), amount)?;
    state.total_raised = utils::checked_add(state.total_raised, amount)?;
    state.custodied = utils::checked_add(state.custodied, amount)?;
    let first_contribution = previous.is_none();
    if first_contribution {
        state.contributor_count = state
            .contributor_count
            .checked_add(1)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
    }

    // Funds arrive before anything is recorded.
    custody::pull(env, contributor, amount)?;

    if first_contribution {
        storage::add_contributor(env, campaign_id, contributor);
    }
    storage::set_contribution(env, campaign_id, contributor, contribution);

    let reached_now = state.total_raised >= params.goal_amount;
    if reached_now {
        state.goal_reached = true;
    }
    storage::save_state(env, campaign_id, &state);

    events::emit_contribution_made(
        env,
        ContributionMadeEvent {
            campaign_id,
            contributor: contributor.clone(),
            amount,
        },
    );
    if reached_now {
        log!(env, "goal reached", campaign_id, state.total_raised);
        events::emit_goal_reached(
            env,
            GoalReachedEvent {
                campaign_id,
                total_raised: state.total_raised,
            },
        );
    }

    Ok(())
}

/// Releases the whole custodied balance to the creator, once.
///
/// `funds_withdrawn` is latched and saved before the transfer. If the token
/// contract rejects the transfer the previous state is written back.
pub fn withdraw(
    env: &Env,
    campaign_id: CampaignId,
    caller: &Address,
) -> Result<i128, CrowdfundError> {
    let params = storage::load_params(env, campaign_id)?;
    let prior = storage::load_state(env, campaign_id)?;

    if *caller != params.creator {
        return Err(CrowdfundError::Unauthorized);
    }
    if !prior.goal_reached {
        return Err(CrowdfundError::GoalNotReached);
    }
    if prior.funds_withdrawn {
        return Err(CrowdfundError::AlreadyWithdrawn);
    }

    let amount = prior.custodied;
    let mut state = prior.clone();
    state.funds_withdrawn = true;
    state.custodied = 0;
    storage::save_state(env, campaign_id, &state);

    if let Err(err) = custody::release(env, &params.creator, amount) {
        storage::save_state(env, campaign_id, &prior);
        return Err(err);
    }

    log!(env, "funds withdrawn", campaign_id, amount);
    events::emit_funds_withdrawn(
        env,
        FundsWithdrawnEvent {
            campaign_id,
            creator: params.creator,
            amount,
        },
    );

    Ok(amount)
}

/// Returns `contributor`'s whole balance after an unfunded campaign expires.
///
/// The stored contribution is the only guard: it is zeroed before the
/// transfer, and restored if the transfer is rejected.
pub fn refund(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
) -> Result<i128, CrowdfundError> {
    let params = storage::load_params(env, campaign_id)?;
    let prior = storage::load_state(env, campaign_id)?;

    if !utils::has_passed(env, params.deadline) {
        return Err(CrowdfundError::CampaignNotEnded);
    }
    if prior.goal_reached {
        return Err(CrowdfundError::GoalReachedNoRefunds);
    }
    let amount = storage::get_contribution(env, campaign_id, contributor).unwrap_or(0);
    if amount <= 0 {
        return Err(CrowdfundError::NoContributionToRefund);
    }

    let mut state = prior.clone();
    state.custodied = utils::checked_sub(state.custodied, amount)?;
    storage::set_contribution(env, campaign_id, contributor, 0);
    storage::save_state(env, campaign_id, &state);

    if let Err(err) = custody::release(env, contributor, amount) {
        storage::set_contribution(env, campaign_id, contributor, amount);
        storage::save_state(env, campaign_id, &prior);
        return Err(err);
    }

    log!(env, "refund issued", campaign_id, amount);
    events::emit_refund_issued(
        env,
        RefundIssuedEvent {
            campaign_id,
            contributor: contributor.clone(),
            amount,
        },
    );

    Ok(amount)
}

pub fn get_campaign_details(
    env: &Env,
    campaign_id: CampaignId,
) -> Result<CampaignDetails, CrowdfundError> {
    let params = storage::load_params(env, campaign_id)?;
    let state = storage::load_state(env, campaign_id)?;
    Ok(CampaignDetails::new(&params, &state))
}

pub fn get_campaign_params(
    env: &Env,
    campaign_id: CampaignId,
) -> Result<CampaignParams, CrowdfundError> {
    storage::load_params(env, campaign_id)
}

pub fn is_active(env: &Env, campaign_id: CampaignId) -> Result<bool, CrowdfundError> {
    let params = storage::load_params(env, campaign_id)?;
    let state = storage::load_state(env, campaign_id)?;
    Ok(utils::is_future(env, params.deadline) && !state.goal_reached)
}

pub fn get_contribution(
    env: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
) -> Result<i128, CrowdfundError> {
    ensure_exists(env, campaign_id)?;
    Ok(storage::get_contribution(env, campaign_id, contributor).unwrap_or(0))
}

pub fn get_contributors(
    env: &Env,
    campaign_id: CampaignId,
) -> Result<Vec<Address>, CrowdfundError> {
    ensure_exists(env, campaign_id)?;
    Ok(storage::get_contributors(env, campaign_id))
}

pub fn get_custodied_balance(env: &Env, campaign_id: CampaignId) -> Result<i128, CrowdfundError> {
    Ok(storage::load_state(env, campaign_id)?.custodied)
}

fn ensure_exists(env: &Env, campaign_id: CampaignId) -> Result<(), CrowdfundError> {
    if storage::has_campaign(env, campaign_id) {
        Ok(())
    } else {
        Err(CrowdfundError::CampaignNotFound)
    }
}

use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::CrowdfundError;
use crate::events::{self, CampaignCreatedEvent};
use crate::storage;
use crate::storage_types::{CampaignId, CampaignParams, CampaignState, MAX_PAGE_SIZE};
use crate::utils;

/// Validates the parameters and allocates a new campaign owned by `creator`.
///
/// `creator` must already have authorized the invocation. Nothing is written
/// unless both checks pass.
pub fn create_campaign(
    env: &Env,
    creator: &Address,
    goal_amount: i128,
    deadline: u64,
) -> Result<CampaignId, CrowdfundError> {
    if goal_amount <= 0 {
        return Err(CrowdfundError::InvalidParameters);
    }
    if !utils::is_future(env, deadline) {
        return Err(CrowdfundError::InvalidDeadline);
    }

    let campaign_id = storage::next_campaign_id(env);
    let params = CampaignParams {
        creator: creator.clone(),
        goal_amount,
        deadline,
        created_at: utils::get_current_timestamp(env),
    };

    storage::save_params(env, campaign_id, &params);
    storage::save_state(env, campaign_id, &CampaignState::default());
    storage::append_creator_campaign(env, creator, campaign_id);

    log!(env, "campaign created", campaign_id, goal_amount, deadline);

    events::emit_campaign_created(
        env,
        CampaignCreatedEvent {
            creator: creator.clone(),
            campaign_id,
            goal_amount,
            deadline,
        },
    );

    Ok(campaign_id)
}

pub fn get_creator_campaigns(env: &Env, creator: &Address) -> Vec<CampaignId> {
    storage::get_creator_campaigns(env, creator)
}

pub fn get_campaign_count(env: &Env) -> u64 {
    storage::get_campaign_count(env)
}

/// One page of campaign ids in creation order, starting `offset` campaigns in.
///
/// Ids are allocated sequentially, so page entries are `offset + 1` onwards.
/// `limit` is capped at `MAX_PAGE_SIZE` to keep the read inside one call's
/// resource budget.
pub fn get_all_campaigns(env: &Env, offset: u32, limit: u32) -> Vec<CampaignId> {
    let mut campaigns = Vec::new(env);
    let count = get_campaign_count(env);
    let first = u64::from(offset) + 1;
    if limit == 0 || first > count {
        return campaigns;
    }

    let take = u64::from(core::cmp::min(limit, MAX_PAGE_SIZE));
    let last = core::cmp::min(count, first + take - 1);
    for id in first..=last {
        campaigns.push_back(id);
    }
    campaigns
}

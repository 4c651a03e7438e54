#![no_std]

mod campaign;
mod custody;
mod errors;
mod events;
mod factory;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use errors::CrowdfundError;
pub use events::{
    CampaignCreatedEvent, ContributionMadeEvent, FundsWithdrawnEvent, GoalReachedEvent,
    RefundIssuedEvent,
};
pub use storage_types::{CampaignDetails, CampaignId, CampaignParams};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Fix the token every campaign is denominated in. Runs once, at deployment.
    pub fn __constructor(env: Env, token: Address) {
        storage::set_token(&env, &token);
    }

    pub fn get_token(env: Env) -> Result<Address, CrowdfundError> {
        storage::get_token(&env)
    }

    // Factory

    /// Create a campaign owned by `creator`, who must authorize the call.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        goal_amount: i128,
        deadline: u64,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();
        factory::create_campaign(&env, &creator, goal_amount, deadline)
    }

    /// Campaign ids created by `creator`, oldest first. Empty for unknown creators.
    pub fn get_creator_campaigns(env: Env, creator: Address) -> Vec<CampaignId> {
        factory::get_creator_campaigns(&env, &creator)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        factory::get_campaign_count(&env)
    }

    /// Campaign ids in creation order, `limit` at a time (at most 100).
    pub fn get_all_campaigns(env: Env, offset: u32, limit: u32) -> Vec<CampaignId> {
        factory::get_all_campaigns(&env, offset, limit)
    }

    // Settlement

    /// Contribute `amount` of the campaign token. The funds move into the
    /// contract in the same call.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();
        storage::extend_instance(&env);
        campaign::contribute(&env, campaign_id, &contributor, amount)
    }

    /// Send the raised funds to the creator. Returns the amount released.
    pub fn withdraw(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<i128, CrowdfundError> {
        caller.require_auth();
        storage::extend_instance(&env);
        campaign::withdraw(&env, campaign_id, &caller)
    }

    /// Return `contributor`'s balance from an expired, unfunded campaign.
    /// Returns the amount refunded.
    pub fn refund(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        contributor.require_auth();
        storage::extend_instance(&env);
        campaign::refund(&env, campaign_id, &contributor)
    }

    // Views

    pub fn get_campaign_details(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignDetails, CrowdfundError> {
        campaign::get_campaign_details(&env, campaign_id)
    }

    pub fn get_campaign_params(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<CampaignParams, CrowdfundError> {
        campaign::get_campaign_params(&env, campaign_id)
    }

    /// True while the deadline is in the future and the goal is not reached.
    pub fn is_active(env: Env, campaign_id: CampaignId) -> Result<bool, CrowdfundError> {
        campaign::is_active(&env, campaign_id)
    }

    pub fn get_contribution(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        campaign::get_contribution(&env, campaign_id, &contributor)
    }

    /// Everyone who ever contributed, in order of first contribution.
    pub fn get_contributors(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<Vec<Address>, CrowdfundError> {
        campaign::get_contributors(&env, campaign_id)
    }

    pub fn get_custodied_balance(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<i128, CrowdfundError> {
        campaign::get_custodied_balance(&env, campaign_id)
    }
}

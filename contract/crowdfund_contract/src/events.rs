use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub creator: Address,
    pub campaign_id: CampaignId,
    pub goal_amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMadeEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReachedEvent {
    pub campaign_id: CampaignId,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssuedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_contribution_made(env: &Env, event: ContributionMadeEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution_made"),), event);
}

pub fn emit_goal_reached(env: &Env, event: GoalReachedEvent) {
    env.events()
        .publish((Symbol::new(env, "goal_reached"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "funds_withdrawn"),), event);
}

pub fn emit_refund_issued(env: &Env, event: RefundIssuedEvent) {
    env.events()
        .publish((Symbol::new(env, "refund_issued"),), event);
}

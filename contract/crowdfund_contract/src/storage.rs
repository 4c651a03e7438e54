use soroban_sdk::{Address, Env, Vec};

use crate::errors::CrowdfundError;
use crate::storage_types::{
    CampaignId, CampaignParams, CampaignState, DataKey, PersistentKey, TTL_INSTANCE,
    TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn write_persistent<V>(e: &Env, key: &PersistentKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    e.storage().persistent().set(key, value);
    extend_persistent(e, key);
}

// Instance data

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
    extend_instance(e);
}

pub fn get_token(e: &Env) -> Result<Address, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn get_campaign_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Bumps the counter and returns the id of the new campaign. Ids start at 1.
pub fn next_campaign_id(e: &Env) -> CampaignId {
    let id = get_campaign_count(e) + 1;
    e.storage().instance().set(&DataKey::CampaignCount, &id);
    extend_instance(e);
    id
}

// Campaign records

pub fn has_campaign(e: &Env, id: CampaignId) -> bool {
    e.storage().persistent().has(&PersistentKey::Params(id))
}

pub fn load_params(e: &Env, id: CampaignId) -> Result<CampaignParams, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Params(id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn save_params(e: &Env, id: CampaignId, params: &CampaignParams) {
    write_persistent(e, &PersistentKey::Params(id), params);
}

pub fn load_state(e: &Env, id: CampaignId) -> Result<CampaignState, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::State(id))
        .ok_or(CrowdfundError::CampaignNotFound)
}

pub fn save_state(e: &Env, id: CampaignId, state: &CampaignState) {
    write_persistent(e, &PersistentKey::State(id), state);
}

// Contributions

/// `None` means `contributor` never contributed to this campaign; a refunded
/// contributor reads back `Some(0)`.
pub fn get_contribution(e: &Env, id: CampaignId, contributor: &Address) -> Option<i128> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(id, contributor.clone()))
}

pub fn set_contribution(e: &Env, id: CampaignId, contributor: &Address, amount: i128) {
    write_persistent(
        e,
        &PersistentKey::Contribution(id, contributor.clone()),
        &amount,
    );
}

pub fn get_contributors(e: &Env, id: CampaignId) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contributors(id))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn add_contributor(e: &Env, id: CampaignId, contributor: &Address) {
    let mut contributors = get_contributors(e, id);
    contributors.push_back(contributor.clone());
    write_persistent(e, &PersistentKey::Contributors(id), &contributors);
}

// Factory index

pub fn get_creator_campaigns(e: &Env, creator: &Address) -> Vec<CampaignId> {
    e.storage()
        .persistent()
        .get(&PersistentKey::CreatorCampaigns(creator.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn append_creator_campaign(e: &Env, creator: &Address, id: CampaignId) {
    let mut campaigns = get_creator_campaigns(e, creator);
    campaigns.push_back(id);
    write_persistent(e, &PersistentKey::CreatorCampaigns(creator.clone()), &campaigns);
}

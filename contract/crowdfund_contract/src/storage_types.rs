use soroban_sdk::{contracttype, Address};

pub type CampaignId = u64;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Params(CampaignId),
    State(CampaignId),
    Contribution(CampaignId, Address),
    Contributors(CampaignId),
    CreatorCampaigns(Address),
}

/// Fixed at creation and never written again.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignParams {
    pub creator: Address,
    pub goal_amount: i128,
    pub deadline: u64,
    pub created_at: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct CampaignState {
    pub total_raised: i128,        // Historical, never decremented
    pub custodied: i128,           // Currently held for this campaign
    pub contributor_count: u32,    // Distinct identities that ever contributed
    pub goal_reached: bool,
    pub funds_withdrawn: bool,
}

/// Read-only snapshot handed to external readers.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignDetails {
    pub creator: Address,
    pub goal_amount: i128,
    pub deadline: u64,
    pub total_raised: i128,
    pub goal_reached: bool,
    pub funds_withdrawn: bool,
    pub contributor_count: u32,
}

impl CampaignDetails {
    pub fn new(params: &CampaignParams, state: &CampaignState) -> Self {
        Self {
            creator: params.creator.clone(),
            goal_amount: params.goal_amount,
            deadline: params.deadline,
            total_raised: state.total_raised,
            goal_reached: state.goal_reached,
            funds_withdrawn: state.funds_withdrawn,
            contributor_count: state.contributor_count,
        }
    }
}

// Constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const TTL_INSTANCE: u32 = DAY_IN_LEDGERS * 30; // 30 days
pub const TTL_PERSISTENT: u32 = DAY_IN_LEDGERS * 90; // 90 days

// Largest page returned by the campaign listing
pub const MAX_PAGE_SIZE: u32 = 100;

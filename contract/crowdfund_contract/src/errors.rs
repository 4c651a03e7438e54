use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    // Factory
    InvalidParameters = 1,
    InvalidDeadline = 2,
    CampaignNotFound = 3,
    NotInitialized = 4,

    // contribute
    ZeroContribution = 10,
    CampaignEnded = 11,
    GoalAlreadyReached = 12,

    // withdraw
    Unauthorized = 20,
    GoalNotReached = 21,
    AlreadyWithdrawn = 22,

    // refund
    CampaignNotEnded = 30,
    GoalReachedNoRefunds = 31,
    NoContributionToRefund = 32,

    // Custody
    TransferFailed = 40,
    ArithmeticOverflow = 41,
}

use anchor_lang::prelude::*;

// Admin events
#[event]
pub struct FarmInitialized {
    pub owner: Pubkey,
    pub reward_mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PoolAdded {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub capacity: u64,
    pub min_deposit: u64,
    pub rate_numerator: u64,
    pub timestamp: i64,
}

// Staking events
#[event]
pub struct Deposited {
    pub depositor: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
    pub total_deposited: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub depositor: Pubkey,
    pub pool_id: u64,
    pub base_reward: u64,
    pub paid_reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub depositor: Pubkey,
    pub pool_id: u64,
    pub amount: u64,
    pub total_deposited: u64,
    pub timestamp: i64,
}

use anchor_lang::prelude::*;

// PDA Seeds
#[constant]
pub const FARM_SEED: &[u8] = b"farm";
#[constant]
pub const POOL_SEED: &[u8] = b"pool";
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

// Reward accrual: reward per second = principal * rate_numerator / RATE_DENOM
pub const RATE_DENOM: u64 = 1_000;

// A position counts as a whale strictly above this principal
pub const WHALE_THRESHOLD: u64 = 5_000;

// Whale payout multiplier: paid = base * WHALE_BONUS_BPS / BPS_DENOMINATOR
pub const WHALE_BONUS_BPS: u64 = 12_000;
pub const BPS_DENOMINATOR: u64 = 10_000;

// Storage bound for the embedded position table (tune for your needs)
pub const MAX_POOL_POSITIONS: usize = 64;

// Reward mint decimals
pub const REWARD_DECIMALS: u8 = 9;

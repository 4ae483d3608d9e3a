use anchor_lang::prelude::*;
use crate::constants::WHALE_THRESHOLD;
use crate::math::rewards::{apply_whale_bonus, base_reward};

/// One depositor's stake and accrual bookkeeping within a pool.
/// Entries are never removed; a fully withdrawn position keeps accruing
/// nothing against its zero principal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub depositor: Pubkey,

    // Staked amount net of withdrawals
    pub principal: u64,

    // Set on first deposit; top-ups leave it untouched
    pub deposited_at: i64,

    // Accrual cursor: rewards are paid through this timestamp
    pub claimed_up_to: i64,
}

/// Outcome of settling a claim.
pub struct ClaimedReward {
    pub base: u64,
    pub paid: u64,
}

impl Position {
    pub const SIZE: usize = 32 // depositor
        + 8  // principal
        + 8  // deposited_at
        + 8; // claimed_up_to

    pub fn new(depositor: Pubkey, principal: u64, now: i64) -> Self {
        Self {
            depositor,
            principal,
            deposited_at: now,
            claimed_up_to: now,
        }
    }

    fn unpaid_elapsed(&self, now: i64) -> i64 {
        let start = self.claimed_up_to.max(self.deposited_at);
        (now - start).max(0)
    }

    /// Whale status is derived from current principal on every call,
    /// never cached, so withdrawals immediately declassify.
    pub fn is_whale(&self) -> bool {
        self.principal > WHALE_THRESHOLD
    }

    /// Pre-bonus reward accrued since the cursor. Read-only: the whale
    /// multiplier applies at claim time, not here.
    pub fn claimable(&self, rate_numerator: u64, now: i64) -> Result<u64> {
        base_reward(self.principal, rate_numerator, self.unpaid_elapsed(now))
    }

    /// Settle accrued rewards and advance the cursor to `now`. The cursor
    /// moves even when the base reward is zero, so a claim immediately
    /// followed by `claimable` reads zero.
    pub fn claim(&mut self, rate_numerator: u64, now: i64) -> Result<ClaimedReward> {
        let base = self.claimable(rate_numerator, now)?;
        let paid = if self.is_whale() {
            apply_whale_bonus(base)?
        } else {
            base
        };
        self.claimed_up_to = now;
        Ok(ClaimedReward { base, paid })
    }
}

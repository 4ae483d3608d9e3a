use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOMINATOR, RATE_DENOM, WHALE_BONUS_BPS};
use crate::error::ErrorCode;

/// Base reward accrued by `principal` over `elapsed` seconds:
/// principal * rate_numerator * elapsed / RATE_DENOM, truncated toward zero.
/// Negative or zero elapsed intervals accrue nothing.
pub fn base_reward(principal: u64, rate_numerator: u64, elapsed: i64) -> Result<u64> {
    if principal == 0 || elapsed <= 0 {
        return Ok(0);
    }
    let reward = (principal as u128)
        .checked_mul(rate_numerator as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(elapsed as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(RATE_DENOM as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(reward).map_err(|_| ErrorCode::MathOverflow.into())
}

/// Whale payout: base * WHALE_BONUS_BPS / BPS_DENOMINATOR, truncated.
pub fn apply_whale_bonus(base: u64) -> Result<u64> {
    let paid = (base as u128)
        .checked_mul(WHALE_BONUS_BPS as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(paid).map_err(|_| ErrorCode::MathOverflow.into())
}

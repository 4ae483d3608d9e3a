use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::state::Pool;

#[derive(Accounts)]
pub struct CheckClaimableRewards<'info> {
    pub depositor: Signer<'info>,

    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

/// Pre-bonus reward accrued by the caller since its accrual cursor. The
/// whale multiplier is applied only when claiming, never here.
pub fn handler(ctx: Context<CheckClaimableRewards>) -> Result<u64> {
    let clock = Clock::get()?;
    let pool = &ctx.accounts.pool;

    let position = pool
        .position(&ctx.accounts.depositor.key())
        .ok_or(ErrorCode::PositionNotFound)?;
    position.claimable(pool.rate_numerator, clock.unix_timestamp)
}

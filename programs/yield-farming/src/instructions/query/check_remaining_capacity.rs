use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::Pool;

#[derive(Accounts)]
pub struct CheckRemainingCapacity<'info> {
    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

pub fn handler(ctx: Context<CheckRemainingCapacity>) -> Result<u64> {
    Ok(ctx.accounts.pool.remaining_capacity())
}

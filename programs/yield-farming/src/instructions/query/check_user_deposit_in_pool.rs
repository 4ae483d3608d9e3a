use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::Pool;

/// Parallel lists of depositors and their active principal in one pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PoolDepositsView {
    pub depositors: Vec<Pubkey>,
    pub amounts: Vec<u64>,
}

#[derive(Accounts)]
pub struct CheckUserDepositInPool<'info> {
    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

pub fn handler(ctx: Context<CheckUserDepositInPool>) -> Result<PoolDepositsView> {
    let (depositors, amounts) = ctx.accounts.pool.deposit_table();
    Ok(PoolDepositsView { depositors, amounts })
}

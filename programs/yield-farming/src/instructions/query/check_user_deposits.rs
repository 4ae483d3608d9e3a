use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{self, Farm, Pool};

#[derive(Accounts)]
pub struct CheckUserDeposits<'info> {
    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Box<Account<'info, Farm>>,
}

/// Principal held by `wallet` in each pool it participates in, ordered by
/// pool id. The pool accounts to scan are passed as remaining accounts.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CheckUserDeposits<'info>>,
    wallet: Pubkey,
) -> Result<Vec<u64>> {
    let mut pools: Vec<Pool> = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        let pool: Account<'info, Pool> = Account::try_from(info)?;
        pools.push(pool.into_inner());
    }
    Ok(state::pool::collect_wallet_deposits(&pools, &wallet))
}

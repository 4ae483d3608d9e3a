use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{self, Farm, Pool};

#[derive(Accounts)]
pub struct CheckWhaleWallets<'info> {
    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Box<Account<'info, Farm>>,
}

/// Wallets currently holding a whale position in at least one of the pools
/// passed as remaining accounts, deduplicated across pools.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CheckWhaleWallets<'info>>,
) -> Result<Vec<Pubkey>> {
    let mut pools: Vec<Pool> = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        let pool: Account<'info, Pool> = Account::try_from(info)?;
        pools.push(pool.into_inner());
    }
    Ok(state::pool::collect_whale_wallets(&pools))
}

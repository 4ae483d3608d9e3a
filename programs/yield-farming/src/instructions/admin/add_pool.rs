use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::PoolAdded;
use crate::state::{Farm, Pool};

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AddPoolParams {
    pub capacity: u64,
    pub min_deposit: u64,
    pub rate_numerator: u64,
    pub reserve_param: u64,
}

#[derive(Accounts)]
pub struct AddPool<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [FARM_SEED],
        bump = farm.bump,
        constraint = farm.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub farm: Account<'info, Farm>,

    #[account(
        init,
        payer = owner,
        space = Pool::LEN,
        seeds = [POOL_SEED, &farm.total_pools.to_le_bytes()],
        bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Lamport vault for this pool, a data-less system account PDA
    #[account(
        seeds = [VAULT_SEED, &farm.total_pools.to_le_bytes()],
        bump,
    )]
    pub pool_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddPool>, params: AddPoolParams) -> Result<u64> {
    Pool::validate_params(params.capacity, params.min_deposit, params.rate_numerator)?;

    // Capture keys before mutable borrows
    let farm_key = ctx.accounts.farm.key();
    let pool_key = ctx.accounts.pool.key();
    let clock = Clock::get()?;

    let farm = &mut ctx.accounts.farm;
    let pool_id = farm.next_pool_id()?;

    let pool = &mut ctx.accounts.pool;
    pool.farm = farm_key;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.pool_vault;
    pool.pool_id = pool_id;
    pool.capacity = params.capacity;
    pool.min_deposit = params.min_deposit;
    pool.rate_numerator = params.rate_numerator;
    pool.reserve_param = params.reserve_param;
    pool.total_deposited = 0;
    pool.positions = Vec::new();
    pool.created_at = clock.unix_timestamp;

    emit!(PoolAdded {
        pool: pool_key,
        pool_id,
        capacity: params.capacity,
        min_deposit: params.min_deposit,
        rate_numerator: params.rate_numerator,
        timestamp: clock.unix_timestamp,
    });

    Ok(pool_id)
}

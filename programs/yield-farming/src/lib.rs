#![allow(ambiguous_glob_reexports)]

pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod math;
pub mod instructions;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod yield_farming {
    use super::*;

    // ── Admin ───────────────────────────────────────────────

    pub fn initialize_farm(ctx: Context<InitializeFarm>) -> Result<()> {
        instructions::admin::initialize_farm::handler(ctx)
    }

    pub fn add_pool(ctx: Context<AddPool>, params: AddPoolParams) -> Result<u64> {
        instructions::admin::add_pool::handler(ctx, params)
    }

    // ── Staking ─────────────────────────────────────────────

    pub fn deposit_wei(ctx: Context<DepositWei>, amount: u64) -> Result<()> {
        instructions::user::deposit_wei::handler(ctx, amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::user::claim_rewards::handler(ctx)
    }

    pub fn withdraw_wei(ctx: Context<WithdrawWei>, amount: u64) -> Result<()> {
        instructions::user::withdraw_wei::handler(ctx, amount)
    }

    // ── Queries ─────────────────────────────────────────────

    pub fn check_claimable_rewards(ctx: Context<CheckClaimableRewards>) -> Result<u64> {
        instructions::query::check_claimable_rewards::handler(ctx)
    }

    pub fn check_remaining_capacity(ctx: Context<CheckRemainingCapacity>) -> Result<u64> {
        instructions::query::check_remaining_capacity::handler(ctx)
    }

    pub fn check_user_deposit_in_pool(
        ctx: Context<CheckUserDepositInPool>,
    ) -> Result<PoolDepositsView> {
        instructions::query::check_user_deposit_in_pool::handler(ctx)
    }

    pub fn check_user_deposits<'info>(
        ctx: Context<'_, '_, 'info, 'info, CheckUserDeposits<'info>>,
        wallet: Pubkey,
    ) -> Result<Vec<u64>> {
        instructions::query::check_user_deposits::handler(ctx, wallet)
    }

    pub fn check_whale_wallets<'info>(
        ctx: Context<'_, '_, 'info, 'info, CheckWhaleWallets<'info>>,
    ) -> Result<Vec<Pubkey>> {
        instructions::query::check_whale_wallets::handler(ctx)
    }
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use crate::constants::*;
use crate::events::FarmInitialized;
use crate::state::Farm;

#[derive(Accounts)]
pub struct InitializeFarm<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = Farm::LEN,
        seeds = [FARM_SEED],
        bump,
    )]
    pub farm: Account<'info, Farm>,

    /// Accounting-token mint; the farm PDA is its only mint authority
    #[account(
        init,
        payer = owner,
        mint::decimals = REWARD_DECIMALS,
        mint::authority = farm,
    )]
    pub reward_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitializeFarm>) -> Result<()> {
    let farm = &mut ctx.accounts.farm;
    farm.owner = ctx.accounts.owner.key();
    farm.bump = ctx.bumps.farm;
    farm.reward_mint = ctx.accounts.reward_mint.key();
    farm.total_pools = 0;
    farm._reserved = [0u8; 64];

    let clock = Clock::get()?;
    emit!(FarmInitialized {
        owner: farm.owner,
        reward_mint: farm.reward_mint,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

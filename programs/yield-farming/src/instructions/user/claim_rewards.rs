use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::ErrorCode;
use crate::events::RewardsClaimed;
use crate::state::{Farm, Pool};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    pub depositor: Signer<'info>,

    #[account(
        seeds = [FARM_SEED],
        bump = farm.bump,
    )]
    pub farm: Box<Account<'info, Farm>>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        address = farm.reward_mint @ ErrorCode::Unauthorized,
    )]
    pub reward_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = depositor_reward_account.owner == depositor.key() @ ErrorCode::Unauthorized,
        constraint = depositor_reward_account.mint == farm.reward_mint @ ErrorCode::Unauthorized,
    )]
    pub depositor_reward_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let clock = Clock::get()?;
    let depositor_key = ctx.accounts.depositor.key();
    let farm_bump = ctx.accounts.farm.bump;

    let pool = &mut ctx.accounts.pool;
    let rate_numerator = pool.rate_numerator;
    let pool_id = pool.pool_id;

    let position = pool
        .position_mut(&depositor_key)
        .ok_or(ErrorCode::PositionNotFound)?;
    let reward = position.claim(rate_numerator, clock.unix_timestamp)?;

    // Mint the payout to the caller; the cursor has already advanced, so a
    // zero payout needs no CPI
    if reward.paid > 0 {
        let seeds = &[FARM_SEED, &[farm_bump]];
        let signer_seeds = &[&seeds[..]];

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::MintTo {
                    mint: ctx.accounts.reward_mint.to_account_info(),
                    to: ctx.accounts.depositor_reward_account.to_account_info(),
                    authority: ctx.accounts.farm.to_account_info(),
                },
                signer_seeds,
            ),
            reward.paid,
        )?;
    }

    emit!(RewardsClaimed {
        depositor: depositor_key,
        pool_id,
        base_reward: reward.base,
        paid_reward: reward.paid,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

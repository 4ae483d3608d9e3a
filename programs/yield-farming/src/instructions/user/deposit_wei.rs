use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::*;
use crate::events::Deposited;
use crate::state::Pool;

#[derive(Accounts)]
pub struct DepositWei<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.vault_bump,
    )]
    pub pool_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DepositWei>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let depositor_key = ctx.accounts.depositor.key();

    let pool = &mut ctx.accounts.pool;
    pool.record_deposit(depositor_key, amount, clock.unix_timestamp)?;

    // Move the staked lamports into the pool vault
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        depositor: depositor_key,
        pool_id: pool.pool_id,
        amount,
        total_deposited: pool.total_deposited,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::constants::*;
use crate::events::Withdrawn;
use crate::state::Pool;

#[derive(Accounts)]
pub struct WithdrawWei<'info> {
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

pub fn handler(ctx: Context<WithdrawWei>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let depositor_key = ctx.accounts.depositor.key();

    let pool = &mut ctx.accounts.pool;
    pool.record_withdrawal(&depositor_key, amount)?;

    // Return the lamports from the vault, signed with the vault PDA seeds.
    // Pending rewards are not settled here; accrual simply continues against
    // the reduced principal.
    let pool_id_bytes = pool.pool_id.to_le_bytes();
    let seeds = &[VAULT_SEED, pool_id_bytes.as_ref(), &[pool.vault_bump]];
    let signer_seeds = &[&seeds[..]];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.depositor.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Withdrawn {
        depositor: depositor_key,
        pool_id: pool.pool_id,
        amount,
        total_deposited: pool.total_deposited,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

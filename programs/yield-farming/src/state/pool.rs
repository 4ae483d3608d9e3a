use anchor_lang::prelude::*;
use crate::constants::MAX_POOL_POSITIONS;
use crate::error::ErrorCode;
use crate::state::Position;

#[account]
pub struct Pool {
    pub farm: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,

    pub pool_id: u64,

    // Creation parameters, immutable thereafter
    pub capacity: u64,
    pub min_deposit: u64,
    pub rate_numerator: u64,
    /// Fourth creation parameter; accepted and stored, read by no
    /// accounting path. Pending product-owner confirmation.
    pub reserve_param: u64,

    // Running sum of active principal across all positions
    pub total_deposited: u64,

    // Embedded position table, at most one entry per depositor
    pub positions: Vec<Position>,

    pub created_at: i64,
}

impl Pool {
    pub const LEN: usize = 8 // discriminator
        + 32  // farm
        + 1   // bump
        + 1   // vault_bump
        + 8   // pool_id
        + 8 * 4 // creation parameters
        + 8   // total_deposited
        + 4 + MAX_POOL_POSITIONS * Position::SIZE // positions vec
        + 8; // created_at

    /// Creation-consistency rule: the structural parameters must fit inside
    /// the capacity they bound. Rejects e.g. (capacity=10, min=10, rate=1000).
    pub fn validate_params(capacity: u64, min_deposit: u64, rate_numerator: u64) -> Result<()> {
        require!(capacity > 0, ErrorCode::InvalidPoolParams);
        require!(min_deposit <= capacity, ErrorCode::InvalidPoolParams);
        require!(rate_numerator <= capacity, ErrorCode::InvalidPoolParams);
        Ok(())
    }

    pub fn remaining_capacity(&self) -> u64 {
        self.capacity.saturating_sub(self.total_deposited)
    }

    pub fn position(&self, depositor: &Pubkey) -> Option<&Position> {
        self.positions.iter().find(|p| p.depositor == *depositor)
    }

    pub fn position_mut(&mut self, depositor: &Pubkey) -> Option<&mut Position> {
        self.positions.iter_mut().find(|p| p.depositor == *depositor)
    }

    /// Record a deposit. The capacity ceiling is hard: the deposit either
    /// fits entirely or the whole operation fails, nothing is clamped.
    /// A repeat deposit extends principal and leaves the accrual window
    /// open (both timestamps untouched).
    pub fn record_deposit(&mut self, depositor: Pubkey, amount: u64, now: i64) -> Result<()> {
        require!(amount >= self.min_deposit, ErrorCode::DepositBelowMinimum);

        let new_total = self
            .total_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(new_total <= self.capacity, ErrorCode::CapacityExceeded);

        match self.position_mut(&depositor) {
            Some(position) => {
                position.principal = position
                    .principal
                    .checked_add(amount)
                    .ok_or(ErrorCode::MathOverflow)?;
            }
            None => {
                require!(
                    self.positions.len() < MAX_POOL_POSITIONS,
                    ErrorCode::PoolPositionsFull
                );
                self.positions.push(Position::new(depositor, amount, now));
            }
        }

        self.total_deposited = new_total;
        Ok(())
    }

    /// Record a withdrawal. Frees the withdrawn amount of capacity; the
    /// position stays in the table even at zero principal.
    pub fn record_withdrawal(&mut self, depositor: &Pubkey, amount: u64) -> Result<()> {
        let position = self
            .position_mut(depositor)
            .ok_or(ErrorCode::PositionNotFound)?;
        require!(amount <= position.principal, ErrorCode::InsufficientPrincipal);

        position.principal = position
            .principal
            .checked_sub(amount)
            .ok_or(ErrorCode::MathUnderflow)?;
        self.total_deposited = self
            .total_deposited
            .checked_sub(amount)
            .ok_or(ErrorCode::MathUnderflow)?;
        Ok(())
    }

    /// Parallel depositor/principal lists for the reporting surface.
    pub fn deposit_table(&self) -> (Vec<Pubkey>, Vec<u64>) {
        let depositors = self.positions.iter().map(|p| p.depositor).collect();
        let amounts = self.positions.iter().map(|p| p.principal).collect();
        (depositors, amounts)
    }
}

/// Wallets holding at least one whale position across `pools`, each listed
/// once no matter how many pools it qualifies in.
pub fn collect_whale_wallets<'a>(pools: impl IntoIterator<Item = &'a Pool>) -> Vec<Pubkey> {
    let mut wallets: Vec<Pubkey> = Vec::new();
    for pool in pools {
        for position in pool.positions.iter().filter(|p| p.is_whale()) {
            if !wallets.contains(&position.depositor) {
                wallets.push(position.depositor);
            }
        }
    }
    wallets
}

/// Principal held by `wallet` in each pool it participates in, ordered by
/// pool id.
pub fn collect_wallet_deposits<'a>(
    pools: impl IntoIterator<Item = &'a Pool>,
    wallet: &Pubkey,
) -> Vec<u64> {
    let mut entries: Vec<(u64, u64)> = pools
        .into_iter()
        .filter_map(|pool| pool.position(wallet).map(|p| (pool.pool_id, p.principal)))
        .collect();
    entries.sort_by_key(|(pool_id, _)| *pool_id);
    entries.into_iter().map(|(_, principal)| principal).collect()
}

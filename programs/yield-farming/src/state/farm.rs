use anchor_lang::prelude::*;
use crate::error::ErrorCode;

#[account]
pub struct Farm {
    pub owner: Pubkey,
    pub bump: u8,

    // Accounting-token mint, authority is the farm PDA
    pub reward_mint: Pubkey,

    // Sequential pool id source
    pub total_pools: u64,

    // Reserved for future use
    pub _reserved: [u8; 64],
}

impl Farm {
    pub const LEN: usize = 8 // discriminator
        + 32  // owner
        + 1   // bump
        + 32  // reward_mint
        + 8   // total_pools
        + 64; // reserved

    /// Returns the id for the pool being created and bumps the counter.
    /// Ids are dense: failed creations abort before this runs.
    pub fn next_pool_id(&mut self) -> Result<u64> {
        let id = self.total_pools;
        self.total_pools = self
            .total_pools
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(id)
    }
}

pub mod check_claimable_rewards;
pub mod check_remaining_capacity;
pub mod check_user_deposit_in_pool;
pub mod check_user_deposits;
pub mod check_whale_wallets;

pub use check_claimable_rewards::*;
pub use check_remaining_capacity::*;
pub use check_user_deposit_in_pool::*;
pub use check_user_deposits::*;
pub use check_whale_wallets::*;

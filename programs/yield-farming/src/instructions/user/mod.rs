pub mod deposit_wei;
pub mod claim_rewards;
pub mod withdraw_wei;

pub use deposit_wei::*;
pub use claim_rewards::*;
pub use withdraw_wei::*;

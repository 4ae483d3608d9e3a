use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // General
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Math underflow")]
    MathUnderflow,
    #[msg("Unauthorized: signer is not the farm owner")]
    Unauthorized,

    // Pool creation
    #[msg("Pool parameters are inconsistent")]
    InvalidPoolParams,

    // Deposits
    #[msg("Deposit is below the pool minimum")]
    DepositBelowMinimum,
    #[msg("Deposit would exceed pool capacity")]
    CapacityExceeded,
    #[msg("Pool position table is full")]
    PoolPositionsFull,

    // Claims and withdrawals
    #[msg("Caller has no position in this pool")]
    PositionNotFound,
    #[msg("Withdrawal exceeds staked principal")]
    InsufficientPrincipal,
}

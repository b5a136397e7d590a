use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    // Validation
    #[msg("A parameter is out of range or inconsistent with the global config.")]
    InvalidParameter,

    #[msg("Amount must be greater than zero.")]
    ZeroAmount,

    #[msg("Decimal normalization target is out of range.")]
    InvalidDecimals,

    #[msg("Vault account does not belong to this pool.")]
    InvalidVault,

    // Authorization
    #[msg("The signer is not authorized for this action.")]
    Unauthorized,

    #[msg("The signer does not hold the mint authority of this stack.")]
    InvalidMintAuthority,

    // State
    #[msg("The protocol is paused.")]
    Paused,

    #[msg("The global config has already been initialized.")]
    AlreadyInitialized,

    #[msg("This stack mint is already registered.")]
    AlreadyRegistered,

    #[msg("No pool exists for this pair.")]
    PoolNotFound,

    #[msg("The pool has no liquidity.")]
    NoLiquidity,

    // Economic
    #[msg("Output is below the requested minimum.")]
    SlippageExceeded,

    #[msg("Deposit cannot be matched to the pool ratio.")]
    RatioMismatch,

    #[msg("Insufficient balance.")]
    InsufficientBalance,

    #[msg("Claimable amount is below the dust threshold.")]
    BelowDustThreshold,

    #[msg("Creator claim is still locked.")]
    ClaimLocked,

    #[msg("A valid governance approval is required.")]
    GovernanceApprovalRequired,

    #[msg("Deposit would mint zero LP shares.")]
    ZeroLpMint,

    // Arithmetic
    #[msg("Arithmetic overflow.")]
    ArithmeticOverflow,
}

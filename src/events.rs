use anchor_lang::prelude::*;

#[event]
pub struct GlobalInitialized {
    pub admin: Pubkey,
    pub protocol_fee_bps: u16,
    pub max_fee_bps: u16,
}

#[event]
pub struct GlobalConfigUpdated {
    pub admin: Pubkey,
    pub protocol_fee_bps: u16,
    pub max_fee_bps: u16,
    pub dust_threshold: u64,
    pub creator_claim_lock_secs: i64,
    pub governance_notional_threshold: u64,
}

#[event]
pub struct PauseToggled {
    pub paused: bool,
}

#[event]
pub struct StackRegistered {
    pub creator: Pubkey,
    pub stack_mint: Pubkey,
    pub creator_fee_bps: u16,
}

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub stack_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub fee_bps: u16,
    pub decimal_normalize_to: u8,
}

#[event]
pub struct PoolParamsUpdated {
    pub pool: Pubkey,
    pub fee_bps: u16,
    pub k_value: u128,
}

#[event]
pub struct LiquidityProvided {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub stack_in: u64,
    pub quote_in: u64,
    pub lp_minted: u64,
}

#[event]
pub struct LiquidityRemoved {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub lp_burned: u64,
    pub stack_out: u64,
    pub quote_out: u64,
}

#[event]
pub struct EmergencyWithdrawal {
    pub pool: Pubkey,
    pub provider: Pubkey,
    pub lp_burned: u64,
    pub stack_out: u64,
    pub quote_out: u64,
}

#[event]
pub struct SwapExecuted {
    pub pool: Pubkey,
    pub trader: Pubkey,
    pub stack_to_quote: bool,
    pub amount_in: u64,
    pub amount_out: u64,
    pub protocol_fee: u64,
    pub creator_fee: u64,
}

#[event]
pub struct CreatorClaimed {
    pub pool: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProtocolFeesWithdrawn {
    pub pool: Pubkey,
    pub treasury: Pubkey,
    pub amount: u64,
}

#[event]
pub struct GovernanceApprovalSet {
    pub target: Pubkey,
    pub nonce: u64,
    pub approved: bool,
    pub expiry_ts: i64,
}

#[event]
pub struct MidPrice {
    pub pool: Pubkey,
    pub price: u128,
    pub scale_decimals: u8,
}

#[event]
pub struct StackMintedViaPool {
    pub pool: Pubkey,
    pub buyer: Pubkey,
    pub quote_in: u64,
    pub stack_minted: u64,
    pub protocol_fee: u64,
    pub creator_fee: u64,
}

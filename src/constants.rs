// Record versions
pub const GLOBAL_VERSION: u8 = 1;
pub const STACK_INFO_VERSION: u8 = 1;
pub const POOL_VERSION: u8 = 1;

// PDA seeds
pub const GLOBAL_SEED: &[u8] = b"global";
pub const STACK_INFO_SEED: &[u8] = b"stack_info";
pub const STACK_MINT_AUTH_SEED: &[u8] = b"stack_mint_auth";
pub const POOL_SEED: &[u8] = b"pool";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const LP_MINT_SEED: &[u8] = b"lp_mint";
pub const STACK_VAULT_SEED: &[u8] = b"stack_vault";
pub const QUOTE_VAULT_SEED: &[u8] = b"quote_vault";
pub const PROTOCOL_FEE_VAULT_SEED: &[u8] = b"protocol_fee_vault";
pub const CREATOR_FEE_VAULT_SEED: &[u8] = b"creator_fee_vault";
pub const GOVERNANCE_APPROVAL_SEED: &[u8] = b"governance_approval";

/// 10_000 bps = 100%
pub const BPS_DENOM: u16 = 10_000;

pub const LP_DECIMALS: u8 = 9;

/// Upper bound for `decimal_normalize_to`. A u64 amount scaled by 10^18 still fits in a u128.
pub const MAX_NORMALIZE_DECIMALS: u8 = 18;

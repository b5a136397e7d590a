//! Deterministic addresses for every record the program owns. Any two callers
//! using the same seeds land on the same account.

use anchor_lang::prelude::*;
use crate::constants::*;

pub fn global_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_SEED], &crate::ID)
}

pub fn stack_info_address(stack_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STACK_INFO_SEED, stack_mint.as_ref()], &crate::ID)
}

pub fn stack_mint_authority_address(stack_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STACK_MINT_AUTH_SEED, stack_mint.as_ref()], &crate::ID)
}

pub fn pool_address(stack_mint: &Pubkey, quote_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_SEED, stack_mint.as_ref(), quote_mint.as_ref()],
        &crate::ID,
    )
}

fn pool_scoped(seed: &[u8], pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seed, pool.as_ref()], &crate::ID)
}

pub fn vault_authority_address(pool: &Pubkey) -> (Pubkey, u8) {
    pool_scoped(VAULT_AUTHORITY_SEED, pool)
}

pub fn lp_mint_address(pool: &Pubkey) -> (Pubkey, u8) {
    pool_scoped(LP_MINT_SEED, pool)
}

pub fn stack_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    pool_scoped(STACK_VAULT_SEED, pool)
}

pub fn quote_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    pool_scoped(QUOTE_VAULT_SEED, pool)
}

pub fn protocol_fee_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    pool_scoped(PROTOCOL_FEE_VAULT_SEED, pool)
}

pub fn creator_fee_vault_address(pool: &Pubkey) -> (Pubkey, u8) {
    pool_scoped(CREATOR_FEE_VAULT_SEED, pool)
}

pub fn governance_approval_address(target: &Pubkey, nonce: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[GOVERNANCE_APPROVAL_SEED, target.as_ref(), &nonce.to_le_bytes()],
        &crate::ID,
    )
}

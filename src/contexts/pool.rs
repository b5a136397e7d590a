use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_NORMALIZE_DECIMALS, POOL_VERSION},
    contexts::{GlobalConfig, StackInfo},
    errors::AmmError,
};

/// Per-(stack, quote) pair record at `"pool" + stack_mint + quote_mint`.
///
/// Reserves are not mirrored here: the vault balances are authoritative and
/// every instruction reads them fresh.
#[account]
#[derive(Default, InitSpace)]
pub struct Pool {
    pub version: u8,
    pub bump: u8,
    pub vault_authority_bump: u8,
    pub creator: Pubkey,
    pub stack_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub fee_bps: u16,
    // Depth floor for swaps, never touched by trades
    pub k_value: u128,
    pub fee_on_transfer: bool,
    pub decimal_normalize_to: u8,
    pub stack_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub protocol_fee_vault: Pubkey,
    pub creator_fee_vault: Pubkey,
    pub vault_authority: Pubkey,
    pub oracle: Pubkey,
    pub total_lp_supply: u64,
    // Native quote units owed to the creator
    pub creator_claimable: u64,
    pub last_claim_timestamp: i64,
    pub last_governance_nonce: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolStatus {
    Uninitialized,
    Created,
    Active,
    Paused,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolVaults {
    pub stack: Pubkey,
    pub quote: Pubkey,
    pub protocol_fee: Pubkey,
    pub creator_fee: Pubkey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolConfig {
    pub stack_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub lp_mint: Pubkey,
    pub fee_bps: u16,
    pub k_value: u128,
    pub fee_on_transfer: bool,
    pub decimal_normalize_to: u8,
    pub vaults: PoolVaults,
    pub vault_authority: Pubkey,
    pub oracle: Pubkey,
}

impl Pool {
    pub fn initialize(
        &mut self,
        global: &GlobalConfig,
        stack_info: &StackInfo,
        config: PoolConfig,
        bump: u8,
        vault_authority_bump: u8,
    ) -> Result<()> {
        global.check_pool_fee(config.fee_bps)?;
        require!(
            config.stack_mint != config.quote_mint,
            AmmError::InvalidParameter
        );
        require!(
            config.stack_mint == stack_info.stack_mint,
            AmmError::InvalidParameter
        );
        require!(
            config.decimal_normalize_to <= MAX_NORMALIZE_DECIMALS,
            AmmError::InvalidDecimals
        );
        // global bounds may have moved since the stack was registered
        global.check_creator_fee(stack_info.creator_fee_bps)?;
        require!(self.version == 0, AmmError::InvalidParameter);

        *self = Pool {
            version: POOL_VERSION,
            bump,
            vault_authority_bump,
            creator: stack_info.creator,
            stack_mint: config.stack_mint,
            quote_mint: config.quote_mint,
            lp_mint: config.lp_mint,
            fee_bps: config.fee_bps,
            k_value: config.k_value,
            fee_on_transfer: config.fee_on_transfer,
            decimal_normalize_to: config.decimal_normalize_to,
            stack_vault: config.vaults.stack,
            quote_vault: config.vaults.quote,
            protocol_fee_vault: config.vaults.protocol_fee,
            creator_fee_vault: config.vaults.creator_fee,
            vault_authority: config.vault_authority,
            oracle: config.oracle,
            total_lp_supply: 0,
            creator_claimable: 0,
            last_claim_timestamp: 0,
            last_governance_nonce: 0,
        };
        Ok(())
    }

    pub fn status(&self, global: &GlobalConfig) -> PoolStatus {
        if self.version == 0 {
            PoolStatus::Uninitialized
        } else if global.paused {
            PoolStatus::Paused
        } else if self.total_lp_supply == 0 {
            PoolStatus::Created
        } else {
            PoolStatus::Active
        }
    }

    /// Swaps need live liquidity and an unpaused protocol.
    pub fn ensure_tradable(&self, global: &GlobalConfig) -> Result<()> {
        match self.status(global) {
            PoolStatus::Active => Ok(()),
            PoolStatus::Paused => err!(AmmError::Paused),
            PoolStatus::Created => err!(AmmError::NoLiquidity),
            PoolStatus::Uninitialized => err!(AmmError::PoolNotFound),
        }
    }

    /// Fee charged on trades. A pool set before `max_fee_bps` was lowered is
    /// capped at the new bound.
    pub fn effective_fee_bps(&self, global: &GlobalConfig) -> u16 {
        self.fee_bps.min(global.max_fee_bps)
    }

    /// Adopts the LP mint's live supply. Holders can burn shares straight
    /// through the token program, so the mint is authoritative. Returns the
    /// shares that left outside the program.
    pub fn sync_lp_supply(&mut self, mint_supply: u64) -> u64 {
        let burned_outside = self.total_lp_supply.saturating_sub(mint_supply);
        self.total_lp_supply = mint_supply;
        burned_outside
    }

    pub fn record_deposit(&mut self, lp_minted: u64) -> Result<()> {
        self.total_lp_supply = self
            .total_lp_supply
            .checked_add(lp_minted)
            .ok_or(AmmError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, lp_burned: u64) -> Result<()> {
        self.total_lp_supply = self
            .total_lp_supply
            .checked_sub(lp_burned)
            .ok_or(AmmError::InsufficientBalance)?;
        Ok(())
    }

    pub fn accrue_creator_fee(&mut self, amount: u64) -> Result<()> {
        self.creator_claimable = self
            .creator_claimable
            .checked_add(amount)
            .ok_or(AmmError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Governance-approval nonces only ever move forward.
    pub fn consume_governance_nonce(&mut self, nonce: u64) -> Result<()> {
        require!(
            nonce > self.last_governance_nonce,
            AmmError::GovernanceApprovalRequired
        );
        self.last_governance_nonce = nonce;
        Ok(())
    }

    pub fn apply_params(
        &mut self,
        global: &GlobalConfig,
        fee_bps: Option<u16>,
        k_value: Option<u128>,
    ) -> Result<()> {
        if let Some(fee_bps) = fee_bps {
            global.check_pool_fee(fee_bps)?;
            self.fee_bps = fee_bps;
        }
        if let Some(k_value) = k_value {
            self.k_value = k_value;
        }
        Ok(())
    }
}

use anchor_lang::prelude::*;
use crate::{constants::*, errors::AmmError};

/// Protocol-wide singleton at seed `"global"`.
#[account]
#[derive(Default, InitSpace)]
pub struct GlobalConfig {
    pub version: u8,
    pub initialized: bool,
    pub bump: u8,
    pub admin: Pubkey,
    pub pauser: Pubkey,
    pub fee_manager: Pubkey,
    pub governance: Pubkey,
    pub treasury: Pubkey,
    pub protocol_fee_bps: u16,
    pub max_fee_bps: u16,
    pub dust_threshold: u64,
    pub creator_claim_lock_secs: i64,
    // Quote-side notional above which a governance approval is needed; 0 disables the gate
    pub governance_notional_threshold: u64,
    pub paused: bool,
}

/// Arguments of `init_global`, gathered so the record can validate them in one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalParams {
    pub protocol_fee_bps: u16,
    pub pauser: Pubkey,
    pub fee_manager: Pubkey,
    pub governance: Pubkey,
    pub max_fee_bps: u16,
    pub dust_threshold: u64,
    pub creator_claim_lock_secs: i64,
}

/// Partial update applied by `update_global_config`. `None` leaves a field untouched.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalConfigUpdate {
    pub admin: Option<Pubkey>,
    pub pauser: Option<Pubkey>,
    pub fee_manager: Option<Pubkey>,
    pub governance: Option<Pubkey>,
    pub treasury: Option<Pubkey>,
    pub protocol_fee_bps: Option<u16>,
    pub max_fee_bps: Option<u16>,
    pub dust_threshold: Option<u64>,
    pub creator_claim_lock_secs: Option<i64>,
    pub governance_notional_threshold: Option<u64>,
}

impl GlobalConfig {
    pub fn initialize(
        &mut self,
        admin: Pubkey,
        treasury: Pubkey,
        params: GlobalParams,
        bump: u8,
    ) -> Result<()> {
        let next = GlobalConfig {
            version: GLOBAL_VERSION,
            initialized: true,
            bump,
            admin,
            pauser: params.pauser,
            fee_manager: params.fee_manager,
            governance: params.governance,
            treasury,
            protocol_fee_bps: params.protocol_fee_bps,
            max_fee_bps: params.max_fee_bps,
            dust_threshold: params.dust_threshold,
            creator_claim_lock_secs: params.creator_claim_lock_secs,
            governance_notional_threshold: 0,
            paused: false,
        };
        next.validate()?;
        require!(!self.initialized, AmmError::AlreadyInitialized);

        *self = next;
        Ok(())
    }

    /// Bounds that must hold after every write.
    pub fn validate(&self) -> Result<()> {
        require!(self.max_fee_bps <= BPS_DENOM, AmmError::InvalidParameter);
        require!(
            self.protocol_fee_bps <= self.max_fee_bps,
            AmmError::InvalidParameter
        );
        require!(self.creator_claim_lock_secs >= 0, AmmError::InvalidParameter);
        Ok(())
    }

    /// Returns whether the flag actually changed.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<bool> {
        require_keys_eq!(*caller, self.pauser, AmmError::Unauthorized);
        let changed = self.paused != paused;
        self.paused = paused;
        Ok(changed)
    }

    /// Builds the full candidate config, validates it, then commits it in one write.
    pub fn apply_update(&mut self, caller: &Pubkey, update: &GlobalConfigUpdate) -> Result<()> {
        require_keys_eq!(*caller, self.admin, AmmError::Unauthorized);

        let mut next = self.clone();
        if let Some(admin) = update.admin {
            next.admin = admin;
        }
        if let Some(pauser) = update.pauser {
            next.pauser = pauser;
        }
        if let Some(fee_manager) = update.fee_manager {
            next.fee_manager = fee_manager;
        }
        if let Some(governance) = update.governance {
            next.governance = governance;
        }
        if let Some(treasury) = update.treasury {
            next.treasury = treasury;
        }
        if let Some(bps) = update.protocol_fee_bps {
            next.protocol_fee_bps = bps;
        }
        if let Some(bps) = update.max_fee_bps {
            next.max_fee_bps = bps;
        }
        if let Some(dust) = update.dust_threshold {
            next.dust_threshold = dust;
        }
        if let Some(lock) = update.creator_claim_lock_secs {
            next.creator_claim_lock_secs = lock;
        }
        if let Some(threshold) = update.governance_notional_threshold {
            next.governance_notional_threshold = threshold;
        }
        next.validate()?;

        *self = next;
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, AmmError::Paused);
        Ok(())
    }

    /// A creator fee is acceptable while it fits beside the protocol fee under the cap.
    pub fn check_creator_fee(&self, creator_fee_bps: u16) -> Result<()> {
        let combined = creator_fee_bps as u32 + self.protocol_fee_bps as u32;
        require!(
            combined <= self.max_fee_bps as u32,
            AmmError::InvalidParameter
        );
        Ok(())
    }

    pub fn check_pool_fee(&self, fee_bps: u16) -> Result<()> {
        require!(fee_bps <= self.max_fee_bps, AmmError::InvalidParameter);
        Ok(())
    }

    pub fn is_fee_authority(&self, key: &Pubkey) -> bool {
        *key == self.admin || *key == self.fee_manager
    }

    pub fn governance_required(&self, quote_notional: u64) -> bool {
        self.governance_notional_threshold > 0
            && quote_notional > self.governance_notional_threshold
    }
}

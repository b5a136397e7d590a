use anchor_lang::prelude::*;
use crate::{
    contexts::{GlobalConfig, Pool, StackInfo},
    curve::{apply_bps, mul_div_floor},
    errors::AmmError,
    constants::BPS_DENOM,
};

/// One swap fee, in normalized input units.
///
/// `protocol` and `creator` leave the reserves for the fee vaults; `pool` stays
/// behind as LP income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeSplit {
    pub protocol: u128,
    pub creator: u128,
    pub pool: u128,
}

impl FeeSplit {
    pub fn total(&self) -> Result<u128> {
        Ok(self
            .protocol
            .checked_add(self.creator)
            .and_then(|sum| sum.checked_add(self.pool))
            .ok_or(AmmError::ArithmeticOverflow)?)
    }

    /// Portion paid out of the reserves.
    pub fn distributed(&self) -> Result<u128> {
        Ok(self
            .protocol
            .checked_add(self.creator)
            .ok_or(AmmError::ArithmeticOverflow)?)
    }
}

/// Splits `fee_bps` of `amount_in`.
///
/// total = floor(in * fee_bps), protocol = floor(total * protocol_fee_bps),
/// creator = min(total - protocol, floor(in * creator_fee_bps)), pool = rest.
pub fn split_fee(
    amount_in: u128,
    fee_bps: u16,
    protocol_fee_bps: u16,
    creator_fee_bps: u16,
) -> Result<FeeSplit> {
    require!(
        fee_bps <= BPS_DENOM && protocol_fee_bps <= BPS_DENOM,
        AmmError::InvalidParameter
    );
    let total = apply_bps(amount_in, fee_bps)?;
    let protocol = mul_div_floor(total, protocol_fee_bps as u128, BPS_DENOM as u128)?;
    let creator_cap = apply_bps(amount_in, creator_fee_bps)?;
    let after_protocol = total
        .checked_sub(protocol)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let creator = after_protocol.min(creator_cap);
    let pool = after_protocol
        .checked_sub(creator)
        .ok_or(AmmError::ArithmeticOverflow)?;

    Ok(FeeSplit {
        protocol,
        creator,
        pool,
    })
}

/// Validates a creator claim and zeroes the accrual. Returns the amount to pay out
/// of the creator fee vault.
pub fn claim_creator_fees(
    pool: &mut Pool,
    stack_info: &StackInfo,
    global: &GlobalConfig,
    caller: &Pubkey,
    now: i64,
) -> Result<u64> {
    stack_info.ensure_creator(caller)?;
    require_keys_eq!(stack_info.stack_mint, pool.stack_mint, AmmError::InvalidParameter);

    let elapsed = now
        .checked_sub(pool.last_claim_timestamp)
        .ok_or(AmmError::ArithmeticOverflow)?;
    if elapsed < global.creator_claim_lock_secs {
        msg!(
            "Creator claim locked for another {}s",
            global.creator_claim_lock_secs - elapsed
        );
        return err!(AmmError::ClaimLocked);
    }

    let amount = pool.creator_claimable;
    require!(
        amount > 0 && amount >= global.dust_threshold,
        AmmError::BelowDustThreshold
    );

    pool.creator_claimable = 0;
    pool.last_claim_timestamp = now;
    Ok(amount)
}

use anchor_lang::prelude::*;
use crate::constants::{BPS_DENOM, MAX_NORMALIZE_DECIMALS};
use crate::errors::AmmError;

/// Native vault balances of a pool, in each mint's own smallest units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reserves {
    pub stack: u64,
    pub quote: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MintDecimals {
    pub stack: u8,
    pub quote: u8,
}

/// Reserves rescaled to the pool's canonical decimal exponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedReserves {
    pub stack: u128,
    pub quote: u128,
}

impl NormalizedReserves {
    /// Product of both sides, `None` when it does not fit in a u128.
    pub fn product(&self) -> Option<u128> {
        self.stack.checked_mul(self.quote)
    }

    pub fn is_empty(&self) -> bool {
        self.stack == 0 || self.quote == 0
    }

    /// Quote per stack, scaled by 10^target.
    pub fn mid_price(&self, target: u8) -> Result<u128> {
        require!(!self.is_empty(), AmmError::NoLiquidity);
        mul_div_floor(self.quote, pow10(target)?, self.stack)
    }
}

/// Fixed-point rescale between a pool's two mints and its canonical exponent.
///
/// All curve math runs on the normalized side; settlement converts back with
/// floor rounding so the pool never pays out more than the curve allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    pub decimals: MintDecimals,
    pub target: u8,
}

impl Normalizer {
    pub fn new(decimals: MintDecimals, target: u8) -> Result<Self> {
        require!(target <= MAX_NORMALIZE_DECIMALS, AmmError::InvalidDecimals);
        Ok(Self { decimals, target })
    }

    pub fn stack(&self, amount: u64) -> Result<u128> {
        normalize(amount, self.decimals.stack, self.target)
    }

    pub fn quote(&self, amount: u64) -> Result<u128> {
        normalize(amount, self.decimals.quote, self.target)
    }

    pub fn stack_native(&self, amount: u128) -> Result<u64> {
        denormalize(amount, self.decimals.stack, self.target)
    }

    pub fn quote_native(&self, amount: u128) -> Result<u64> {
        denormalize(amount, self.decimals.quote, self.target)
    }

    pub fn reserves(&self, reserves: Reserves) -> Result<NormalizedReserves> {
        Ok(NormalizedReserves {
            stack: self.stack(reserves.stack)?,
            quote: self.quote(reserves.quote)?,
        })
    }
}

pub fn pow10(exp: u8) -> Result<u128> {
    Ok(10u128
        .checked_pow(exp as u32)
        .ok_or(AmmError::ArithmeticOverflow)?)
}

/// Rescale a native amount to `target` decimals. Downscaling floors.
pub fn normalize(amount: u64, decimals: u8, target: u8) -> Result<u128> {
    let amount = amount as u128;
    if decimals == target {
        Ok(amount)
    } else if decimals < target {
        Ok(amount
            .checked_mul(pow10(target - decimals)?)
            .ok_or(AmmError::ArithmeticOverflow)?)
    } else {
        Ok(amount / pow10(decimals - target)?)
    }
}

/// Inverse of [`normalize`], flooring, failing if the result exceeds a u64.
pub fn denormalize(amount: u128, decimals: u8, target: u8) -> Result<u64> {
    let native = if decimals == target {
        amount
    } else if decimals < target {
        amount / pow10(target - decimals)?
    } else {
        amount
            .checked_mul(pow10(decimals - target)?)
            .ok_or(AmmError::ArithmeticOverflow)?
    };
    Ok(u64::try_from(native).map_err(|_| AmmError::ArithmeticOverflow)?)
}

pub fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let mut x0 = value / 2;
    let mut x1 = (x0 + value / x0) / 2;
    while x1 < x0 {
        x0 = x1;
        x1 = (x0 + value / x0) / 2;
    }
    x0
}

pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, AmmError::ArithmeticOverflow);
    Ok(a.checked_mul(b).ok_or(AmmError::ArithmeticOverflow)? / denominator)
}

pub fn mul_div_ceil(a: u128, b: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, AmmError::ArithmeticOverflow);
    let product = a.checked_mul(b).ok_or(AmmError::ArithmeticOverflow)?;
    Ok(product
        .checked_add(denominator - 1)
        .ok_or(AmmError::ArithmeticOverflow)?
        / denominator)
}

/// `amount * bps / 10_000`, floored.
pub fn apply_bps(amount: u128, bps: u16) -> Result<u128> {
    mul_div_floor(amount, bps as u128, BPS_DENOM as u128)
}

// x * y = k: out = reserve_out * amount_in / (reserve_in + amount_in)
pub fn get_amount_out(amount_in: u128, reserve_in: u128, reserve_out: u128) -> Result<u128> {
    require!(reserve_in > 0 && reserve_out > 0, AmmError::NoLiquidity);
    let denominator = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::ArithmeticOverflow)?;
    mul_div_floor(reserve_out, amount_in, denominator)
}

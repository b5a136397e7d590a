use anchor_lang::prelude::*;
use crate::{
    curve::{isqrt, mul_div_ceil, mul_div_floor, Normalizer, Reserves},
    errors::AmmError,
};

/// Amounts pulled from the depositor and the LP shares minted for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPlan {
    pub stack_in: u64,
    pub quote_in: u64,
    pub lp_minted: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawPlan {
    pub lp_burned: u64,
    pub stack_out: u64,
    pub quote_out: u64,
}

/// Prices a deposit against the current vault balances.
///
/// The first deposit mints `floor(sqrt(stack_n * quote_n))` and fixes the price.
/// Later deposits mint against the limiting side; the other side is pulled only
/// in proportion, rounded up so existing holders are never diluted.
pub fn plan_deposit(
    normalizer: &Normalizer,
    reserves: Reserves,
    total_lp_supply: u64,
    amount_stack: u64,
    amount_quote: u64,
) -> Result<DepositPlan> {
    require!(amount_stack > 0 && amount_quote > 0, AmmError::ZeroAmount);

    let stack_n = normalizer.stack(amount_stack)?;
    let quote_n = normalizer.quote(amount_quote)?;

    if total_lp_supply == 0 {
        let product = stack_n
            .checked_mul(quote_n)
            .ok_or(AmmError::ArithmeticOverflow)?;
        let shares = isqrt(product);
        require!(shares > 0, AmmError::ZeroLpMint);

        return Ok(DepositPlan {
            stack_in: amount_stack,
            quote_in: amount_quote,
            lp_minted: u64::try_from(shares).map_err(|_| AmmError::ArithmeticOverflow)?,
        });
    }

    let normalized = normalizer.reserves(reserves)?;
    require!(!normalized.is_empty(), AmmError::NoLiquidity);

    let supply = total_lp_supply as u128;
    let by_stack = mul_div_floor(stack_n, supply, normalized.stack)?;
    let by_quote = mul_div_floor(quote_n, supply, normalized.quote)?;
    let shares = by_stack.min(by_quote);
    require!(shares > 0, AmmError::ZeroLpMint);

    let stack_in = mul_div_ceil(shares, reserves.stack as u128, supply)?;
    let quote_in = mul_div_ceil(shares, reserves.quote as u128, supply)?;
    require!(
        stack_in <= amount_stack as u128 && quote_in <= amount_quote as u128,
        AmmError::RatioMismatch
    );

    Ok(DepositPlan {
        stack_in: stack_in as u64,
        quote_in: quote_in as u64,
        lp_minted: u64::try_from(shares).map_err(|_| AmmError::ArithmeticOverflow)?,
    })
}

/// Re-prices a deposit whose stack leg arrived short of `planned.stack_in`.
///
/// Shares are minted for what actually landed and the quote pull shrinks to the
/// matching amount, so the caller keeps the quote the taxed stack no longer backs.
pub fn plan_taxed_deposit(
    normalizer: &Normalizer,
    reserves: Reserves,
    total_lp_supply: u64,
    planned: DepositPlan,
    stack_received: u64,
) -> Result<DepositPlan> {
    if stack_received >= planned.stack_in {
        return Ok(planned);
    }
    let landed = plan_deposit(
        normalizer,
        reserves,
        total_lp_supply,
        stack_received,
        planned.quote_in,
    )?;
    Ok(DepositPlan {
        stack_in: stack_received,
        quote_in: landed.quote_in,
        lp_minted: landed.lp_minted,
    })
}

/// Prices burning `lp_amount` shares: a floor of the holder's share of each vault.
pub fn plan_withdrawal(
    reserves: Reserves,
    total_lp_supply: u64,
    holder_balance: u64,
    lp_amount: u64,
) -> Result<WithdrawPlan> {
    require!(lp_amount > 0, AmmError::ZeroAmount);
    require!(holder_balance >= lp_amount, AmmError::InsufficientBalance);
    require!(total_lp_supply > 0, AmmError::NoLiquidity);
    require!(lp_amount <= total_lp_supply, AmmError::InsufficientBalance);

    let supply = total_lp_supply as u128;
    let stack_out = mul_div_floor(reserves.stack as u128, lp_amount as u128, supply)? as u64;
    let quote_out = mul_div_floor(reserves.quote as u128, lp_amount as u128, supply)? as u64;
    require!(stack_out > 0 || quote_out > 0, AmmError::ZeroAmount);

    // outstanding shares must stay backed by both reserves
    if lp_amount < total_lp_supply {
        require!(
            reserves.stack > stack_out && reserves.quote > quote_out,
            AmmError::NoLiquidity
        );
    }

    Ok(WithdrawPlan {
        lp_burned: lp_amount,
        stack_out,
        quote_out,
    })
}

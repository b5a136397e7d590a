use anchor_lang::prelude::*;
use crate::{
    constants::BPS_DENOM,
    contexts::{GlobalConfig, GovernanceGate, Pool, StackInfo},
    curve::{apply_bps, get_amount_out, mul_div_floor, MintDecimals, Normalizer, Reserves},
    errors::AmmError,
    fees::{split_fee, FeeSplit},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    StackToQuote,
    QuoteToStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    pub direction: SwapDirection,
    /// Effective native input, after any transfer fee.
    pub amount_in: u64,
    pub min_amount_out: u64,
}

/// Everything an engine call reads besides the pool itself.
pub struct SwapEnv<'a> {
    pub global: &'a GlobalConfig,
    pub stack_info: &'a StackInfo,
    pub pool_key: Pubkey,
    pub decimals: MintDecimals,
    /// Vault balances before the input lands.
    pub reserves: Reserves,
    pub now: i64,
}

/// Settlement for one swap. Native amounts are in the mint they leave from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPlan {
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub amount_out: u64,
    /// Fee split in normalized input units.
    pub fees: FeeSplit,
    /// Paid from the quote vault into the protocol fee vault.
    pub protocol_fee_quote: u64,
    /// Paid from the quote vault into the creator fee vault.
    pub creator_fee_quote: u64,
    pub quote_notional: u64,
}

/// Native input the curve is allowed to price.
///
/// `received` is what the input vault actually gained. An override rate is only
/// accepted when the input mint is known to tax transfers.
pub fn effective_input(
    amount_in: u64,
    received: u64,
    charges_transfer_fee: bool,
    override_bps: Option<u16>,
) -> Result<u64> {
    let mut effective = received.min(amount_in);
    if let Some(bps) = override_bps {
        require!(
            charges_transfer_fee && bps <= BPS_DENOM,
            AmmError::InvalidParameter
        );
        let withheld = apply_bps(amount_in as u128, bps)? as u64;
        effective = effective.min(amount_in - withheld);
    }
    require!(effective > 0, AmmError::ZeroAmount);
    Ok(effective)
}

/// Prices a swap without touching any state.
pub fn quote_swap(env: &SwapEnv, pool: &Pool, direction: SwapDirection, amount_in: u64) -> Result<SwapPlan> {
    let normalizer = Normalizer::new(env.decimals, pool.decimal_normalize_to)?;
    let reserves = normalizer.reserves(env.reserves)?;
    require!(!reserves.is_empty(), AmmError::NoLiquidity);
    if pool.k_value > 0 {
        // a product too large for u128 is certainly above the floor
        let deep_enough = reserves.product().map_or(true, |k| k >= pool.k_value);
        require!(deep_enough, AmmError::NoLiquidity);
    }

    let (input_n, reserve_in, reserve_out) = match direction {
        SwapDirection::StackToQuote => (normalizer.stack(amount_in)?, reserves.stack, reserves.quote),
        SwapDirection::QuoteToStack => (normalizer.quote(amount_in)?, reserves.quote, reserves.stack),
    };
    require!(input_n > 0, AmmError::ZeroAmount);

    let fees = split_fee(
        input_n,
        pool.effective_fee_bps(env.global),
        env.global.protocol_fee_bps,
        env.stack_info.creator_fee_bps,
    )?;
    let net_in = input_n
        .checked_sub(fees.total()?)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let out_n = get_amount_out(net_in, reserve_in, reserve_out)?;

    match direction {
        SwapDirection::StackToQuote => {
            let amount_out = normalizer.quote_native(out_n)?;

            // the stack-side fee is sold into the post-trade curve, fee-free,
            // and paid to the fee vaults in quote
            let distributed = fees.distributed()?;
            let (protocol_n, creator_n) = if distributed > 0 {
                let stack_after = reserve_in
                    .checked_add(net_in)
                    .ok_or(AmmError::ArithmeticOverflow)?;
                let quote_after = reserve_out
                    .checked_sub(out_n)
                    .ok_or(AmmError::ArithmeticOverflow)?;
                let fee_quote = get_amount_out(distributed, stack_after, quote_after)?;
                let protocol_n = mul_div_floor(fee_quote, fees.protocol, distributed)?;
                (protocol_n, fee_quote - protocol_n)
            } else {
                (0, 0)
            };

            Ok(SwapPlan {
                direction,
                amount_in,
                amount_out,
                fees,
                protocol_fee_quote: normalizer.quote_native(protocol_n)?,
                creator_fee_quote: normalizer.quote_native(creator_n)?,
                quote_notional: amount_out,
            })
        }
        SwapDirection::QuoteToStack => Ok(SwapPlan {
            direction,
            amount_in,
            amount_out: normalizer.stack_native(out_n)?,
            fees,
            protocol_fee_quote: normalizer.quote_native(fees.protocol)?,
            creator_fee_quote: normalizer.quote_native(fees.creator)?,
            quote_notional: amount_in,
        }),
    }
}

/// Runs the full swap transition on `pool`: pause and liquidity checks, pricing,
/// governance gate, slippage, then the creator accrual. `pool` is only written
/// once every check has passed.
pub fn execute_swap(
    env: &SwapEnv,
    pool: &mut Pool,
    request: SwapRequest,
    gate: GovernanceGate,
) -> Result<SwapPlan> {
    pool.ensure_tradable(env.global)?;
    require!(request.amount_in > 0, AmmError::ZeroAmount);

    let plan = quote_swap(env, pool, request.direction, request.amount_in)?;

    let mut next = pool.clone();
    gate.enforce(
        env.global.governance_required(plan.quote_notional),
        &env.pool_key,
        &mut next,
        env.now,
    )?;

    if plan.amount_out < request.min_amount_out.max(1) {
        msg!(
            "Slippage: out {} < min {}",
            plan.amount_out,
            request.min_amount_out
        );
        return err!(AmmError::SlippageExceeded);
    }

    next.accrue_creator_fee(plan.creator_fee_quote)?;
    *pool = next;
    Ok(plan)
}

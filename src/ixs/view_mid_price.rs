use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    curve::{MintDecimals, Normalizer, Reserves},
    errors::AmmError,
    events::MidPrice,
};

/// Quote per stack, scaled by `10^decimal_normalize_to`.
pub fn view_mid_price(ctx: Context<ViewMidPrice>) -> Result<u128> {
    let pool = &ctx.accounts.pool;
    let normalizer = Normalizer::new(
        MintDecimals {
            stack: ctx.accounts.stack_mint.decimals,
            quote: ctx.accounts.quote_mint.decimals,
        },
        pool.decimal_normalize_to,
    )?;
    let reserves = normalizer.reserves(Reserves {
        stack: ctx.accounts.stack_vault.amount,
        quote: ctx.accounts.quote_vault.amount,
    })?;
    let price = reserves.mid_price(pool.decimal_normalize_to)?;

    msg!("Mid price {} at 10^{}", price, pool.decimal_normalize_to);
    emit!(MidPrice {
        pool: pool.key(),
        price,
        scale_decimals: pool.decimal_normalize_to,
    });
    Ok(price)
}

#[derive(Accounts)]
pub struct ViewMidPrice<'info> {
    #[account(
        seeds = [POOL_SEED, pool.stack_mint.as_ref(), pool.quote_mint.as_ref()],
        bump = pool.bump,
        has_one = stack_mint,
        has_one = quote_mint,
        has_one = stack_vault @ AmmError::InvalidVault,
        has_one = quote_vault @ AmmError::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub stack_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,
    pub stack_vault: Box<Account<'info, TokenAccount>>,
    pub quote_vault: Box<Account<'info, TokenAccount>>,
}

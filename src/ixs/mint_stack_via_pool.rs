use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    curve::{MintDecimals, Reserves},
    custody::{deposit_to_vault, mint_stack, release_from_vault, StackMintSigner, VaultSigner},
    errors::AmmError,
    events::StackMintedViaPool,
    swap::{effective_input, execute_swap, SwapDirection, SwapEnv, SwapRequest},
};

/// Buys stack with quote at the pool price, but the stack is newly minted
/// instead of leaving the stack vault. Quote stays in the pool, so the reserve
/// product only grows.
pub fn mint_stack_via_pool(mut ctx: Context<MintStackViaPool>, quote_in: u64, min_stack_out: u64) -> Result<()> {
    require!(quote_in > 0, AmmError::ZeroAmount);
    let now = Clock::get()?.unix_timestamp;
    let mint_auth_bump = ctx.bumps.stack_mint_auth;
    let accounts = &mut ctx.accounts;
    accounts.pool.sync_lp_supply(accounts.lp_mint.supply);

    let reserves = Reserves {
        stack: accounts.stack_vault.amount,
        quote: accounts.quote_vault.amount,
    };

    // 1. Pull the quote and measure what landed
    deposit_to_vault(
        &accounts.token_program,
        &accounts.user_quote,
        &accounts.quote_vault,
        &accounts.user,
        quote_in,
    )?;
    accounts.quote_vault.reload()?;
    let received = accounts
        .quote_vault
        .amount
        .checked_sub(reserves.quote)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let effective = effective_input(quote_in, received, false, None)?;

    // 2. Price as a quote-to-stack trade
    let pool_key = accounts.pool.key();
    let env = SwapEnv {
        global: &accounts.global,
        stack_info: &accounts.stack_info,
        pool_key,
        decimals: MintDecimals {
            stack: accounts.stack_mint.decimals,
            quote: accounts.quote_mint.decimals,
        },
        reserves,
        now,
    };
    let plan = execute_swap(
        &env,
        &mut accounts.pool,
        SwapRequest {
            direction: SwapDirection::QuoteToStack,
            amount_in: effective,
            min_amount_out: min_stack_out,
        },
        GovernanceGate::from(accounts.governance_approval.as_deref()),
    )?;

    // 3. Mint the stack, route the quote fees
    mint_stack(
        &accounts.token_program,
        &accounts.stack_mint,
        &accounts.user_stack,
        &accounts.stack_mint_auth,
        &StackMintSigner::new(accounts.stack_mint.key(), mint_auth_bump),
        plan.amount_out,
    )?;
    let signer = VaultSigner::new(pool_key, accounts.pool.vault_authority_bump);
    release_from_vault(
        &accounts.token_program,
        &accounts.quote_vault,
        &accounts.protocol_fee_vault,
        &accounts.vault_authority,
        &signer,
        plan.protocol_fee_quote,
    )?;
    release_from_vault(
        &accounts.token_program,
        &accounts.quote_vault,
        &accounts.creator_fee_vault,
        &accounts.vault_authority,
        &signer,
        plan.creator_fee_quote,
    )?;

    msg!(
        "Minted {} stack for {} quote via pool",
        plan.amount_out,
        plan.amount_in
    );
    emit!(StackMintedViaPool {
        pool: pool_key,
        buyer: accounts.user.key(),
        quote_in: plan.amount_in,
        stack_minted: plan.amount_out,
        protocol_fee: plan.protocol_fee_quote,
        creator_fee: plan.creator_fee_quote,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct MintStackViaPool<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [GLOBAL_SEED], bump = global.bump)]
    pub global: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stack_mint.as_ref(), pool.quote_mint.as_ref()],
        bump = pool.bump,
        has_one = stack_mint,
        has_one = quote_mint,
        has_one = lp_mint,
        has_one = vault_authority,
        has_one = stack_vault @ AmmError::InvalidVault,
        has_one = quote_vault @ AmmError::InvalidVault,
        has_one = protocol_fee_vault @ AmmError::InvalidVault,
        has_one = creator_fee_vault @ AmmError::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        seeds = [STACK_INFO_SEED, pool.stack_mint.as_ref()],
        bump = stack_info.bump,
        constraint = stack_info.mint_authority == stack_mint_auth.key() @ AmmError::InvalidMintAuthority
    )]
    pub stack_info: Box<Account<'info, StackInfo>>,

    #[account(mut)]
    pub stack_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,
    pub lp_mint: Box<Account<'info, Mint>>,

    /// CHECK: PDA holding the stack mint authority since registration
    #[account(seeds = [STACK_MINT_AUTH_SEED, stack_mint.key().as_ref()], bump)]
    pub stack_mint_auth: UncheckedAccount<'info>,

    /// CHECK: bound to the pool through has_one, signs vault debits
    pub vault_authority: UncheckedAccount<'info>,

    pub stack_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub quote_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub protocol_fee_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub creator_fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = quote_mint, token::authority = user)]
    pub user_quote: Box<Account<'info, TokenAccount>>,
    #[account(mut, token::mint = stack_mint)]
    pub user_stack: Box<Account<'info, TokenAccount>>,

    pub governance_approval: Option<Account<'info, GovernanceApproval>>,

    pub token_program: Program<'info, Token>,
}

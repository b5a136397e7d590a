use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{constants::*, contexts::*, errors::AmmError, events::PoolCreated};

pub fn create_pool(
    mut ctx: Context<CreatePool>,
    fee_bps: u16,
    k_value: u128,
    fee_on_transfer: bool,
    decimal_normalize_to: u8,
) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let config = PoolConfig {
        stack_mint: accounts.stack_mint.key(),
        quote_mint: accounts.quote_mint.key(),
        lp_mint: accounts.lp_mint.key(),
        fee_bps,
        k_value,
        fee_on_transfer,
        decimal_normalize_to,
        vaults: PoolVaults {
            stack: accounts.stack_vault.key(),
            quote: accounts.quote_vault.key(),
            protocol_fee: accounts.protocol_fee_vault.key(),
            creator_fee: accounts.creator_fee_vault.key(),
        },
        vault_authority: accounts.vault_authority.key(),
        oracle: accounts.oracle.key(),
    };

    accounts.pool.initialize(
        &accounts.global,
        &accounts.stack_info,
        config,
        ctx.bumps.pool,
        ctx.bumps.vault_authority,
    )?;

    msg!(
        "Pool {} created: fee {} bps, normalize to {} decimals",
        accounts.pool.key(),
        fee_bps,
        decimal_normalize_to
    );
    emit!(PoolCreated {
        pool: accounts.pool.key(),
        stack_mint: config.stack_mint,
        quote_mint: config.quote_mint,
        lp_mint: config.lp_mint,
        fee_bps,
        decimal_normalize_to,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    // Only the registered creator of the stack may list it
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(seeds = [GLOBAL_SEED], bump = global.bump)]
    pub global: Box<Account<'info, GlobalConfig>>,

    #[account(
        seeds = [STACK_INFO_SEED, stack_mint.key().as_ref()],
        bump = stack_info.bump,
        constraint = stack_info.creator == creator.key() @ AmmError::Unauthorized
    )]
    pub stack_info: Box<Account<'info, StackInfo>>,

    pub stack_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,

    // A second call for the same pair lands on the same record and is rejected in-program
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + Pool::INIT_SPACE,
        seeds = [POOL_SEED, stack_mint.key().as_ref(), quote_mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA that signs vault debits and LP mints, holds no data
    #[account(seeds = [VAULT_AUTHORITY_SEED, pool.key().as_ref()], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = creator,
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = LP_DECIMALS,
        mint::authority = vault_authority,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = creator,
        seeds = [STACK_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = stack_mint,
        token::authority = vault_authority,
    )]
    pub stack_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = creator,
        seeds = [QUOTE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = quote_mint,
        token::authority = vault_authority,
    )]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    // Fee vaults hold quote
    #[account(
        init_if_needed,
        payer = creator,
        seeds = [PROTOCOL_FEE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = quote_mint,
        token::authority = vault_authority,
    )]
    pub protocol_fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = creator,
        seeds = [CREATOR_FEE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = quote_mint,
        token::authority = vault_authority,
    )]
    pub creator_fee_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: opaque oracle reference, stored as-is for the governance gate
    pub oracle: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

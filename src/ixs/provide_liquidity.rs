use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    curve::{MintDecimals, Normalizer, Reserves},
    custody::{deposit_to_vault, mint_lp, VaultSigner},
    errors::AmmError,
    events::LiquidityProvided,
    liquidity::{plan_deposit, plan_taxed_deposit},
};

pub fn provide_liquidity(mut ctx: Context<ProvideLiquidity>, amount_stack: u64, amount_quote: u64) -> Result<()> {
    let accounts = &mut ctx.accounts;
    accounts.global.ensure_not_paused()?;
    accounts.sync_lp_supply();

    // 1. Price the deposit against live vault balances
    let normalizer = Normalizer::new(
        MintDecimals {
            stack: accounts.stack_mint.decimals,
            quote: accounts.quote_mint.decimals,
        },
        accounts.pool.decimal_normalize_to,
    )?;
    let reserves = Reserves {
        stack: accounts.stack_vault.amount,
        quote: accounts.quote_vault.amount,
    };
    let total_lp_supply = accounts.pool.total_lp_supply;
    let mut plan = plan_deposit(&normalizer, reserves, total_lp_supply, amount_stack, amount_quote)?;

    // 2. Stack leg first: a taxed transfer shrinks the quote leg before it is pulled
    deposit_to_vault(
        &accounts.token_program,
        &accounts.user_stack,
        &accounts.stack_vault,
        &accounts.user,
        plan.stack_in,
    )?;
    if accounts.pool.fee_on_transfer {
        accounts.stack_vault.reload()?;
        let received = accounts
            .stack_vault
            .amount
            .checked_sub(reserves.stack)
            .ok_or(AmmError::ArithmeticOverflow)?;
        if received < plan.stack_in {
            msg!("Stack transfer fee withheld {}", plan.stack_in - received);
        }
        plan = plan_taxed_deposit(&normalizer, reserves, total_lp_supply, plan, received)?;
    }
    deposit_to_vault(
        &accounts.token_program,
        &accounts.user_quote,
        &accounts.quote_vault,
        &accounts.user,
        plan.quote_in,
    )?;

    // 3. Mint shares and record supply
    let signer = VaultSigner::new(accounts.pool.key(), accounts.pool.vault_authority_bump);
    mint_lp(
        &accounts.token_program,
        &accounts.lp_mint,
        &accounts.user_lp,
        &accounts.vault_authority,
        &signer,
        plan.lp_minted,
    )?;
    accounts.pool.record_deposit(plan.lp_minted)?;

    msg!(
        "Provided {} stack + {} quote for {} LP",
        plan.stack_in,
        plan.quote_in,
        plan.lp_minted
    );
    emit!(LiquidityProvided {
        pool: accounts.pool.key(),
        provider: accounts.user.key(),
        stack_in: plan.stack_in,
        quote_in: plan.quote_in,
        lp_minted: plan.lp_minted,
    });
    Ok(())
}

impl<'info> ProvideLiquidity<'info> {
    fn sync_lp_supply(&mut self) {
        let burned = self.pool.sync_lp_supply(self.lp_mint.supply);
        if burned > 0 {
            msg!("{} LP burned outside the pool", burned);
        }
    }
}

#[derive(Accounts)]
pub struct ProvideLiquidity<'info> {
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
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub stack_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,

    #[account(mut)]
    pub lp_mint: Box<Account<'info, Mint>>,

    /// CHECK: bound to the pool through has_one, signs LP mints
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub stack_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub quote_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = stack_mint, token::authority = user)]
    pub user_stack: Box<Account<'info, TokenAccount>>,
    #[account(mut, token::mint = quote_mint, token::authority = user)]
    pub user_quote: Box<Account<'info, TokenAccount>>,
    #[account(mut, token::mint = lp_mint, token::authority = user)]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    curve::Reserves,
    custody::{burn_lp, release_from_vault, VaultSigner},
    errors::AmmError,
    events::LiquidityRemoved,
    liquidity::{plan_withdrawal, WithdrawPlan},
};

pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, lp_amount: u64) -> Result<()> {
    ctx.accounts.global.ensure_not_paused()?;
    let plan = ctx.accounts.withdraw(lp_amount)?;

    msg!(
        "Burned {} LP for {} stack + {} quote",
        plan.lp_burned,
        plan.stack_out,
        plan.quote_out
    );
    emit!(LiquidityRemoved {
        pool: ctx.accounts.pool.key(),
        provider: ctx.accounts.user.key(),
        lp_burned: plan.lp_burned,
        stack_out: plan.stack_out,
        quote_out: plan.quote_out,
    });
    Ok(())
}

impl<'info> RemoveLiquidity<'info> {
    /// Burns `lp_amount` shares and pays out their floor share of both vaults.
    pub fn withdraw(&mut self, lp_amount: u64) -> Result<WithdrawPlan> {
        // shares burned straight through the token program no longer count
        let burned = self.pool.sync_lp_supply(self.lp_mint.supply);
        if burned > 0 {
            msg!("{} LP burned outside the pool", burned);
        }

        let reserves = Reserves {
            stack: self.stack_vault.amount,
            quote: self.quote_vault.amount,
        };
        let plan = plan_withdrawal(reserves, self.pool.total_lp_supply, self.user_lp.amount, lp_amount)?;

        burn_lp(&self.token_program, &self.lp_mint, &self.user_lp, &self.user, plan.lp_burned)?;

        let signer = VaultSigner::new(self.pool.key(), self.pool.vault_authority_bump);
        release_from_vault(
            &self.token_program,
            &self.stack_vault,
            &self.user_stack,
            &self.vault_authority,
            &signer,
            plan.stack_out,
        )?;
        release_from_vault(
            &self.token_program,
            &self.quote_vault,
            &self.user_quote,
            &self.vault_authority,
            &signer,
            plan.quote_out,
        )?;

        self.pool.record_withdrawal(plan.lp_burned)?;
        Ok(plan)
    }
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
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

    /// CHECK: bound to the pool through has_one, signs vault debits
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

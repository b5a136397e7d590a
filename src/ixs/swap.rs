use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    curve::{MintDecimals, Reserves},
    custody::{deposit_to_vault, release_from_vault, VaultSigner},
    errors::AmmError,
    events::SwapExecuted,
    swap::{effective_input, execute_swap, SwapDirection, SwapEnv, SwapRequest},
};

pub fn swap_stack_to_quote(
    ctx: Context<Swap>,
    amount_in: u64,
    min_amount_out: u64,
    fee_on_transfer_override: Option<u16>,
) -> Result<()> {
    ctx.accounts.swap(
        SwapDirection::StackToQuote,
        amount_in,
        min_amount_out,
        fee_on_transfer_override,
    )
}

pub fn swap_quote_to_stack(
    ctx: Context<Swap>,
    amount_in: u64,
    min_amount_out: u64,
    fee_on_transfer_override: Option<u16>,
) -> Result<()> {
    ctx.accounts.swap(
        SwapDirection::QuoteToStack,
        amount_in,
        min_amount_out,
        fee_on_transfer_override,
    )
}

impl<'info> Swap<'info> {
    fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: u64,
        min_amount_out: u64,
        fee_on_transfer_override: Option<u16>,
    ) -> Result<()> {
        require!(amount_in > 0, AmmError::ZeroAmount);
        let now = Clock::get()?.unix_timestamp;
        self.pool.sync_lp_supply(self.lp_mint.supply);
        let reserves = Reserves {
            stack: self.stack_vault.amount,
            quote: self.quote_vault.amount,
        };

        // 1. Pull the input first so the vault delta shows any transfer fee.
        // A failure further down reverts this transfer with the rest.
        let received = match direction {
            SwapDirection::StackToQuote => {
                deposit_to_vault(&self.token_program, &self.user_stack, &self.stack_vault, &self.user, amount_in)?;
                self.stack_vault.reload()?;
                self.stack_vault.amount.checked_sub(reserves.stack)
            }
            SwapDirection::QuoteToStack => {
                deposit_to_vault(&self.token_program, &self.user_quote, &self.quote_vault, &self.user, amount_in)?;
                self.quote_vault.reload()?;
                self.quote_vault.amount.checked_sub(reserves.quote)
            }
        }
        .ok_or(AmmError::ArithmeticOverflow)?;

        // Only the stack mint is ever flagged as taxing transfers
        let charges_transfer_fee =
            self.pool.fee_on_transfer && direction == SwapDirection::StackToQuote;
        let effective = effective_input(amount_in, received, charges_transfer_fee, fee_on_transfer_override)?;

        // 2. Price, gate and accrue
        let pool_key = self.pool.key();
        let env = SwapEnv {
            global: &self.global,
            stack_info: &self.stack_info,
            pool_key,
            decimals: MintDecimals {
                stack: self.stack_mint.decimals,
                quote: self.quote_mint.decimals,
            },
            reserves,
            now,
        };
        let plan = execute_swap(
            &env,
            &mut self.pool,
            SwapRequest {
                direction,
                amount_in: effective,
                min_amount_out,
            },
            GovernanceGate::from(self.governance_approval.as_deref()),
        )?;

        // 3. Settle output and fees
        let signer = VaultSigner::new(pool_key, self.pool.vault_authority_bump);
        match direction {
            SwapDirection::StackToQuote => release_from_vault(
                &self.token_program,
                &self.quote_vault,
                &self.user_quote,
                &self.vault_authority,
                &signer,
                plan.amount_out,
            )?,
            SwapDirection::QuoteToStack => release_from_vault(
                &self.token_program,
                &self.stack_vault,
                &self.user_stack,
                &self.vault_authority,
                &signer,
                plan.amount_out,
            )?,
        }
        release_from_vault(
            &self.token_program,
            &self.quote_vault,
            &self.protocol_fee_vault,
            &self.vault_authority,
            &signer,
            plan.protocol_fee_quote,
        )?;
        release_from_vault(
            &self.token_program,
            &self.quote_vault,
            &self.creator_fee_vault,
            &self.vault_authority,
            &signer,
            plan.creator_fee_quote,
        )?;

        msg!(
            "Swap {:?}: {} in, {} out, protocol fee {}, creator fee {}",
            direction,
            plan.amount_in,
            plan.amount_out,
            plan.protocol_fee_quote,
            plan.creator_fee_quote
        );
        emit!(SwapExecuted {
            pool: pool_key,
            trader: self.user.key(),
            stack_to_quote: direction == SwapDirection::StackToQuote,
            amount_in: plan.amount_in,
            amount_out: plan.amount_out,
            protocol_fee: plan.protocol_fee_quote,
            creator_fee: plan.creator_fee_quote,
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Swap<'info> {
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

    // Supplies the creator fee rate
    #[account(seeds = [STACK_INFO_SEED, pool.stack_mint.as_ref()], bump = stack_info.bump)]
    pub stack_info: Box<Account<'info, StackInfo>>,

    pub stack_mint: Box<Account<'info, Mint>>,
    pub quote_mint: Box<Account<'info, Mint>>,
    // Live LP supply decides whether the pool is tradable
    pub lp_mint: Box<Account<'info, Mint>>,

    /// CHECK: bound to the pool through has_one, signs vault debits
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub stack_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub quote_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub protocol_fee_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut)]
    pub creator_fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = stack_mint, token::authority = user)]
    pub user_stack: Box<Account<'info, TokenAccount>>,
    #[account(mut, token::mint = quote_mint, token::authority = user)]
    pub user_quote: Box<Account<'info, TokenAccount>>,

    // Only consulted when the trade's quote notional is above the governance threshold
    pub governance_approval: Option<Account<'info, GovernanceApproval>>,

    pub token_program: Program<'info, Token>,
}

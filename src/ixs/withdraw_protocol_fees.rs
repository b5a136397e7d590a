use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    custody::{release_from_vault, VaultSigner},
    errors::AmmError,
    events::ProtocolFeesWithdrawn,
};

pub fn withdraw_protocol_fees(mut ctx: Context<WithdrawProtocolFees>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut ctx.accounts;
    require!(
        accounts.global.is_fee_authority(&accounts.authority.key()),
        AmmError::Unauthorized
    );

    let amount = accounts.protocol_fee_vault.amount;
    require!(amount > 0, AmmError::ZeroAmount);

    let pool_key = accounts.pool.key();
    GovernanceGate::from(accounts.governance_approval.as_deref()).enforce(
        accounts.global.governance_required(amount),
        &pool_key,
        &mut accounts.pool,
        now,
    )?;

    let signer = VaultSigner::new(pool_key, accounts.pool.vault_authority_bump);
    release_from_vault(
        &accounts.token_program,
        &accounts.protocol_fee_vault,
        &accounts.treasury_account,
        &accounts.vault_authority,
        &signer,
        amount,
    )?;

    msg!("Withdrew {} protocol fees to treasury", amount);
    emit!(ProtocolFeesWithdrawn {
        pool: pool_key,
        treasury: accounts.global.treasury,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawProtocolFees<'info> {
    // Admin or fee manager
    pub authority: Signer<'info>,

    #[account(seeds = [GLOBAL_SEED], bump = global.bump)]
    pub global: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stack_mint.as_ref(), pool.quote_mint.as_ref()],
        bump = pool.bump,
        has_one = vault_authority,
        has_one = protocol_fee_vault @ AmmError::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: bound to the pool through has_one, signs vault debits
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub protocol_fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = treasury_account.owner == global.treasury @ AmmError::Unauthorized,
        constraint = treasury_account.mint == pool.quote_mint @ AmmError::InvalidVault,
    )]
    pub treasury_account: Box<Account<'info, TokenAccount>>,

    pub governance_approval: Option<Account<'info, GovernanceApproval>>,

    pub token_program: Program<'info, Token>,
}

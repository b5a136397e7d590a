use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::{
    constants::*,
    contexts::*,
    custody::{release_from_vault, VaultSigner},
    errors::AmmError,
    events::CreatorClaimed,
    fees,
};

pub fn claim_creator_fees(mut ctx: Context<ClaimCreatorFees>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut ctx.accounts;

    // Permitted while paused: lock and dust checks still apply
    let amount = fees::claim_creator_fees(
        &mut accounts.pool,
        &accounts.stack_info,
        &accounts.global,
        &accounts.creator.key(),
        now,
    )?;

    let signer = VaultSigner::new(accounts.pool.key(), accounts.pool.vault_authority_bump);
    release_from_vault(
        &accounts.token_program,
        &accounts.creator_fee_vault,
        &accounts.creator_receiver,
        &accounts.vault_authority,
        &signer,
        amount,
    )?;

    msg!("Creator claimed {} quote", amount);
    emit!(CreatorClaimed {
        pool: accounts.pool.key(),
        creator: accounts.creator.key(),
        amount,
        timestamp: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimCreatorFees<'info> {
    pub creator: Signer<'info>,

    #[account(seeds = [GLOBAL_SEED], bump = global.bump)]
    pub global: Box<Account<'info, GlobalConfig>>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stack_mint.as_ref(), pool.quote_mint.as_ref()],
        bump = pool.bump,
        has_one = vault_authority,
        has_one = creator_fee_vault @ AmmError::InvalidVault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(seeds = [STACK_INFO_SEED, pool.stack_mint.as_ref()], bump = stack_info.bump)]
    pub stack_info: Box<Account<'info, StackInfo>>,

    /// CHECK: bound to the pool through has_one, signs vault debits
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub creator_fee_vault: Box<Account<'info, TokenAccount>>,

    #[account(mut, constraint = creator_receiver.mint == pool.quote_mint @ AmmError::InvalidVault)]
    pub creator_receiver: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

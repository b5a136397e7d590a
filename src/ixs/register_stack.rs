use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use crate::{constants::*, contexts::*, custody::hand_over_mint_authority, events::StackRegistered};

pub fn register_stack(ctx: Context<RegisterStack>, creator_fee_bps: u16) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let stack_mint = ctx.accounts.stack_mint.key();
    let mint_authority = ctx.accounts.stack_mint_auth.key();

    ctx.accounts.stack_info.register(
        &ctx.accounts.global,
        creator,
        stack_mint,
        mint_authority,
        creator_fee_bps,
        ctx.bumps.stack_info,
    )?;

    // Registering proves issuance: the signer must hold the minting right, which
    // then moves to the program's PDA for `mint_stack_via_pool`
    StackInfo::ensure_issuer(&ctx.accounts.stack_mint.mint_authority, &creator)?;
    hand_over_mint_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.stack_mint,
        &ctx.accounts.creator,
        mint_authority,
    )?;

    msg!("Stack {} registered by {}", stack_mint, creator);
    emit!(StackRegistered {
        creator,
        stack_mint,
        creator_fee_bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RegisterStack<'info> {
    // Must be the stack mint's current mint authority
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(seeds = [GLOBAL_SEED], bump = global.bump)]
    pub global: Account<'info, GlobalConfig>,

    #[account(mut)]
    pub stack_mint: Account<'info, Mint>,

    /// CHECK: PDA that receives the stack's mint authority, holds no data
    #[account(seeds = [STACK_MINT_AUTH_SEED, stack_mint.key().as_ref()], bump)]
    pub stack_mint_auth: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + StackInfo::INIT_SPACE,
        seeds = [STACK_INFO_SEED, stack_mint.key().as_ref()],
        bump
    )]
    pub stack_info: Account<'info, StackInfo>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

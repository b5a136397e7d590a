use anchor_lang::prelude::*;
use crate::{constants::GLOBAL_SEED, contexts::*, events::GlobalInitialized};

#[allow(clippy::too_many_arguments)]
pub fn init_global(
    ctx: Context<InitGlobal>,
    protocol_fee_bps: u16,
    pauser: Pubkey,
    fee_manager: Pubkey,
    governance: Pubkey,
    max_fee_bps: u16,
    dust_threshold: u64,
    creator_claim_lock_secs: i64,
) -> Result<()> {
    let global = &mut ctx.accounts.global;
    global.initialize(
        ctx.accounts.admin.key(),
        ctx.accounts.treasury.key(),
        GlobalParams {
            protocol_fee_bps,
            pauser,
            fee_manager,
            governance,
            max_fee_bps,
            dust_threshold,
            creator_claim_lock_secs,
        },
        ctx.bumps.global,
    )?;

    msg!(
        "Global initialized: protocol fee {} bps, cap {} bps",
        protocol_fee_bps,
        max_fee_bps
    );
    emit!(GlobalInitialized {
        admin: global.admin,
        protocol_fee_bps,
        max_fee_bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitGlobal<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GLOBAL_SEED],
        bump
    )]
    pub global: Account<'info, GlobalConfig>,

    // Caller becomes admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: wallet that owns treasury token accounts, only its key is stored
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

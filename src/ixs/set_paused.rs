use anchor_lang::prelude::*;
use crate::{constants::GLOBAL_SEED, contexts::*, events::PauseToggled};

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let changed = ctx
        .accounts
        .global
        .set_paused(&ctx.accounts.pauser.key(), paused)?;

    if changed {
        msg!("Protocol paused: {}", paused);
        emit!(PauseToggled { paused });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global.bump
    )]
    pub global: Account<'info, GlobalConfig>,

    pub pauser: Signer<'info>,
}

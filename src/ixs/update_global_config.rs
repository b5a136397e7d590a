use anchor_lang::prelude::*;
use crate::{constants::GLOBAL_SEED, contexts::*, events::GlobalConfigUpdated};

pub fn update_global_config(ctx: Context<UpdateGlobalConfig>, update: GlobalConfigUpdate) -> Result<()> {
    let global = &mut ctx.accounts.global;
    global.apply_update(&ctx.accounts.admin.key(), &update)?;

    msg!("Global config updated by {}", ctx.accounts.admin.key());
    emit!(GlobalConfigUpdated {
        admin: global.admin,
        protocol_fee_bps: global.protocol_fee_bps,
        max_fee_bps: global.max_fee_bps,
        dust_threshold: global.dust_threshold,
        creator_claim_lock_secs: global.creator_claim_lock_secs,
        governance_notional_threshold: global.governance_notional_threshold,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateGlobalConfig<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_SEED],
        bump = global.bump
    )]
    pub global: Account<'info, GlobalConfig>,

    pub admin: Signer<'info>,
}

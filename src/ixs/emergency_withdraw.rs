use anchor_lang::prelude::*;
use crate::{events::EmergencyWithdrawal, ixs::RemoveLiquidity};

/// Same burn-and-withdraw as `remove_liquidity`, but reachable while the protocol is paused.
pub fn emergency_withdraw(ctx: Context<RemoveLiquidity>, lp_amount: u64) -> Result<()> {
    if ctx.accounts.global.paused {
        msg!("Emergency withdrawal while paused");
    }
    let plan = ctx.accounts.withdraw(lp_amount)?;

    emit!(EmergencyWithdrawal {
        pool: ctx.accounts.pool.key(),
        provider: ctx.accounts.user.key(),
        lp_burned: plan.lp_burned,
        stack_out: plan.stack_out,
        quote_out: plan.quote_out,
    });
    Ok(())
}

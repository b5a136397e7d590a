use anchor_lang::prelude::*;
use crate::{constants::*, contexts::*, errors::AmmError, events::GovernanceApprovalSet};

pub fn set_governance_approval(
    ctx: Context<SetGovernanceApproval>,
    nonce: u64,
    expiry_ts: i64,
    approved: bool,
) -> Result<()> {
    let pool = &ctx.accounts.pool;
    // a nonce the pool already consumed could never pass the gate
    require!(nonce > pool.last_governance_nonce, AmmError::InvalidParameter);

    let approval = &mut ctx.accounts.approval;
    approval.target = pool.key();
    approval.oracle = pool.oracle;
    approval.approved = approved;
    approval.expiry_ts = expiry_ts;
    approval.nonce = nonce;
    approval.bump = ctx.bumps.approval;

    msg!(
        "Governance approval {} for {} (nonce {}, expires {})",
        approved,
        approval.target,
        nonce,
        expiry_ts
    );
    emit!(GovernanceApprovalSet {
        target: approval.target,
        nonce,
        approved,
        expiry_ts,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: u64)]
pub struct SetGovernanceApproval<'info> {
    #[account(mut)]
    pub governance: Signer<'info>,

    #[account(
        seeds = [GLOBAL_SEED],
        bump = global.bump,
        constraint = global.governance == governance.key() @ AmmError::Unauthorized
    )]
    pub global: Box<Account<'info, GlobalConfig>>,

    // The gated target
    #[account(
        seeds = [POOL_SEED, pool.stack_mint.as_ref(), pool.quote_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    // Re-sending the same nonce overwrites the record, which is how an approval is revoked
    #[account(
        init_if_needed,
        payer = governance,
        space = 8 + GovernanceApproval::INIT_SPACE,
        seeds = [GOVERNANCE_APPROVAL_SEED, pool.key().as_ref(), &nonce.to_le_bytes()],
        bump
    )]
    pub approval: Account<'info, GovernanceApproval>,

    pub system_program: Program<'info, System>,
}

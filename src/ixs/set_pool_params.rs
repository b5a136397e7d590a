use anchor_lang::prelude::*;
use crate::{constants::*, contexts::*, errors::AmmError, events::PoolParamsUpdated};

pub fn set_pool_params(mut ctx: Context<SetPoolParams>, fee_bps: Option<u16>, k_value: Option<u128>) -> Result<()> {
    let accounts = &mut ctx.accounts;
    require!(
        accounts.global.is_fee_authority(&accounts.authority.key()),
        AmmError::Unauthorized
    );

    accounts.pool.apply_params(&accounts.global, fee_bps, k_value)?;

    msg!(
        "Pool params: fee {} bps, k {}",
        accounts.pool.fee_bps,
        accounts.pool.k_value
    );
    emit!(PoolParamsUpdated {
        pool: accounts.pool.key(),
        fee_bps: accounts.pool.fee_bps,
        k_value: accounts.pool.k_value,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPoolParams<'info> {
    pub authority: Signer<'info>,

    #[account(seeds = [GLOBAL_SEED], bump = global.bump)]
    pub global: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.stack_mint.as_ref(), pool.quote_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

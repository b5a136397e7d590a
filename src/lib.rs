use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod curve;
pub mod custody;
pub mod errors;
pub mod events;
pub mod fees;
pub mod ixs;
pub mod liquidity;
pub mod pda;
pub mod swap;

pub use contexts::*;
pub use ixs::*;

declare_id!("3YPDuGbMmSmVYcXiGxELKLTootvD3YzQt74yaHPWqGaF");

#[program]
pub mod stackmint_amm {
    use super::*;

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
        ixs::init_global(
            ctx,
            protocol_fee_bps,
            pauser,
            fee_manager,
            governance,
            max_fee_bps,
            dust_threshold,
            creator_claim_lock_secs,
        )
    }

    pub fn update_global_config(ctx: Context<UpdateGlobalConfig>, update: GlobalConfigUpdate) -> Result<()> {
        ixs::update_global_config(ctx, update)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        ixs::set_paused(ctx, paused)
    }

    pub fn register_stack(ctx: Context<RegisterStack>, creator_fee_bps: u16) -> Result<()> {
        ixs::register_stack(ctx, creator_fee_bps)
    }

    pub fn create_pool(
        ctx: Context<CreatePool>,
        fee_bps: u16,
        k_value: u128,
        fee_on_transfer: bool,
        decimal_normalize_to: u8,
    ) -> Result<()> {
        ixs::create_pool(ctx, fee_bps, k_value, fee_on_transfer, decimal_normalize_to)
    }

    pub fn set_pool_params(ctx: Context<SetPoolParams>, fee_bps: Option<u16>, k_value: Option<u128>) -> Result<()> {
        ixs::set_pool_params(ctx, fee_bps, k_value)
    }

    pub fn provide_liquidity(ctx: Context<ProvideLiquidity>, amount_stack: u64, amount_quote: u64) -> Result<()> {
        ixs::provide_liquidity(ctx, amount_stack, amount_quote)
    }

    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, lp_amount: u64) -> Result<()> {
        ixs::remove_liquidity(ctx, lp_amount)
    }

    pub fn emergency_withdraw(ctx: Context<RemoveLiquidity>, lp_amount: u64) -> Result<()> {
        ixs::emergency_withdraw(ctx, lp_amount)
    }

    pub fn swap_stack_to_quote(
        ctx: Context<Swap>,
        amount_in: u64,
        min_amount_out: u64,
        fee_on_transfer_override: Option<u16>,
    ) -> Result<()> {
        ixs::swap_stack_to_quote(ctx, amount_in, min_amount_out, fee_on_transfer_override)
    }

    pub fn swap_quote_to_stack(
        ctx: Context<Swap>,
        amount_in: u64,
        min_amount_out: u64,
        fee_on_transfer_override: Option<u16>,
    ) -> Result<()> {
        ixs::swap_quote_to_stack(ctx, amount_in, min_amount_out, fee_on_transfer_override)
    }

    pub fn mint_stack_via_pool(ctx: Context<MintStackViaPool>, quote_in: u64, min_stack_out: u64) -> Result<()> {
        ixs::mint_stack_via_pool(ctx, quote_in, min_stack_out)
    }

    pub fn claim_creator_fees(ctx: Context<ClaimCreatorFees>) -> Result<()> {
        ixs::claim_creator_fees(ctx)
    }

    pub fn withdraw_protocol_fees(ctx: Context<WithdrawProtocolFees>) -> Result<()> {
        ixs::withdraw_protocol_fees(ctx)
    }

    pub fn set_governance_approval(
        ctx: Context<SetGovernanceApproval>,
        nonce: u64,
        expiry_ts: i64,
        approved: bool,
    ) -> Result<()> {
        ixs::set_governance_approval(ctx, nonce, expiry_ts, approved)
    }

    pub fn view_mid_price(ctx: Context<ViewMidPrice>) -> Result<u128> {
        ixs::view_mid_price(ctx)
    }
}

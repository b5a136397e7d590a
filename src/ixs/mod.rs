mod init_global;
mod update_global_config;
mod set_paused;
mod register_stack;
mod create_pool;
mod set_pool_params;
mod provide_liquidity;
mod remove_liquidity;
mod emergency_withdraw;
mod swap;
mod mint_stack_via_pool;
mod claim_creator_fees;
mod withdraw_protocol_fees;
mod set_governance_approval;
mod view_mid_price;

pub use init_global::*;
pub use update_global_config::*;
pub use set_paused::*;
pub use register_stack::*;
pub use create_pool::*;
pub use set_pool_params::*;
pub use provide_liquidity::*;
pub use remove_liquidity::*;
pub use emergency_withdraw::*;
pub use swap::*;
pub use mint_stack_via_pool::*;
pub use claim_creator_fees::*;
pub use withdraw_protocol_fees::*;
pub use set_governance_approval::*;
pub use view_mid_price::*;

mod global;
mod stack_info;
mod pool;
mod governance_approval;

pub use global::*;
pub use stack_info::*;
pub use pool::*;
pub use governance_approval::*;

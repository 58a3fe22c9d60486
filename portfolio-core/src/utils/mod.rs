//! 工具模块

pub mod rate_limit;
pub mod timer;

pub use rate_limit::{Debounce, Throttle};
pub use timer::TimerSlot;

//! 枚举

mod imbalance_state;

pub use imbalance_state::*;

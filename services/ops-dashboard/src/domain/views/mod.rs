//! 派生视图
//!
//! 每次筛选都从过滤后的表重新计算，不做持久化

mod aggregates;
mod kpis;

pub use aggregates::*;
pub use kpis::*;

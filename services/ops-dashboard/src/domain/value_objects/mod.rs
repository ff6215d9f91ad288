//! 值对象

mod date_range;

pub use date_range::*;

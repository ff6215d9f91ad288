//! CSV 表格读取
//!
//! 三张表各有一个日期列；任何一行解析失败，整张表加载失败

mod dates;
mod loader;
mod rows;

pub use dates::parse_date;
pub use loader::*;

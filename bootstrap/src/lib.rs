//! opsdash-bootstrap - 统一服务启动骨架
//!
//! 服务复用的启动逻辑：运行时初始化、健康检查、HTTP 服务器

mod health;
mod runtime;
mod starter;

pub use health::*;
pub use runtime::*;
pub use starter::*;

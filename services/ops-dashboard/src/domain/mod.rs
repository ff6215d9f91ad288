//! 领域层
//!
//! 包含输入记录、数据集、仓储接口、日期区间、失衡状态、库存流向图和派生视图

pub mod datasets;
pub mod enums;
pub mod flow_graph;
pub mod records;
pub mod repositories;
pub mod value_objects;
pub mod views;

pub use datasets::*;
pub use enums::*;
pub use flow_graph::*;
pub use records::*;
pub use repositories::*;
pub use value_objects::*;
pub use views::*;

//! 分类与趋势聚合结果

use chrono::NaiveDate;
use serde::Serialize;

/// 按类别（SKU、线路）汇总的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub key: String,
    pub total: i64,
}

/// 按日期汇总的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total: i64,
}

//! 一次渲染所用的三张表

use serde::Serialize;

use super::records::{InventoryRecord, LogisticsRecord, ProductionRecord};

/// 数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// 用户上传的三份文件
    Uploaded,
    /// 内置样例数据
    Sample,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Uploaded => "uploaded",
            DataSource::Sample => "sample",
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生产、物流、库存三张表
#[derive(Debug, Clone)]
pub struct Datasets {
    pub source: DataSource,
    pub production: Vec<ProductionRecord>,
    pub logistics: Vec<LogisticsRecord>,
    pub inventory: Vec<InventoryRecord>,
}

impl Datasets {
    pub fn new(
        source: DataSource,
        production: Vec<ProductionRecord>,
        logistics: Vec<LogisticsRecord>,
        inventory: Vec<InventoryRecord>,
    ) -> Self {
        Self {
            source,
            production,
            logistics,
            inventory,
        }
    }
}

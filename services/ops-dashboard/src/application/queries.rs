//! 查询参数

use chrono::NaiveDate;
use serde::Deserialize;

/// 看板筛选条件，缺省端取可选区间端点
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DashboardFilter {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

/// 上传的三份 CSV 原始内容
#[derive(Debug, Clone, Default)]
pub struct UploadedTables {
    pub production: Option<Vec<u8>>,
    pub logistics: Option<Vec<u8>>,
    pub inventory: Option<Vec<u8>>,
}

/// 三份文件齐全时的内容
pub struct CompleteUpload {
    pub production: Vec<u8>,
    pub logistics: Vec<u8>,
    pub inventory: Vec<u8>,
}

impl UploadedTables {
    /// 已上传的文件数
    pub fn count(&self) -> usize {
        [&self.production, &self.logistics, &self.inventory]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    /// 三份都在时返回内容，否则返回 None（整体回退到样例数据）
    pub fn into_complete(self) -> Option<CompleteUpload> {
        match (self.production, self.logistics, self.inventory) {
            (Some(production), Some(logistics), Some(inventory)) => Some(CompleteUpload {
                production,
                logistics,
                inventory,
            }),
            _ => None,
        }
    }
}

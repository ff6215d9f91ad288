//! 数据集仓储接口

use std::sync::Arc;

use opsdash_errors::AppResult;

use super::datasets::Datasets;

/// 数据集来源
///
/// 样例数据在进程生命周期内只读取一次；上传数据每次请求单独解析，不共享
pub trait DatasetRepository: Send + Sync {
    /// 内置样例数据
    fn sample(&self) -> AppResult<Arc<Datasets>>;

    /// 解析上传的三份 CSV
    fn parse_upload(
        &self,
        production: &[u8],
        logistics: &[u8],
        inventory: &[u8],
    ) -> AppResult<Datasets>;
}

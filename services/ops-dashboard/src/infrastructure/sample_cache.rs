//! 样例数据缓存
//!
//! 样例文件是静态资源：进程内成功读取一次后永不失效，读取失败不缓存

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use opsdash_telemetry::record_dataset_load;
use tracing::{error, info};

use crate::domain::Datasets;

use super::tables::{LoadError, load_from_dir};

pub struct SampleDatasets {
    dir: PathBuf,
    cell: OnceCell<Arc<Datasets>>,
}

impl SampleDatasets {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            cell: OnceCell::new(),
        }
    }

    /// 是否已加载
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 获取样例数据，首次调用时从磁盘读取
    pub fn get(&self) -> Result<Arc<Datasets>, LoadError> {
        self.cell
            .get_or_try_init(|| match load_from_dir(&self.dir) {
                Ok(datasets) => {
                    info!(
                        dir = %self.dir.display(),
                        production_rows = datasets.production.len(),
                        logistics_rows = datasets.logistics.len(),
                        inventory_rows = datasets.inventory.len(),
                        "Sample datasets loaded"
                    );
                    record_dataset_load("sample", true);
                    Ok(Arc::new(datasets))
                }
                Err(e) => {
                    error!(
                        dir = %self.dir.display(),
                        error = %e,
                        "Failed to load sample datasets"
                    );
                    record_dataset_load("sample", false);
                    Err(e)
                }
            })
            .cloned()
    }
}

//! 基于 CSV 的数据集仓储

use std::sync::Arc;

use opsdash_bootstrap::ReadinessCheck;
use opsdash_errors::AppResult;
use opsdash_telemetry::record_dataset_load;

use crate::domain::{DatasetRepository, Datasets};

use super::sample_cache::SampleDatasets;
use super::tables::load_from_bytes;

pub struct CsvDatasetRepository {
    samples: SampleDatasets,
}

impl CsvDatasetRepository {
    pub fn new(samples: SampleDatasets) -> Self {
        Self { samples }
    }
}

impl DatasetRepository for CsvDatasetRepository {
    fn sample(&self) -> AppResult<Arc<Datasets>> {
        Ok(self.samples.get()?)
    }

    fn parse_upload(
        &self,
        production: &[u8],
        logistics: &[u8],
        inventory: &[u8],
    ) -> AppResult<Datasets> {
        let result = load_from_bytes(production, logistics, inventory);
        record_dataset_load("uploaded", result.is_ok());
        Ok(result?)
    }
}

impl ReadinessCheck for CsvDatasetRepository {
    fn name(&self) -> &'static str {
        "sample_datasets"
    }

    fn check(&self) -> Result<(), String> {
        self.samples.get().map(|_| ()).map_err(|e| e.to_string())
    }
}

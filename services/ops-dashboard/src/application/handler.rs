//! Business logic handler

use std::sync::Arc;
use std::time::Instant;

use opsdash_errors::{AppError, AppResult};
use opsdash_telemetry::record_render;
use tracing::{debug, info, warn};

use crate::domain::{DataSource, DateRange, DatasetRepository, Datasets};

use super::filter::available_range;
use super::queries::{DashboardFilter, UploadedTables};
use super::render::{ViewModel, render};

pub struct DashboardHandler {
    repo: Arc<dyn DatasetRepository>,
}

impl DashboardHandler {
    pub fn new(repo: Arc<dyn DatasetRepository>) -> Self {
        Self { repo }
    }

    /// 样例数据的可选日期区间
    pub fn sample_date_range(&self) -> AppResult<DateRange> {
        let datasets = self.repo.sample()?;
        Ok(available_range(&datasets.production, &datasets.logistics)?)
    }

    /// 使用样例数据渲染看板
    pub fn dashboard(&self, filter: &DashboardFilter) -> AppResult<ViewModel> {
        let datasets = self.repo.sample()?;
        self.render_timed(filter, &datasets)
    }

    /// 使用上传数据渲染看板
    ///
    /// 三份文件缺任意一份时整体回退到样例数据
    pub fn dashboard_with_upload(
        &self,
        upload: UploadedTables,
        filter: &DashboardFilter,
    ) -> AppResult<ViewModel> {
        let uploaded = upload.count();
        match upload.into_complete() {
            Some(files) => {
                info!("Rendering dashboard from uploaded files");
                let datasets = self.repo.parse_upload(
                    &files.production,
                    &files.logistics,
                    &files.inventory,
                )?;
                self.render_timed(filter, &datasets)
            }
            None => {
                if uploaded > 0 {
                    warn!(
                        uploaded,
                        "Partial upload ignored, all three tables fall back to sample data"
                    );
                }
                self.dashboard(filter)
            }
        }
    }

    fn render_timed(&self, filter: &DashboardFilter, datasets: &Datasets) -> AppResult<ViewModel> {
        let started = Instant::now();
        let result = render(filter, datasets).map_err(AppError::from);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        let source = datasets.source.as_str();
        match &result {
            Ok(view) => {
                debug!(
                    source,
                    production_rows = datasets.production.len(),
                    logistics_rows = datasets.logistics.len(),
                    inventory_rows = datasets.inventory.len(),
                    selected = %view.selected_range,
                    elapsed_ms,
                    "Dashboard rendered"
                );
                record_render(source, "ok", elapsed_ms);
            }
            Err(e) => {
                warn!(source, error = %e, "Dashboard render failed");
                record_render(source, e.kind(), elapsed_ms);
            }
        }

        result
    }
}

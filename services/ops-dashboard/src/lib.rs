//! ops-dashboard - 生产 vs 物流对比看板
//!
//! 读取生产、物流、库存三张表，按日期区间计算 KPI、产销失衡、分类/趋势聚合和库存流向图

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

use std::sync::Arc;

use opsdash_bootstrap::HttpService;
use opsdash_config::AppConfig;

use application::DashboardHandler;
use infrastructure::{CsvDatasetRepository, SampleDatasets};

/// 按配置组装看板服务
pub fn build_service(config: &AppConfig) -> HttpService {
    let repo = Arc::new(CsvDatasetRepository::new(SampleDatasets::new(
        &config.data.sample_dir,
    )));
    let handler = Arc::new(DashboardHandler::new(repo.clone()));

    HttpService::new(api::dashboard_routes(handler, config.data.max_upload_bytes))
        .with_readiness(repo)
}

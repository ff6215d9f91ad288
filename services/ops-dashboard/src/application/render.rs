//! 看板渲染
//!
//! `render` 是纯函数：每次交互都从原始表重新计算全部视图

use serde::Serialize;

use crate::domain::{
    CategoryTotal, DataSource, DateRange, Datasets, Imbalance, Kpis, SankeyData, TrendPoint,
};

use super::aggregates::{delivery_trend, deliveries_by_route, production_by_sku, production_trend};
use super::filter::{FilterError, available_range, filter_by_date, resolve_window};
use super::flow_builder::build_flow_graph;
use super::format::{format_decimal2, format_percent, format_thousands};
use super::kpi::{classify_imbalance, compute_kpis};
use super::queries::DashboardFilter;

pub const SAMPLE_NOTICE: &str = "Using sample datasets (sample_data/*)";

/// 带展示格式的 KPI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiDisplay {
    pub produced: String,
    pub delivered: String,
    pub demand: String,
    pub on_time: String,
    pub cost_per_unit: String,
}

impl From<&Kpis> for KpiDisplay {
    fn from(kpis: &Kpis) -> Self {
        Self {
            produced: format_thousands(kpis.total_produced),
            delivered: format_thousands(kpis.total_delivered),
            demand: format_thousands(kpis.demand),
            on_time: format_percent(kpis.on_time),
            cost_per_unit: format_decimal2(kpis.cost_per_unit),
        }
    }
}

/// 一次渲染的完整结果
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub data_source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub available_range: DateRange,
    pub selected_range: DateRange,
    pub kpis: Kpis,
    pub kpi_display: KpiDisplay,
    pub imbalance: Imbalance,
    pub production_by_sku: Vec<CategoryTotal>,
    pub deliveries_by_route: Vec<CategoryTotal>,
    pub production_trend: Vec<TrendPoint>,
    pub delivery_trend: Vec<TrendPoint>,
    pub flow: SankeyData,
}

/// 渲染看板
pub fn render(filter: &DashboardFilter, datasets: &Datasets) -> Result<ViewModel, FilterError> {
    let available = available_range(&datasets.production, &datasets.logistics)?;
    let selected = resolve_window(available, filter.start, filter.end)?;

    let production = filter_by_date(&datasets.production, &selected);
    let logistics = filter_by_date(&datasets.logistics, &selected);

    let kpis = compute_kpis(&production, &logistics);
    let imbalance = classify_imbalance(kpis.total_produced, kpis.total_delivered);
    let flow = build_flow_graph(&datasets.inventory, &production);

    let notice = match datasets.source {
        DataSource::Sample => Some(SAMPLE_NOTICE.to_string()),
        DataSource::Uploaded => None,
    };

    Ok(ViewModel {
        data_source: datasets.source,
        notice,
        available_range: available,
        selected_range: selected,
        kpi_display: KpiDisplay::from(&kpis),
        kpis,
        imbalance,
        production_by_sku: production_by_sku(&production),
        deliveries_by_route: deliveries_by_route(&logistics),
        production_trend: production_trend(&production),
        delivery_trend: delivery_trend(&logistics),
        flow: flow.to_sankey(),
    })
}

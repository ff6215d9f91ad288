//! 日期区间过滤
//!
//! 可选区间为生产表与物流表日期跨度的交集

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DateRange, Dated, LogisticsRecord, ProductionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{table} table has no rows, so it has no date range")]
    EmptyTable { table: &'static str },

    #[error("production dates {production} and logistics dates {logistics} do not overlap")]
    NoOverlap {
        production: DateRange,
        logistics: DateRange,
    },

    #[error(
        "requested window {start:?}..={end:?} does not fall inside the available range {available}"
    )]
    InvalidWindow {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        available: DateRange,
    },
}

/// 两张表都覆盖的日期区间
pub fn available_range(
    production: &[ProductionRecord],
    logistics: &[LogisticsRecord],
) -> Result<DateRange, FilterError> {
    let production_span = DateRange::spanning(production.iter().map(Dated::date))
        .ok_or(FilterError::EmptyTable { table: "production" })?;
    let logistics_span = DateRange::spanning(logistics.iter().map(Dated::date))
        .ok_or(FilterError::EmptyTable { table: "logistics" })?;

    production_span
        .intersect(&logistics_span)
        .ok_or(FilterError::NoOverlap {
            production: production_span,
            logistics: logistics_span,
        })
}

/// 把请求的窗口夹到可选区间内，缺省端取可选区间的端点
pub fn resolve_window(
    available: DateRange,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<DateRange, FilterError> {
    let clamped_start = start.map_or(available.start(), |s| s.max(available.start()));
    let clamped_end = end.map_or(available.end(), |e| e.min(available.end()));

    DateRange::new(clamped_start, clamped_end).map_err(|_| FilterError::InvalidWindow {
        start,
        end,
        available,
    })
}

/// 保留日期落在窗口内（两端包含）的行，保持原顺序
pub fn filter_by_date<T>(rows: &[T], window: &DateRange) -> Vec<T>
where
    T: Dated + Clone,
{
    rows.iter()
        .filter(|row| window.contains(row.date()))
        .cloned()
        .collect()
}

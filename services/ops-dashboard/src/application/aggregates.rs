//! 分类与趋势聚合
//!
//! 所有出现过的键都会输出，包括合计为 0 的组；结果按键升序

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{CategoryTotal, LogisticsRecord, ProductionRecord, TrendPoint};

fn group_sum<T, K, FK, FV>(rows: &[T], key: FK, value: FV) -> BTreeMap<K, i64>
where
    K: Ord,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> i64,
{
    let mut groups = BTreeMap::new();
    for row in rows {
        let total = groups.entry(key(row)).or_insert(0i64);
        *total = total.saturating_add(value(row));
    }
    groups
}

fn to_categories(groups: BTreeMap<String, i64>) -> Vec<CategoryTotal> {
    groups
        .into_iter()
        .map(|(key, total)| CategoryTotal { key, total })
        .collect()
}

fn to_trend(groups: BTreeMap<NaiveDate, i64>) -> Vec<TrendPoint> {
    groups
        .into_iter()
        .map(|(date, total)| TrendPoint { date, total })
        .collect()
}

/// 各 SKU 产量
pub fn production_by_sku(production: &[ProductionRecord]) -> Vec<CategoryTotal> {
    to_categories(group_sum(production, |r| r.sku.clone(), |r| r.produced_qty))
}

/// 各线路交付量
pub fn deliveries_by_route(logistics: &[LogisticsRecord]) -> Vec<CategoryTotal> {
    to_categories(group_sum(logistics, |r| r.route.clone(), |r| r.delivered_qty))
}

/// 每日产量
pub fn production_trend(production: &[ProductionRecord]) -> Vec<TrendPoint> {
    to_trend(group_sum(production, |r| r.date, |r| r.produced_qty))
}

/// 每日交付量
pub fn delivery_trend(logistics: &[LogisticsRecord]) -> Vec<TrendPoint> {
    to_trend(group_sum(logistics, |r| r.date, |r| r.delivered_qty))
}

//! KPI 汇总与产销失衡分类

use crate::domain::{Imbalance, Kpis, LogisticsRecord, ProductionRecord};

/// 计算五项 KPI
///
/// - 物流表为空时准时率为 0.0
/// - 单位成本的分母至少为 1
/// - 合计在 i64 边界处饱和
pub fn compute_kpis(production: &[ProductionRecord], logistics: &[LogisticsRecord]) -> Kpis {
    let total_produced = saturating_total(production.iter().map(|r| r.produced_qty));
    let total_delivered = saturating_total(logistics.iter().map(|r| r.delivered_qty));
    let demand = saturating_total(production.iter().map(|r| r.orders));

    let on_time = if logistics.is_empty() {
        0.0
    } else {
        let mean = logistics.iter().map(|r| r.on_time_rate).sum::<f64>() / logistics.len() as f64;
        round_to(mean * 100.0, 1)
    };

    let transport_cost: f64 = logistics.iter().map(|r| r.transport_cost).sum();
    let cost_per_unit = round_to(transport_cost / total_delivered.max(1) as f64, 2);

    Kpis {
        total_produced,
        total_delivered,
        demand,
        on_time,
        cost_per_unit,
    }
}

/// `(produced - delivered) / max(produced, 1)` 并分类
pub fn classify_imbalance(total_produced: i64, total_delivered: i64) -> Imbalance {
    let gap = total_produced.saturating_sub(total_delivered);
    let ratio = gap as f64 / total_produced.max(1) as f64;
    Imbalance::new(ratio)
}

/// 饱和求和，上传数据中的超大计数不会溢出
fn saturating_total<I>(values: I) -> i64
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().fold(0i64, i64::saturating_add)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

//! KPI 与失衡视图

use serde::Serialize;

use crate::domain::enums::{ImbalanceState, Severity};

/// 五项汇总指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    /// 产量合计
    pub total_produced: i64,
    /// 交付量合计
    pub total_delivered: i64,
    /// 订单合计
    pub demand: i64,
    /// 平均准时率（百分比，1 位小数）
    pub on_time: f64,
    /// 单位交付运输成本（2 位小数）
    pub cost_per_unit: f64,
}

/// 产销失衡
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Imbalance {
    pub ratio: f64,
    pub state: ImbalanceState,
    pub severity: Severity,
    pub message: String,
}

impl Imbalance {
    pub fn new(ratio: f64) -> Self {
        let state = ImbalanceState::from_ratio(ratio);
        Self {
            ratio,
            state,
            severity: state.severity(),
            message: state.message().to_string(),
        }
    }
}

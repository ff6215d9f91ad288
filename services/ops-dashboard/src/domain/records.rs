//! 输入表格的行记录

use chrono::NaiveDate;
use serde::Serialize;

/// 带业务日期的记录，可按日期区间过滤
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// 生产记录：某日某 SKU 的产量与订单数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionRecord {
    pub date: NaiveDate,
    pub sku: String,
    pub produced_qty: i64,
    /// 需求（订单数）
    pub orders: i64,
}

/// 物流记录：某日某线路的交付情况
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsRecord {
    pub date: NaiveDate,
    pub route: String,
    pub delivered_qty: i64,
    /// 准时率，取值 [0, 1]
    pub on_time_rate: f64,
    pub transport_cost: f64,
}

/// 库存快照：某周末时点工厂与仓库的在库量
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    pub week_ending: NaiveDate,
    pub sku: String,
    pub plant_inventory: i64,
    pub warehouse_inventory: i64,
}

impl Dated for ProductionRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for LogisticsRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

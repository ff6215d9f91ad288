//! CSV 行结构与到领域记录的转换

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::domain::{InventoryRecord, LogisticsRecord, ProductionRecord};

use super::dates::parse_date;
use super::loader::{LoadError, TableKind};

#[derive(Debug, Deserialize)]
pub(crate) struct ProductionRow {
    date: String,
    sku: String,
    #[serde(deserialize_with = "deserialize_count")]
    produced_qty: i64,
    #[serde(deserialize_with = "deserialize_count")]
    orders: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogisticsRow {
    date: String,
    route: String,
    #[serde(deserialize_with = "deserialize_count")]
    delivered_qty: i64,
    on_time_rate: f64,
    transport_cost: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InventoryRow {
    week_ending: String,
    sku: String,
    #[serde(deserialize_with = "deserialize_count")]
    plant_inventory: i64,
    #[serde(deserialize_with = "deserialize_count")]
    warehouse_inventory: i64,
}

fn date_field(table: TableKind, line: u64, value: &str) -> Result<NaiveDate, LoadError> {
    parse_date(value).ok_or_else(|| LoadError::InvalidDate {
        table,
        line,
        column: table.date_column(),
        value: value.to_string(),
    })
}

impl ProductionRow {
    pub(crate) fn into_record(self, line: u64) -> Result<ProductionRecord, LoadError> {
        Ok(ProductionRecord {
            date: date_field(TableKind::Production, line, &self.date)?,
            sku: self.sku,
            produced_qty: self.produced_qty,
            orders: self.orders,
        })
    }
}

impl LogisticsRow {
    pub(crate) fn into_record(self, line: u64) -> Result<LogisticsRecord, LoadError> {
        Ok(LogisticsRecord {
            date: date_field(TableKind::Logistics, line, &self.date)?,
            route: self.route,
            delivered_qty: self.delivered_qty,
            on_time_rate: self.on_time_rate,
            transport_cost: self.transport_cost,
        })
    }
}

impl InventoryRow {
    pub(crate) fn into_record(self, line: u64) -> Result<InventoryRecord, LoadError> {
        Ok(InventoryRecord {
            week_ending: date_field(TableKind::Inventory, line, &self.week_ending)?,
            sku: self.sku,
            plant_inventory: self.plant_inventory,
            warehouse_inventory: self.warehouse_inventory,
        })
    }
}

/// 计数列：接受整数，以及小数部分为 0 的浮点写法（"120.0"）
fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let s = s.trim();
    if let Ok(value) = s.parse::<i64>() {
        return Ok(value);
    }
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(serde::de::Error::custom(format!(
            "expected integer value, got '{}'",
            s
        ))),
    }
}

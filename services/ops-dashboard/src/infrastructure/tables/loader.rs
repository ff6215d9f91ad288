//! CSV 表格加载

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{DataSource, Datasets, InventoryRecord, LogisticsRecord, ProductionRecord};

use super::rows::{InventoryRow, LogisticsRow, ProductionRow};

/// 三张输入表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Production,
    Logistics,
    Inventory,
}

impl TableKind {
    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Production => "production",
            TableKind::Logistics => "logistics",
            TableKind::Inventory => "inventory",
        }
    }

    /// 样例目录中的文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            TableKind::Production => "production.csv",
            TableKind::Logistics => "logistics.csv",
            TableKind::Inventory => "inventory.csv",
        }
    }

    pub fn date_column(&self) -> &'static str {
        match self {
            TableKind::Production | TableKind::Logistics => "date",
            TableKind::Inventory => "week_ending",
        }
    }

    /// 列名是对外兼容契约
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Production => &["date", "sku", "produced_qty", "orders"],
            TableKind::Logistics => &[
                "date",
                "route",
                "delivered_qty",
                "on_time_rate",
                "transport_cost",
            ],
            TableKind::Inventory => &[
                "week_ending",
                "sku",
                "plant_inventory",
                "warehouse_inventory",
            ],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 表格加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} table is missing required column `{column}`")]
    MissingColumn {
        table: TableKind,
        column: &'static str,
    },

    #[error("{table} table, line {line}: {message}")]
    Parse {
        table: TableKind,
        line: u64,
        message: String,
    },

    #[error("{table} table, line {line}: cannot parse `{value}` in column `{column}` as a date")]
    InvalidDate {
        table: TableKind,
        line: u64,
        column: &'static str,
        value: String,
    },
}

fn read_table<R, Row, T, F>(table: TableKind, reader: R, convert: F) -> Result<Vec<T>, LoadError>
where
    R: Read,
    Row: DeserializeOwned,
    F: Fn(Row, u64) -> Result<T, LoadError>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LoadError::Parse {
            table,
            line: 1,
            message: e.to_string(),
        })?
        .clone();

    for &column in table.required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { table, column });
        }
    }

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| LoadError::Parse {
            table,
            line: e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, |p| p.line());
        let row: Row = record
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::Parse {
                table,
                line,
                message: e.to_string(),
            })?;
        records.push(convert(row, line)?);
    }

    Ok(records)
}

/// 读取生产表
pub fn read_production<R: Read>(reader: R) -> Result<Vec<ProductionRecord>, LoadError> {
    read_table(TableKind::Production, reader, |row: ProductionRow, line| {
        row.into_record(line)
    })
}

/// 读取物流表
pub fn read_logistics<R: Read>(reader: R) -> Result<Vec<LogisticsRecord>, LoadError> {
    read_table(TableKind::Logistics, reader, |row: LogisticsRow, line| {
        row.into_record(line)
    })
}

/// 读取库存表
pub fn read_inventory<R: Read>(reader: R) -> Result<Vec<InventoryRecord>, LoadError> {
    read_table(TableKind::Inventory, reader, |row: InventoryRow, line| {
        row.into_record(line)
    })
}

fn open(dir: &Path, table: TableKind) -> Result<File, LoadError> {
    let path = dir.join(table.file_name());
    File::open(&path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// 从目录加载三张样例表
pub fn load_from_dir(dir: &Path) -> Result<Datasets, LoadError> {
    Ok(Datasets::new(
        DataSource::Sample,
        read_production(open(dir, TableKind::Production)?)?,
        read_logistics(open(dir, TableKind::Logistics)?)?,
        read_inventory(open(dir, TableKind::Inventory)?)?,
    ))
}

/// 从上传内容解析三张表
pub fn load_from_bytes(
    production: &[u8],
    logistics: &[u8],
    inventory: &[u8],
) -> Result<Datasets, LoadError> {
    Ok(Datasets::new(
        DataSource::Uploaded,
        read_production(production)?,
        read_logistics(logistics)?,
        read_inventory(inventory)?,
    ))
}

//! 库存流向构建：工厂 → 仓库 → 客户
//!
//! 每个 SKU 取最新库存快照；工厂→仓库边先全部加入，再加入仓库→客户边

use std::collections::HashMap;

use crate::domain::{FlowGraph, InventoryRecord, ProductionRecord};

pub const PLANT_PREFIX: &str = "Plant:";
pub const WAREHOUSE_PREFIX: &str = "Warehouse:";
pub const CUSTOMERS_LABEL: &str = "Customers";

/// 无订单时按仓库库存估算需求的系数
pub const DEMAND_FALLBACK_FACTOR: f64 = 0.8;

pub fn plant_label(sku: &str) -> String {
    format!("{PLANT_PREFIX}{sku}")
}

pub fn warehouse_label(sku: &str) -> String {
    format!("{WAREHOUSE_PREFIX}{sku}")
}

/// 每个 SKU 的最新快照
///
/// 按 `week_ending` 稳定升序排序后取每个 SKU 的最后一行，同一日期的多行中
/// 输入里靠后的行胜出。结果保持该排序中的相对顺序。
pub fn latest_snapshots(inventory: &[InventoryRecord]) -> Vec<InventoryRecord> {
    let mut ordered: Vec<&InventoryRecord> = inventory.iter().collect();
    ordered.sort_by_key(|r| r.week_ending);

    let mut last_position: HashMap<&str, usize> = HashMap::new();
    for (pos, row) in ordered.iter().enumerate() {
        last_position.insert(row.sku.as_str(), pos);
    }

    ordered
        .iter()
        .enumerate()
        .filter(|(pos, row)| last_position.get(row.sku.as_str()) == Some(pos))
        .map(|(_, row)| (*row).clone())
        .collect()
}

/// 估算某 SKU 的客户需求
///
/// 过滤后订单合计为 0 时退回到仓库库存的 80%（向零截断）
fn estimated_demand(snapshot: &InventoryRecord, orders_by_sku: &HashMap<&str, i64>) -> i64 {
    let orders = orders_by_sku.get(snapshot.sku.as_str()).copied().unwrap_or(0);
    if orders == 0 {
        (snapshot.warehouse_inventory as f64 * DEMAND_FALLBACK_FACTOR).trunc() as i64
    } else {
        orders
    }
}

/// 构建库存流向图
///
/// `inventory` 为完整库存表（不按日期过滤），`production` 为日期过滤后的生产表
pub fn build_flow_graph(
    inventory: &[InventoryRecord],
    production: &[ProductionRecord],
) -> FlowGraph {
    let snapshots = latest_snapshots(inventory);
    let mut graph = FlowGraph::new();

    for snapshot in &snapshots {
        let plant = graph.node(&plant_label(&snapshot.sku));
        let warehouse = graph.node(&warehouse_label(&snapshot.sku));
        graph.add_edge(plant, warehouse, snapshot.plant_inventory);
    }

    if snapshots.is_empty() {
        return graph;
    }

    let customers = graph.node(CUSTOMERS_LABEL);

    let mut orders_by_sku: HashMap<&str, i64> = HashMap::new();
    for row in production {
        let total = orders_by_sku.entry(row.sku.as_str()).or_insert(0);
        *total = total.saturating_add(row.orders);
    }

    for snapshot in &snapshots {
        let warehouse = graph.node(&warehouse_label(&snapshot.sku));
        graph.add_edge(warehouse, customers, estimated_demand(snapshot, &orders_by_sku));
    }

    graph
}

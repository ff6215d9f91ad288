//! 库存流向图（Sankey）

use std::collections::HashMap;

use serde::Serialize;

/// 边权下限，零流量在 Sankey 中不可见
pub const MIN_FLOW_VALUE: i64 = 1;

/// 有向边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub value: i64,
}

/// 带权有向多重图
///
/// 不变式:
/// - 节点标签不重复，按首次出现顺序编号
/// - 每条边的权重至少为 [`MIN_FLOW_VALUE`]
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取节点编号，不存在时创建
    pub fn node(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// 查找节点编号
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// 添加一条边，权重向上截断到 [`MIN_FLOW_VALUE`]
    pub fn add_edge(&mut self, source: usize, target: usize, value: i64) {
        self.edges.push(FlowEdge {
            source,
            target,
            value: value.max(MIN_FLOW_VALUE),
        });
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 导出为 Sankey 渲染所需的平行数组
    pub fn to_sankey(&self) -> SankeyData {
        SankeyData {
            labels: self.labels.clone(),
            sources: self.edges.iter().map(|e| e.source).collect(),
            targets: self.edges.iter().map(|e| e.target).collect(),
            values: self.edges.iter().map(|e| e.value).collect(),
        }
    }
}

/// Sankey 图数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SankeyData {
    pub labels: Vec<String>,
    pub sources: Vec<usize>,
    pub targets: Vec<usize>,
    pub values: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_is_deduplicated() {
        let mut graph = FlowGraph::new();
        let a = graph.node("Plant:A");
        let b = graph.node("Warehouse:A");
        assert_eq!(graph.node("Plant:A"), a);
        assert_eq!((a, b), (0, 1));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_index("Warehouse:A"), Some(1));
        assert_eq!(graph.node_index("Customers"), None);
    }

    #[test]
    fn test_edge_value_floor() {
        let mut graph = FlowGraph::new();
        let a = graph.node("a");
        let b = graph.node("b");
        graph.add_edge(a, b, 0);
        graph.add_edge(a, b, -7);
        graph.add_edge(a, b, 12);
        let values: Vec<i64> = graph.edges().iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 1, 12]);
    }

    #[test]
    fn test_to_sankey_parallel_arrays() {
        let mut graph = FlowGraph::new();
        let a = graph.node("a");
        let b = graph.node("b");
        let c = graph.node("c");
        graph.add_edge(a, b, 5);
        graph.add_edge(b, c, 3);

        let sankey = graph.to_sankey();
        assert_eq!(sankey.labels, vec!["a", "b", "c"]);
        assert_eq!(sankey.sources, vec![0, 1]);
        assert_eq!(sankey.targets, vec![1, 2]);
        assert_eq!(sankey.values, vec![5, 3]);
    }
}

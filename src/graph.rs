use std::collections::BTreeMap;

use tracing::debug;

/// An undirected, weighted graph stored as an adjacency map.
///
/// Nodes are identified by their labels. Every edge is stored in both
/// directions with the same weight. Both levels of the map are ordered, so
/// node and neighbor enumeration is ascending by label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: BTreeMap<String, BTreeMap<String, u32>>,
}

/// One undirected edge, reported once with `from <= to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            adj: BTreeMap::new(),
        }
    }

    /// Connect `from` and `to` with `weight`, creating either node if needed.
    ///
    /// Re-adding an existing pair (in either order) overwrites its weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) {
        self.adj
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        self.adj
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string(), weight);
        debug!(from, to, weight, "edge set");
    }

    /// Add `label` with no edges. Existing nodes keep their edges.
    pub fn add_node(&mut self, label: &str) {
        self.adj.entry(label.to_string()).or_default();
    }

    /// All node labels in ascending order.
    pub fn nodes(&self) -> Vec<String> {
        self.adj.keys().cloned().collect()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adj.contains_key(label)
    }

    /// Neighbors of `label` with their edge weights, ascending by label.
    ///
    /// Unknown labels have no neighbors.
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.adj
            .get(label)
            .into_iter()
            .flat_map(|n| n.iter().map(|(k, &w)| (k.as_str(), w)))
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        self.adj.get(from)?.get(to).copied()
    }

    pub fn degree(&self, label: &str) -> usize {
        self.adj.get(label).map_or(0, |n| n.len())
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Each undirected edge once, ordered by `(from, to)`.
    pub fn edges(&self) -> Vec<Edge> {
        self.adj
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(to, _)| from.as_str() <= to.as_str())
                    .map(move |(to, &weight)| Edge {
                        from: from.clone(),
                        to: to.clone(),
                        weight,
                    })
            })
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        debug!(nodes = self.adj.len(), "clearing graph");
        self.adj.clear();
    }
}

/// Human-readable form of an edge, e.g. `A ↔ B (weight 4)`.
pub fn describe_edge(from: &str, to: &str, weight: u32) -> String {
    format!("{} ↔ {} (weight {})", from, to, weight)
}

/// Build the walkthrough graph:
///
/// ```text
///   A --4-- B --2-- C
///   |               |
///   +------10-------+
/// ```
///
/// Shortest A→C: cost 6 via B, not the direct edge.
pub fn build_triangle_graph() -> Graph {
    let mut g = Graph::new();
    g.add_edge("A", "B", 4);
    g.add_edge("B", "C", 2);
    g.add_edge("A", "C", 10);
    g
}

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::bst::BinarySearchTree;
use crate::graph::Graph;
use crate::trace::{join, Trace};

pub const TREE_SAMPLE_SIZE: usize = 7;
pub const TREE_SAMPLE_MAX: i64 = 100;

pub const GRAPH_SAMPLE_NODES: [&str; 5] = ["A", "B", "C", "D", "E"];
pub const GRAPH_SAMPLE_MAX_WEIGHT: u32 = 10;

/// `TREE_SAMPLE_SIZE` distinct values in `1..=TREE_SAMPLE_MAX`, in draw order.
pub fn random_tree_values<R: Rng>(rng: &mut R) -> Vec<i64> {
    let mut seen = BTreeSet::new();
    let mut values = Vec::with_capacity(TREE_SAMPLE_SIZE);
    while values.len() < TREE_SAMPLE_SIZE {
        let v = rng.gen_range(1..=TREE_SAMPLE_MAX);
        if seen.insert(v) {
            values.push(v);
        }
    }
    values
}

/// Replace the tree's contents with `values`, inserted in order.
///
/// The returned trace opens with a line listing the values, followed by each
/// insertion's own trace and a blank separator line.
pub fn populate_tree(tree: &mut BinarySearchTree, values: &[i64]) -> Trace {
    tree.reset();

    let mut log = Trace::new();
    log.push(format!("Inserting sample data: {}", join(values, ", ")));
    for &v in values {
        log.extend(tree.insert(v));
        log.push("");
    }
    debug!(count = values.len(), "sample tree loaded");
    log
}

/// A random connected graph over [`GRAPH_SAMPLE_NODES`].
///
/// A chain `A-B-C-D-E` guarantees connectivity, then two to five extra edges
/// are attempted between random nodes. Self-loops and pairs already present
/// are skipped, so fewer extras may survive.
pub fn random_graph_edges<R: Rng>(rng: &mut R) -> Vec<(String, String, u32)> {
    let mut edges: Vec<(String, String, u32)> = GRAPH_SAMPLE_NODES
        .windows(2)
        .map(|pair| {
            let weight = rng.gen_range(1..=GRAPH_SAMPLE_MAX_WEIGHT);
            (pair[0].to_string(), pair[1].to_string(), weight)
        })
        .collect();

    let extra: usize = rng.gen_range(2..=5);
    for _ in 0..extra {
        let from = GRAPH_SAMPLE_NODES[rng.gen_range(0..GRAPH_SAMPLE_NODES.len())];
        let to = GRAPH_SAMPLE_NODES[rng.gen_range(0..GRAPH_SAMPLE_NODES.len())];
        if from == to {
            continue;
        }
        let exists = edges
            .iter()
            .any(|(a, b, _)| (a == from && b == to) || (a == to && b == from));
        if !exists {
            let weight = rng.gen_range(1..=GRAPH_SAMPLE_MAX_WEIGHT);
            edges.push((from.to_string(), to.to_string(), weight));
        }
    }
    edges
}

/// Replace the graph's contents with `edges`.
pub fn populate_graph(graph: &mut Graph, edges: &[(String, String, u32)]) {
    graph.clear();
    for (from, to, weight) in edges {
        graph.add_edge(from, to, *weight);
    }
    debug!(edges = edges.len(), nodes = graph.node_count(), "sample graph loaded");
}

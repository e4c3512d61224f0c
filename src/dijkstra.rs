use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::distance::Distance;
use crate::graph::Graph;
use crate::trace::{join, INFINITY_GLYPH};

/// One narrated event of a shortest-path run.
///
/// Each record carries a full snapshot of the tentative distances and the
/// visited set as they stood right after the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub current: String,
    pub distances: BTreeMap<String, Distance>,
    pub visited: Vec<String>,
    pub description: String,
}

impl StepRecord {
    /// Compact rendering of the distance snapshot, e.g. `A=0, B=4, C=∞`.
    pub fn snapshot(&self) -> String {
        let cells: Vec<String> = self
            .distances
            .iter()
            .map(|(label, d)| format!("{}={}", label, d))
            .collect();
        cells.join(", ")
    }
}

/// Result of [`run_shortest_paths`]: final distances plus the full step trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: String,
    pub distances: BTreeMap<String, Distance>,
    pub steps: Vec<StepRecord>,
}

impl ShortestPaths {
    pub fn distance(&self, label: &str) -> Option<Distance> {
        self.distances.get(label).copied()
    }

    /// Labels whose final distance is still infinite.
    pub fn unreachable(&self) -> Vec<&str> {
        self.distances
            .iter()
            .filter(|(_, d)| !d.is_finite())
            .map(|(label, _)| label.as_str())
            .collect()
    }
}

/// Accumulates step records while a run is in progress.
struct StepLog {
    steps: Vec<StepRecord>,
}

impl StepLog {
    fn record(
        &mut self,
        current: &str,
        distances: &BTreeMap<String, Distance>,
        visited: &[String],
        description: String,
    ) {
        let step = self.steps.len();
        trace!(step, current, %description, "step recorded");
        self.steps.push(StepRecord {
            step,
            current: current.to_string(),
            distances: distances.clone(),
            visited: visited.to_vec(),
            description,
        });
    }
}

/// Run Dijkstra's algorithm from `start` over every node of `graph`.
///
/// The frontier is scanned linearly in ascending label order, so ties go to
/// the lexically smallest label and the whole trace is reproducible. A start
/// label that is not in the graph leaves every distance infinite.
pub fn run_shortest_paths(graph: &Graph, start: &str) -> ShortestPaths {
    let nodes = graph.nodes();
    let mut dist: BTreeMap<String, Distance> = nodes
        .iter()
        .map(|n| {
            let d = if n == start {
                Distance::Finite(0)
            } else {
                Distance::Unreachable
            };
            (n.clone(), d)
        })
        .collect();
    let mut visited: BTreeSet<String> = BTreeSet::new();
    let mut visit_order: Vec<String> = Vec::new();
    let mut log = StepLog { steps: Vec::new() };

    if !graph.contains(start) {
        debug!(start, "start node not in graph");
    }

    log.record(
        start,
        &dist,
        &visit_order,
        format!(
            "Initialize: distance of {} = 0, every other node = {}",
            start, INFINITY_GLYPH
        ),
    );

    while visited.len() < nodes.len() {
        let mut current: Option<&str> = None;
        let mut best = Distance::Unreachable;
        for node in &nodes {
            if visited.contains(node) {
                continue;
            }
            let d = dist.get(node).copied().unwrap_or(Distance::Unreachable);
            if d < best {
                best = d;
                current = Some(node.as_str());
            }
        }

        // Nothing finite left on the frontier: the rest is unreachable.
        let current = match current {
            Some(c) => c,
            None => break,
        };

        debug!(node = current, distance = %best, "visiting");
        visited.insert(current.to_string());
        visit_order.push(current.to_string());

        for (neighbor, weight) in graph.neighbors(current) {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = best.plus(weight);
            let old = dist.get(neighbor).copied().unwrap_or(Distance::Unreachable);
            if candidate < old {
                dist.insert(neighbor.to_string(), candidate);
                log.record(
                    current,
                    &dist,
                    &visit_order,
                    format!(
                        "Visit {} → update distance of {}: {} → {} (via {}, weight {})",
                        current, neighbor, old, candidate, current, weight
                    ),
                );
            }
        }

        let neighbor_labels: Vec<&str> = graph.neighbors(current).map(|(n, _)| n).collect();
        if !neighbor_labels.is_empty() {
            log.record(
                current,
                &dist,
                &visit_order,
                format!(
                    "Mark {} as visited. Neighbors: {}",
                    current,
                    join(&neighbor_labels, ", ")
                ),
            );
        }
    }

    debug!(
        start,
        steps = log.steps.len(),
        visited = visit_order.len(),
        "shortest paths computed"
    );

    ShortestPaths {
        start: start.to_string(),
        distances: dist,
        steps: log.steps,
    }
}

impl Graph {
    /// Shortest distances from `start`; see [`run_shortest_paths`].
    pub fn run_shortest_paths(&self, start: &str) -> ShortestPaths {
        run_shortest_paths(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_triangle_graph;
    use pretty_assertions::assert_eq;

    fn descriptions(result: &ShortestPaths) -> Vec<&str> {
        result.steps.iter().map(|s| s.description.as_str()).collect()
    }

    #[test]
    fn triangle_prefers_two_hop_route() {
        let result = build_triangle_graph().run_shortest_paths("A");
        assert_eq!(result.distance("A"), Some(Distance::Finite(0)));
        assert_eq!(result.distance("B"), Some(Distance::Finite(4)));
        assert_eq!(result.distance("C"), Some(Distance::Finite(6)));
    }

    #[test]
    fn triangle_trace_is_exact() {
        let result = build_triangle_graph().run_shortest_paths("A");
        assert_eq!(
            descriptions(&result),
            vec![
                "Initialize: distance of A = 0, every other node = ∞",
                "Visit A → update distance of B: ∞ → 4 (via A, weight 4)",
                "Visit A → update distance of C: ∞ → 10 (via A, weight 10)",
                "Mark A as visited. Neighbors: B, C",
                "Visit B → update distance of C: 10 → 6 (via B, weight 2)",
                "Mark B as visited. Neighbors: A, C",
                "Mark C as visited. Neighbors: A, B",
            ]
        );
        let indices: Vec<usize> = result.steps.iter().map(|s| s.step).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn snapshots_track_progress() {
        let result = build_triangle_graph().run_shortest_paths("A");
        assert_eq!(result.steps[0].snapshot(), "A=0, B=∞, C=∞");
        assert!(result.steps[0].visited.is_empty());
        assert_eq!(result.steps[0].current, "A");

        assert_eq!(result.steps[2].snapshot(), "A=0, B=4, C=10");
        assert_eq!(result.steps[2].visited, vec!["A"]);

        let last = result.steps.last().unwrap();
        assert_eq!(last.current, "C");
        assert_eq!(last.visited, vec!["A", "B", "C"]);
        assert_eq!(last.snapshot(), "A=0, B=4, C=6");
    }

    #[test]
    fn isolated_component_stays_infinite() {
        let mut g = build_triangle_graph();
        g.add_edge("D", "E", 1);
        let result = g.run_shortest_paths("A");
        assert_eq!(result.distance("D"), Some(Distance::Unreachable));
        assert_eq!(result.distance("E"), Some(Distance::Unreachable));
        assert_eq!(result.unreachable(), vec!["D", "E"]);
    }

    #[test]
    fn absent_start_yields_only_initialization() {
        let g = build_triangle_graph();
        let result = g.run_shortest_paths("Z");
        assert_eq!(result.steps.len(), 1);
        assert!(result.distances.values().all(|d| *d == Distance::Unreachable));
        assert_eq!(result.distance("Z"), None);
    }

    #[test]
    fn edgeless_start_is_never_marked() {
        let mut g = Graph::new();
        g.add_node("A");
        let result = g.run_shortest_paths("A");
        assert_eq!(
            descriptions(&result),
            vec!["Initialize: distance of A = 0, every other node = ∞"]
        );
        assert_eq!(result.distance("A"), Some(Distance::Finite(0)));
    }

    #[test]
    fn ties_break_by_label() {
        let mut g = Graph::new();
        g.add_edge("S", "C", 1);
        g.add_edge("S", "B", 1);
        let result = g.run_shortest_paths("S");
        let visits: Vec<&str> = result
            .steps
            .iter()
            .filter(|s| s.description.starts_with("Mark"))
            .map(|s| s.current.as_str())
            .collect();
        assert_eq!(visits, vec!["S", "B", "C"]);
    }

    #[test]
    fn serializes_infinity_as_glyph() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 3);
        let result = g.run_shortest_paths("A");
        let json = serde_json::to_value(&result.steps[0]).unwrap();
        assert_eq!(json["distances"]["A"], 0);
        assert_eq!(json["distances"]["B"], "∞");
        assert_eq!(json["step"], 0);
    }
}

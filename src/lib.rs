pub mod bst;
pub mod dijkstra;
pub mod distance;
pub mod error;
pub mod graph;
pub mod input;
pub mod node;
pub mod sample;
pub mod trace;

pub use bst::{BinarySearchTree, SearchResult};
pub use dijkstra::{run_shortest_paths, ShortestPaths, StepRecord};
pub use distance::Distance;
pub use error::InputError;
pub use graph::Graph;
pub use trace::Trace;

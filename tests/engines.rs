use algo_lab::bst::EMPTY_TREE;
use algo_lab::{BinarySearchTree, Distance, Graph};
use pretty_assertions::assert_eq;

fn tree_of(values: &[i64]) -> BinarySearchTree {
    let mut tree = BinarySearchTree::new();
    for &v in values {
        tree.insert(v);
    }
    tree
}

#[test]
fn shortest_path_goes_through_cheaper_detour() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 4);
    g.add_edge("B", "C", 2);
    g.add_edge("A", "C", 10);

    let result = g.run_shortest_paths("A");
    let got: Vec<(&str, Distance)> = result
        .distances
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(
        got,
        vec![
            ("A", Distance::Finite(0)),
            ("B", Distance::Finite(4)),
            ("C", Distance::Finite(6)),
        ]
    );
}

#[test]
fn node_without_path_is_unreachable() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 4);
    g.add_edge("B", "C", 2);
    g.add_node("D");

    let result = g.run_shortest_paths("A");
    assert_eq!(result.distance("D"), Some(Distance::Unreachable));
    assert_eq!(result.distance("C"), Some(Distance::Finite(6)));
}

#[test]
fn identical_runs_produce_identical_traces() {
    let mut g = Graph::new();
    for (from, to, w) in [("A", "B", 3), ("A", "C", 1), ("C", "B", 1), ("B", "D", 5), ("C", "D", 9)] {
        g.add_edge(from, to, w);
    }
    let first = g.run_shortest_paths("A");
    let second = g.run_shortest_paths("A");
    assert_eq!(first, second);
    assert_eq!(first.distance("D"), Some(Distance::Finite(7)));
}

#[test]
fn running_does_not_mutate_graph() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 3);
    let before = g.clone();
    let _ = g.run_shortest_paths("A");
    assert_eq!(g, before);
}

#[test]
fn edge_symmetry_and_overwrite() {
    let mut g = Graph::new();
    g.add_edge("A", "B", 5);
    assert_eq!(g.neighbors("A").collect::<Vec<_>>(), vec![("B", 5)]);
    assert_eq!(g.neighbors("B").collect::<Vec<_>>(), vec![("A", 5)]);

    g.add_edge("A", "B", 9);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.weight("A", "B"), Some(9));
    assert_eq!(g.weight("B", "A"), Some(9));
}

#[test]
fn reset_clears_both_engines() {
    let mut tree = tree_of(&[8, 3, 10]);
    let mut g = Graph::new();
    g.add_edge("A", "B", 1);

    tree.reset();
    g.clear();

    assert_eq!(tree.structure(), vec![EMPTY_TREE]);
    assert!(g.nodes().is_empty());
}

#[test]
fn duplicate_leaves_shape_unchanged() {
    let once = tree_of(&[8, 3, 10, 6]);
    let twice = tree_of(&[8, 3, 10, 6, 6]);
    assert_eq!(once.structure(), twice.structure());
    assert_eq!(once.len(), twice.len());
}

#[test]
fn search_finds_inserted_and_misses_others() {
    let values = [8, 3, 10, 1, 6, 14, 4, 7, 13];
    let tree = tree_of(&values);
    for v in values {
        assert!(tree.search(v).found, "expected {} to be found", v);
    }
    for v in [0, 2, 5, 9, 11, 12, 15] {
        assert!(!tree.search(v).found, "expected {} to be missing", v);
    }
}

#[test]
fn worked_tree_example() {
    let tree = tree_of(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(
        tree.structure(),
        vec![
            "[8]",
            "├── [3]",
            "│   ├── [1]",
            "│   └── [6]",
            "│       ├── [4]",
            "│       └── [7]",
            "└── [10]",
            "    ├── [ ]",
            "    └── [14]",
            "        ├── [13]",
            "        └── [ ]",
        ]
    );
    assert_eq!(tree.height(), 4);
}

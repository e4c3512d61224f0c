use serde::Serialize;
use tracing::{debug, trace};

use crate::node::TreeNode;
use crate::trace::{chain, Trace};

/// Single line returned by [`BinarySearchTree::structure`] for an empty tree.
pub const EMPTY_TREE: &str = "tree is empty";

/// Marker drawn in place of a missing child whose sibling exists.
const EMPTY_SLOT: &str = "[ ]";

/// Which child slot of a parent a value descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn of(value: i64, pivot: i64) -> Side {
        if value < pivot {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Side::Left => "├── ",
            Side::Right => "└── ",
        }
    }

    fn indent(self) -> &'static str {
        match self {
            Side::Left => "│   ",
            Side::Right => "    ",
        }
    }

    fn comparison(self, value: i64, pivot: i64) -> String {
        match self {
            Side::Left => format!("{} < {}, go left", value, pivot),
            Side::Right => format!("{} > {}, go right", value, pivot),
        }
    }
}

/// Outcome of [`BinarySearchTree::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub found: bool,
    pub trace: Trace,
}

/// An unbalanced binary search tree of distinct integers.
///
/// Every mutating or reading walk narrates its decisions into a [`Trace`].
/// The tree never rebalances, so sorted input degrades it into a list.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Option<Box<TreeNode>>,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        BinarySearchTree { root: None }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.count())
    }

    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Drop every node, returning the tree to its freshly created state.
    pub fn reset(&mut self) {
        debug!(nodes = self.len(), "resetting tree");
        dismantle(self.root.take());
    }

    /// Insert `value`, narrating each comparison on the way down.
    ///
    /// A value already present leaves the tree untouched; the trace says so.
    pub fn insert(&mut self, value: i64) -> Trace {
        let mut log = Trace::new();
        log.push(format!("Inserting value {}", value));

        let mut path: Vec<i64> = Vec::new();
        let mut parent: Option<(i64, Side)> = None;
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            if value == node.value {
                log.push(format!(
                    "Value {} already exists in the tree, not inserted",
                    value
                ));
                debug!(value, "duplicate value rejected");
                return log;
            }

            let side = Side::of(value, node.value);
            log.push(side.comparison(value, node.value));
            trace!(value, node = node.value, side = side.name(), "descending");

            path.push(node.value);
            parent = Some((node.value, side));
            slot = match side {
                Side::Left => &mut node.left,
                Side::Right => &mut node.right,
            };
        }

        *slot = Some(Box::new(TreeNode::new(value)));

        match parent {
            None => {
                log.push(format!("Value {} becomes the root", value));
            }
            Some((parent_value, side)) => {
                log.push(format!(
                    "Value {} inserted as {} child of {}",
                    value,
                    side.name(),
                    parent_value
                ));
                path.push(value);
                log.push(format!("Path: {}", chain(&path)));
            }
        }

        debug!(value, depth = path.len().max(1), "value inserted");
        log
    }

    /// Look for `value` without modifying the tree.
    pub fn search(&self, value: i64) -> SearchResult {
        let mut log = Trace::new();
        log.push(format!("Searching for value {}", value));

        if self.root.is_none() {
            log.push(format!("Tree is empty, value {} not found", value));
            return SearchResult {
                found: false,
                trace: log,
            };
        }

        let mut current = self.root.as_deref();
        let mut depth = 0usize;

        while let Some(node) = current {
            depth += 1;
            log.push(format!("Level {}: checking node {}", depth, node.value));

            if value == node.value {
                log.push(format!("Value {} found at level {}", value, depth));
                debug!(value, depth, "search hit");
                return SearchResult {
                    found: true,
                    trace: log,
                };
            }

            let side = Side::of(value, node.value);
            log.push(format!("  {}", side.comparison(value, node.value)));
            current = match side {
                Side::Left => node.left.as_deref(),
                Side::Right => node.right.as_deref(),
            };
        }

        log.push(format!("Value {} not found in the tree", value));
        debug!(value, depth, "search miss");
        SearchResult {
            found: false,
            trace: log,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if value == node.value {
                return true;
            }
            current = match Side::of(value, node.value) {
                Side::Left => node.left.as_deref(),
                Side::Right => node.right.as_deref(),
            };
        }
        false
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<&TreeNode> = Vec::new();
        let mut current = self.root.as_deref();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node.value);
                current = node.right.as_deref();
            }
        }
        out
    }

    /// Pre-order ASCII rendering of the tree, one line per entry.
    ///
    /// ```text
    /// [50]
    /// ├── [30]
    /// │   ├── [20]
    /// │   └── [ ]
    /// └── [70]
    /// ```
    pub fn structure(&self) -> Vec<String> {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return vec![EMPTY_TREE.to_string()],
        };

        let mut lines = vec![format!("[{}]", root.value)];
        // indents[k] continues the branch of the ancestor at depth k + 1.
        let mut indents: Vec<&'static str> = Vec::new();
        let mut stack: Vec<(Row<'_>, usize)> = Vec::new();
        push_children(root, 1, &mut stack);

        while let Some((row, depth)) = stack.pop() {
            indents.truncate(depth - 1);
            let prefix = indents.concat();
            match row {
                Row::Empty(side) => {
                    lines.push(format!("{}{}{}", prefix, side.glyph(), EMPTY_SLOT));
                }
                Row::Node(node, side) => {
                    lines.push(format!("{}{}[{}]", prefix, side.glyph(), node.value));
                    indents.push(side.indent());
                    push_children(node, depth + 1, &mut stack);
                }
            }
        }
        lines
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

/// Free a subtree one node at a time so a list-shaped tree never recurses.
fn dismantle(root: Option<Box<TreeNode>>) {
    let mut pending: Vec<Box<TreeNode>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

/// One pending line of the ASCII dump.
enum Row<'a> {
    Node(&'a TreeNode, Side),
    Empty(Side),
}

/// Queue both child slots of a non-leaf, right first so left pops first.
fn push_children<'a>(node: &'a TreeNode, depth: usize, stack: &mut Vec<(Row<'a>, usize)>) {
    if node.is_leaf() {
        return;
    }
    for (child, side) in [(&node.right, Side::Right), (&node.left, Side::Left)] {
        let row = match child.as_deref() {
            Some(child) => Row::Node(child, side),
            None => Row::Empty(side),
        };
        stack.push((row, depth));
    }
}

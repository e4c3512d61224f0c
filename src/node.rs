/// A single node of the binary search tree.
///
/// Each node exclusively owns its children through `Box`, so the structure
/// is a strict tree with no sharing and no cycles.
#[derive(Debug)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path of this subtree.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&TreeNode, usize)> = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Number of nodes in this subtree.
    pub fn count(&self) -> usize {
        let mut total = 0;
        let mut stack: Vec<&TreeNode> = vec![self];
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children());
        }
        total
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }
}

//! The closed-hierarchy variant tree.

use rustc_hash::FxHashSet;

use crate::{DeclName, SourcePosition};

/// A node of a closed-hierarchy tree.
///
/// Trees are derived from host declarations, never from user-editable
/// pointers, so a branch never contains its own identity below it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantNode {
    /// A terminal variant: a singleton value of the hierarchy.
    Leaf {
        name: DeclName,
        position: Option<SourcePosition>,
    },
    /// A nested closed hierarchy, children in merged declaration order.
    Branch {
        name: DeclName,
        children: Vec<VariantNode>,
    },
}

impl VariantNode {
    pub fn leaf(name: impl Into<DeclName>, position: Option<SourcePosition>) -> Self {
        VariantNode::Leaf {
            name: name.into(),
            position,
        }
    }

    pub fn branch(name: impl Into<DeclName>, children: Vec<VariantNode>) -> Self {
        VariantNode::Branch {
            name: name.into(),
            children,
        }
    }

    #[inline]
    pub fn name(&self) -> &DeclName {
        match self {
            VariantNode::Leaf { name, .. } | VariantNode::Branch { name, .. } => name,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, VariantNode::Leaf { .. })
    }

    /// Direct children; empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[VariantNode] {
        match self {
            VariantNode::Leaf { .. } => &[],
            VariantNode::Branch { children, .. } => children,
        }
    }

    /// Every leaf node in depth-first stored order, duplicates included.
    ///
    /// Walks with an explicit stack so arbitrarily deep trees are safe.
    pub fn leaves(&self) -> Vec<&VariantNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                VariantNode::Leaf { .. } => out.push(node),
                VariantNode::Branch { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        out
    }

    /// Number of distinct terminal variants reachable from this node.
    pub fn leaf_count(&self) -> usize {
        self.leaves()
            .into_iter()
            .map(VariantNode::name)
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Number of levels below and including this node (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Find a node by identity anywhere in this subtree.
    pub fn find(&self, name: &DeclName) -> Option<&VariantNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.name() == name {
                return Some(node);
            }
            stack.extend(node.children().iter().rev());
        }
        None
    }
}

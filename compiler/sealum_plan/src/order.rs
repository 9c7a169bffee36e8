//! Flattening a variant tree into one ordered leaf sequence per policy.
//!
//! Every policy is a total function of tree shape: each distinct leaf
//! appears exactly once, at its first encounter, and nothing but the stored
//! child order influences the result. Walks are iterative so arbitrarily
//! deep trees flatten without growing the stack.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use sealum_ir::{DeclName, FlattenedOrder, TraversalPolicy, VariantNode};

/// Flatten `tree` under `policy`.
pub fn flatten(tree: &VariantNode, policy: TraversalPolicy) -> FlattenedOrder {
    let mut sink = LeafSink::default();
    match policy {
        TraversalPolicy::DeclarationOrder => declaration_order(tree, &mut sink),
        TraversalPolicy::PreOrder => pre_order(tree, &mut sink),
        TraversalPolicy::InOrder => in_order(tree, &mut sink),
        TraversalPolicy::PostOrder => post_order(tree, &mut sink),
        TraversalPolicy::LevelOrder => level_order(tree, &mut sink),
    }
    sink.order
}

/// Collects leaves, first occurrence wins.
#[derive(Default)]
struct LeafSink<'t> {
    seen: FxHashSet<&'t DeclName>,
    order: FlattenedOrder,
}

impl<'t> LeafSink<'t> {
    fn push(&mut self, leaf: &'t DeclName) {
        if self.seen.insert(leaf) {
            self.order.push(leaf.clone());
        }
    }

    /// The direct leaf children of `node`, in stored order.
    fn own_leaves(&mut self, node: &'t VariantNode) {
        for child in node.children() {
            if let VariantNode::Leaf { name, .. } = child {
                self.push(name);
            }
        }
    }
}

fn branch_children(node: &VariantNode) -> impl DoubleEndedIterator<Item = &VariantNode> {
    node.children().iter().filter(|child| !child.is_leaf())
}

/// Plain depth-first walk in stored order, leaves and branches interleaved.
fn declaration_order<'t>(tree: &'t VariantNode, sink: &mut LeafSink<'t>) {
    let mut stack = vec![tree];
    while let Some(node) = stack.pop() {
        match node {
            VariantNode::Leaf { name, .. } => sink.push(name),
            VariantNode::Branch { children, .. } => stack.extend(children.iter().rev()),
        }
    }
}

/// Own leaves, then each branch child.
fn pre_order<'t>(tree: &'t VariantNode, sink: &mut LeafSink<'t>) {
    if tree.is_leaf() {
        return declaration_order(tree, sink);
    }
    let mut stack = vec![tree];
    while let Some(branch) = stack.pop() {
        sink.own_leaves(branch);
        stack.extend(branch_children(branch).rev());
    }
}

enum Step<'t> {
    Visit(&'t VariantNode),
    Leaves(&'t VariantNode),
}

/// Each branch child, then own leaves.
fn post_order<'t>(tree: &'t VariantNode, sink: &mut LeafSink<'t>) {
    if tree.is_leaf() {
        return declaration_order(tree, sink);
    }
    let mut stack = vec![Step::Visit(tree)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Leaves(branch) => sink.own_leaves(branch),
            Step::Visit(branch) => {
                stack.push(Step::Leaves(branch));
                stack.extend(branch_children(branch).rev().map(Step::Visit));
            }
        }
    }
}

/// First branch child, then own leaves, then the remaining branch children.
fn in_order<'t>(tree: &'t VariantNode, sink: &mut LeafSink<'t>) {
    if tree.is_leaf() {
        return declaration_order(tree, sink);
    }
    let mut stack = vec![Step::Visit(tree)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Leaves(branch) => sink.own_leaves(branch),
            Step::Visit(branch) => {
                let mut branches = branch_children(branch);
                let first = branches.next();
                let rest: Vec<&VariantNode> = branches.collect();
                stack.extend(rest.into_iter().rev().map(Step::Visit));
                stack.push(Step::Leaves(branch));
                if let Some(first) = first {
                    stack.push(Step::Visit(first));
                }
            }
        }
    }
}

/// Breadth first over branches, each contributing its own leaves.
fn level_order<'t>(tree: &'t VariantNode, sink: &mut LeafSink<'t>) {
    if tree.is_leaf() {
        return declaration_order(tree, sink);
    }
    let mut queue = VecDeque::from([tree]);
    while let Some(branch) = queue.pop_front() {
        sink.own_leaves(branch);
        queue.extend(branch_children(branch));
    }
}

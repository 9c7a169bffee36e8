//! Closed hierarchy to [`HierarchySpec`].
//!
//! Descent is recursive over nested closed hierarchies, guarded by
//! [`ensure_sufficient_stack`]. Child failures are collected rather than
//! returned early so that one pass reports every violation under a root.

use rustc_hash::FxHashSet;
use sealum_diagnostic::{Failure, FailureKind};
use sealum_ir::{DeclName, HierarchySpec, VariantNode};

use crate::stack::ensure_sufficient_stack;
use crate::validate::{check_visibility, fail_at, resolve_root, validate_spec};
use crate::{DeclarationPasses, HierarchyQuery};

/// Build the [`HierarchySpec`] for the hierarchy `holder` is the companion of.
#[tracing::instrument(level = "debug", skip_all, fields(holder = %holder))]
pub fn build<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
) -> Result<HierarchySpec, Vec<Failure>> {
    let shape = resolve_root(query, holder)?;

    let mut builder = TreeBuilder::new(query, holder);
    let tree = builder.branch(&shape.root);
    if !builder.failures.is_empty() {
        tracing::debug!(failures = builder.failures.len(), "build failed");
        return Err(builder.failures);
    }

    let type_parameters = query.type_parameters(&shape.root);
    let spec = HierarchySpec::new(
        shape.root,
        shape.root_visibility,
        shape.holder,
        shape.holder_visibility,
        tree,
        type_parameters,
    );

    let failures = validate_spec(query, holder, &spec);
    if failures.is_empty() {
        tracing::debug!(leaves = spec.leaf_count(), "built");
        Ok(spec)
    } else {
        Err(failures)
    }
}

/// Merge the two declaration passes into child order.
///
/// A declaration listed by both passes takes its `inside` position, so
/// subtypes declared outside the hierarchy body come first and subtypes
/// declared inside it follow. Within each pass the first occurrence wins.
pub fn merge_passes(passes: DeclarationPasses) -> Vec<DeclName> {
    let DeclarationPasses { outside, inside } = passes;
    let inside_set: FxHashSet<&DeclName> = inside.iter().collect();

    let mut seen = FxHashSet::default();
    let mut merged = Vec::with_capacity(outside.len() + inside.len());
    for name in outside
        .iter()
        .filter(|name| !inside_set.contains(name))
        .chain(&inside)
    {
        if seen.insert(name) {
            merged.push(name.clone());
        }
    }
    merged
}

struct TreeBuilder<'a, Q: ?Sized> {
    query: &'a Q,
    holder: &'a DeclName,
    failures: Vec<Failure>,
    /// Branches on the current descent path.
    path: FxHashSet<DeclName>,
}

impl<'a, Q: HierarchyQuery + ?Sized> TreeBuilder<'a, Q> {
    fn new(query: &'a Q, holder: &'a DeclName) -> Self {
        TreeBuilder {
            query,
            holder,
            failures: Vec::new(),
            path: FxHashSet::default(),
        }
    }

    fn branch(&mut self, name: &DeclName) -> VariantNode {
        self.path.insert(name.clone());
        let children = merge_passes(self.query.children(name));
        tracing::trace!(branch = %name, children = children.len());

        let mut nodes = Vec::with_capacity(children.len());
        for child in &children {
            if let Some(node) = self.classify(child) {
                nodes.push(node);
            }
        }

        self.path.remove(name);
        VariantNode::branch(name.clone(), nodes)
    }

    /// Turn one child into a node, recording any failure.
    ///
    /// A child with bad visibility is still classified so that problems
    /// further down surface in the same pass.
    fn classify(&mut self, child: &DeclName) -> Option<VariantNode> {
        if self.path.contains(child) {
            self.fail(FailureKind::CyclicHierarchy(child.clone()), child);
            return None;
        }

        let visible = match check_visibility(self.query, self.holder, child) {
            Ok(_) => true,
            Err(failure) => {
                self.failures.push(failure);
                false
            }
        };

        let node = if self.query.is_terminal_variant(child) {
            Some(VariantNode::leaf(child.clone(), self.query.position(child)))
        } else if self.query.is_closed_hierarchy_root(child) {
            Some(ensure_sufficient_stack(|| self.branch(child)))
        } else {
            self.fail(FailureKind::NonTerminalNonHierarchyChild(child.clone()), child);
            None
        };

        node.filter(|_| visible)
    }

    fn fail(&mut self, kind: FailureKind, at: &DeclName) {
        self.failures.push(fail_at(self.query, self.holder, kind, at));
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

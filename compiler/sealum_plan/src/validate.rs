//! Structural checks on holders, requests and finished specs.
//!
//! The builder calls these inline as it descends; [`validate_spec`] runs
//! them once more over a completed [`HierarchySpec`].

use rustc_hash::FxHashSet;
use sealum_diagnostic::{Failure, FailureKind};
use sealum_ir::{DeclName, HierarchySpec, OrderRequest, VariantNode, Visibility};

use crate::HierarchyQuery;

/// A holder whose shape checked out: a visible companion of a visible
/// closed hierarchy root.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RootShape {
    pub holder: DeclName,
    pub holder_visibility: Visibility,
    pub root: DeclName,
    pub root_visibility: Visibility,
}

/// Resolve the closed hierarchy an annotated holder belongs to.
///
/// Checks stop at the first problem: nothing below a malformed holder can
/// be trusted.
pub fn resolve_root<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
) -> Result<RootShape, Vec<Failure>> {
    if !query.is_companion_holder(holder) {
        return Err(vec![fail_at(
            query,
            holder,
            FailureKind::EnclosingNotResolvable(holder.clone()),
            holder,
        )]);
    }
    let holder_visibility = check_visibility(query, holder, holder).map_err(|f| vec![f])?;

    let Some(root) = query.enclosing(holder) else {
        return Err(vec![fail_at(
            query,
            holder,
            FailureKind::EnclosingNotResolvable(holder.clone()),
            holder,
        )]);
    };
    if !query.is_closed_hierarchy_root(&root) {
        return Err(vec![fail_at(
            query,
            holder,
            FailureKind::NotClosedHierarchy(root.clone()),
            &root,
        )]);
    }
    let root_visibility = check_visibility(query, holder, &root).map_err(|f| vec![f])?;

    tracing::trace!(%holder, %root, "resolved root");
    Ok(RootShape {
        holder: holder.clone(),
        holder_visibility,
        root,
        root_visibility,
    })
}

/// The validated visibility of `name`, blaming `name` itself on failure.
pub(crate) fn check_visibility<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
    name: &DeclName,
) -> Result<Visibility, Failure> {
    Visibility::try_from(query.visibility(name)).map_err(|found| {
        fail_at(
            query,
            holder,
            FailureKind::InvalidVisibility {
                name: name.clone(),
                found,
            },
            name,
        )
    })
}

/// Reject a request list that names a policy twice.
///
/// Every repeat is reported at its own position; the enum-artifact flag
/// plays no part in the comparison.
pub fn check_unique_requests(
    holder: &DeclName,
    requests: &[OrderRequest],
) -> Result<(), Vec<Failure>> {
    let mut seen = FxHashSet::default();
    let failures: Vec<Failure> = requests
        .iter()
        .filter(|request| !seen.insert(request.policy))
        .map(|request| {
            Failure::new(
                holder.clone(),
                FailureKind::DuplicateTraversalPolicy(request.policy),
                request.position.clone(),
            )
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

/// Re-check a finished spec: every node below the root is public or
/// internal and no identity repeats along a root-to-leaf path.
pub fn validate_spec<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
    spec: &HierarchySpec,
) -> Vec<Failure> {
    enum Step<'a> {
        Enter(&'a VariantNode),
        Exit(&'a DeclName),
    }

    let mut failures = Vec::new();
    let mut path: FxHashSet<&DeclName> = FxHashSet::default();
    let mut stack = vec![Step::Enter(spec.tree())];

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Enter(node) => node,
            Step::Exit(name) => {
                path.remove(name);
                continue;
            }
        };
        let name = node.name();

        if path.contains(name) {
            failures.push(fail_at(
                query,
                holder,
                FailureKind::CyclicHierarchy(name.clone()),
                name,
            ));
            continue;
        }
        if name != spec.root() {
            if let Err(failure) = check_visibility(query, holder, name) {
                failures.push(failure);
            }
        }

        if let VariantNode::Branch { children, .. } = node {
            path.insert(name);
            stack.push(Step::Exit(name));
            stack.extend(children.iter().rev().map(Step::Enter));
        }
    }
    failures
}

pub(crate) fn fail_at<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
    kind: FailureKind,
    at: &DeclName,
) -> Failure {
    Failure::new(holder.clone(), kind, query.position(at))
}

//! [`HierarchySpec`] plus requests to [`GenerationPlan`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use sealum_diagnostic::{Failure, FailureKind};
use sealum_ir::{
    ArtifactNames, DeclName, EnumArtifact, GenerationPlan, HierarchySpec, OrderRequest,
    PlannedOrder, VariantEntry, VariantNode,
};

use crate::validate::fail_at;
use crate::{check_unique_requests, flatten, HierarchyQuery};

/// Assemble the plan for a built spec.
///
/// The interface closure is only resolved when some request wants the
/// enum artifact, and then only once for all of them.
#[tracing::instrument(level = "debug", skip_all, fields(root = %spec.root()))]
pub fn assemble<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    spec: HierarchySpec,
    requests: &[OrderRequest],
) -> Result<GenerationPlan, Vec<Failure>> {
    check_unique_requests(spec.holder(), requests)?;

    let interfaces = requests
        .iter()
        .any(|request| request.wants_enum_artifact)
        .then(|| Arc::new(interface_closure(query, spec.root())));

    let names = lookup_names(query, spec.holder(), spec.tree())?;
    let visibility = spec.artifact_visibility();
    let mut orders = BTreeMap::new();
    for request in requests {
        let order = flatten(spec.tree(), request.policy);
        let entries: Vec<VariantEntry> = order
            .iter()
            .enumerate()
            .map(|(ordinal, leaf)| VariantEntry {
                ordinal,
                name: names
                    .get(leaf)
                    .cloned()
                    .unwrap_or_else(|| leaf.simple_name().to_string()),
                leaf: leaf.clone(),
            })
            .collect();
        let artifacts = ArtifactNames::for_policy(spec.root(), request.policy, visibility);

        let enum_artifact = match &interfaces {
            Some(interfaces) if request.wants_enum_artifact => Some(EnumArtifact {
                type_name: artifacts.enum_type.clone(),
                constants: entries.iter().map(|entry| entry.name.clone()).collect(),
                interfaces: Arc::clone(interfaces),
            }),
            _ => None,
        };

        tracing::trace!(policy = %request.policy, leaves = order.len(), "planned order");
        orders.insert(
            request.policy,
            PlannedOrder {
                policy: request.policy,
                order,
                entries,
                artifacts,
                enum_artifact,
            },
        );
    }

    Ok(GenerationPlan::new(spec, orders, interfaces))
}

/// Every interface `root` implements, directly or through any nominal
/// supertype, including super-interfaces.
pub fn interface_closure<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    root: &DeclName,
) -> BTreeSet<DeclName> {
    let mut interfaces = BTreeSet::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::from([root.clone()]);

    while let Some(ty) = queue.pop_front() {
        if !visited.insert(ty.clone()) {
            continue;
        }
        for interface in query.declared_interfaces(&ty) {
            interfaces.insert(interface.clone());
            queue.push_back(interface);
        }
        queue.extend(query.supertypes(&ty));
    }
    interfaces
}

/// Lookup name of every leaf: the simple names of its enclosing types,
/// outermost first, then its own, joined with `_`.
///
/// The first leaf met in stored order owns a name; every other distinct
/// leaf mapping to it fails with [`FailureKind::AmbiguousLookupName`].
pub fn lookup_names<Q: HierarchyQuery + ?Sized>(
    query: &Q,
    holder: &DeclName,
    tree: &VariantNode,
) -> Result<FxHashMap<DeclName, String>, Vec<Failure>> {
    let mut names = FxHashMap::default();
    let mut owners: FxHashMap<String, DeclName> = FxHashMap::default();
    let mut failures = Vec::new();

    for node in tree.leaves() {
        let leaf = node.name();
        if names.contains_key(leaf) {
            continue;
        }
        let name = nested_name(query, leaf);
        match owners.get(&name) {
            Some(owner) => failures.push(fail_at(
                query,
                holder,
                FailureKind::AmbiguousLookupName {
                    name: name.clone(),
                    leaf: leaf.clone(),
                    taken_by: owner.clone(),
                },
                leaf,
            )),
            None => {
                owners.insert(name.clone(), leaf.clone());
            }
        }
        names.insert(leaf.clone(), name);
    }

    if failures.is_empty() {
        Ok(names)
    } else {
        Err(failures)
    }
}

/// `Outer_Inner_Leaf` for a leaf nested in `Inner` nested in `Outer`.
fn nested_name<Q: HierarchyQuery + ?Sized>(query: &Q, leaf: &DeclName) -> String {
    let mut segments = vec![leaf.simple_name().to_string()];
    let mut seen = FxHashSet::default();
    let mut current = query.enclosing(leaf);
    while let Some(enclosing) = current {
        if !seen.insert(enclosing.clone()) {
            break;
        }
        current = query.enclosing(&enclosing);
        segments.push(enclosing.simple_name().to_string());
    }
    segments.reverse();
    segments.join("_")
}

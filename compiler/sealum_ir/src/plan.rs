//! Generation plans: everything code emission needs, nothing it renders.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::{DeclName, HierarchySpec, TraversalPolicy, Visibility};

/// Leaf identities in traversal order; each leaf appears exactly once.
pub type FlattenedOrder = Vec<DeclName>;

/// One terminal variant as seen by generated lookup code.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantEntry {
    pub ordinal: usize,
    /// Lookup name: enclosing type names, then the leaf's, joined with `_`.
    /// Unique within a plan.
    pub name: String,
    pub leaf: DeclName,
}

/// Names of the artifacts generated for one traversal order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactNames {
    /// The object exposing `values`, `ordinalOf`, `nameOf` and `valueOf`.
    pub sealed_enum: String,
    /// Extension property on the holder listing every variant.
    pub values_accessor: String,
    /// Extension function on the holder resolving a variant by name.
    pub value_of_fn: String,
    /// Enum-style representation, used only when one was requested.
    pub enum_type: String,
    /// Declared visibility of every artifact above.
    pub visibility: Visibility,
}

impl ArtifactNames {
    /// Names for `root` under `policy`.
    ///
    /// For root `Shape`: `ShapeSealedEnum`/`values`/`valueOf`/`ShapeEnum`
    /// under the default policy and `ShapeLevelOrderSealedEnum`/
    /// `levelOrderValues`/`levelOrderValueOf`/`ShapeLevelOrderEnum` under
    /// level order.
    pub fn for_policy(root: &DeclName, policy: TraversalPolicy, visibility: Visibility) -> Self {
        let base = root.simple_name();
        let prefix = policy.artifact_prefix();
        ArtifactNames {
            sealed_enum: format!("{base}{prefix}SealedEnum"),
            values_accessor: lower_first(&format!("{prefix}Values")),
            value_of_fn: lower_first(&format!("{prefix}ValueOf")),
            enum_type: format!("{base}{prefix}Enum"),
            visibility,
        }
    }
}

/// Lowercase the first character (`LevelOrderValues` -> `levelOrderValues`).
fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Enum-style representation of one order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumArtifact {
    pub type_name: String,
    /// Constant names in order; index equals the variant ordinal.
    pub constants: Vec<String>,
    /// Interfaces the enum implements, shared across the plan's orders.
    pub interfaces: Arc<BTreeSet<DeclName>>,
}

/// The flattened order and derived artifacts for one traversal policy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedOrder {
    pub policy: TraversalPolicy,
    pub order: FlattenedOrder,
    pub entries: Vec<VariantEntry>,
    pub artifacts: ArtifactNames,
    pub enum_artifact: Option<EnumArtifact>,
}

impl PlannedOrder {
    /// Number of variants in this order.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of `leaf` in this order.
    pub fn ordinal_of(&self, leaf: &DeclName) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| &entry.leaf == leaf)
            .map(|entry| entry.ordinal)
    }

    /// Lookup name of `leaf`.
    pub fn name_of(&self, leaf: &DeclName) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| &entry.leaf == leaf)
            .map(|entry| entry.name.as_str())
    }

    /// Resolve a lookup name back to its leaf.
    pub fn value_of(&self, name: &str) -> Option<&DeclName> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.leaf)
    }
}

/// Validated, fully computed description of the artifacts for one root.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationPlan {
    spec: HierarchySpec,
    orders: BTreeMap<TraversalPolicy, PlannedOrder>,
    interfaces: Option<Arc<BTreeSet<DeclName>>>,
}

impl GenerationPlan {
    pub fn new(
        spec: HierarchySpec,
        orders: BTreeMap<TraversalPolicy, PlannedOrder>,
        interfaces: Option<Arc<BTreeSet<DeclName>>>,
    ) -> Self {
        GenerationPlan {
            spec,
            orders,
            interfaces,
        }
    }

    pub fn spec(&self) -> &HierarchySpec {
        &self.spec
    }

    pub fn root(&self) -> &DeclName {
        self.spec.root()
    }

    /// Visibility every generated artifact of this plan is declared with.
    pub fn artifact_visibility(&self) -> Visibility {
        self.spec.artifact_visibility()
    }

    /// Planned orders keyed by policy, iterated in policy order.
    pub fn orders(&self) -> &BTreeMap<TraversalPolicy, PlannedOrder> {
        &self.orders
    }

    pub fn order(&self, policy: TraversalPolicy) -> Option<&PlannedOrder> {
        self.orders.get(&policy)
    }

    /// Interfaces of the root and its supertypes; present only when some
    /// order requested an enum artifact.
    pub fn interfaces(&self) -> Option<&BTreeSet<DeclName>> {
        self.interfaces.as_deref()
    }
}

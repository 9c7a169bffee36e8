//! Validated hierarchy of one annotated root.

use crate::{DeclName, TypeParameter, VariantNode, Visibility};

/// The validated, immutable result of building one closed hierarchy.
///
/// Only the tree builder constructs these, after every node has passed
/// visibility and leaf-kind validation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct HierarchySpec {
    root: DeclName,
    root_visibility: Visibility,
    holder: DeclName,
    holder_visibility: Visibility,
    tree: VariantNode,
    type_parameters: Vec<TypeParameter>,
}

impl HierarchySpec {
    pub fn new(
        root: DeclName,
        root_visibility: Visibility,
        holder: DeclName,
        holder_visibility: Visibility,
        tree: VariantNode,
        type_parameters: Vec<TypeParameter>,
    ) -> Self {
        debug_assert_eq!(tree.name(), &root, "tree must be rooted at the hierarchy root");
        HierarchySpec {
            root,
            root_visibility,
            holder,
            holder_visibility,
            tree,
            type_parameters,
        }
    }

    /// The closed-hierarchy root declaration.
    pub fn root(&self) -> &DeclName {
        &self.root
    }

    pub fn root_visibility(&self) -> Visibility {
        self.root_visibility
    }

    /// The annotated companion declaration that requested generation.
    pub fn holder(&self) -> &DeclName {
        &self.holder
    }

    pub fn holder_visibility(&self) -> Visibility {
        self.holder_visibility
    }

    /// Generated artifacts may never be more visible than what they expose.
    pub fn artifact_visibility(&self) -> Visibility {
        self.root_visibility.max(self.holder_visibility)
    }

    /// The root branch of the variant tree.
    pub fn tree(&self) -> &VariantNode {
        &self.tree
    }

    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    /// Total number of distinct terminal variants.
    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }
}

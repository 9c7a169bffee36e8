//! Traversal policies and the order requests that select them.

use std::fmt;
use std::str::FromStr;

use crate::SourcePosition;

/// A deterministic rule for flattening a variant tree into a leaf sequence.
///
/// Leaves are terminal variants; branches are nested closed hierarchies.
/// Every policy is a total function of tree shape: each distinct leaf is
/// produced exactly once and nothing outside the tree influences the order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalPolicy {
    /// Depth-first, children visited in stored declaration order.
    #[default]
    DeclarationOrder,
    /// A branch's own leaves first, then each child branch.
    PreOrder,
    /// First child branch, then own leaves, then the remaining branches.
    InOrder,
    /// Child branches first, then own leaves.
    PostOrder,
    /// Breadth-first over branches, emitting each branch's own leaves.
    LevelOrder,
}

impl TraversalPolicy {
    /// All policies, in declaration order of this enum.
    pub const ALL: [TraversalPolicy; 5] = [
        TraversalPolicy::DeclarationOrder,
        TraversalPolicy::PreOrder,
        TraversalPolicy::InOrder,
        TraversalPolicy::PostOrder,
        TraversalPolicy::LevelOrder,
    ];

    /// Canonical kebab-case tag.
    pub fn tag(self) -> &'static str {
        match self {
            TraversalPolicy::DeclarationOrder => "declaration-order",
            TraversalPolicy::PreOrder => "pre-order",
            TraversalPolicy::InOrder => "in-order",
            TraversalPolicy::PostOrder => "post-order",
            TraversalPolicy::LevelOrder => "level-order",
        }
    }

    /// Prefix for generated artifact names.
    ///
    /// The default policy generates unprefixed names (`ShapeSealedEnum`,
    /// `values`); every other policy is prefixed (`ShapeLevelOrderSealedEnum`,
    /// `levelOrderValues`) so several orders can coexist on one root.
    pub fn artifact_prefix(self) -> &'static str {
        match self {
            TraversalPolicy::DeclarationOrder => "",
            TraversalPolicy::PreOrder => "PreOrder",
            TraversalPolicy::InOrder => "InOrder",
            TraversalPolicy::PostOrder => "PostOrder",
            TraversalPolicy::LevelOrder => "LevelOrder",
        }
    }
}

impl fmt::Display for TraversalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error parsing a free-form policy tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown traversal policy `{tag}`")]
pub struct UnknownTraversalPolicy {
    pub tag: String,
}

impl FromStr for TraversalPolicy {
    type Err = UnknownTraversalPolicy;

    /// Accepts `declaration-order`, `DECLARATION_ORDER`, `declarationOrder`
    /// and the like. An empty tag selects the default policy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "" | "declarationorder" | "declaration" => Ok(TraversalPolicy::DeclarationOrder),
            "preorder" => Ok(TraversalPolicy::PreOrder),
            "inorder" => Ok(TraversalPolicy::InOrder),
            "postorder" => Ok(TraversalPolicy::PostOrder),
            "levelorder" => Ok(TraversalPolicy::LevelOrder),
            _ => Err(UnknownTraversalPolicy { tag: s.to_string() }),
        }
    }
}

/// One traversal requested on a holder by an annotation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderRequest {
    pub policy: TraversalPolicy,
    /// Also plan an enum-style representation for this order.
    pub wants_enum_artifact: bool,
    /// Where the requesting annotation was written.
    pub position: Option<SourcePosition>,
}

impl OrderRequest {
    pub fn new(policy: TraversalPolicy) -> Self {
        OrderRequest {
            policy,
            wants_enum_artifact: false,
            position: None,
        }
    }

    #[must_use]
    pub fn with_enum_artifact(mut self, wants: bool) -> Self {
        self.wants_enum_artifact = wants;
        self
    }

    #[must_use]
    pub fn at(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }
}

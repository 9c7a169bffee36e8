//! Sealum IR - data types shared by every phase of the planner.
//!
//! This crate holds the vocabulary of closed-hierarchy planning:
//! - [`DeclName`] identities and [`SourcePosition`]s reported by the host
//! - Visibility and type parameter metadata of declarations
//! - [`TraversalPolicy`] and the [`OrderRequest`]s attached to a holder
//! - The validated [`VariantNode`] tree and its [`HierarchySpec`]
//! - The final [`GenerationPlan`] handed to code emission
//!
//! Nothing here performs validation against the host symbol model; every
//! value is plain data that is cheap to clone and safe to send across
//! threads.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-cloned types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod hierarchy;
mod name;
mod node;
mod plan;
mod policy;
mod position;
mod visibility;

pub use hierarchy::HierarchySpec;
pub use name::DeclName;
pub use node::VariantNode;
pub use plan::{
    ArtifactNames, EnumArtifact, FlattenedOrder, GenerationPlan, PlannedOrder, VariantEntry,
};
pub use policy::{OrderRequest, UnknownTraversalPolicy, TraversalPolicy};
pub use position::SourcePosition;
pub use visibility::{DeclaredVisibility, TypeParameter, Variance, Visibility};

// DeclName is a fat Arc<str> pointer; keep it two words.
#[cfg(target_pointer_width = "64")]
static_assert_size!(DeclName, 16);

//! The boundary to the host symbol model.

use sealum_ir::{DeclName, DeclaredVisibility, OrderRequest, SourcePosition, TypeParameter};

/// Direct subtypes of a closed hierarchy, as two ordered passes.
///
/// `outside` lists subtypes found in the lexical container (file) of the
/// hierarchy, in source order; hosts may include nested declarations here
/// too. `inside` lists subtypes declared within the hierarchy's own body.
/// [`merge_passes`](crate::merge_passes) turns the pair into child order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct DeclarationPasses {
    pub outside: Vec<DeclName>,
    pub inside: Vec<DeclName>,
}

/// Read-only facts about declarations.
///
/// Implementations must be synchronous and side-effect free: the planner
/// may ask the same question many times, from several threads, and expects
/// the same answer. No validation happens on this side.
pub trait HierarchyQuery {
    /// Direct subtypes of `of`.
    fn children(&self, of: &DeclName) -> DeclarationPasses;

    fn visibility(&self, of: &DeclName) -> DeclaredVisibility;

    /// Whether `of` is a closed (sealed) hierarchy root.
    fn is_closed_hierarchy_root(&self, of: &DeclName) -> bool;

    /// Whether `of` is a singleton-like terminal variant.
    fn is_terminal_variant(&self, of: &DeclName) -> bool;

    /// Interfaces `of` directly declares it implements or extends.
    fn declared_interfaces(&self, of: &DeclName) -> Vec<DeclName>;

    /// Direct nominal supertypes of `of` that are not interfaces.
    fn supertypes(&self, of: &DeclName) -> Vec<DeclName>;

    /// Order requests annotated on `of`, each tagged with its position.
    fn order_requests(&self, of: &DeclName) -> Vec<OrderRequest>;

    /// The declaration lexically enclosing `of`, if it is a type.
    fn enclosing(&self, of: &DeclName) -> Option<DeclName>;

    /// Whether `of` is the companion (holder) declaration of its enclosing type.
    fn is_companion_holder(&self, of: &DeclName) -> bool;

    fn type_parameters(&self, of: &DeclName) -> Vec<TypeParameter>;

    fn position(&self, of: &DeclName) -> Option<SourcePosition>;
}

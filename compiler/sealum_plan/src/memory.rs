//! In-memory hierarchy for tests and for hosts that already hold a
//! resolved symbol table.
//!
//! Declarations are recorded in the order they are declared, which is the
//! source order the query reports:
//!
//! ```text
//! let mut h = MemoryHierarchy::new();
//! h.closed_root("shapes.Shape");
//! h.companion("shapes.Shape.Companion", "shapes.Shape")
//!     .request(OrderRequest::new(TraversalPolicy::DeclarationOrder));
//! h.terminal("shapes.Circle", "shapes.Shape");
//! h.closed_branch("shapes.Polygon", "shapes.Shape");
//! h.terminal("shapes.Square", "shapes.Polygon");
//! ```

use std::collections::hash_map::Entry;

use rustc_hash::{FxHashMap, FxHashSet};
use sealum_ir::{
    DeclName, DeclaredVisibility, OrderRequest, SourcePosition, TypeParameter,
};

use crate::{DeclarationPasses, HierarchyQuery};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum DeclKind {
    ClosedRoot,
    Terminal,
    Companion,
    Interface,
    /// An ordinary class: neither closed nor a singleton.
    Open,
}

#[derive(Clone, Debug)]
struct DeclInfo {
    kind: DeclKind,
    visibility: DeclaredVisibility,
    position: Option<SourcePosition>,
    /// Lexically enclosing declaration.
    enclosing: Option<DeclName>,
    /// The closed hierarchy this declaration is a direct subtype of.
    subtype_of: Option<DeclName>,
    extends: Vec<DeclName>,
    interfaces: Vec<DeclName>,
    type_parameters: Vec<TypeParameter>,
    requests: Vec<OrderRequest>,
}

impl DeclInfo {
    fn new(kind: DeclKind) -> Self {
        DeclInfo {
            kind,
            visibility: DeclaredVisibility::Public,
            position: None,
            enclosing: None,
            subtype_of: None,
            extends: Vec::new(),
            interfaces: Vec::new(),
            type_parameters: Vec::new(),
            requests: Vec::new(),
        }
    }
}

/// A hierarchy held entirely in memory.
///
/// Unknown names answer like an open, public, position-less class.
#[derive(Clone, Debug, Default)]
pub struct MemoryHierarchy {
    decls: FxHashMap<DeclName, DeclInfo>,
    /// Declaration order.
    order: Vec<DeclName>,
}

impl MemoryHierarchy {
    pub fn new() -> Self {
        MemoryHierarchy::default()
    }

    fn declare(&mut self, name: impl Into<DeclName>, info: DeclInfo) -> DeclBuilder<'_> {
        let info = match self.decls.entry(name.into()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                *slot = info;
                slot
            }
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(info)
            }
        };
        DeclBuilder { info }
    }

    /// A top-level closed hierarchy root.
    pub fn closed_root(&mut self, name: impl Into<DeclName>) -> DeclBuilder<'_> {
        self.declare(name, DeclInfo::new(DeclKind::ClosedRoot))
    }

    /// A closed hierarchy nested as a subtype of `parent`.
    pub fn closed_branch(
        &mut self,
        name: impl Into<DeclName>,
        parent: impl Into<DeclName>,
    ) -> DeclBuilder<'_> {
        let mut info = DeclInfo::new(DeclKind::ClosedRoot);
        info.subtype_of = Some(parent.into());
        self.declare(name, info)
    }

    /// A singleton variant, subtype of `parent`.
    pub fn terminal(
        &mut self,
        name: impl Into<DeclName>,
        parent: impl Into<DeclName>,
    ) -> DeclBuilder<'_> {
        let mut info = DeclInfo::new(DeclKind::Terminal);
        info.subtype_of = Some(parent.into());
        self.declare(name, info)
    }

    /// An ordinary (non-singleton, non-closed) subtype of `parent`.
    pub fn open_subtype(
        &mut self,
        name: impl Into<DeclName>,
        parent: impl Into<DeclName>,
    ) -> DeclBuilder<'_> {
        let mut info = DeclInfo::new(DeclKind::Open);
        info.subtype_of = Some(parent.into());
        self.declare(name, info)
    }

    /// An ordinary class with no closed supertype.
    pub fn open_class(&mut self, name: impl Into<DeclName>) -> DeclBuilder<'_> {
        self.declare(name, DeclInfo::new(DeclKind::Open))
    }

    pub fn interface(&mut self, name: impl Into<DeclName>) -> DeclBuilder<'_> {
        self.declare(name, DeclInfo::new(DeclKind::Interface))
    }

    /// The companion declaration nested in `owner`.
    pub fn companion(
        &mut self,
        name: impl Into<DeclName>,
        owner: impl Into<DeclName>,
    ) -> DeclBuilder<'_> {
        let mut info = DeclInfo::new(DeclKind::Companion);
        info.enclosing = Some(owner.into());
        self.declare(name, info)
    }

    /// Whether `name` is lexically nested, at any depth, inside `container`.
    ///
    /// A malformed `enclosing` cycle ends the walk.
    fn is_nested_in(&self, name: &DeclName, container: &DeclName) -> bool {
        let mut seen = FxHashSet::default();
        let mut current = self.decls.get(name).and_then(|d| d.enclosing.as_ref());
        while let Some(enclosing) = current {
            if enclosing == container {
                return true;
            }
            if !seen.insert(enclosing) {
                return false;
            }
            current = self.decls.get(enclosing).and_then(|d| d.enclosing.as_ref());
        }
        false
    }
}

/// Chainable setters for the declaration just recorded.
pub struct DeclBuilder<'a> {
    info: &'a mut DeclInfo,
}

impl DeclBuilder<'_> {
    pub fn visibility(self, visibility: DeclaredVisibility) -> Self {
        self.info.visibility = visibility;
        self
    }

    pub fn at(self, file: &str, line: u32, column: u32) -> Self {
        self.info.position = Some(SourcePosition::new(file, line, column));
        self
    }

    /// Declare this inside the body of `container`.
    pub fn nested_in(self, container: impl Into<DeclName>) -> Self {
        self.info.enclosing = Some(container.into());
        self
    }

    /// Add a non-interface supertype.
    pub fn extends(self, supertype: impl Into<DeclName>) -> Self {
        self.info.extends.push(supertype.into());
        self
    }

    pub fn implements(self, interface: impl Into<DeclName>) -> Self {
        self.info.interfaces.push(interface.into());
        self
    }

    pub fn type_parameter(self, parameter: TypeParameter) -> Self {
        self.info.type_parameters.push(parameter);
        self
    }

    pub fn request(self, request: OrderRequest) -> Self {
        self.info.requests.push(request);
        self
    }
}

impl HierarchyQuery for MemoryHierarchy {
    fn children(&self, of: &DeclName) -> DeclarationPasses {
        let subtypes = self
            .order
            .iter()
            .filter(|name| {
                self.decls
                    .get(*name)
                    .is_some_and(|d| d.subtype_of.as_ref() == Some(of))
            });

        let mut passes = DeclarationPasses::default();
        for name in subtypes {
            passes.outside.push(name.clone());
            if self.is_nested_in(name, of) {
                passes.inside.push(name.clone());
            }
        }
        passes
    }

    fn visibility(&self, of: &DeclName) -> DeclaredVisibility {
        self.decls
            .get(of)
            .map_or(DeclaredVisibility::Public, |d| d.visibility)
    }

    fn is_closed_hierarchy_root(&self, of: &DeclName) -> bool {
        self.decls
            .get(of)
            .is_some_and(|d| d.kind == DeclKind::ClosedRoot)
    }

    fn is_terminal_variant(&self, of: &DeclName) -> bool {
        self.decls
            .get(of)
            .is_some_and(|d| d.kind == DeclKind::Terminal)
    }

    fn declared_interfaces(&self, of: &DeclName) -> Vec<DeclName> {
        self.decls
            .get(of)
            .map(|d| d.interfaces.clone())
            .unwrap_or_default()
    }

    fn supertypes(&self, of: &DeclName) -> Vec<DeclName> {
        self.decls
            .get(of)
            .map(|d| d.subtype_of.iter().chain(&d.extends).cloned().collect())
            .unwrap_or_default()
    }

    fn order_requests(&self, of: &DeclName) -> Vec<OrderRequest> {
        self.decls
            .get(of)
            .map(|d| d.requests.clone())
            .unwrap_or_default()
    }

    fn enclosing(&self, of: &DeclName) -> Option<DeclName> {
        self.decls.get(of).and_then(|d| d.enclosing.clone())
    }

    fn is_companion_holder(&self, of: &DeclName) -> bool {
        self.decls
            .get(of)
            .is_some_and(|d| d.kind == DeclKind::Companion)
    }

    fn type_parameters(&self, of: &DeclName) -> Vec<TypeParameter> {
        self.decls
            .get(of)
            .map(|d| d.type_parameters.clone())
            .unwrap_or_default()
    }

    fn position(&self, of: &DeclName) -> Option<SourcePosition> {
        self.decls.get(of).and_then(|d| d.position.clone())
    }
}

#[cfg(test)]
mod tests;

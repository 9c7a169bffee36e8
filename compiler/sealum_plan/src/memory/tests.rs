use pretty_assertions::assert_eq;
use sealum_ir::{DeclName, DeclaredVisibility, OrderRequest, TraversalPolicy};

use super::MemoryHierarchy;
use crate::{DeclarationPasses, HierarchyQuery};

fn names(raw: &[&str]) -> Vec<DeclName> {
    raw.iter().copied().map(DeclName::from).collect()
}

#[test]
fn children_report_both_passes() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.terminal("s.Circle", "s.Shape");
    h.terminal("s.Square", "s.Shape").nested_in("s.Shape");
    h.terminal("s.Dot", "s.Shape");

    assert_eq!(
        h.children(&"s.Shape".into()),
        DeclarationPasses {
            outside: names(&["s.Circle", "s.Square", "s.Dot"]),
            inside: names(&["s.Square"]),
        }
    );
}

#[test]
fn deep_nesting_counts_as_inside() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.open_class("s.Shape.Inner").nested_in("s.Shape");
    h.terminal("s.Shape.Inner.Deep", "s.Shape").nested_in("s.Shape.Inner");

    assert_eq!(h.children(&"s.Shape".into()).inside, names(&["s.Shape.Inner.Deep"]));
}

#[test]
fn enclosing_cycle_does_not_hang_children() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.open_class("s.A").nested_in("s.B");
    h.open_class("s.B").nested_in("s.A");
    h.terminal("s.Leaf", "s.Shape").nested_in("s.A");

    assert_eq!(
        h.children(&"s.Shape".into()),
        DeclarationPasses {
            outside: names(&["s.Leaf"]),
            inside: Vec::new(),
        }
    );
}

#[test]
fn redeclaring_keeps_first_position_in_order() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.terminal("s.A", "s.Shape");
    h.terminal("s.B", "s.Shape");
    h.terminal("s.A", "s.Shape").visibility(DeclaredVisibility::Internal);

    assert_eq!(h.children(&"s.Shape".into()).outside, names(&["s.A", "s.B"]));
    assert_eq!(h.visibility(&"s.A".into()), DeclaredVisibility::Internal);
}

#[test]
fn kinds_are_reported() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.companion("s.Shape.Companion", "s.Shape");
    h.terminal("s.Circle", "s.Shape");
    h.closed_branch("s.Polygon", "s.Shape");
    h.open_subtype("s.Blob", "s.Shape");

    assert!(h.is_closed_hierarchy_root(&"s.Shape".into()));
    assert!(h.is_closed_hierarchy_root(&"s.Polygon".into()));
    assert!(h.is_terminal_variant(&"s.Circle".into()));
    assert!(!h.is_terminal_variant(&"s.Blob".into()));
    assert!(!h.is_closed_hierarchy_root(&"s.Blob".into()));
    assert!(h.is_companion_holder(&"s.Shape.Companion".into()));
    assert_eq!(h.enclosing(&"s.Shape.Companion".into()), Some("s.Shape".into()));
}

#[test]
fn unknown_names_answer_neutrally() {
    let h = MemoryHierarchy::new();
    let ghost = DeclName::from("nowhere.Ghost");

    assert_eq!(h.children(&ghost), DeclarationPasses::default());
    assert_eq!(h.visibility(&ghost), DeclaredVisibility::Public);
    assert!(!h.is_closed_hierarchy_root(&ghost));
    assert!(!h.is_companion_holder(&ghost));
    assert_eq!(h.enclosing(&ghost), None);
    assert_eq!(h.position(&ghost), None);
}

#[test]
fn supertypes_include_closed_parent_and_extends() {
    let mut h = MemoryHierarchy::new();
    h.open_class("s.Base");
    h.closed_root("s.Shape").extends("s.Base").implements("s.Drawable");

    assert_eq!(h.supertypes(&"s.Shape".into()), names(&["s.Base"]));
    assert_eq!(h.declared_interfaces(&"s.Shape".into()), names(&["s.Drawable"]));

    h.terminal("s.Circle", "s.Shape").extends("s.Base");
    assert_eq!(h.supertypes(&"s.Circle".into()), names(&["s.Shape", "s.Base"]));
}

#[test]
fn requests_and_positions_round_trip() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.companion("s.Shape.Companion", "s.Shape")
        .at("Shape.kt", 4, 5)
        .request(OrderRequest::new(TraversalPolicy::LevelOrder).with_enum_artifact(true));

    let holder = DeclName::from("s.Shape.Companion");
    let requests = h.order_requests(&holder);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].policy, TraversalPolicy::LevelOrder);
    assert!(requests[0].wants_enum_artifact);
    assert_eq!(
        h.position(&holder).map(|p| p.to_string()),
        Some("Shape.kt:4:5".to_string())
    );
}

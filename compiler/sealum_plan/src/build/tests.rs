use pretty_assertions::assert_eq;
use sealum_diagnostic::FailureKind;
use sealum_ir::{
    DeclName, DeclaredVisibility, SourcePosition, TypeParameter, Variance, VariantNode,
};

use super::{build, merge_passes};
use crate::{DeclarationPasses, HierarchyQuery, MemoryHierarchy};

fn names(raw: &[&str]) -> Vec<DeclName> {
    raw.iter().copied().map(DeclName::from).collect()
}

fn holder() -> DeclName {
    DeclName::from("s.Shape.Companion")
}

/// `Shape { Circle, Polygon { Square, Triangle } }`
fn shapes() -> MemoryHierarchy {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.companion("s.Shape.Companion", "s.Shape");
    h.terminal("s.Circle", "s.Shape").at("Shape.kt", 4, 1);
    h.closed_branch("s.Polygon", "s.Shape");
    h.terminal("s.Square", "s.Polygon").at("Shape.kt", 6, 1);
    h.terminal("s.Triangle", "s.Polygon").at("Shape.kt", 7, 1);
    h
}

#[test]
fn merge_keeps_outside_order_without_overlap() {
    let merged = merge_passes(DeclarationPasses {
        outside: names(&["A", "B"]),
        inside: names(&["C"]),
    });
    assert_eq!(merged, names(&["A", "B", "C"]));
}

#[test]
fn merge_moves_inside_declarations_after_outside_ones() {
    // The file pass sees the nested `B` before `C`; the body pass wins.
    let merged = merge_passes(DeclarationPasses {
        outside: names(&["A", "B", "C"]),
        inside: names(&["B"]),
    });
    assert_eq!(merged, names(&["A", "C", "B"]));
}

#[test]
fn merge_drops_exact_duplicates_within_a_pass() {
    let merged = merge_passes(DeclarationPasses {
        outside: names(&["A", "A", "B"]),
        inside: names(&["C", "C"]),
    });
    assert_eq!(merged, names(&["A", "B", "C"]));
}

#[test]
fn merge_of_empty_passes_is_empty() {
    assert!(merge_passes(DeclarationPasses::default()).is_empty());
}

#[test]
fn builds_nested_tree_in_declaration_order() {
    let spec = build(&shapes(), &holder()).unwrap();

    let expected = VariantNode::branch(
        "s.Shape",
        vec![
            VariantNode::leaf("s.Circle", Some(SourcePosition::new("Shape.kt", 4, 1))),
            VariantNode::branch(
                "s.Polygon",
                vec![
                    VariantNode::leaf("s.Square", Some(SourcePosition::new("Shape.kt", 6, 1))),
                    VariantNode::leaf("s.Triangle", Some(SourcePosition::new("Shape.kt", 7, 1))),
                ],
            ),
        ],
    );
    assert_eq!(spec.tree(), &expected);
    assert_eq!(spec.root(), &DeclName::from("s.Shape"));
    assert_eq!(spec.holder(), &holder());
    assert_eq!(spec.leaf_count(), 3);
}

#[test]
fn body_declarations_follow_file_declarations() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.companion("s.Shape.Companion", "s.Shape");
    h.terminal("s.Shape.Inner", "s.Shape").nested_in("s.Shape");
    h.terminal("s.Outer", "s.Shape");

    let spec = build(&h, &holder()).unwrap();
    let order: Vec<&DeclName> = spec.tree().children().iter().map(VariantNode::name).collect();
    assert_eq!(order, vec![&DeclName::from("s.Outer"), &DeclName::from("s.Shape.Inner")]);
}

#[test]
fn leaf_count_matches_reachable_terminals() {
    let mut h = shapes();
    h.closed_branch("s.Polygon.Regular", "s.Polygon");
    h.terminal("s.Hexagon", "s.Polygon.Regular");
    h.terminal("s.Octagon", "s.Polygon.Regular");

    let spec = build(&h, &holder()).unwrap();
    assert_eq!(spec.leaf_count(), 5);
    assert_eq!(spec.tree().depth(), 4);
}

#[test]
fn empty_hierarchy_builds() {
    let mut h = MemoryHierarchy::new();
    h.closed_root("s.Shape");
    h.companion("s.Shape.Companion", "s.Shape");

    let spec = build(&h, &holder()).unwrap();
    assert_eq!(spec.tree(), &VariantNode::branch("s.Shape", Vec::new()));
}

#[test]
fn root_type_parameters_are_carried() {
    let mut h = shapes();
    h.closed_root("s.Shape")
        .type_parameter(TypeParameter::new("T", Variance::Out));

    let spec = build(&h, &holder()).unwrap();
    assert_eq!(spec.type_parameters(), &[TypeParameter::new("T", Variance::Out)]);
}

#[test]
fn invalid_child_visibility_blames_the_child() {
    let mut h = shapes();
    h.terminal("s.Triangle", "s.Polygon")
        .visibility(DeclaredVisibility::Private)
        .at("Shape.kt", 7, 1);

    let failures = build(&h, &holder()).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert_eq!(
        failures[0].kind,
        FailureKind::InvalidVisibility {
            name: "s.Triangle".into(),
            found: DeclaredVisibility::Private,
        }
    );
    assert_eq!(failures[0].root, holder());
    assert_eq!(failures[0].position, Some(SourcePosition::new("Shape.kt", 7, 1)));
}

#[test]
fn all_child_violations_surface_in_one_pass() {
    let mut h = shapes();
    h.open_subtype("s.Blob", "s.Shape");
    h.terminal("s.Square", "s.Polygon").visibility(DeclaredVisibility::Protected);
    h.open_subtype("s.Polygon.Weird", "s.Polygon").visibility(DeclaredVisibility::Private);

    let kinds: Vec<FailureKind> = build(&h, &holder())
        .unwrap_err()
        .into_iter()
        .map(|f| f.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            FailureKind::InvalidVisibility {
                name: "s.Square".into(),
                found: DeclaredVisibility::Protected,
            },
            FailureKind::InvalidVisibility {
                name: "s.Polygon.Weird".into(),
                found: DeclaredVisibility::Private,
            },
            FailureKind::NonTerminalNonHierarchyChild("s.Polygon.Weird".into()),
            FailureKind::NonTerminalNonHierarchyChild("s.Blob".into()),
        ]
    );
}

#[test]
fn root_shape_failure_short_circuits() {
    let mut h = shapes();
    h.open_subtype("s.Blob", "s.Shape");
    h.closed_root("s.Shape").visibility(DeclaredVisibility::Private);

    let failures = build(&h, &holder()).unwrap_err();
    assert_eq!(failures.len(), 1);
    assert!(matches!(
        failures[0].kind,
        FailureKind::InvalidVisibility { ref name, .. } if name == &DeclName::from("s.Shape")
    ));
}

/// A query that reports a branch as its own descendant.
struct Looping(MemoryHierarchy);

impl HierarchyQuery for Looping {
    fn children(&self, of: &DeclName) -> DeclarationPasses {
        if of.as_str() == "s.Polygon" {
            return DeclarationPasses {
                outside: names(&["s.Shape"]),
                inside: Vec::new(),
            };
        }
        self.0.children(of)
    }
    fn visibility(&self, of: &DeclName) -> DeclaredVisibility {
        self.0.visibility(of)
    }
    fn is_closed_hierarchy_root(&self, of: &DeclName) -> bool {
        self.0.is_closed_hierarchy_root(of)
    }
    fn is_terminal_variant(&self, of: &DeclName) -> bool {
        self.0.is_terminal_variant(of)
    }
    fn declared_interfaces(&self, of: &DeclName) -> Vec<DeclName> {
        self.0.declared_interfaces(of)
    }
    fn supertypes(&self, of: &DeclName) -> Vec<DeclName> {
        self.0.supertypes(of)
    }
    fn order_requests(&self, of: &DeclName) -> Vec<sealum_ir::OrderRequest> {
        self.0.order_requests(of)
    }
    fn enclosing(&self, of: &DeclName) -> Option<DeclName> {
        self.0.enclosing(of)
    }
    fn is_companion_holder(&self, of: &DeclName) -> bool {
        self.0.is_companion_holder(of)
    }
    fn type_parameters(&self, of: &DeclName) -> Vec<TypeParameter> {
        self.0.type_parameters(of)
    }
    fn position(&self, of: &DeclName) -> Option<SourcePosition> {
        self.0.position(of)
    }
}

#[test]
fn cyclic_query_is_reported_not_followed() {
    let failures = build(&Looping(shapes()), &holder()).unwrap_err();
    assert_eq!(
        failures.into_iter().map(|f| f.kind).collect::<Vec<_>>(),
        vec![FailureKind::CyclicHierarchy("s.Shape".into())]
    );
}

#[test]
fn deep_nesting_does_not_overflow() {
    const DEPTH: usize = 2_000;

    let mut h = MemoryHierarchy::new();
    h.closed_root("n0");
    h.companion("n0.Companion", "n0");
    for level in 1..DEPTH {
        h.closed_branch(format!("n{level}"), format!("n{}", level - 1));
    }
    h.terminal("leaf", format!("n{}", DEPTH - 1));

    let spec = build(&h, &"n0.Companion".into()).unwrap();
    assert_eq!(spec.leaf_count(), 1);
    assert_eq!(spec.tree().depth(), DEPTH + 1);
}

//! Typed planning failures.

use sealum_ir::{DeclName, DeclaredVisibility, SourcePosition, TraversalPolicy};

use crate::{Diagnostic, ErrorCode};

/// What went wrong while planning one root.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum FailureKind {
    /// The enclosing declaration exists but is not a closed hierarchy root.
    #[error("`{0}` is not a closed hierarchy")]
    NotClosedHierarchy(DeclName),

    /// The annotated declaration is not a companion nested in a type.
    #[error("enclosing declaration of `{0}` cannot be resolved")]
    EnclosingNotResolvable(DeclName),

    #[error("`{name}` is {found}, but must be public or internal")]
    InvalidVisibility {
        name: DeclName,
        found: DeclaredVisibility,
    },

    #[error("`{0}` is neither a terminal variant nor a closed hierarchy")]
    NonTerminalNonHierarchyChild(DeclName),

    #[error("traversal policy `{0}` is requested more than once")]
    DuplicateTraversalPolicy(TraversalPolicy),

    #[error("`{0}` appears below itself in the hierarchy")]
    CyclicHierarchy(DeclName),

    /// `leaf` maps to the lookup name already taken by `taken_by`.
    #[error("`{leaf}` and `{taken_by}` share the lookup name `{name}`")]
    AmbiguousLookupName {
        name: String,
        leaf: DeclName,
        taken_by: DeclName,
    },
}

impl FailureKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            FailureKind::NotClosedHierarchy(_) => ErrorCode::E1001,
            FailureKind::EnclosingNotResolvable(_) => ErrorCode::E1002,
            FailureKind::InvalidVisibility { .. } => ErrorCode::E2001,
            FailureKind::NonTerminalNonHierarchyChild(_) => ErrorCode::E2002,
            FailureKind::CyclicHierarchy(_) => ErrorCode::E2003,
            FailureKind::AmbiguousLookupName { .. } => ErrorCode::E2004,
            FailureKind::DuplicateTraversalPolicy(_) => ErrorCode::E3001,
        }
    }

    /// The declaration at fault, if the failure is about a declaration.
    pub fn offending(&self) -> Option<&DeclName> {
        match self {
            FailureKind::NotClosedHierarchy(name)
            | FailureKind::EnclosingNotResolvable(name)
            | FailureKind::InvalidVisibility { name, .. }
            | FailureKind::NonTerminalNonHierarchyChild(name)
            | FailureKind::CyclicHierarchy(name)
            | FailureKind::AmbiguousLookupName { leaf: name, .. } => Some(name),
            FailureKind::DuplicateTraversalPolicy(_) => None,
        }
    }

    fn help(&self) -> String {
        match self {
            FailureKind::NotClosedHierarchy(name) => {
                format!("declare `{}` as a closed (sealed) hierarchy", name.simple_name())
            }
            FailureKind::EnclosingNotResolvable(_) => {
                "place the annotation on the companion of a closed hierarchy".to_string()
            }
            FailureKind::InvalidVisibility { name, .. } => {
                format!("make `{}` public or internal", name.simple_name())
            }
            FailureKind::NonTerminalNonHierarchyChild(name) => format!(
                "make `{}` a singleton variant or a closed hierarchy",
                name.simple_name()
            ),
            FailureKind::DuplicateTraversalPolicy(policy) => {
                format!("remove one of the `{policy}` requests")
            }
            FailureKind::CyclicHierarchy(_) => {
                "this is a symbol model inconsistency; please report it".to_string()
            }
            FailureKind::AmbiguousLookupName { leaf, taken_by, .. } => format!(
                "rename or move `{}` or `{}`",
                leaf.simple_name(),
                taken_by.simple_name()
            ),
        }
    }
}

/// A failure tied to the annotated root it was found under.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Failure {
    /// The annotated declaration whose processing failed.
    pub root: DeclName,
    pub kind: FailureKind,
    /// Position of the offending declaration or request, when known.
    pub position: Option<SourcePosition>,
}

impl Failure {
    pub fn new(root: DeclName, kind: FailureKind, position: Option<SourcePosition>) -> Self {
        Failure {
            root,
            kind,
            position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Ordering used for reproducible reports: root, then position, then
    /// the offending declaration, then code.
    pub fn sort_key(&self) -> (&DeclName, Option<&SourcePosition>, Option<&DeclName>, ErrorCode) {
        (
            &self.root,
            self.position.as_ref(),
            self.kind.offending(),
            self.code(),
        )
    }

    /// Render as a diagnostic for the invoker.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        let mut diagnostic = Diagnostic::error(code)
            .with_message(self.kind.to_string())
            .with_label(self.position.clone(), code.summary())
            .with_suggestion(self.kind.help());

        if self.kind.offending() != Some(&self.root) {
            diagnostic = diagnostic.with_note(format!("while planning `{}`", self.root));
        }
        diagnostic
    }
}

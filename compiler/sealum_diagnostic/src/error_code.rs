//! Error codes for all planner diagnostics.
//!
//! Each code is a unique identifier (e.g. `E2001`) whose first digit names
//! the validation stage. Used for `--explain` lookups and documentation.

use std::fmt;
use std::str::FromStr;

/// Error codes for all planner diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E1xxx: Root shape (the annotated holder and its enclosing root)
/// - E2xxx: Hierarchy tree (children of the root and nested branches)
/// - E3xxx: Order requests attached to the holder
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorCode {
    // Root Shape Errors (E1xxx)
    /// Annotated declaration does not belong to a closed hierarchy
    E1001,
    /// Enclosing declaration of the holder cannot be resolved
    E1002,

    // Tree Errors (E2xxx)
    /// Declaration is neither public nor internal
    E2001,
    /// Child is neither a terminal variant nor a closed hierarchy
    E2002,
    /// Branch appears below itself
    E2003,
    /// Two leaves share one lookup name
    E2004,

    // Request Errors (E3xxx)
    /// Same traversal policy requested twice
    E3001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E3001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
        }
    }

    /// One-line description of what the code means.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "annotated declaration is not for a closed hierarchy",
            ErrorCode::E1002 => "enclosing declaration cannot be resolved",
            ErrorCode::E2001 => "declaration isn't internal or public",
            ErrorCode::E2002 => "closed hierarchy has a non-terminal subtype",
            ErrorCode::E2003 => "closed hierarchy contains itself",
            ErrorCode::E2004 => "two variants share a lookup name",
            ErrorCode::E3001 => "traversal policy requested more than once",
        }
    }

    /// Longer explanation for `--explain`.
    pub fn explain(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => {
                "Generation must be requested on the companion of a closed \
                 hierarchy root. The enclosing declaration was found, but it is \
                 not a closed hierarchy, so its subtypes cannot be enumerated."
            }
            ErrorCode::E1002 => {
                "The annotated declaration must be the companion nested directly \
                 inside a closed hierarchy root. Either the annotation was placed \
                 on something that is not a companion, or the declaration \
                 enclosing it is not a resolvable type."
            }
            ErrorCode::E2001 => {
                "Generated companions reference every declaration of the \
                 hierarchy, so each of them must be public or internal. Private, \
                 protected and local declarations cannot be referenced."
            }
            ErrorCode::E2002 => {
                "Every direct subtype of a closed hierarchy must be either a \
                 terminal variant (a type with exactly one value) or itself a \
                 closed hierarchy whose subtypes follow the same rule."
            }
            ErrorCode::E2003 => {
                "A closed hierarchy was reached again below itself. Hierarchies \
                 declared in source are acyclic; this indicates the symbol model \
                 reported inconsistent subtypes."
            }
            ErrorCode::E2004 => {
                "Each terminal variant is named in generated lookups and enum \
                 constants by its enclosing type names and its own name, joined \
                 with underscores. Two distinct variants produced the same name, \
                 so one of them could never be looked up. Rename or move one of \
                 them."
            }
            ErrorCode::E3001 => {
                "Each traversal policy may be requested at most once per \
                 hierarchy, since every policy generates artifacts with fixed \
                 names. Remove the duplicate request."
            }
        }
    }

    /// Check if this is a root shape error (E1xxx).
    pub fn is_root_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a hierarchy tree error (E2xxx).
    pub fn is_tree_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is an order request error (E3xxx).
    pub fn is_request_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == wanted)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;

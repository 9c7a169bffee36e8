//! Source positions of declarations and annotations.

use std::fmt;
use std::sync::Arc;

/// Location of a declaration or annotation in host source.
///
/// Line and column are 1-based. Positions order by `(file, line, column)`,
/// which is the order diagnostics are reported in.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePosition {
    pub file: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    /// Create a position.
    pub fn new(file: impl AsRef<str>, line: u32, column: u32) -> Self {
        SourcePosition {
            file: Arc::from(file.as_ref()),
            line,
            column,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

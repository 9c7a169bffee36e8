//! Declaration identities.

use std::fmt;
use std::sync::Arc;

/// Qualified name of a declaration, e.g. `shapes.Shape.Circle`.
///
/// Identities are compared and ordered lexicographically. Cloning shares the
/// underlying allocation, so trees and plans can hold names freely.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclName(Arc<str>);

impl DeclName {
    /// Create a name from a qualified string.
    pub fn new(qualified: impl AsRef<str>) -> Self {
        DeclName(Arc::from(qualified.as_ref()))
    }

    /// The full qualified name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last `.`-separated segment (`Circle` for `shapes.Shape.Circle`).
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Iterate the `.`-separated segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The qualified name of the declaration this one is nested in, if any.
    pub fn parent(&self) -> Option<DeclName> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| DeclName::new(parent))
    }
}

impl fmt::Debug for DeclName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclName({})", self.0)
    }
}

impl fmt::Display for DeclName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeclName {
    fn from(value: &str) -> Self {
        DeclName::new(value)
    }
}

impl From<String> for DeclName {
    fn from(value: String) -> Self {
        DeclName(Arc::from(value))
    }
}

impl AsRef<str> for DeclName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Visibility and type parameter metadata.

use std::fmt;

/// Visibility as reported by the host symbol model.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclaredVisibility {
    Public,
    Internal,
    Protected,
    Private,
    /// Declared inside a function body.
    Local,
}

impl fmt::Display for DeclaredVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DeclaredVisibility::Public => "public",
            DeclaredVisibility::Internal => "internal",
            DeclaredVisibility::Protected => "protected",
            DeclaredVisibility::Private => "private",
            DeclaredVisibility::Local => "local",
        };
        f.write_str(text)
    }
}

/// Visibility a planned declaration is allowed to have.
///
/// Generated companions must be able to reference every node, so only
/// `public` and `internal` survive validation.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Internal,
}

impl TryFrom<DeclaredVisibility> for Visibility {
    type Error = DeclaredVisibility;

    fn try_from(value: DeclaredVisibility) -> Result<Self, Self::Error> {
        match value {
            DeclaredVisibility::Public => Ok(Visibility::Public),
            DeclaredVisibility::Internal => Ok(Visibility::Internal),
            other => Err(other),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Internal => f.write_str("internal"),
        }
    }
}

/// Declaration-site variance of a type parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Variance {
    #[default]
    Invariant,
    In,
    Out,
}

/// A type parameter declared on the hierarchy root.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeParameter {
    pub name: String,
    pub variance: Variance,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>, variance: Variance) -> Self {
        TypeParameter {
            name: name.into(),
            variance,
        }
    }

    /// Generated companions refer to the root with every parameter
    /// star-projected, since a singleton variant fixes no arguments.
    pub fn projection(&self) -> &'static str {
        "*"
    }
}

//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], the building blocks every failure
//! is rendered through. Every planning failure is an error; there are no
//! warnings.

use std::fmt;

use sealum_ir::SourcePosition;

use crate::ErrorCode;

/// A message attached to a declaration.
///
/// Host declarations do not always carry a position (synthetic or binary
/// declarations), in which case the label is rendered without a location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub position: Option<SourcePosition>,
    pub message: String,
    /// Whether this is the primary error location.
    pub is_primary: bool,
}

impl Label {
    /// Create a primary label (the main error location).
    pub fn primary(position: Option<SourcePosition>, message: impl Into<String>) -> Self {
        Label {
            position,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label (related context).
    pub fn secondary(position: Option<SourcePosition>, message: impl Into<String>) -> Self {
        Label {
            position,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A rich diagnostic with all context needed to fix the source hierarchy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    pub labels: Vec<Label>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Human-readable suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(
        mut self,
        position: Option<SourcePosition>,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::primary(position, message));
        self
    }

    /// Add a secondary label for context.
    pub fn with_secondary_label(
        mut self,
        position: Option<SourcePosition>,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::secondary(position, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Get the primary position (first primary label's position).
    pub fn primary_position(&self) -> Option<&SourcePosition> {
        self.labels
            .iter()
            .find(|l| l.is_primary)
            .and_then(|l| l.position.as_ref())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            match &label.position {
                Some(position) => write!(f, "\n  {marker} {position}: {}", label.message)?,
                None => write!(f, "\n  {marker} {}", label.message)?,
            }
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}

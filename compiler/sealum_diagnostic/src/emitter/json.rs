//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array of diagnostics,
//! written when the emitter is flushed.

use std::io::Write;

use serde::Serialize;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

#[derive(Serialize)]
struct JsonLabel<'a> {
    file: Option<&'a str>,
    line: Option<u32>,
    column: Option<u32>,
    message: &'a str,
    primary: bool,
}

impl<'a> From<&'a Label> for JsonLabel<'a> {
    fn from(label: &'a Label) -> Self {
        JsonLabel {
            file: label.position.as_ref().map(|p| &*p.file),
            line: label.position.as_ref().map(|p| p.line),
            column: label.position.as_ref().map(|p| p.column),
            message: &label.message,
            primary: label.is_primary,
        }
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: &'static str,
    message: &'a str,
    labels: Vec<JsonLabel<'a>>,
    notes: &'a [String],
    suggestions: &'a [String],
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        JsonDiagnostic {
            code: diagnostic.code.as_str(),
            message: &diagnostic.message,
            labels: diagnostic.labels.iter().map(JsonLabel::from).collect(),
            notes: &diagnostic.notes,
            suggestions: &diagnostic.suggestions,
        }
    }
}

/// JSON emitter for machine-readable output.
///
/// Diagnostics are buffered as `serde_json::Value`s and written as a single
/// pretty-printed array on [`DiagnosticEmitter::flush`].
pub struct JsonEmitter<W: Write> {
    writer: W,
    pending: Vec<serde_json::Value>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            pending: Vec::new(),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        match serde_json::to_value(JsonDiagnostic::from(diagnostic)) {
            Ok(value) => self.pending.push(value),
            Err(err) => tracing::warn!("failed to serialize diagnostic: {err}"),
        }
    }

    fn flush(&mut self) {
        let values = std::mem::take(&mut self.pending);
        if let Err(err) = serde_json::to_writer_pretty(&mut self.writer, &values) {
            tracing::warn!("failed to write diagnostics: {err}");
        }
        let _ = writeln!(self.writer);
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

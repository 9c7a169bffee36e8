//! Hand failures to a diagnostic emitter.

use sealum_diagnostic::emitter::DiagnosticEmitter;
use sealum_diagnostic::{ErrorGuaranteed, Failure};

use crate::ProcessorOptions;

/// Emit every failure of a pass, in the order given, followed by a summary.
///
/// With an error limit only the first failures are rendered; the summary
/// still counts all of them.
pub fn report<E: DiagnosticEmitter + ?Sized>(
    failures: &[Failure],
    options: &ProcessorOptions,
    emitter: &mut E,
) -> Option<ErrorGuaranteed> {
    let shown = options
        .error_limit
        .map_or(failures.len(), |limit| limit.min(failures.len()));

    for failure in &failures[..shown] {
        emitter.emit(&failure.to_diagnostic());
    }
    if shown < failures.len() {
        tracing::debug!(suppressed = failures.len() - shown, "error limit reached");
    }

    if !failures.is_empty() {
        emitter.emit_summary(failures.len());
    }
    emitter.flush();
    ErrorGuaranteed::from_error_count(failures.len())
}

#[cfg(test)]
mod tests;

use pretty_assertions::assert_eq;
use sealum_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use sealum_diagnostic::{Diagnostic, ErrorCode, Failure, FailureKind};
use sealum_ir::{SourcePosition, TraversalPolicy};

use super::report;
use crate::ProcessorOptions;

#[derive(Default)]
struct Recorder {
    codes: Vec<ErrorCode>,
    summary: Option<usize>,
    flushed: bool,
}

impl DiagnosticEmitter for Recorder {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.codes.push(diagnostic.code);
    }

    fn flush(&mut self) {
        self.flushed = true;
    }

    fn emit_summary(&mut self, error_count: usize) {
        self.summary = Some(error_count);
    }
}

fn failures() -> Vec<Failure> {
    vec![
        Failure::new(
            "p.A.Companion".into(),
            FailureKind::NotClosedHierarchy("p.A".into()),
            Some(SourcePosition::new("A.kt", 1, 1)),
        ),
        Failure::new(
            "p.B.Companion".into(),
            FailureKind::DuplicateTraversalPolicy(TraversalPolicy::PreOrder),
            Some(SourcePosition::new("B.kt", 4, 1)),
        ),
        Failure::new(
            "p.C.Companion".into(),
            FailureKind::NonTerminalNonHierarchyChild("p.C.Blob".into()),
            None,
        ),
    ]
}

#[test]
fn every_failure_is_emitted_in_order() {
    let mut recorder = Recorder::default();
    let guarantee = report(&failures(), &ProcessorOptions::default(), &mut recorder);

    assert!(guarantee.is_some());
    assert_eq!(
        recorder.codes,
        vec![ErrorCode::E1001, ErrorCode::E3001, ErrorCode::E2002]
    );
    assert_eq!(recorder.summary, Some(3));
    assert!(recorder.flushed);
}

#[test]
fn error_limit_truncates_but_summary_counts_all() {
    let options = ProcessorOptions {
        error_limit: Some(1),
        ..ProcessorOptions::default()
    };
    let mut recorder = Recorder::default();
    report(&failures(), &options, &mut recorder);

    assert_eq!(recorder.codes, vec![ErrorCode::E1001]);
    assert_eq!(recorder.summary, Some(3));
}

#[test]
fn clean_pass_reports_nothing() {
    let mut recorder = Recorder::default();
    let guarantee = report(&[], &ProcessorOptions::default(), &mut recorder);

    assert!(guarantee.is_none());
    assert!(recorder.codes.is_empty());
    assert_eq!(recorder.summary, None);
    assert!(recorder.flushed);
}

#[test]
fn terminal_output_names_position_and_root() {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        report(&failures()[..1], &ProcessorOptions::default(), &mut emitter);
    }
    let text = String::from_utf8_lossy(&output);

    assert!(text.starts_with("error[E1001]: `p.A` is not a closed hierarchy"));
    assert!(text.contains("--> A.kt:1:1"));
    assert!(text.contains("while planning `p.A.Companion`"));
    assert!(text.contains("aborting due to previous error"));
}

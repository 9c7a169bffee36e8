use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use sealum_ir::SourcePosition;

fn emit(diagnostics: &[Diagnostic]) -> serde_json::Value {
    let mut output = Vec::new();
    let mut emitter = JsonEmitter::new(&mut output);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_json_shape() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("`a.Shape.Blob` is neither a terminal variant nor a closed hierarchy")
        .with_label(Some(SourcePosition::new("Shape.kt", 8, 3)), "here")
        .with_note("while planning `a.Shape.Companion`")
        .with_suggestion("make `Blob` a singleton variant or a closed hierarchy");

    let value = emit(&[diag]);
    assert_eq!(
        value,
        serde_json::json!([{
            "code": "E2002",
            "message": "`a.Shape.Blob` is neither a terminal variant nor a closed hierarchy",
            "labels": [{
                "file": "Shape.kt",
                "line": 8,
                "column": 3,
                "message": "here",
                "primary": true
            }],
            "notes": ["while planning `a.Shape.Companion`"],
            "suggestions": ["make `Blob` a singleton variant or a closed hierarchy"]
        }])
    );
}

#[test]
fn test_label_without_position_serializes_nulls() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_label(None, "nowhere");
    let value = emit(&[diag]);
    assert_eq!(value[0]["labels"][0]["file"], serde_json::Value::Null);
    assert_eq!(value[0]["labels"][0]["line"], serde_json::Value::Null);
}

#[test]
fn test_empty_output_is_empty_array() {
    assert_eq!(emit(&[]), serde_json::json!([]));
}

#[test]
fn test_special_characters_escaped() {
    let diag = Diagnostic::error(ErrorCode::E3001).with_message("quote \" and\nnewline");
    let value = emit(&[diag]);
    assert_eq!(value[0]["message"], "quote \" and\nnewline");
}

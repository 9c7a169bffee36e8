use pretty_assertions::assert_eq;

use super::{OptionsError, ProcessorOptions};

#[test]
fn defaults_enable_parallel_processing() {
    let none: [(&str, &str); 0] = [];
    let options = ProcessorOptions::from_map(none).unwrap();
    assert_eq!(options, ProcessorOptions::default());
    assert!(!options.disabled);
    assert!(options.parallel);
    assert_eq!(options.error_limit, None);
}

#[test]
fn disable_toggle_is_case_insensitive() {
    let options = ProcessorOptions::from_map([("sealum.disabled", "TRUE")]).unwrap();
    assert!(options.disabled);
}

#[test]
fn later_entries_override_earlier_ones() {
    let options = ProcessorOptions::from_map([
        ("sealum.parallel", "false"),
        ("sealum.parallel", "true"),
    ])
    .unwrap();
    assert!(options.parallel);
}

#[test]
fn zero_error_limit_means_unlimited() {
    let limited = ProcessorOptions::from_map([("sealum.error_limit", "3")]).unwrap();
    let unlimited = ProcessorOptions::from_map([("sealum.error_limit", "0")]).unwrap();
    assert_eq!(limited.error_limit, Some(3));
    assert_eq!(unlimited.error_limit, None);
}

#[test]
fn foreign_options_are_ignored() {
    let options = ProcessorOptions::from_map([("room.schemaLocation", "schemas")]).unwrap();
    assert_eq!(options, ProcessorOptions::default());
}

#[test]
fn bad_values_are_typed_errors() {
    assert_eq!(
        ProcessorOptions::from_map([("sealum.disabled", "yes")]),
        Err(OptionsError::InvalidBool {
            key: "sealum.disabled".to_string(),
            value: "yes".to_string(),
        })
    );
    assert_eq!(
        ProcessorOptions::from_map([("sealum.error_limit", "-1")]),
        Err(OptionsError::InvalidNumber {
            key: "sealum.error_limit".to_string(),
            value: "-1".to_string(),
        })
    );
    assert_eq!(
        ProcessorOptions::from_map([("sealum.verbose", "true")]),
        Err(OptionsError::UnknownKey {
            key: "sealum.verbose".to_string(),
        })
    );
}

#[test]
fn args_split_on_first_equals() {
    let options =
        ProcessorOptions::from_args(&["sealum.disabled=false", "sealum.error_limit=10"]).unwrap();
    assert_eq!(options.error_limit, Some(10));

    assert_eq!(
        ProcessorOptions::from_args(&["sealum.disabled"]),
        Err(OptionsError::MissingValue("sealum.disabled".to_string()))
    );
}

#[test]
fn display_lists_every_key() {
    let options = ProcessorOptions {
        disabled: true,
        parallel: false,
        error_limit: Some(5),
    };
    assert_eq!(
        options.to_string(),
        "sealum.disabled=true sealum.parallel=false sealum.error_limit=5"
    );
}

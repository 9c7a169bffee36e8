use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2002.as_str(), "E2002");
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        let hits = [
            code.is_root_error(),
            code.is_tree_error(),
            code.is_request_error(),
        ]
        .into_iter()
        .filter(|hit| *hit)
        .count();
        assert_eq!(hits, 1, "{code} must belong to exactly one stage");
    }
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("e3001".parse::<ErrorCode>(), Ok(ErrorCode::E3001));
    assert_eq!(" E2001 ".parse::<ErrorCode>(), Ok(ErrorCode::E2001));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(!code.summary().is_empty());
        assert!(code.explain().len() > code.summary().len());
    }
}

#[test]
fn test_lookup_name_clash_is_tree_error() {
    assert!(ErrorCode::E2004.is_tree_error());
    assert_eq!("e2004".parse::<ErrorCode>(), Ok(ErrorCode::E2004));
}

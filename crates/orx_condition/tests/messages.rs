use orx_condition::{Category, ConditionKind, RexxError, codes};

#[test]
fn hierarchy_errors_carry_codes_and_detail() {
    let err = RexxError::new(ConditionKind::RecursiveInherit {
        receiver: "Account".into(),
        mixin: "Account".into(),
    });
    assert_eq!(err.code, codes::RECURSIVE_INHERIT);
    assert_eq!(err.category(), Category::Hierarchy);
    assert!(err.message.contains("recursive inheritance"));
    assert_eq!(
        err.to_string(),
        format!("Error {}: {}", codes::RECURSIVE_INHERIT, err.message)
    );
}

#[test]
fn numeric_errors_are_numeric() {
    let err: RexxError = ConditionKind::DivideByZero.into();
    assert_eq!(err.code, codes::DIVIDE_BY_ZERO);
    assert_eq!(err.category(), Category::Numeric);

    let err = RexxError::new(ConditionKind::BadArithmeticConversion("abc".into()));
    assert_eq!(err.code, "41.1");
    assert!(err.message.contains("\"abc\""));
}

#[test]
fn argument_count_message_uses_range_only_when_needed() {
    let exact = RexxError::new(ConditionKind::ArgumentCountMismatch {
        expected_min: 1,
        expected_max: 1,
        actual: 3,
    });
    assert_eq!(exact.message, "Argument count mismatch: expected 1 but got 3");

    let ranged = RexxError::new(ConditionKind::ArgumentCountMismatch {
        expected_min: 0,
        expected_max: 2,
        actual: 3,
    });
    assert_eq!(ranged.message, "Argument count mismatch: expected 0..2 but got 3");
}

#[test]
fn raw_errors_keep_text_and_help() {
    let err = RexxError::raw("boom").with_help("try again");
    assert_eq!(err.message, "boom");
    assert_eq!(err.help.as_deref(), Some("try again"));
    assert_eq!(err.category(), Category::Call);
}

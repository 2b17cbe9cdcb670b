use orx_condition::codes;
use orx_number::{NumberString, NumericForm, NumericSettings};

fn format(
    text: &str,
    before: Option<usize>,
    after: Option<usize>,
    expp: Option<usize>,
    expt: Option<usize>,
) -> String {
    let settings = NumericSettings::default();
    NumberString::parse(text, &settings)
        .unwrap()
        .format(before, after, expp, expt, &settings)
        .unwrap()
}

#[test]
fn before_and_after() {
    assert_eq!(format("3", Some(4), None, None, None), "   3");
    assert_eq!(format("1.73", Some(4), Some(0), None, None), "   2");
    assert_eq!(format("1.73", Some(4), Some(3), None, None), "   1.730");
    assert_eq!(format("-.76", Some(4), Some(1), None, None), "  -0.8");
    assert_eq!(format("3.03", Some(4), None, None, None), "   3.03");
    assert_eq!(format("9.999", None, Some(2), None, None), "10.00");
    assert_eq!(format("0.000001234", None, None, None, None), "0.000001234");
}

#[test]
fn negative_zero_loses_its_sign() {
    assert_eq!(format("-0.0001", None, Some(2), None, None), "0.00");
    assert_eq!(format("-0.4", None, Some(0), None, None), "0");
}

#[test]
fn exponent_controls() {
    assert_eq!(format("12345.73", None, None, Some(2), Some(2)), "1.234573E+04");
    assert_eq!(format("12345.73", None, Some(3), Some(0), None), "12345.730");
    assert_eq!(format("1.234573", None, Some(3), Some(0), None), "1.235");
    assert_eq!(format("123.45", None, None, Some(3), Some(0)), "1.2345E+002");
    assert_eq!(format("1.2345", None, None, Some(3), Some(0)), "1.2345     ");
    assert_eq!(format("12345.73", None, None, Some(3), Some(6)), "12345.73");
    assert_eq!(format("12345.73", Some(6), Some(1), Some(2), None), " 12345.7");
    assert_eq!(format("1E+20", None, None, None, None), "1E+20");
}

#[test]
fn rounding_carries_into_the_exponent() {
    assert_eq!(format("9.9999E+20", None, Some(2), None, None), "1.00E+21");
}

#[test]
fn engineering_layout() {
    let settings = NumericSettings::default().with_form(NumericForm::Engineering);
    let n = NumberString::parse("12345678901", &settings).unwrap();
    assert_eq!(
        n.format(None, Some(2), None, None, &settings).unwrap(),
        "12.35E+9"
    );
}

#[test]
fn fields_that_are_too_small_fail() {
    let settings = NumericSettings::default();
    let n = NumberString::parse("12345.6789", &settings).unwrap();
    let err = n.format(Some(2), None, None, None, &settings).unwrap_err();
    assert_eq!(err.code, codes::FORMAT_TOO_SMALL);

    let n = NumberString::parse("1E+200", &settings).unwrap();
    let err = n.format(None, None, Some(2), None, &settings).unwrap_err();
    assert_eq!(err.code, codes::FORMAT_TOO_SMALL);
}

#[test]
fn trunc_truncates_and_pads() {
    let settings = NumericSettings::default();
    let trunc = |text: &str, decimals: usize| {
        NumberString::parse(text, &settings)
            .unwrap()
            .trunc(decimals, &settings)
            .unwrap()
    };
    assert_eq!(trunc("12.345", 2), "12.34");
    assert_eq!(trunc("12.3", 2), "12.30");
    assert_eq!(trunc("12.9", 0), "12");
    assert_eq!(trunc("-0.001", 2), "0.00");
    assert_eq!(trunc("-1.999", 1), "-1.9");
    assert_eq!(trunc("1E+3", 0), "1000");
    assert_eq!(trunc("0", 3), "0.000");
}

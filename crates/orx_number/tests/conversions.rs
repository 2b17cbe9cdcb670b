use orx_condition::codes;
use orx_number::{NumberString, NumericSettings};

fn num(text: &str) -> NumberString {
    NumberString::parse(text, &NumericSettings::default()).unwrap()
}

#[test]
fn long_value_requires_a_whole_number_within_precision() {
    assert_eq!(num("123").long_value(None), Some(123));
    assert_eq!(num("-42").long_value(None), Some(-42));
    assert_eq!(num("1.0").long_value(None), Some(1));
    assert_eq!(num("0").long_value(None), Some(0));
    assert_eq!(num("1.5").long_value(None), None);
    assert_eq!(num("1E+9").long_value(None), None);
    assert_eq!(num("1E+9").long_value(Some(10)), Some(1_000_000_000));
}

#[test]
fn long_value_allows_a_pending_carry() {
    let wide = NumericSettings::new(12, 0, Default::default()).unwrap();
    let n = NumberString::parse("0.9999999999", &wide).unwrap();
    assert_eq!(n.long_value(None), Some(1));
    let n = NumberString::parse("0.9999", &wide).unwrap();
    assert_eq!(n.long_value(None), None);
}

#[test]
fn ulong_value_rejects_negatives() {
    assert_eq!(num("-1").ulong_value(None), None);
    let wide = NumericSettings::new(12, 0, Default::default()).unwrap();
    let n = NumberString::parse("4294967295", &wide).unwrap();
    assert_eq!(n.ulong_value(None), Some(4_294_967_295));
}

#[test]
fn to_f64() {
    assert_eq!(num("1.5").to_f64(), 1.5);
    assert_eq!(num("-2E+3").to_f64(), -2000.0);
    assert_eq!(num("0").to_f64(), 0.0);
}

#[test]
fn decimal_to_hex() {
    let settings = NumericSettings::default();
    assert_eq!(num("255").d2x(None, &settings).unwrap(), "FF");
    assert_eq!(num("0").d2x(None, &settings).unwrap(), "0");
    assert_eq!(num("0").d2x(Some(3), &settings).unwrap(), "000");
    assert_eq!(num("255").d2x(Some(4), &settings).unwrap(), "00FF");
    assert_eq!(num("-1").d2x(Some(2), &settings).unwrap(), "FF");
    assert_eq!(num("-2").d2x(Some(4), &settings).unwrap(), "FFFE");
    assert_eq!(num("4095").d2x(Some(2), &settings).unwrap_err().code, codes::CONVERSION_TOO_LARGE);

    let err = num("-1").d2x(None, &settings).unwrap_err();
    assert_eq!(err.code, codes::CONVERSION_TOO_LARGE);
    assert!(err.message.contains("length"));
    let err = num("1.5").d2x(None, &settings).unwrap_err();
    assert_eq!(err.code, codes::WHOLE_NUMBER);
}

#[test]
fn decimal_to_bytes() {
    let settings = NumericSettings::default();
    assert_eq!(num("65").d2c(None, &settings).unwrap(), b"A".to_vec());
    assert_eq!(num("256").d2c(None, &settings).unwrap(), vec![0x01, 0x00]);
    assert_eq!(num("0").d2c(None, &settings).unwrap(), vec![0x00]);
    assert_eq!(num("-1").d2c(Some(2), &settings).unwrap(), vec![0xFF, 0xFF]);
    assert_eq!(num("1").d2c(Some(2), &settings).unwrap(), vec![0x00, 0x01]);
}

#[test]
fn hex_to_decimal() {
    let settings = NumericSettings::default();
    let x2d = |hex: &str, n: Option<usize>| {
        NumberString::x2d(hex, n, &settings)
            .unwrap()
            .string_value()
            .to_string()
    };
    assert_eq!(x2d("FF", None), "255");
    assert_eq!(x2d("ff", None), "255");
    assert_eq!(x2d("0F F", None), "255");
    assert_eq!(x2d("", None), "0");
    assert_eq!(x2d("FF", Some(2)), "-1");
    assert_eq!(x2d("81", Some(2)), "-127");
    assert_eq!(x2d("F", Some(4)), "15");
    assert_eq!(x2d("FF", Some(0)), "0");
    assert_eq!(x2d("1FF", Some(2)), "-1");

    let err = NumberString::x2d("G1", None, &settings).unwrap_err();
    assert_eq!(err.code, codes::INVALID_HEX);
    let err = NumberString::x2d("FFFFFFFFFF", None, &settings).unwrap_err();
    assert_eq!(err.code, codes::CONVERSION_TOO_LARGE);
}

#[test]
fn bytes_to_decimal() {
    let settings = NumericSettings::default();
    let n = NumberString::c2d(&[0x01, 0x00], None, &settings).unwrap();
    assert_eq!(n.string_value(), "256");
    let n = NumberString::c2d(&[0xFF], Some(1), &settings).unwrap();
    assert_eq!(n.string_value(), "-1");
    let n = NumberString::c2d(b"a", None, &settings).unwrap();
    assert_eq!(n.string_value(), "97");
}

use std::cmp::Ordering;

use orx_number::{NumberString, NumericForm, NumericSettings};
use proptest::prelude::*;

fn number_text() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u64..1_000_000_000_000, -15i64..15)
        .prop_map(|(neg, mantissa, exp)| format!("{}{}E{}", if neg { "-" } else { "" }, mantissa, exp))
}

proptest! {
    #[test]
    fn redundant_zeros_and_plus_sign_do_not_change_the_form(
        int in 0u32..1_000_000,
        frac in "[0-9]{0,4}",
        lead in 0usize..4,
        trail in 0usize..4,
    ) {
        let settings = NumericSettings::new(15, 0, NumericForm::Scientific).unwrap();
        let canonical = format!("{}.{}", int, frac);
        let padded = format!("+{}{}.{}{}", "0".repeat(lead), int, frac, "0".repeat(trail));
        let a = NumberString::parse(&canonical, &settings).unwrap();
        let b = NumberString::parse(&padded, &settings).unwrap();
        prop_assert_eq!(a.string_value(), b.string_value());
        prop_assert_eq!(&a, &b);
        prop_assert!(a.digits().last() != Some(&0) || a.exp() >= 0);
    }
}

proptest! {
    #[test]
    fn rounding_is_idempotent(text in number_text(), digits in 1usize..12) {
        let wide = NumericSettings::new(20, 0, NumericForm::Scientific).unwrap();
        let narrow = NumericSettings::new(digits, 0, NumericForm::Scientific).unwrap();
        let n = NumberString::parse(&text, &wide).unwrap();
        let once = n.round_to(&narrow).unwrap();
        let twice = once.round_to(&narrow).unwrap();
        prop_assert!(once.len() <= digits);
        prop_assert_eq!(once, twice);
    }
}

proptest! {
    #[test]
    fn comparison_is_antisymmetric(a in number_text(), b in number_text(), fuzz in 0usize..3) {
        let settings = NumericSettings::new(9, fuzz, NumericForm::Scientific).unwrap();
        let a = NumberString::parse(&a, &settings).unwrap();
        let b = NumberString::parse(&b, &settings).unwrap();
        let ab = a.comp(&b, &settings).unwrap();
        let ba = b.comp(&a, &settings).unwrap();
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(a.comp(&a, &settings).unwrap(), Ordering::Equal);
    }
}

proptest! {
    #[test]
    fn exact_path_agrees_with_the_sign_of_the_difference(a in number_text(), b in number_text()) {
        let settings = NumericSettings::default();
        let a = NumberString::parse(&a, &settings).unwrap();
        let b = NumberString::parse(&b, &settings).unwrap();
        let fast = a.comp(&b, &settings).unwrap();
        let slow = a.sub(&b, &settings).unwrap().sign().cmp(&0);
        prop_assert_eq!(fast, slow);
    }
}

proptest! {
    #[test]
    fn integer_division_recombines(a in -1_000_000i64..1_000_000, b in 1i64..1000) {
        let settings = NumericSettings::default();
        let x = NumberString::from_i64(a, &settings).unwrap();
        let y = NumberString::from_i64(b, &settings).unwrap();
        let q = x.integer_divide(&y, &settings).unwrap();
        let r = x.remainder(&y, &settings).unwrap();
        prop_assert_eq!(q.long_value(None), Some(a / b));
        prop_assert_eq!(r.long_value(None), Some(a % b));
    }
}

proptest! {
    #[test]
    fn integer_division_recombines_at_full_precision(
        a in 100_000_000i64..1_000_000_000,
        b in 1i64..20,
    ) {
        let settings = NumericSettings::default();
        let x = NumberString::from_i64(a, &settings).unwrap();
        let y = NumberString::from_i64(b, &settings).unwrap();
        let q = x.integer_divide(&y, &settings).unwrap();
        let r = x.remainder(&y, &settings).unwrap();
        prop_assert_eq!(q.long_value(None), Some(a / b));
        prop_assert_eq!(r.long_value(None), Some(a % b));
        let back = y.multiply(&q, &settings).unwrap().add(&r, &settings).unwrap();
        prop_assert_eq!(back.long_value(None), Some(a));
    }
}

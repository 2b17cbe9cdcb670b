//! Text to number conversion.

use orx_condition::{ConditionKind, RexxError, RexxResult};

use crate::number::{Digits, MAX_EXPONENT, NumberString};
use crate::settings::{NumericForm, NumericSettings};

/// Result of the syntax pre-scan: where the pieces of a numeric literal are.
struct Scan<'a> {
    negative: bool,
    integer: &'a [u8],
    fraction: &'a [u8],
    exponent: i64,
}

#[inline]
fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Validates `[blanks][sign[blanks]]digits[.digits][E[sign]digits][blanks]`.
///
/// Returns `Ok(None)` when the text is not a number at all and an overflow
/// condition when the exponent cannot possibly be represented.
fn scan(text: &[u8]) -> RexxResult<Option<Scan<'_>>> {
    let mut i = 0;
    let n = text.len();
    while i < n && is_blank(text[i]) {
        i += 1;
    }
    let mut negative = false;
    if i < n && (text[i] == b'+' || text[i] == b'-') {
        negative = text[i] == b'-';
        i += 1;
        while i < n && is_blank(text[i]) {
            i += 1;
        }
    }
    let int_start = i;
    while i < n && text[i].is_ascii_digit() {
        i += 1;
    }
    let integer = &text[int_start..i];
    let mut fraction: &[u8] = &[];
    if i < n && text[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < n && text[i].is_ascii_digit() {
            i += 1;
        }
        fraction = &text[frac_start..i];
    }
    if integer.is_empty() && fraction.is_empty() {
        return Ok(None);
    }

    let mut exponent: i64 = 0;
    if i < n && (text[i] == b'e' || text[i] == b'E') {
        i += 1;
        let mut exp_negative = false;
        if i < n && (text[i] == b'+' || text[i] == b'-') {
            exp_negative = text[i] == b'-';
            i += 1;
        }
        let exp_start = i;
        while i < n && text[i].is_ascii_digit() {
            // Saturate far beyond the representable range; the final range
            // check reports the condition.
            if exponent <= 4 * MAX_EXPONENT {
                exponent = exponent * 10 + (text[i] - b'0') as i64;
            }
            i += 1;
        }
        if i == exp_start {
            return Ok(None);
        }
        if exp_negative {
            exponent = -exponent;
        }
    }

    while i < n && is_blank(text[i]) {
        i += 1;
    }
    if i != n {
        return Ok(None);
    }
    if exponent > 4 * MAX_EXPONENT {
        return Err(RexxError::new(ConditionKind::ArithmeticOverflow(exponent)));
    }
    if exponent < -4 * MAX_EXPONENT {
        return Err(RexxError::new(ConditionKind::ArithmeticUnderflow(exponent)));
    }
    Ok(Some(Scan {
        negative,
        integer,
        fraction,
        exponent,
    }))
}

impl NumberString {
    /// Parses a numeric literal, keeping `settings.digits` significant digits.
    ///
    /// Leading zeros never count as digits; digits beyond the precision are
    /// dropped into the exponent and the first dropped digit rounds half up.
    /// Trailing zeros after the decimal point are not significant.
    pub fn parse(text: &str, settings: &NumericSettings) -> RexxResult<Self> {
        Self::parse_bytes(text.as_bytes(), settings.digits, settings.form)?.ok_or_else(|| {
            RexxError::new(ConditionKind::BadArithmeticConversion(text.to_string()))
        })
    }

    /// Like `parse`, but text that is not a number yields `None`.
    pub fn try_parse(text: &str, settings: &NumericSettings) -> RexxResult<Option<Self>> {
        Self::parse_bytes(text.as_bytes(), settings.digits, settings.form)
    }

    pub fn is_number(text: &str) -> bool {
        matches!(scan(text.as_bytes()), Ok(Some(_)))
    }

    pub(crate) fn parse_bytes(
        text: &[u8],
        num_digits: usize,
        form: NumericForm,
    ) -> RexxResult<Option<Self>> {
        let Some(scan) = scan(text)? else {
            return Ok(None);
        };

        let mut digits = Digits::with_capacity(scan.integer.len() + scan.fraction.len());
        for &b in scan.integer.iter().chain(scan.fraction.iter()) {
            if digits.is_empty() && b == b'0' {
                continue;
            }
            digits.push(b - b'0');
        }
        if digits.is_empty() {
            return Ok(Some(NumberString::zero_with(num_digits, form)));
        }

        let mut exp = scan.exponent - scan.fraction.len() as i64;
        while exp < 0 && digits.last() == Some(&0) {
            digits.pop();
            exp += 1;
        }

        let sign = if scan.negative { -1 } else { 1 };
        NumberString::finish(sign, digits, exp, num_digits, form).map(Some)
    }

    pub fn from_i64(value: i64, settings: &NumericSettings) -> RexxResult<Self> {
        let sign = value.signum() as i8;
        Self::from_magnitude(sign, value.unsigned_abs(), settings)
    }

    pub fn from_u64(value: u64, settings: &NumericSettings) -> RexxResult<Self> {
        Self::from_magnitude(if value == 0 { 0 } else { 1 }, value, settings)
    }

    fn from_magnitude(sign: i8, mut value: u64, settings: &NumericSettings) -> RexxResult<Self> {
        if value == 0 {
            return Ok(Self::zero(settings));
        }
        let mut digits = Digits::new();
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        digits.reverse();
        Self::finish(sign, digits, 0, settings.digits, settings.form)
    }

    /// Converts a binary float through its shortest round-trip decimal text.
    pub fn from_f64(value: f64, settings: &NumericSettings) -> RexxResult<Self> {
        if !value.is_finite() {
            return Err(RexxError::new(ConditionKind::BadArithmeticConversion(
                value.to_string(),
            )));
        }
        let mut buf = ryu::Buffer::new();
        Self::parse(buf.format_finite(value), settings)
    }
}

//! The decimal value type and its rounding rules.

use std::fmt;
use std::sync::OnceLock;

use orx_condition::{ConditionKind, RexxError, RexxResult};
use smallvec::SmallVec;

use crate::settings::{NumericForm, NumericSettings};

/// Decimal digits, most significant first, one value `0..=9` per byte.
pub type Digits = SmallVec<[u8; 24]>;

/// Largest magnitude of the adjusted exponent (`exp + length - 1`).
pub const MAX_EXPONENT: i64 = 999_999_999;

/// An immutable arbitrary precision decimal number.
///
/// The value is `sign * digits * 10^exp`. Zero is always `sign == 0` with no
/// digits. Apart from the memoized text form nothing changes after
/// construction; every arithmetic result is a fresh value.
pub struct NumberString {
    pub(crate) sign: i8,
    pub(crate) exp: i64,
    pub(crate) digits: Digits,
    pub(crate) num_digits: usize,
    pub(crate) form: NumericForm,
    pub(crate) string: OnceLock<Box<str>>,
}

impl NumberString {
    pub fn zero(settings: &NumericSettings) -> Self {
        Self::zero_with(settings.digits, settings.form)
    }

    pub(crate) fn zero_with(num_digits: usize, form: NumericForm) -> Self {
        Self {
            sign: 0,
            exp: 0,
            digits: Digits::new(),
            num_digits,
            form,
            string: OnceLock::new(),
        }
    }

    /// Builds a value from raw parts: strips leading zeros, rounds to
    /// `num_digits` (half up) and checks the exponent range.
    pub(crate) fn finish(
        sign: i8,
        mut digits: Digits,
        mut exp: i64,
        num_digits: usize,
        form: NumericForm,
    ) -> RexxResult<Self> {
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        if leading == digits.len() || sign == 0 {
            return Ok(Self::zero_with(num_digits, form));
        }
        if leading > 0 {
            digits.drain(..leading);
        }
        if digits.len() > num_digits {
            let dropped = digits[num_digits];
            exp += (digits.len() - num_digits) as i64;
            digits.truncate(num_digits);
            round_up(&mut digits, &mut exp, dropped);
        }
        check_exponent(exp, digits.len())?;
        Ok(Self {
            sign: sign.signum(),
            exp,
            digits,
            num_digits,
            form,
            string: OnceLock::new(),
        })
    }

    #[inline]
    pub fn sign(&self) -> i8 {
        self.sign
    }

    #[inline]
    pub fn exp(&self) -> i64 {
        self.exp
    }

    /// Significant digits as values `0..=9`.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The digits as ASCII text, without sign, point or exponent.
    pub fn digit_string(&self) -> String {
        self.digits.iter().map(|d| (b'0' + d) as char).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    /// Precision in effect when the value was created.
    #[inline]
    pub fn num_digits(&self) -> usize {
        self.num_digits
    }

    #[inline]
    pub fn form(&self) -> NumericForm {
        self.form
    }

    /// Exponent of the most significant digit.
    #[inline]
    pub fn adjusted_exponent(&self) -> i64 {
        self.exp + self.digits.len() as i64 - 1
    }

    /// True when the value has no non-zero digit after the decimal point.
    pub fn is_whole(&self) -> bool {
        if self.sign == 0 || self.exp >= 0 {
            return true;
        }
        let fraction = (-self.exp) as usize;
        if fraction >= self.digits.len() {
            return false;
        }
        self.digits[self.digits.len() - fraction..].iter().all(|&d| d == 0)
    }

    /// Re-rounds the value to `digits` significant digits.
    ///
    /// Rounding a value that already fits is the identity, so this is
    /// idempotent.
    pub fn round_to(&self, settings: &NumericSettings) -> RexxResult<Self> {
        Self::finish(
            self.sign,
            self.digits.clone(),
            self.exp,
            settings.digits,
            settings.form,
        )
    }

    /// Sign, digits and exponent rounded to at most `digits` digits.
    pub(crate) fn rounded_parts(&self, digits: usize) -> (i8, Digits, i64) {
        let mut out = self.digits.clone();
        let mut exp = self.exp;
        if out.len() > digits {
            let dropped = out[digits];
            exp += (out.len() - digits) as i64;
            out.truncate(digits);
            round_up(&mut out, &mut exp, dropped);
        }
        (self.sign, out, exp)
    }

    pub fn negate(&self, settings: &NumericSettings) -> RexxResult<Self> {
        Self::finish(
            -self.sign,
            self.digits.clone(),
            self.exp,
            settings.digits,
            settings.form,
        )
    }

    pub fn abs(&self, settings: &NumericSettings) -> RexxResult<Self> {
        Self::finish(
            self.sign.abs(),
            self.digits.clone(),
            self.exp,
            settings.digits,
            settings.form,
        )
    }

    /// Same value, same digits, with a fresh text cache.
    pub(crate) fn duplicate(&self) -> Self {
        Self {
            sign: self.sign,
            exp: self.exp,
            digits: self.digits.clone(),
            num_digits: self.num_digits,
            form: self.form,
            string: OnceLock::new(),
        }
    }
}

/// Round half up on the first dropped digit.
///
/// A carry that runs through every retained digit turns `99..9` into `10..0`
/// of the same length and bumps the exponent.
pub(crate) fn round_up(digits: &mut Digits, exp: &mut i64, dropped: u8) {
    if dropped < 5 {
        return;
    }
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
    digits.pop();
    *exp += 1;
}

pub(crate) fn check_exponent(exp: i64, len: usize) -> RexxResult<()> {
    let adjusted = exp + len as i64 - 1;
    if adjusted > MAX_EXPONENT {
        return Err(RexxError::new(ConditionKind::ArithmeticOverflow(adjusted)));
    }
    if adjusted < -MAX_EXPONENT {
        return Err(RexxError::new(ConditionKind::ArithmeticUnderflow(adjusted)));
    }
    Ok(())
}

impl Clone for NumberString {
    fn clone(&self) -> Self {
        let out = self.duplicate();
        if let Some(s) = self.string.get() {
            let _ = out.string.set(s.clone());
        }
        out
    }
}

impl PartialEq for NumberString {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign
            && self.exp == other.exp
            && self.digits == other.digits
            && self.num_digits == other.num_digits
            && self.form == other.form
    }
}

impl Eq for NumberString {}

impl fmt::Debug for NumberString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberString")
            .field("sign", &self.sign)
            .field("digits", &self.digit_string())
            .field("exp", &self.exp)
            .field("num_digits", &self.num_digits)
            .finish()
    }
}

impl fmt::Display for NumberString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.string_value())
    }
}

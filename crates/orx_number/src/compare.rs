//! Numeric comparison under `NUMERIC FUZZ`.

use std::cmp::Ordering;

use orx_condition::RexxResult;

use crate::math::ArithOp;
use crate::number::NumberString;
use crate::settings::NumericSettings;

impl NumberString {
    /// Compares two numbers at `digits - fuzz` significant digits.
    ///
    /// When both operands already fit that precision the comparison is exact;
    /// otherwise the sign of the rounded difference decides.
    pub fn comp(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Ordering> {
        if self.sign != other.sign {
            return Ok(self.sign.cmp(&other.sign));
        }
        if self.sign == 0 {
            return Ok(Ordering::Equal);
        }
        let fuzz_digits = settings.fuzz_digits();
        if self.len() <= fuzz_digits && other.len() <= fuzz_digits {
            return Ok(self.exact_cmp(other));
        }
        let difference = self.add_sub(other, ArithOp::Minus, &settings.with_digits(fuzz_digits))?;
        Ok(difference.sign.cmp(&0))
    }

    /// Ordering of the exact values, ignoring any precision.
    pub fn exact_cmp(&self, other: &NumberString) -> Ordering {
        if self.sign != other.sign {
            return self.sign.cmp(&other.sign);
        }
        if self.sign == 0 {
            return Ordering::Equal;
        }
        let magnitude = self.magnitude_cmp(other);
        if self.sign < 0 {
            magnitude.reverse()
        } else {
            magnitude
        }
    }

    fn magnitude_cmp(&self, other: &NumberString) -> Ordering {
        self.adjusted_exponent()
            .cmp(&other.adjusted_exponent())
            .then_with(|| {
                let n = self.len().max(other.len());
                (0..n)
                    .map(|i| {
                        let a = self.digits.get(i).copied().unwrap_or(0);
                        let b = other.digits.get(i).copied().unwrap_or(0);
                        a.cmp(&b)
                    })
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }

    pub fn is_equal(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<bool> {
        Ok(self.comp(other, settings)? == Ordering::Equal)
    }

    /// The larger operand, rounded to the current precision. Ties keep the
    /// receiver.
    pub fn max(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        match self.comp(other, settings)? {
            Ordering::Less => other.round_to(settings),
            _ => self.round_to(settings),
        }
    }

    /// The smaller operand, rounded to the current precision. Ties keep the
    /// receiver.
    pub fn min(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        match self.comp(other, settings)? {
            Ordering::Greater => other.round_to(settings),
            _ => self.round_to(settings),
        }
    }
}

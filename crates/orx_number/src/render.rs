//! Number to text conversion.

use crate::number::NumberString;
use crate::settings::NumericForm;

/// Integer and fraction digits of a value laid out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) negative: bool,
    pub(crate) integer: String,
    pub(crate) fraction: String,
    pub(crate) exponent: i64,
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|d| (b'0' + d) as char));
}

fn push_zeros(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('0', count));
}

/// Exponential notation is used when the integer part would need more than
/// `trigger` digits or the fraction more than twice that many.
pub(crate) fn needs_exponent(digits_len: usize, exp: i64, trigger: usize) -> bool {
    let integer_digits = digits_len as i64 + exp;
    integer_digits > trigger as i64 || -exp > 2 * trigger as i64
}

/// Fixed-point layout of `digits * 10^exp`.
pub(crate) fn plain_layout(negative: bool, digits: &[u8], exp: i64) -> Layout {
    let mut integer = String::new();
    let mut fraction = String::new();
    if exp >= 0 {
        push_digits(&mut integer, digits);
        push_zeros(&mut integer, exp as usize);
    } else {
        let point = digits.len() as i64 + exp;
        if point > 0 {
            let point = point as usize;
            push_digits(&mut integer, &digits[..point]);
            push_digits(&mut fraction, &digits[point..]);
        } else {
            integer.push('0');
            push_zeros(&mut fraction, (-point) as usize);
            push_digits(&mut fraction, digits);
        }
    }
    Layout {
        negative,
        integer,
        fraction,
        exponent: 0,
    }
}

/// Exponential layout: one integer digit (scientific) or one to three with
/// an exponent that is a multiple of three (engineering).
pub(crate) fn exponential_layout(
    negative: bool,
    digits: &[u8],
    exp: i64,
    form: NumericForm,
) -> Layout {
    let adjusted = exp + digits.len() as i64 - 1;
    let (int_len, exponent) = match form {
        NumericForm::Scientific => (1usize, adjusted),
        NumericForm::Engineering => {
            let shift = adjusted.rem_euclid(3);
            (shift as usize + 1, adjusted - shift)
        }
    };
    let mut integer = String::new();
    let mut fraction = String::new();
    if digits.len() <= int_len {
        push_digits(&mut integer, digits);
        push_zeros(&mut integer, int_len - digits.len());
    } else {
        push_digits(&mut integer, &digits[..int_len]);
        push_digits(&mut fraction, &digits[int_len..]);
    }
    Layout {
        negative,
        integer,
        fraction,
        exponent,
    }
}

pub(crate) fn push_exponent(out: &mut String, exponent: i64) {
    out.push('E');
    out.push(if exponent < 0 { '-' } else { '+' });
    let mut buf = itoa::Buffer::new();
    out.push_str(buf.format(exponent.unsigned_abs()));
}

impl Layout {
    pub(crate) fn render(&self) -> String {
        let mut out =
            String::with_capacity(self.integer.len() + self.fraction.len() + 14);
        if self.negative {
            out.push('-');
        }
        out.push_str(&self.integer);
        if !self.fraction.is_empty() {
            out.push('.');
            out.push_str(&self.fraction);
        }
        if self.exponent != 0 {
            push_exponent(&mut out, self.exponent);
        }
        out
    }
}

impl NumberString {
    /// Canonical text form, computed once and memoized.
    pub fn string_value(&self) -> &str {
        self.string.get_or_init(|| self.render().into_boxed_str())
    }

    fn render(&self) -> String {
        if self.sign == 0 {
            return "0".to_string();
        }
        let negative = self.sign < 0;
        if self.exp == 0 {
            let mut out = String::with_capacity(self.digits.len() + 1);
            if negative {
                out.push('-');
            }
            push_digits(&mut out, &self.digits);
            return out;
        }
        let layout = if needs_exponent(self.digits.len(), self.exp, self.num_digits) {
            exponential_layout(negative, &self.digits, self.exp, self.form)
        } else {
            plain_layout(negative, &self.digits, self.exp)
        };
        layout.render()
    }
}

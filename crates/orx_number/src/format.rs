//! `FORMAT` and `TRUNC`.

use orx_condition::{ConditionKind, RexxError, RexxResult};

use crate::number::NumberString;
use crate::render::{Layout, exponential_layout, needs_exponent, plain_layout};
use crate::settings::{NumericForm, NumericSettings};

/// Rounds `layout.fraction` half up to `after` digits, carrying into the
/// integer part; pads with zeros when shorter.
fn round_fraction(layout: &mut Layout, after: usize) {
    if layout.fraction.len() <= after {
        let pad = after - layout.fraction.len();
        layout.fraction.extend(std::iter::repeat_n('0', pad));
        return;
    }
    let round = layout.fraction.as_bytes()[after] >= b'5';
    layout.fraction.truncate(after);
    if !round {
        return;
    }
    let mut digits: Vec<u8> = layout
        .integer
        .bytes()
        .chain(layout.fraction.bytes())
        .collect();
    let mut carry = true;
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    let split = digits.len() - after;
    layout.integer = digits[..split].iter().map(|&d| d as char).collect();
    layout.fraction = digits[split..].iter().map(|&d| d as char).collect();
}

/// After a carry the integer part of an exponential layout may have grown
/// one digit too many; shift it back into the fraction.
fn renormalize(layout: &mut Layout, form: NumericForm, after: usize) {
    let limit = match form {
        NumericForm::Scientific => 1,
        NumericForm::Engineering => 3,
    };
    if layout.integer.len() <= limit {
        return;
    }
    let step = match form {
        NumericForm::Scientific => layout.integer.len() - 1,
        NumericForm::Engineering => 3,
    };
    let split = layout.integer.len() - step;
    let moved = layout.integer.split_off(split);
    layout.fraction.insert_str(0, &moved);
    layout.fraction.truncate(after);
    layout.exponent += step as i64;
}

fn all_zero(layout: &Layout) -> bool {
    layout
        .integer
        .bytes()
        .chain(layout.fraction.bytes())
        .all(|b| b == b'0')
}

impl NumberString {
    /// Formats the value rounded to the current precision.
    ///
    /// `before` and `after` size the integer and decimal parts, `expp` the
    /// exponent digits and `expt` the trigger for exponential notation.
    /// `expp == 0` forces plain notation and `expt == 0` forces exponential.
    pub fn format(
        &self,
        before: Option<usize>,
        after: Option<usize>,
        expp: Option<usize>,
        expt: Option<usize>,
        settings: &NumericSettings,
    ) -> RexxResult<String> {
        let value = self.round_to(settings)?;
        let negative = value.sign < 0;
        let trigger = expt.unwrap_or(settings.digits);
        let exponential = !value.is_zero()
            && expp != Some(0)
            && (trigger == 0 || needs_exponent(value.len(), value.exp, trigger));
        let mut layout = if value.is_zero() {
            plain_layout(false, &[0], 0)
        } else if exponential {
            exponential_layout(negative, &value.digits, value.exp, settings.form)
        } else {
            plain_layout(negative, &value.digits, value.exp)
        };

        if let Some(after) = after {
            round_fraction(&mut layout, after);
            if exponential {
                renormalize(&mut layout, settings.form, after);
            }
        }
        if all_zero(&layout) {
            layout.negative = false;
        }

        let mut out = String::new();
        if let Some(before) = before {
            let needed = layout.integer.len() + usize::from(layout.negative);
            if needed > before {
                return Err(RexxError::new(ConditionKind::FormatTooSmall {
                    part: "before",
                    value: value.string_value().to_string(),
                }));
            }
            out.extend(std::iter::repeat_n(' ', before - needed));
        }
        if layout.negative {
            out.push('-');
        }
        out.push_str(&layout.integer);
        if !layout.fraction.is_empty() {
            out.push('.');
            out.push_str(&layout.fraction);
        }

        if exponential && layout.exponent != 0 {
            out.push('E');
            out.push(if layout.exponent < 0 { '-' } else { '+' });
            let mut buf = itoa::Buffer::new();
            let text = buf.format(layout.exponent.unsigned_abs());
            if let Some(expp) = expp {
                if text.len() > expp {
                    return Err(RexxError::new(ConditionKind::FormatTooSmall {
                        part: "expp",
                        value: value.string_value().to_string(),
                    }));
                }
                out.extend(std::iter::repeat_n('0', expp - text.len()));
            }
            out.push_str(text);
        } else if exponential {
            if let Some(expp) = expp.filter(|&p| p > 0) {
                out.extend(std::iter::repeat_n(' ', expp + 2));
            }
        }
        Ok(out)
    }

    /// Plain notation with exactly `decimals` fraction digits, truncated
    /// rather than rounded.
    pub fn trunc(&self, decimals: usize, settings: &NumericSettings) -> RexxResult<String> {
        let value = self.round_to(settings)?;
        let mut layout = if value.is_zero() {
            plain_layout(false, &[0], 0)
        } else {
            plain_layout(value.sign < 0, &value.digits, value.exp)
        };
        if layout.fraction.len() > decimals {
            layout.fraction.truncate(decimals);
        } else {
            let pad = decimals - layout.fraction.len();
            layout.fraction.extend(std::iter::repeat_n('0', pad));
        }
        if all_zero(&layout) {
            layout.negative = false;
        }
        Ok(layout.render())
    }
}

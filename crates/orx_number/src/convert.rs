//! Conversions to machine integers and between decimal, hex and bytes.

use orx_condition::{ConditionKind, RexxError, RexxResult};

use crate::number::{Digits, NumberString};
use crate::settings::{DEFAULT_DIGITS, NumericSettings};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// `nibbles = nibbles * mul + add`, little endian base 16.
fn nibble_mul_add(nibbles: &mut Vec<u8>, mul: u32, add: u32) {
    let mut carry = add;
    for n in nibbles.iter_mut() {
        let t = *n as u32 * mul + carry;
        *n = (t % 16) as u8;
        carry = t / 16;
    }
    while carry > 0 {
        nibbles.push((carry % 16) as u8);
        carry /= 16;
    }
}

/// `digits = digits * mul + add`, little endian base 10.
fn decimal_mul_add(digits: &mut Vec<u8>, mul: u32, add: u32) {
    let mut carry = add;
    for d in digits.iter_mut() {
        let t = *d as u32 * mul + carry;
        *d = (t % 10) as u8;
        carry = t / 10;
    }
    while carry > 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
}

/// Two's complement of a little endian nibble string of fixed width.
fn twos_complement(nibbles: &mut [u8]) {
    for n in nibbles.iter_mut() {
        *n = 15 - *n;
    }
    for n in nibbles.iter_mut() {
        if *n == 15 {
            *n = 0;
        } else {
            *n += 1;
            break;
        }
    }
}

fn hex_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}

impl NumberString {
    /// Sign and integer digits when the value is whole and its integer part
    /// fits in `digits` digits.
    fn whole_digits(&self, digits: usize) -> Option<(i8, Digits)> {
        if self.sign == 0 {
            return Some((0, Digits::new()));
        }
        let (sign, mut ds, exp) = self.rounded_parts(digits);
        if exp < 0 {
            let fraction = (-exp) as usize;
            if fraction >= ds.len() {
                return None;
            }
            let split = ds.len() - fraction;
            if ds[split..].iter().any(|&d| d != 0) {
                return None;
            }
            ds.truncate(split);
        } else {
            if ds.len() as i64 + exp > digits as i64 {
                return None;
            }
            ds.extend(std::iter::repeat_n(0u8, exp as usize));
        }
        if ds.len() > digits {
            return None;
        }
        Some((sign, ds))
    }

    /// The value as an `i64`, if it is a whole number of at most `digits`
    /// (default nine) integer digits that fits the type.
    pub fn long_value(&self, digits: Option<usize>) -> Option<i64> {
        let (sign, ds) = self.whole_digits(digits.unwrap_or(DEFAULT_DIGITS))?;
        let mut magnitude: i128 = 0;
        for &d in ds.iter() {
            magnitude = magnitude.checked_mul(10)?.checked_add(d as i128)?;
        }
        let value = if sign < 0 { -magnitude } else { magnitude };
        i64::try_from(value).ok()
    }

    /// The value as a `u64`; negative numbers have no unsigned value. The
    /// default precision is ten digits.
    pub fn ulong_value(&self, digits: Option<usize>) -> Option<u64> {
        let (sign, ds) = self.whole_digits(digits.unwrap_or(DEFAULT_DIGITS + 1))?;
        if sign < 0 {
            return None;
        }
        let mut value: u64 = 0;
        for &d in ds.iter() {
            value = value.checked_mul(10)?.checked_add(d as u64)?;
        }
        Some(value)
    }

    pub fn to_f64(&self) -> f64 {
        if self.sign == 0 {
            return 0.0;
        }
        let mut text = String::with_capacity(self.len() + 24);
        if self.sign < 0 {
            text.push('-');
        }
        text.push_str(&self.digit_string());
        text.push('e');
        let mut buf = itoa::Buffer::new();
        text.push_str(buf.format(self.exp));
        text.parse().unwrap_or(f64::NAN)
    }

    /// Little endian nibbles of the value, two's complement to `length`
    /// nibbles when given.
    fn to_nibbles(&self, length: Option<usize>, settings: &NumericSettings) -> RexxResult<Vec<u8>> {
        let Some((sign, ds)) = self.whole_digits(settings.digits) else {
            return Err(RexxError::new(ConditionKind::WholeNumberRequired(
                self.string_value().to_string(),
            )));
        };
        if sign < 0 && length.is_none() {
            return Err(RexxError::new(ConditionKind::NegativeRequiresLength(
                self.string_value().to_string(),
            )));
        }
        let mut nibbles = Vec::with_capacity(ds.len());
        for &d in ds.iter() {
            nibble_mul_add(&mut nibbles, 10, d as u32);
        }
        let Some(length) = length else {
            return Ok(nibbles);
        };
        if nibbles.len() < length {
            nibbles.resize(length, 0);
        }
        let pad = if sign < 0 {
            twos_complement(&mut nibbles);
            15
        } else {
            0
        };
        if nibbles[length..].iter().any(|&n| n != pad) {
            return Err(RexxError::new(ConditionKind::ConversionTooLarge(
                self.string_value().to_string(),
            )));
        }
        nibbles.truncate(length);
        Ok(nibbles)
    }

    /// Hexadecimal text of a whole number. Negative values need `length`
    /// and are rendered in two's complement to that many hex digits.
    pub fn d2x(&self, length: Option<usize>, settings: &NumericSettings) -> RexxResult<String> {
        let nibbles = self.to_nibbles(length, settings)?;
        if nibbles.is_empty() && length.is_none() {
            return Ok("0".to_string());
        }
        Ok(nibbles
            .iter()
            .rev()
            .map(|&n| HEX_DIGITS[n as usize] as char)
            .collect())
    }

    /// Bytes of a whole number, big endian; `length` counts bytes.
    pub fn d2c(&self, length: Option<usize>, settings: &NumericSettings) -> RexxResult<Vec<u8>> {
        let mut nibbles = self.to_nibbles(length.map(|l| l * 2), settings)?;
        if nibbles.is_empty() && length.is_none() {
            return Ok(vec![0]);
        }
        if nibbles.len() % 2 == 1 {
            nibbles.push(0);
        }
        Ok(nibbles
            .chunks(2)
            .rev()
            .map(|pair| pair[1] << 4 | pair[0])
            .collect())
    }

    /// Decimal value of hexadecimal text. Blanks are ignored. With `length`
    /// the rightmost `length` hex digits are a two's complement number.
    pub fn x2d(hex: &str, length: Option<usize>, settings: &NumericSettings) -> RexxResult<Self> {
        let mut nibbles = Vec::with_capacity(hex.len());
        for c in hex.chars() {
            if c == ' ' || c == '\t' {
                continue;
            }
            match hex_value(c) {
                Some(n) => nibbles.push(n),
                None => return Err(RexxError::new(ConditionKind::InvalidHexCharacter(c))),
            }
        }
        // Big endian from here on.
        let mut negative = false;
        if let Some(length) = length {
            if length == 0 {
                return Ok(Self::zero(settings));
            }
            if nibbles.len() > length {
                nibbles.drain(..nibbles.len() - length);
            } else {
                let pad = length - nibbles.len();
                nibbles.splice(0..0, std::iter::repeat_n(0u8, pad));
            }
            if nibbles[0] & 0x8 != 0 {
                negative = true;
                nibbles.reverse();
                twos_complement(&mut nibbles);
                nibbles.reverse();
            }
        }

        let mut decimal = Vec::with_capacity(nibbles.len() * 2);
        for &n in nibbles.iter() {
            decimal_mul_add(&mut decimal, 16, n as u32);
        }
        if decimal.len() > settings.digits {
            return Err(RexxError::new(ConditionKind::ConversionTooLarge(hex.to_string())));
        }
        if decimal.is_empty() {
            return Ok(Self::zero(settings));
        }
        let digits: Digits = decimal.into_iter().rev().collect();
        let sign = if negative { -1 } else { 1 };
        Self::finish(sign, digits, 0, settings.digits, settings.form)
    }

    /// Decimal value of a byte string; `length` counts bytes.
    pub fn c2d(bytes: &[u8], length: Option<usize>, settings: &NumericSettings) -> RexxResult<Self> {
        let mut hex = String::with_capacity(bytes.len() * 2);
        for b in bytes {
            hex.push(HEX_DIGITS[(b >> 4) as usize] as char);
            hex.push(HEX_DIGITS[(b & 0xF) as usize] as char);
        }
        Self::x2d(&hex, length.map(|l| l * 2), settings)
    }
}

//! Arithmetic operators.
//!
//! Operands longer than the precision are rounded to it first; the exact
//! result is then rounded half up to `settings.digits` digits.

use std::cmp::Ordering;

use orx_condition::{ConditionKind, RexxError, RexxResult};

use crate::number::{Digits, NumberString};
use crate::settings::NumericSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    IntegerDivide,
    Remainder,
    Power,
}

impl ArithOp {
    pub fn from_operator(op: &str) -> Option<Self> {
        Some(match op {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::IntegerDivide,
            "//" => Self::Remainder,
            "**" => Self::Power,
            _ => return None,
        })
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::IntegerDivide => "%",
            Self::Remainder => "//",
            Self::Power => "**",
        }
    }
}

// Magnitudes are unsigned integers as digit slices, most significant first.

pub(crate) fn trim_leading(digits: &mut Digits) {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    if leading > 0 {
        digits.drain(..leading);
    }
}

fn significant(digits: &[u8]) -> &[u8] {
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    &digits[leading..]
}

pub(crate) fn cmp_magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let a = significant(a);
    let b = significant(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub(crate) fn add_magnitude(a: &[u8], b: &[u8]) -> Digits {
    let mut out = Digits::with_capacity(a.len().max(b.len()) + 1);
    let (mut i, mut j) = (a.len(), b.len());
    let mut carry = 0u8;
    while i > 0 || j > 0 || carry > 0 {
        let mut sum = carry;
        if i > 0 {
            i -= 1;
            sum += a[i];
        }
        if j > 0 {
            j -= 1;
            sum += b[j];
        }
        out.push(sum % 10);
        carry = sum / 10;
    }
    out.reverse();
    trim_leading(&mut out);
    out
}

/// `a - b`; requires `a >= b`.
pub(crate) fn sub_magnitude(a: &[u8], b: &[u8]) -> Digits {
    debug_assert!(cmp_magnitude(a, b) != Ordering::Less);
    let mut out = Digits::with_capacity(a.len());
    let (mut i, mut j) = (a.len(), b.len());
    let mut borrow = 0i8;
    while i > 0 {
        i -= 1;
        let mut d = a[i] as i8 - borrow;
        if j > 0 {
            j -= 1;
            d -= b[j] as i8;
        }
        if d < 0 {
            d += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(d as u8);
    }
    out.reverse();
    trim_leading(&mut out);
    out
}

pub(crate) fn mul_magnitude(a: &[u8], b: &[u8]) -> Digits {
    if a.is_empty() || b.is_empty() {
        return Digits::new();
    }
    let mut acc = vec![0u32; a.len() + b.len()];
    for i in (0..a.len()).rev() {
        let mut carry = 0u32;
        for j in (0..b.len()).rev() {
            let t = acc[i + j + 1] + a[i] as u32 * b[j] as u32 + carry;
            acc[i + j + 1] = t % 10;
            carry = t / 10;
        }
        acc[i] += carry;
    }
    let mut out: Digits = acc.into_iter().map(|d| d as u8).collect();
    trim_leading(&mut out);
    out
}

/// Long division: `(a / b, a % b)`; `b` must be non-zero.
pub(crate) fn divmod_magnitude(a: &[u8], b: &[u8]) -> (Digits, Digits) {
    let b = significant(b);
    let mut quotient = Digits::with_capacity(a.len());
    let mut rem = Digits::new();
    for &d in a {
        rem.push(d);
        trim_leading(&mut rem);
        let mut q = 0u8;
        while cmp_magnitude(&rem, b) != Ordering::Less {
            rem = sub_magnitude(&rem, b);
            q += 1;
        }
        quotient.push(q);
    }
    trim_leading(&mut quotient);
    (quotient, rem)
}

pub(crate) fn shifted(digits: &[u8], zeros: usize) -> Digits {
    let mut out = Digits::with_capacity(digits.len() + zeros);
    out.extend_from_slice(digits);
    out.extend(std::iter::repeat_n(0u8, zeros));
    out
}

struct Quotient {
    sign: i8,
    quotient: Digits,
    remainder: Digits,
    /// Exponent of the remainder's least significant digit.
    exp: i64,
}

impl NumberString {
    pub fn operate(
        &self,
        op: ArithOp,
        other: &NumberString,
        settings: &NumericSettings,
    ) -> RexxResult<NumberString> {
        match op {
            ArithOp::Plus | ArithOp::Minus => self.add_sub(other, op, settings),
            ArithOp::Multiply => self.multiply(other, settings),
            ArithOp::Divide => self.divide(other, settings),
            ArithOp::IntegerDivide => self.integer_divide(other, settings),
            ArithOp::Remainder => self.remainder(other, settings),
            ArithOp::Power => self.power(other, settings),
        }
    }

    pub fn add(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        self.add_sub(other, ArithOp::Plus, settings)
    }

    pub fn sub(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        self.add_sub(other, ArithOp::Minus, settings)
    }

    /// Addition or subtraction; any other operator is treated as addition.
    pub fn add_sub(
        &self,
        other: &NumberString,
        op: ArithOp,
        settings: &NumericSettings,
    ) -> RexxResult<Self> {
        let digits = settings.digits;
        let (sa, mut da, mut ea) = self.rounded_parts(digits);
        let (sb, mut db, mut eb) = other.rounded_parts(digits);
        let sb = if op == ArithOp::Minus { -sb } else { sb };
        if sb == 0 {
            return Self::finish(sa, da, ea, digits, settings.form);
        }
        if sa == 0 {
            return Self::finish(sb, db, eb, digits, settings.form);
        }

        // An operand lying wholly below the rounding position of the other
        // can only influence the result through borrows, so it is replaced
        // by a single unit just below that position.
        let msd_a = ea + da.len() as i64 - 1;
        let msd_b = eb + db.len() as i64 - 1;
        let reach = digits as i64 + 3;
        if msd_b <= msd_a - reach {
            db = Digits::from_slice(&[1]);
            eb = msd_a - digits as i64 - 2;
        } else if msd_a <= msd_b - reach {
            da = Digits::from_slice(&[1]);
            ea = msd_b - digits as i64 - 2;
        }

        let exp = ea.min(eb);
        let a = shifted(&da, (ea - exp) as usize);
        let b = shifted(&db, (eb - exp) as usize);
        let (sign, magnitude) = if sa == sb {
            (sa, add_magnitude(&a, &b))
        } else {
            match cmp_magnitude(&a, &b) {
                Ordering::Greater => (sa, sub_magnitude(&a, &b)),
                Ordering::Less => (sb, sub_magnitude(&b, &a)),
                Ordering::Equal => return Ok(Self::zero(settings)),
            }
        };
        Self::finish(sign, magnitude, exp, digits, settings.form)
    }

    pub fn multiply(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        let digits = settings.digits;
        let (sa, da, ea) = self.rounded_parts(digits);
        let (sb, db, eb) = other.rounded_parts(digits);
        if sa == 0 || sb == 0 {
            return Ok(Self::zero(settings));
        }
        Self::finish(sa * sb, mul_magnitude(&da, &db), ea + eb, digits, settings.form)
    }

    /// `/`: quotient to `digits` significant digits, trailing zeros removed.
    pub fn divide(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        let digits = settings.digits;
        let (sb, db, eb) = other.rounded_parts(digits);
        if sb == 0 {
            return Err(RexxError::new(ConditionKind::DivideByZero));
        }
        let (sa, da, ea) = self.rounded_parts(digits);
        if sa == 0 {
            return Ok(Self::zero(settings));
        }
        let scale = digits + 1 + db.len();
        let numerator = shifted(&da, scale);
        let (quotient, _) = divmod_magnitude(&numerator, &db);
        let exp = ea - eb - scale as i64;
        let result = Self::finish(sa * sb, quotient, exp, digits, settings.form)?;
        Ok(result.without_trailing_zeros())
    }

    /// `%`: the integer part of the quotient.
    pub fn integer_divide(
        &self,
        other: &NumberString,
        settings: &NumericSettings,
    ) -> RexxResult<Self> {
        let q = self.whole_division(other, settings)?;
        Self::finish(q.sign, q.quotient, 0, settings.digits, settings.form)
    }

    /// `//`: the remainder of `%`, carrying the sign of the dividend.
    pub fn remainder(&self, other: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        let q = self.whole_division(other, settings)?;
        Self::finish(self.sign, q.remainder, q.exp, settings.digits, settings.form)
    }

    fn whole_division(
        &self,
        other: &NumberString,
        settings: &NumericSettings,
    ) -> RexxResult<Quotient> {
        let digits = settings.digits;
        let (sb, db, eb) = other.rounded_parts(digits);
        if sb == 0 {
            return Err(RexxError::new(ConditionKind::DivideByZero));
        }
        let (sa, da, ea) = self.rounded_parts(digits);
        if sa == 0 {
            return Ok(Quotient {
                sign: 0,
                quotient: Digits::new(),
                remainder: Digits::new(),
                exp: 0,
            });
        }
        let msd_a = ea + da.len() as i64 - 1;
        let msd_b = eb + db.len() as i64 - 1;
        if msd_a < msd_b {
            return Ok(Quotient {
                sign: sa * sb,
                quotient: Digits::new(),
                remainder: da,
                exp: ea,
            });
        }
        if msd_a - msd_b > digits as i64 {
            return Err(RexxError::new(ConditionKind::IntegerDivisionTooLarge));
        }
        let exp = ea.min(eb);
        let a = shifted(&da, (ea - exp) as usize);
        let b = shifted(&db, (eb - exp) as usize);
        let (quotient, remainder) = divmod_magnitude(&a, &b);
        if quotient.len() > digits {
            return Err(RexxError::new(ConditionKind::IntegerDivisionTooLarge));
        }
        Ok(Quotient {
            sign: sa * sb,
            quotient,
            remainder,
            exp,
        })
    }

    /// `**` with a whole-number exponent; negative exponents give the
    /// reciprocal. Intermediate products carry extra guard digits.
    pub fn power(&self, exponent: &NumberString, settings: &NumericSettings) -> RexxResult<Self> {
        let Some(n) = exponent.long_value(Some(settings.digits.max(9))) else {
            return Err(RexxError::new(ConditionKind::WholeNumberRequired(
                exponent.string_value().to_string(),
            )));
        };
        if n == 0 {
            return Self::from_i64(1, settings);
        }
        let mut count = n.unsigned_abs();
        let count_len = count.to_string().len();
        let work = settings.with_digits(settings.digits + count_len + 1);

        let mut base = self.round_to(settings)?;
        let mut result: Option<NumberString> = None;
        while count > 0 {
            if count & 1 == 1 {
                result = Some(match result {
                    None => base.duplicate(),
                    Some(r) => r.multiply(&base, &work)?,
                });
            }
            count >>= 1;
            if count > 0 {
                base = base.multiply(&base, &work)?;
            }
        }
        let result = match result {
            Some(r) => r,
            None => Self::from_i64(1, &work)?,
        };
        if n < 0 {
            let one = Self::from_i64(1, settings)?;
            one.divide(&result, settings)
        } else {
            result.round_to(settings)
        }
    }

    pub(crate) fn without_trailing_zeros(mut self) -> Self {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
            self.exp += 1;
        }
        self.string = std::sync::OnceLock::new();
        self
    }
}

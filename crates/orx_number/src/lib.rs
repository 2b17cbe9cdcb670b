//! Arbitrary precision decimal numbers.
//!
//! Every numeric value of the language is a `NumberString`: a sign, a string
//! of decimal digits and a power-of-ten exponent, rounded to the precision
//! (`NUMERIC DIGITS`) that was in effect when the value was produced.
//!
//! - `parse` - text to number, rounding to the ambient precision
//! - `render` - canonical text form, fixed or exponential notation
//! - `math` - add, subtract, multiply, divide, integer divide, remainder, power
//! - `compare` - fuzzy numeric comparison
//! - `convert` - whole-number extraction and base conversions
//! - `format` - the FORMAT and TRUNC built-ins

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::comparison_chain)]

mod compare;
mod convert;
mod format;
mod math;
mod number;
mod parse;
mod render;
pub mod settings;

pub use math::ArithOp;
pub use number::{Digits, MAX_EXPONENT, NumberString};
pub use settings::{DEFAULT_DIGITS, NumericForm, NumericSettings};

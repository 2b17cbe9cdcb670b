//!
//!

use crate::{ConditionFormatter, ConditionKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Hierarchy,
    Numeric,
    Call,
}

/// A signalled condition: the operation that raised it produced no result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Error {code}: {message}")]
pub struct RexxError {
    pub kind: ConditionKind,
    pub code: &'static str,
    pub message: String,
    pub help: Option<String>,
}

pub type RexxResult<T> = Result<T, RexxError>;

impl RexxError {
    pub fn new(kind: ConditionKind) -> Self {
        Self {
            code: Self::code_for(&kind),
            message: ConditionFormatter::format(&kind),
            kind,
            help: None,
        }
    }

    pub fn raw(message: impl Into<String>) -> Self {
        Self::new(ConditionKind::Raw(message.into()))
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn category(&self) -> Category {
        match self.kind {
            ConditionKind::NoMethod { .. }
            | ConditionKind::BadMetaclass(_)
            | ConditionKind::MixinClassRequired(_)
            | ConditionKind::RecursiveInherit { .. }
            | ConditionKind::BaseClassIncompatible { .. }
            | ConditionKind::Uninherit { .. }
            | ConditionKind::SealedClass(_)
            | ConditionKind::InvalidClassName
            | ConditionKind::UnknownClass(_) => Category::Hierarchy,
            ConditionKind::BadArithmeticConversion(_)
            | ConditionKind::ArithmeticOverflow(_)
            | ConditionKind::ArithmeticUnderflow(_)
            | ConditionKind::DivideByZero
            | ConditionKind::IntegerDivisionTooLarge
            | ConditionKind::WholeNumberRequired(_)
            | ConditionKind::ConversionTooLarge(_)
            | ConditionKind::NegativeRequiresLength(_)
            | ConditionKind::InvalidHexCharacter(_)
            | ConditionKind::InvalidDigitsSetting(_)
            | ConditionKind::InvalidFuzzSetting { .. }
            | ConditionKind::FormatTooSmall { .. }
            | ConditionKind::InvalidNonNegative { .. } => Category::Numeric,
            ConditionKind::ArgumentCountMismatch { .. }
            | ConditionKind::MissingArgument(_)
            | ConditionKind::InvalidObject { .. }
            | ConditionKind::Raw(_) => Category::Call,
        }
    }

    fn code_for(kind: &ConditionKind) -> &'static str {
        match kind {
            ConditionKind::NoMethod { .. } => codes::NO_METHOD,
            ConditionKind::BadMetaclass(_) => codes::BAD_METACLASS,
            ConditionKind::MixinClassRequired(_) => codes::MIXIN_CLASS_REQUIRED,
            ConditionKind::RecursiveInherit { .. } => codes::RECURSIVE_INHERIT,
            ConditionKind::BaseClassIncompatible { .. } => codes::BASECLASS_INCOMPATIBLE,
            ConditionKind::Uninherit { .. } => codes::UNINHERIT,
            ConditionKind::SealedClass(_) => codes::NO_METHOD,
            ConditionKind::InvalidClassName => codes::INVALID_ARGUMENT,
            ConditionKind::UnknownClass(_) => codes::INVALID_ARGUMENT,
            ConditionKind::BadArithmeticConversion(_) => codes::BAD_ARITHMETIC_CONVERSION,
            ConditionKind::ArithmeticOverflow(_) => codes::ARITHMETIC_OVERFLOW,
            ConditionKind::ArithmeticUnderflow(_) => codes::ARITHMETIC_UNDERFLOW,
            ConditionKind::DivideByZero => codes::DIVIDE_BY_ZERO,
            ConditionKind::IntegerDivisionTooLarge => codes::INTEGER_DIVISION,
            ConditionKind::WholeNumberRequired(_) => codes::WHOLE_NUMBER,
            ConditionKind::ConversionTooLarge(_) => codes::CONVERSION_TOO_LARGE,
            ConditionKind::NegativeRequiresLength(_) => codes::CONVERSION_TOO_LARGE,
            ConditionKind::InvalidHexCharacter(_) => codes::INVALID_HEX,
            ConditionKind::InvalidDigitsSetting(_) => codes::INVALID_DIGITS,
            ConditionKind::InvalidFuzzSetting { .. } => codes::INVALID_FUZZ,
            ConditionKind::FormatTooSmall { .. } => codes::FORMAT_TOO_SMALL,
            ConditionKind::InvalidNonNegative { .. } => codes::INVALID_ARGUMENT,
            ConditionKind::ArgumentCountMismatch { .. } => codes::ARGUMENT_COUNT,
            ConditionKind::MissingArgument(_) => codes::ARGUMENT_COUNT,
            ConditionKind::InvalidObject { .. } => codes::INVALID_ARGUMENT,
            ConditionKind::Raw(_) => codes::RAW,
        }
    }
}

impl From<ConditionKind> for RexxError {
    fn from(kind: ConditionKind) -> Self {
        Self::new(kind)
    }
}

/// Condition codes, `major.minor` in the style of the language's error numbers.
pub mod codes {
    pub const BAD_ARITHMETIC_CONVERSION: &str = "41.1";
    pub const ARITHMETIC_OVERFLOW: &str = "42.1";
    pub const ARITHMETIC_UNDERFLOW: &str = "42.2";
    pub const DIVIDE_BY_ZERO: &str = "42.3";
    pub const INTEGER_DIVISION: &str = "26.11";
    pub const WHOLE_NUMBER: &str = "26.1";
    pub const INVALID_DIGITS: &str = "33.1";
    pub const INVALID_FUZZ: &str = "33.2";
    pub const FORMAT_TOO_SMALL: &str = "40.38";
    pub const INVALID_HEX: &str = "93.933";
    pub const CONVERSION_TOO_LARGE: &str = "93.935";
    pub const ARGUMENT_COUNT: &str = "93.903";
    pub const INVALID_ARGUMENT: &str = "93.900";
    pub const NO_METHOD: &str = "97.1";
    pub const MIXIN_CLASS_REQUIRED: &str = "98.947";
    pub const RECURSIVE_INHERIT: &str = "98.944";
    pub const BASECLASS_INCOMPATIBLE: &str = "98.945";
    pub const UNINHERIT: &str = "98.946";
    pub const BAD_METACLASS: &str = "99.911";
    pub const RAW: &str = "98.900";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConditionKind {
    // Hierarchy
    NoMethod {
        receiver: String,
        message: String,
    },
    BadMetaclass(String),
    MixinClassRequired(String),
    RecursiveInherit {
        receiver: String,
        mixin: String,
    },
    BaseClassIncompatible {
        receiver: String,
        mixin: String,
        base: String,
    },
    Uninherit {
        receiver: String,
        class: String,
    },
    SealedClass(String),
    InvalidClassName,
    UnknownClass(String),

    // Numeric
    BadArithmeticConversion(String),
    ArithmeticOverflow(i64),
    ArithmeticUnderflow(i64),
    DivideByZero,
    IntegerDivisionTooLarge,
    WholeNumberRequired(String),
    ConversionTooLarge(String),
    NegativeRequiresLength(String),
    InvalidHexCharacter(char),
    InvalidDigitsSetting(usize),
    InvalidFuzzSetting {
        fuzz: usize,
        digits: usize,
    },
    FormatTooSmall {
        part: &'static str,
        value: String,
    },
    InvalidNonNegative {
        position: usize,
        value: String,
    },

    // Calls
    ArgumentCountMismatch {
        expected_min: usize,
        expected_max: usize,
        actual: usize,
    },
    MissingArgument(usize),
    InvalidObject {
        expected: &'static str,
        actual: String,
    },

    // Custom
    Raw(String),
}

pub struct ConditionFormatter;

impl ConditionFormatter {
    fn format_en(kind: &ConditionKind) -> String {
        match kind {
            ConditionKind::NoMethod { receiver, message } => {
                format!("Object \"{}\" does not understand message \"{}\"", receiver, message)
            }
            ConditionKind::BadMetaclass(name) => {
                format!("Metaclass \"{}\" cannot create classes", name)
            }
            ConditionKind::MixinClassRequired(name) => {
                format!("Class \"{}\" is not a mixin class", name)
            }
            ConditionKind::RecursiveInherit { receiver, mixin } => format!(
                "Class \"{}\" cannot inherit from \"{}\": recursive inheritance",
                receiver, mixin
            ),
            ConditionKind::BaseClassIncompatible {
                receiver,
                mixin,
                base,
            } => format!(
                "Class \"{}\" cannot inherit from \"{}\": base class \"{}\" is not an ancestor",
                receiver, mixin, base
            ),
            ConditionKind::Uninherit { receiver, class } => format!(
                "Class \"{}\" is not a removable superclass of \"{}\"",
                class, receiver
            ),
            ConditionKind::SealedClass(name) => {
                format!("Class \"{}\" is a built-in class and cannot be changed", name)
            }
            ConditionKind::InvalidClassName => "Class name must not be empty".into(),
            ConditionKind::UnknownClass(name) => format!("Unknown class: {}", name),

            ConditionKind::BadArithmeticConversion(value) => {
                format!("Bad arithmetic conversion: nonnumeric value (\"{}\")", value)
            }
            ConditionKind::ArithmeticOverflow(exp) => {
                format!("Arithmetic overflow; exponent ({}) exceeds 999999999", exp)
            }
            ConditionKind::ArithmeticUnderflow(exp) => {
                format!("Arithmetic underflow; exponent ({}) is below -999999999", exp)
            }
            ConditionKind::DivideByZero => "Arithmetic overflow; divisor must not be zero".into(),
            ConditionKind::IntegerDivisionTooLarge => {
                "Integer division result needs more digits than NUMERIC DIGITS".into()
            }
            ConditionKind::WholeNumberRequired(value) => {
                format!("Value \"{}\" is not a whole number", value)
            }
            ConditionKind::ConversionTooLarge(value) => {
                format!("Conversion result for \"{}\" is too large", value)
            }
            ConditionKind::NegativeRequiresLength(value) => format!(
                "Negative value \"{}\" requires an explicit result length",
                value
            ),
            ConditionKind::InvalidHexCharacter(c) => {
                format!("Only 0-9, a-f, A-F are valid in a hexadecimal string; found \"{}\"", c)
            }
            ConditionKind::InvalidDigitsSetting(digits) => {
                format!("NUMERIC DIGITS must be a positive whole number; found {}", digits)
            }
            ConditionKind::InvalidFuzzSetting { fuzz, digits } => format!(
                "NUMERIC FUZZ ({}) must be less than NUMERIC DIGITS ({})",
                fuzz, digits
            ),
            ConditionKind::FormatTooSmall { part, value } => {
                format!("FORMAT {} is too small for \"{}\"", part, value)
            }
            ConditionKind::InvalidNonNegative { position, value } => format!(
                "Argument {} must be zero or a positive whole number; found \"{}\"",
                position, value
            ),

            ConditionKind::ArgumentCountMismatch {
                expected_min,
                expected_max,
                actual,
            } => {
                if expected_min == expected_max {
                    format!(
                        "Argument count mismatch: expected {} but got {}",
                        expected_min, actual
                    )
                } else {
                    format!(
                        "Argument count mismatch: expected {}..{} but got {}",
                        expected_min, expected_max, actual
                    )
                }
            }
            ConditionKind::MissingArgument(position) => {
                format!("Missing argument in method; argument {} is required", position)
            }
            ConditionKind::InvalidObject { expected, actual } => {
                format!("Expected {} object but got {}", expected, actual)
            }

            ConditionKind::Raw(s) => s.clone(),
        }
    }

    pub fn format(kind: &ConditionKind) -> String {
        Self::format_en(kind)
    }
}

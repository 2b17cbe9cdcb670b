//! Numeric environment: the `NUMERIC DIGITS / FUZZ / FORM` settings.
//!
//! The engine never stores these globally; the caller passes the settings
//! that are in effect for the current activation into every operation.

use orx_condition::{ConditionKind, RexxError, RexxResult};

pub const DEFAULT_DIGITS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NumericForm {
    #[default]
    Scientific,
    Engineering,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericSettings {
    pub digits: usize,
    pub fuzz: usize,
    pub form: NumericForm,
}

impl Default for NumericSettings {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            fuzz: 0,
            form: NumericForm::Scientific,
        }
    }
}

impl NumericSettings {
    pub fn new(digits: usize, fuzz: usize, form: NumericForm) -> RexxResult<Self> {
        let settings = Self { digits, fuzz, form };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> RexxResult<()> {
        if self.digits == 0 {
            return Err(RexxError::new(ConditionKind::InvalidDigitsSetting(self.digits)));
        }
        if self.fuzz >= self.digits {
            return Err(RexxError::new(ConditionKind::InvalidFuzzSetting {
                fuzz: self.fuzz,
                digits: self.digits,
            }));
        }
        Ok(())
    }

    pub fn with_digits(self, digits: usize) -> Self {
        Self {
            digits: digits.max(1),
            fuzz: self.fuzz.min(digits.saturating_sub(1)),
            form: self.form,
        }
    }

    pub fn with_form(self, form: NumericForm) -> Self {
        Self { form, ..self }
    }

    /// Precision used for comparisons.
    #[inline]
    pub fn fuzz_digits(&self) -> usize {
        self.digits.saturating_sub(self.fuzz).max(1)
    }
}

//! Runtime configuration.

use orx_number::NumericSettings;

/// Runtime configuration options.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    /// Initial `NUMERIC DIGITS / FUZZ / FORM`.
    pub numeric: NumericSettings,
    /// Allocations between collections triggered by `maybe_gc`.
    pub gc_threshold: usize,
    /// Seal the bootstrap classes so scripts cannot change them.
    pub seal_builtin_classes: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            numeric: NumericSettings::default(),
            gc_threshold: 100_000,
            seal_builtin_classes: true,
        }
    }
}

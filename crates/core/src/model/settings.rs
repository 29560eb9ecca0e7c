use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("pass threshold must be a percentage between 0 and 100")]
    InvalidPassThreshold,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Passing grade used when no explicit threshold is configured.
pub const DEFAULT_PASS_THRESHOLD: f64 = 72.0;

/// Tunable quiz parameters.
///
/// Currently only the passing grade; sessions are graded against it when
/// they complete.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSettings {
    pass_threshold: f64,
}

impl QuizSettings {
    /// Creates settings with a custom pass threshold.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidPassThreshold` when the threshold is
    /// not a finite percentage in `0..=100`.
    pub fn new(pass_threshold: f64) -> Result<Self, SettingsError> {
        if !pass_threshold.is_finite() || !(0.0..=100.0).contains(&pass_threshold) {
            return Err(SettingsError::InvalidPassThreshold);
        }
        Ok(Self { pass_threshold })
    }

    #[must_use]
    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_72() {
        let settings = QuizSettings::default();
        assert!((settings.pass_threshold() - 72.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_accepts_boundary_values() {
        assert!(QuizSettings::new(0.0).is_ok());
        assert!(QuizSettings::new(100.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_thresholds() {
        assert_eq!(
            QuizSettings::new(-0.1).unwrap_err(),
            SettingsError::InvalidPassThreshold
        );
        assert_eq!(
            QuizSettings::new(100.1).unwrap_err(),
            SettingsError::InvalidPassThreshold
        );
        assert_eq!(
            QuizSettings::new(f64::NAN).unwrap_err(),
            SettingsError::InvalidPassThreshold
        );
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("session had no items")]
    NoItems,

    #[error("too many items for a single session: {len}")]
    TooManyItems { len: usize },
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Grading summary for one completed quiz session.
///
/// Wrong guesses can exceed the item count because a wrong guess does not
/// advance the session; the grade bottoms out at zero in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    total: u32,
    hints_requested: u32,
    wrong_guesses: u32,
    grade: f64,
    passed: bool,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Builds a summary from session counters.
    ///
    /// Grade is `(total - wrong) / total * 100`, or zero once wrong guesses
    /// reach the item count. Pass iff `grade >= pass_threshold`.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, `SummaryError::NoItems` for an empty session, and
    /// `SummaryError::TooManyItems` if the item count cannot fit in `u32`.
    pub fn from_counts(
        total: usize,
        hints_requested: u32,
        wrong_guesses: u32,
        pass_threshold: f64,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let total =
            u32::try_from(total).map_err(|_| SummaryError::TooManyItems { len: total })?;
        if total == 0 {
            return Err(SummaryError::NoItems);
        }

        let grade = if wrong_guesses < total {
            f64::from(total - wrong_guesses) / f64::from(total) * 100.0
        } else {
            0.0
        };
        let passed = grade >= pass_threshold;

        Ok(Self {
            total,
            hints_requested,
            wrong_guesses,
            grade,
            passed,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn hints_requested(&self) -> u32 {
        self.hints_requested
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Percentage grade in `0..=100`.
    #[must_use]
    pub fn grade(&self) -> f64 {
        self.grade
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn summary(total: usize, wrong: u32, threshold: f64) -> QuizSummary {
        QuizSummary::from_counts(total, 0, wrong, threshold, fixed_now(), fixed_now()).unwrap()
    }

    #[test]
    fn grade_with_one_wrong_of_four() {
        let s = summary(4, 1, 72.0);
        assert!((s.grade() - 75.0).abs() < f64::EPSILON);
        assert!(s.passed());
    }

    #[test]
    fn grade_with_all_wrong_is_zero() {
        let s = summary(4, 4, 72.0);
        assert!(s.grade().abs() < f64::EPSILON);
        assert!(!s.passed());
    }

    #[test]
    fn grade_with_no_wrong_is_hundred() {
        let s = summary(4, 0, 72.0);
        assert!((s.grade() - 100.0).abs() < f64::EPSILON);
        assert!(s.passed());
    }

    #[test]
    fn wrong_beyond_total_still_grades_zero() {
        // Retries mean wrong can exceed the item count.
        let s = summary(3, 7, 72.0);
        assert!(s.grade().abs() < f64::EPSILON);
    }

    #[test]
    fn pass_threshold_is_inclusive() {
        // 18 right of 25 is exactly 72%.
        let s = summary(25, 7, 72.0);
        assert!((s.grade() - 72.0).abs() < f64::EPSILON);
        assert!(s.passed());

        // 7199 right of 10000 is 71.99%, just under the bar.
        let s = summary(10_000, 2_801, 72.0);
        assert!(!s.passed());
    }

    #[test]
    fn rejects_reversed_time_range() {
        let later = fixed_now() + chrono::Duration::seconds(1);
        let err = QuizSummary::from_counts(3, 0, 0, 72.0, later, fixed_now()).unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn rejects_empty_session() {
        let err =
            QuizSummary::from_counts(0, 0, 0, 72.0, fixed_now(), fixed_now()).unwrap_err();
        assert_eq!(err, SummaryError::NoItems);
    }
}

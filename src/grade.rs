#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants::{
    FINAL_GRADE_DIVISOR, IN_PROGRESS_SENTINEL, MAX_GRADE, MIN_GRADE, MIN_VALID_COMPONENTS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// A single component score
pub struct Grade {
    /// The score itself, only meaningful when `is_valid` is set
    pub value:    f64,
    /// Whether the score was supplied at all
    pub is_valid: bool,
}

impl Grade {
    /// Creates a new grade -
    /// * `value` - the score
    /// * `is_valid` - whether the score was supplied
    pub fn new(value: f64, is_valid: bool) -> Self {
        Self { value, is_valid }
    }

    /// A supplied score.
    pub fn valid(value: f64) -> Self {
        Self::new(value, true)
    }

    /// A score that was not supplied.
    pub fn missing() -> Self {
        Self::new(0.0, false)
    }

    /// Whether this grade takes part in a final grade or an aggregate: it
    /// must be marked valid and lie within `[0.0, 10.0]`.
    pub fn counts(&self) -> bool {
        self.is_valid && self.value >= MIN_GRADE && self.value <= MAX_GRADE
    }
}

impl From<Option<f64>> for Grade {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Grade::valid(v),
            None => Grade::missing(),
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            write!(f, "{:.2}", self.value)
        } else {
            write!(f, "-")
        }
    }
}

/// Combines the four component scores into a final grade.
///
/// Every component that [`Grade::counts`] is summed. With fewer than two such
/// components the result is `-1.0`, meaning the student is still in
/// progress. Otherwise the sum is divided by `2.0`, however many components
/// were summed.
pub fn calculate_final_grade(np1: Grade, np2: Grade, ava: Grade, pim: Grade) -> f64 {
    let (sum, valid_count) = [np1, np2, ava, pim]
        .iter()
        .filter(|g| {
            let counts = g.counts();
            if g.is_valid && !counts {
                tracing::debug!("Ignoring out-of-range component {}", g.value);
            }
            counts
        })
        .fold((0.0, 0usize), |(sum, n), g| (sum + g.value, n + 1));

    if valid_count < MIN_VALID_COMPONENTS {
        return IN_PROGRESS_SENTINEL;
    }

    sum / FINAL_GRADE_DIVISOR
}

/// [`calculate_final_grade`] for callers holding optional scores: `None` is a
/// component that was not supplied, and `None` is returned instead of the
/// `-1.0` sentinel.
pub fn final_grade_from_options(
    np1: Option<f64>,
    np2: Option<f64>,
    ava: Option<f64>,
    pim: Option<f64>,
) -> Option<f64> {
    let final_grade = calculate_final_grade(np1.into(), np2.into(), ava.into(), pim.into());
    (final_grade >= 0.0).then_some(final_grade)
}

/// Whether `grade` is a finite number within `[0.0, 10.0]`.
pub fn validate_grade(grade: f64) -> bool {
    grade.is_finite() && (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

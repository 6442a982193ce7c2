#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::constants::{
    APPROVAL_THRESHOLD, HIGHEST_SENTINEL, LOWEST_SENTINEL, MAX_GRADE, MIN_GRADE,
};

#[derive(Tabled, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Summary of a class's final grades
pub struct ClassStats {
    #[tabled(rename = "Average", display = "display_score")]
    /// * `average`: mean of the valid grades, `0.0` when there are none
    pub average:        f64,
    #[tabled(rename = "Highest", display = "display_score")]
    /// * `highest`: best valid grade, `-1.0` when there are none
    pub highest:        f64,
    #[tabled(rename = "Lowest", display = "display_score")]
    /// * `lowest`: worst valid grade, `11.0` when there are none
    pub lowest:         f64,
    #[tabled(rename = "Students")]
    /// * `total_students`: how many grades were valid
    pub total_students: usize,
    #[tabled(rename = "Approved")]
    /// * `approved_count`: how many valid grades were 7.0 or more
    pub approved_count: usize,
}

/// Renders a score with two decimals for tables. The highest/lowest
/// sentinels fall outside `[0.0, 10.0]` and render as `-`.
fn display_score(score: &f64) -> String {
    if (MIN_GRADE..=MAX_GRADE).contains(score) {
        format!("{score:.2}")
    } else {
        "-".to_string()
    }
}

impl Default for ClassStats {
    fn default() -> Self {
        Self {
            average:        0.0,
            highest:        HIGHEST_SENTINEL,
            lowest:         LOWEST_SENTINEL,
            total_students: 0,
            approved_count: 0,
        }
    }
}

impl ClassStats {
    /// Whether at least one valid grade was seen. When this is false,
    /// `highest` and `lowest` hold their sentinels and are not grades.
    pub fn has_data(&self) -> bool {
        self.total_students > 0
    }

    /// Percentage of valid grades that are approved, `0.0` with no data.
    pub fn approval_rate(&self) -> f64 {
        if self.total_students == 0 {
            return 0.0;
        }
        self.approved_count as f64 / self.total_students as f64 * 100.0
    }
}

/// Reduces the first `count` entries of `grades` into class statistics.
///
/// Entries outside `[0.0, 10.0]` are left out of every aggregate, including
/// `total_students`. A non-positive `count` returns [`ClassStats::default`];
/// a `count` past the end of `grades` stops at the end.
pub fn calculate_class_statistics(grades: &[f64], count: i64) -> ClassStats {
    let mut stats = ClassStats::default();

    if count <= 0 {
        return stats;
    }

    let take = usize::try_from(count).map_or(grades.len(), |c| c.min(grades.len()));
    let mut sum = 0.0;
    let mut valid_grades = 0usize;

    for &grade in &grades[..take] {
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            tracing::debug!("Skipping out-of-range grade {grade}");
            continue;
        }

        sum += grade;
        valid_grades += 1;

        if grade > stats.highest {
            stats.highest = grade;
        }
        if grade < stats.lowest {
            stats.lowest = grade;
        }
        if grade >= APPROVAL_THRESHOLD {
            stats.approved_count += 1;
        }
    }

    stats.total_students = valid_grades;
    if valid_grades > 0 {
        stats.average = sum / valid_grades as f64;
    }

    stats
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Lowest score a component or final grade may take.
pub const MIN_GRADE: f64 = 0.0;

/// Highest score a component or final grade may take.
pub const MAX_GRADE: f64 = 10.0;

/// Final grades at or above this are approved.
pub const APPROVAL_THRESHOLD: f64 = 7.0;

/// Final grades at or above this (and below [`APPROVAL_THRESHOLD`]) go to
/// remedial.
pub const RECOVERY_THRESHOLD: f64 = 5.0;

/// The final grade is always the sum of the counted components divided by
/// this, no matter how many of the four were counted.
pub const FINAL_GRADE_DIVISOR: f64 = 2.0;

/// Fewest valid components needed before a final grade exists.
pub const MIN_VALID_COMPONENTS: usize = 2;

/// Returned by [`crate::grade::calculate_final_grade`] when there are not
/// enough valid components.
pub const IN_PROGRESS_SENTINEL: f64 = -1.0;

/// Initial (and "no data") value of [`crate::stats::ClassStats::highest`].
pub const HIGHEST_SENTINEL: f64 = -1.0;

/// Initial (and "no data") value of [`crate::stats::ClassStats::lowest`].
pub const LOWEST_SENTINEL: f64 = 11.0;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "NOTAS_LOG";

/// Environment variable holding the output format (`table` or `json`).
pub const OUTPUT_ENV: &str = "NOTAS_OUTPUT";

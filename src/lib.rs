//! # notas
//!
//! A grading calculator: combines the four component scores of a student
//! (NP1, NP2, AVA and PIM) into a final grade, classifies the student, and
//! summarizes a class.
//!
//! Every calculation is a pure function over plain values. Fallible work
//! (reading records from disk, configuration) lives at the edges and
//! reports [`NotasError`].

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Evaluating many students at once
pub mod batch;
/// Environment-driven settings for the binary
pub mod config;
/// Grading thresholds, sentinels and other fixed values
pub mod constants;
/// Errors for the fallible edges of the crate
pub mod error;
/// Component scores and the final grade formula
pub mod grade;
/// Table rendering of results and statistics
pub mod report;
/// Class-wide statistics
pub mod stats;
/// Student status classification
pub mod status;

pub use batch::{
    StudentRecord, StudentResult, batch_calculate_grades, class_statistics_for, load_records,
};
pub use error::NotasError;
pub use grade::{Grade, calculate_final_grade, final_grade_from_options, validate_grade};
pub use stats::{ClassStats, calculate_class_statistics};
pub use status::{StudentStatus, get_student_status, status_for};

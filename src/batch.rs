#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::HashMap, path::Path};

use bon::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{
    error::NotasError,
    grade::final_grade_from_options,
    stats::{ClassStats, calculate_class_statistics},
    status::{StudentStatus, status_for},
};

#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// One student's component scores as supplied by the records application.
/// A missing key and an explicit `null` both mean "not supplied".
pub struct StudentRecord {
    /// Identifier of the student in the records application
    pub student_id: String,
    /// First partial exam
    #[serde(default)]
    pub np1:        Option<f64>,
    /// Second partial exam
    #[serde(default)]
    pub np2:        Option<f64>,
    /// Continuous assessment
    #[serde(default)]
    pub ava:        Option<f64>,
    /// Integrative project
    #[serde(default)]
    pub pim:        Option<f64>,
}

#[derive(Tabled, Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A student's components together with their final grade and status
pub struct StudentResult {
    #[tabled(rename = "Student")]
    /// * `student_id`: copied from the record
    pub student_id:  String,
    #[tabled(rename = "NP1", display = "display_optional")]
    /// * `np1`: copied from the record
    pub np1:         Option<f64>,
    #[tabled(rename = "NP2", display = "display_optional")]
    /// * `np2`: copied from the record
    pub np2:         Option<f64>,
    #[tabled(rename = "AVA", display = "display_optional")]
    /// * `ava`: copied from the record
    pub ava:         Option<f64>,
    #[tabled(rename = "PIM", display = "display_optional")]
    /// * `pim`: copied from the record
    pub pim:         Option<f64>,
    #[tabled(rename = "Final", display = "display_optional")]
    /// * `final_grade`: `None` while fewer than two components are valid
    pub final_grade: Option<f64>,
    #[tabled(rename = "Status")]
    /// * `status`: classification of `final_grade`
    pub status:      StudentStatus,
}

/// Renders an optional score for tables, `-` when absent.
fn display_optional(score: &Option<f64>) -> String {
    match score {
        Some(s) => format!("{s:.2}"),
        None => "-".to_string(),
    }
}

impl StudentRecord {
    /// Computes this student's final grade and status.
    pub fn evaluate(&self) -> StudentResult {
        let final_grade = final_grade_from_options(self.np1, self.np2, self.ava, self.pim);

        StudentResult {
            student_id: self.student_id.clone(),
            np1: self.np1,
            np2: self.np2,
            ava: self.ava,
            pim: self.pim,
            final_grade,
            status: status_for(final_grade),
        }
    }
}

/// Evaluates every record in order.
pub fn batch_calculate_grades(records: &[StudentRecord]) -> Vec<StudentResult> {
    let results: Vec<StudentResult> = records.iter().map(StudentRecord::evaluate).collect();

    tracing::info!(
        "Evaluated {} students: {}",
        results.len(),
        status_summary(&results)
            .iter()
            .sorted_by_key(|(status, _)| status.as_str())
            .map(|(status, n)| format!("{n} {status}"))
            .join(", ")
    );

    results
}

/// How many results landed in each status.
pub fn status_summary(results: &[StudentResult]) -> HashMap<StudentStatus, usize> {
    results.iter().map(|r| r.status).counts()
}

/// Class statistics over the students that have a final grade. Students
/// still in progress have none and are left out, as are final grades above
/// 10.0, which the aggregator treats as out of range.
pub fn class_statistics_for(results: &[StudentResult]) -> ClassStats {
    let grades: Vec<f64> = results.iter().filter_map(|r| r.final_grade).collect();
    calculate_class_statistics(&grades, grades.len() as i64)
}

/// Reads a JSON array of [`StudentRecord`]s from `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<StudentRecord>, NotasError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| NotasError::ReadRecords {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<StudentRecord> =
        serde_json::from_str(&contents).map_err(|source| NotasError::DecodeRecords {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Loaded {} student records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_in_progress_student() {
        let result = StudentRecord::builder()
            .student_id("s1")
            .np1(9.0)
            .build()
            .evaluate();
        assert_eq!(result.final_grade, None);
        assert_eq!(result.status, StudentStatus::EmAndamento);
    }

    #[test]
    fn out_of_range_component_is_ignored() {
        let result = StudentRecord::builder()
            .student_id("s2")
            .np1(11.0)
            .np2(4.0)
            .ava(3.0)
            .build()
            .evaluate();
        assert_eq!(result.final_grade, Some(3.5));
        assert_eq!(result.status, StudentStatus::Reprovado);
        assert_eq!(result.np1, Some(11.0));
    }

    #[test]
    fn summary_counts_statuses() {
        let records = [
            StudentRecord::builder().student_id("a").np1(7.0).np2(7.0).build(),
            StudentRecord::builder().student_id("b").np1(5.0).np2(5.0).build(),
            StudentRecord::builder().student_id("c").build(),
            StudentRecord::builder().student_id("d").np1(8.0).pim(9.0).build(),
        ];
        let summary = status_summary(&batch_calculate_grades(&records));
        assert_eq!(summary.get(&StudentStatus::Aprovado), Some(&2));
        assert_eq!(summary.get(&StudentStatus::Recuperacao), Some(&1));
        assert_eq!(summary.get(&StudentStatus::EmAndamento), Some(&1));
        assert_eq!(summary.get(&StudentStatus::Reprovado), None);
    }

    #[test]
    fn table_marks_missing_components() {
        assert_eq!(display_optional(&None), "-");
        assert_eq!(display_optional(&Some(6.5)), "6.50");
    }
}

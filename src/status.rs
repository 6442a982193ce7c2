#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{APPROVAL_THRESHOLD, RECOVERY_THRESHOLD},
    error::NotasError,
};

/// Where a student stands given their final grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    /// Not enough components yet for a final grade.
    EmAndamento,
    /// Final grade of 7.0 or more.
    Aprovado,
    /// Final grade from 5.0 up to (not including) 7.0.
    Recuperacao,
    /// Final grade below 5.0.
    Reprovado,
}

impl StudentStatus {
    /// All statuses, in decision-table order.
    pub const ALL: [StudentStatus; 4] = [
        StudentStatus::EmAndamento,
        StudentStatus::Aprovado,
        StudentStatus::Recuperacao,
        StudentStatus::Reprovado,
    ];

    /// The label used by the records application.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::EmAndamento => "em_andamento",
            StudentStatus::Aprovado => "aprovado",
            StudentStatus::Recuperacao => "recuperacao",
            StudentStatus::Reprovado => "reprovado",
        }
    }
}

impl Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentStatus {
    type Err = NotasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| NotasError::UnknownStatus(s.to_string()))
    }
}

/// Classifies a final grade. Negative grades (the in-progress sentinel) are
/// [`StudentStatus::EmAndamento`]; anything that is neither negative nor at
/// least 5.0, NaN included, is [`StudentStatus::Reprovado`].
pub fn get_student_status(final_grade: f64) -> StudentStatus {
    if final_grade < 0.0 {
        StudentStatus::EmAndamento
    } else if final_grade >= APPROVAL_THRESHOLD {
        StudentStatus::Aprovado
    } else if final_grade >= RECOVERY_THRESHOLD {
        StudentStatus::Recuperacao
    } else {
        StudentStatus::Reprovado
    }
}

/// Classifies an optional final grade; `None` is still in progress.
pub fn status_for(final_grade: Option<f64>) -> StudentStatus {
    final_grade.map_or(StudentStatus::EmAndamento, get_student_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_table() {
        assert_eq!(get_student_status(-1.0), StudentStatus::EmAndamento);
        assert_eq!(get_student_status(7.0), StudentStatus::Aprovado);
        assert_eq!(get_student_status(16.25), StudentStatus::Aprovado);
        assert_eq!(get_student_status(6.99), StudentStatus::Recuperacao);
        assert_eq!(get_student_status(5.0), StudentStatus::Recuperacao);
        assert_eq!(get_student_status(4.99), StudentStatus::Reprovado);
        assert_eq!(get_student_status(0.0), StudentStatus::Reprovado);
        assert_eq!(get_student_status(f64::NAN), StudentStatus::Reprovado);
    }

    #[test]
    fn labels() {
        assert_eq!(get_student_status(-1.0).as_str(), "em_andamento");
        assert_eq!(get_student_status(7.0).to_string(), "aprovado");
        assert_eq!(get_student_status(5.0).as_str(), "recuperacao");
        assert_eq!(get_student_status(4.99).as_str(), "reprovado");
    }

    #[test]
    fn labels_parse_back() {
        for status in StudentStatus::ALL {
            assert_eq!(status.as_str().parse::<StudentStatus>().unwrap(), status);
        }
        assert!(matches!(
            "approved".parse::<StudentStatus>(),
            Err(NotasError::UnknownStatus(s)) if s == "approved"
        ));
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&StudentStatus::EmAndamento).unwrap();
        assert_eq!(json, "\"em_andamento\"");
    }

    #[test]
    fn missing_final_grade_is_in_progress() {
        assert_eq!(status_for(None), StudentStatus::EmAndamento);
        assert_eq!(status_for(Some(8.0)), StudentStatus::Aprovado);
    }
}

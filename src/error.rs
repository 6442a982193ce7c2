#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

/// Errors raised at the fallible edges of the crate: reading student
/// records, parsing labels and reading configuration. The calculations
/// themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum NotasError {
    /// A records file could not be read.
    #[error("Could not read student records from `{}`: {source}", .path.display())]
    ReadRecords {
        /// The file that was being read.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A records file was not a JSON array of student records.
    #[error("Could not decode student records from `{}`: {source}", .path.display())]
    DecodeRecords {
        /// The file that was being decoded.
        path:   PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
    /// A string is not one of the four status labels.
    #[error(
        "`{0}` is not a student status; expected one of em_andamento, aprovado, recuperacao, \
         reprovado"
    )]
    UnknownStatus(String),
    /// A configuration value could not be understood.
    #[error("Invalid value `{value}` for {key}: {reason}")]
    InvalidConfig {
        /// The environment variable that was read.
        key:    &'static str,
        /// The value found.
        value:  String,
        /// What was expected instead.
        reason: &'static str,
    },
}

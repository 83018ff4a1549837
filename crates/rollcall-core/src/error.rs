//! Register error types.
//!
//! Every failing register operation returns one of these and leaves the
//! roster and ledger untouched, so callers can report the error and carry on.

use thiserror::Error;

use crate::model::StudentId;

pub type Result<T> = std::result::Result<T, RegisterError>;

/// Errors returned by roster and ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A required field was empty after trimming whitespace.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Another student already uses this name (case-insensitive).
    #[error("a student named '{name}' already exists (ID {existing})")]
    DuplicateName { name: String, existing: StudentId },

    /// The date is malformed or does not exist on the calendar.
    #[error("invalid date '{input}', expected a calendar date as YYYY-MM-DD")]
    InvalidDate { input: String },

    /// No roster entry matches the given name or ID.
    #[error("unknown student: {student}")]
    UnknownStudent { student: String },

    /// The status token is not one of p/present/a/absent.
    #[error("invalid status '{input}', expected p/present or a/absent")]
    InvalidStatus { input: String },
}

impl RegisterError {
    pub(crate) fn unknown_name(name: &str) -> Self {
        RegisterError::UnknownStudent {
            student: format!("'{}'", name.trim()),
        }
    }

    pub(crate) fn unknown_id(id: StudentId) -> Self {
        RegisterError::UnknownStudent {
            student: format!("ID {id}"),
        }
    }
}

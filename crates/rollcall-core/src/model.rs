//! Core data model types for rollcall.
//!
//! Students, attendance statuses, and the row types returned by the
//! register's read operations.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::RegisterError;

/// Stable identifier of a student, assigned by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StudentId(u32);

impl StudentId {
    /// The first ID handed out by an empty roster.
    pub const FIRST: StudentId = StudentId(1);

    pub fn new(value: u32) -> Self {
        StudentId(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        StudentId(self.0 + 1)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Roster-assigned identifier.
    pub id: StudentId,
    /// Display name, trimmed. Unique ignoring case.
    pub name: String,
    /// Free-form group label, trimmed.
    pub group: String,
}

impl Student {
    /// Case-insensitive name comparison used for lookups and uniqueness.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Attendance recorded for one student on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" | "present" => Ok(AttendanceStatus::Present),
            "a" | "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(RegisterError::InvalidStatus {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// The shape is checked before handing off to chrono, which would otherwise
/// accept single-digit months and days or signed years.
pub fn parse_date(input: &str) -> Result<NaiveDate, RegisterError> {
    let trimmed = input.trim();
    let invalid = || RegisterError::InvalidDate {
        input: trimmed.to_string(),
    };

    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// One row of a day view: a roster student and their status that day.
///
/// `status` is `None` when nothing was recorded, which is not the same as
/// an explicit `Absent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub student: Student,
    pub status: Option<AttendanceStatus>,
}

/// Present/absent counts over a student's history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
}

impl AttendanceSummary {
    /// Tally a sequence of recorded statuses.
    pub fn from_statuses(statuses: impl IntoIterator<Item = AttendanceStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut summary, status| {
                match status {
                    AttendanceStatus::Present => summary.present += 1,
                    AttendanceStatus::Absent => summary.absent += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    /// Share of recorded days marked present, or `None` with no records.
    pub fn present_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.present as f64 / total as f64),
        }
    }
}

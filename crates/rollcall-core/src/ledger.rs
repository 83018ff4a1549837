//! Per-date attendance ledger.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{AttendanceStatus, StudentId};

/// Attendance cells keyed by date, then by student.
///
/// The ledger does not know the roster; `Register` checks that a student
/// exists before anything is written here.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, BTreeMap<StudentId, AttendanceStatus>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a cell, returning whatever it held before.
    pub fn record(
        &mut self,
        date: NaiveDate,
        student: StudentId,
        status: AttendanceStatus,
    ) -> Option<AttendanceStatus> {
        self.days.entry(date).or_default().insert(student, status)
    }

    /// `None` means no record, not absence.
    pub fn status_on(&self, date: NaiveDate, student: StudentId) -> Option<AttendanceStatus> {
        self.days.get(&date)?.get(&student).copied()
    }

    /// Recorded (date, status) pairs for one student, oldest first.
    pub fn history_for(&self, student: StudentId) -> Vec<(NaiveDate, AttendanceStatus)> {
        self.days
            .iter()
            .filter_map(|(date, cells)| cells.get(&student).map(|status| (*date, *status)))
            .collect()
    }

    /// Number of cells written for a date.
    pub fn marked_on(&self, date: NaiveDate) -> usize {
        self.days.get(&date).map_or(0, BTreeMap::len)
    }
}

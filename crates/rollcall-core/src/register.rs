//! The attendance register: one roster and one ledger behind a single API.
//!
//! All validation happens before any mutation, so a failed call leaves the
//! register exactly as it was.

use chrono::NaiveDate;

use crate::error::{RegisterError, Result};
use crate::ledger::Ledger;
use crate::model::{
    parse_date, AttendanceStatus, AttendanceSummary, DayEntry, Student, StudentId,
};
use crate::roster::Roster;

/// In-memory attendance state for one class.
#[derive(Debug, Clone, Default)]
pub struct Register {
    roster: Roster,
    ledger: Ledger,
}

/// A student together with their recorded history.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentHistory {
    pub student: Student,
    pub records: Vec<(NaiveDate, AttendanceStatus)>,
}

impl StudentHistory {
    pub fn summary(&self) -> AttendanceSummary {
        AttendanceSummary::from_statuses(self.records.iter().map(|(_, status)| *status))
    }
}

impl Register {
    /// An empty register. Seed data is applied by `Register::from_seeds`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_student(&mut self, name: &str, group: &str) -> Result<StudentId> {
        self.roster.add_student(name, group)
    }

    /// Resolve a name to an ID, failing with `UnknownStudent`.
    pub fn find_by_name(&self, name: &str) -> Result<StudentId> {
        self.roster
            .find_by_name(name)
            .ok_or_else(|| RegisterError::unknown_name(name))
    }

    pub fn list_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.roster.list()
    }

    /// Record attendance from raw input.
    ///
    /// Checks run in order: date, student, status. Returns the status the
    /// cell held before, if any.
    pub fn record_attendance(
        &mut self,
        date: &str,
        student: StudentId,
        status: &str,
    ) -> Result<Option<AttendanceStatus>> {
        let date = parse_date(date)?;
        if !self.roster.contains(student) {
            return Err(RegisterError::unknown_id(student));
        }
        let status: AttendanceStatus = status.parse()?;
        self.record(date, student, status)
    }

    /// Record an already-parsed status for a roster student.
    pub fn record(
        &mut self,
        date: NaiveDate,
        student: StudentId,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceStatus>> {
        if !self.roster.contains(student) {
            return Err(RegisterError::unknown_id(student));
        }
        let previous = self.ledger.record(date, student, status);
        tracing::debug!(
            %date,
            %student,
            %status,
            overwritten = previous.is_some(),
            "attendance recorded"
        );
        Ok(previous)
    }

    /// Same as [`record_attendance`](Self::record_attendance) with the
    /// student given by name.
    pub fn record_attendance_by_name(
        &mut self,
        date: &str,
        name: &str,
        status: &str,
    ) -> Result<StudentId> {
        let date = parse_date(date)?;
        let student = self.find_by_name(name)?;
        let status: AttendanceStatus = status.parse()?;
        self.record(date, student, status)?;
        Ok(student)
    }

    pub fn status_on(&self, date: NaiveDate, student: StudentId) -> Option<AttendanceStatus> {
        self.ledger.status_on(date, student)
    }

    pub fn history_for(&self, student: StudentId) -> Vec<(NaiveDate, AttendanceStatus)> {
        self.ledger.history_for(student)
    }

    /// Every roster student with their status on `date`, ascending by ID.
    pub fn view_date(&self, date: &str) -> Result<Vec<DayEntry>> {
        Ok(self.view_on(parse_date(date)?))
    }

    pub fn view_on(&self, date: NaiveDate) -> Vec<DayEntry> {
        self.roster
            .list()
            .map(|student| DayEntry {
                student: student.clone(),
                status: self.ledger.status_on(date, student.id),
            })
            .collect()
    }

    /// Look a student up by name and return their history.
    pub fn search_student(&self, name: &str) -> Result<StudentHistory> {
        let id = self.find_by_name(name)?;
        let student = self
            .roster
            .get(id)
            .cloned()
            .ok_or_else(|| RegisterError::unknown_id(id))?;
        Ok(StudentHistory {
            student,
            records: self.ledger.history_for(id),
        })
    }
}

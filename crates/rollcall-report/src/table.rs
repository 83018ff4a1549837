//! Fixed-width tables built with comfy-table.

use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Table};

use rollcall_core::{AttendanceStatus, AttendanceSummary, DayEntry, Student};

/// Label shown in the Status column; unset cells render as `-`.
pub fn status_label(status: Option<AttendanceStatus>) -> String {
    match status {
        Some(status) => status.to_string(),
        None => "-".to_string(),
    }
}

fn id_cell(student: &Student) -> Cell {
    Cell::new(student.id).set_alignment(CellAlignment::Right)
}

/// ID / Name / Group table for the roster listing.
pub fn roster_table<'a>(students: impl IntoIterator<Item = &'a Student>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Group"]);

    for student in students {
        table.add_row(vec![
            id_cell(student),
            Cell::new(&student.name),
            Cell::new(&student.group),
        ]);
    }

    table
}

/// ID / Name / Group / Status table for one date.
pub fn day_table(entries: &[DayEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Group", "Status"]);

    for entry in entries {
        table.add_row(vec![
            id_cell(&entry.student),
            Cell::new(&entry.student.name),
            Cell::new(&entry.student.group),
            Cell::new(status_label(entry.status)),
        ]);
    }

    table
}

/// Date / Status table for one student's history.
pub fn history_table(records: &[(NaiveDate, AttendanceStatus)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Status"]);

    for (date, status) in records {
        table.add_row(vec![
            Cell::new(date.format("%Y-%m-%d")),
            Cell::new(status),
        ]);
    }

    table
}

/// One-line tally shown under a history table, e.g. `3 present, 1 absent (75.0%)`.
pub fn summary_line(summary: &AttendanceSummary) -> String {
    match summary.present_rate() {
        Some(rate) => format!(
            "{} present, {} absent ({:.1}%)",
            summary.present,
            summary.absent,
            rate * 100.0
        ),
        None => "no records".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::{Register, StudentId};

    fn sample_register() -> Register {
        let mut register = Register::new();
        register.add_student("Ramon Nastase", "A1").unwrap();
        register.add_student("Ana Marin", "B1").unwrap();
        register
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(Some(AttendanceStatus::Present)), "Present");
        assert_eq!(status_label(Some(AttendanceStatus::Absent)), "Absent");
        assert_eq!(status_label(None), "-");
    }

    #[test]
    fn roster_table_lists_every_student() {
        let register = sample_register();
        let rendered = roster_table(register.list_students()).to_string();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("Group"));
        assert!(rendered.contains("Ramon Nastase"));
        assert!(rendered.contains("Ana Marin"));
        assert!(rendered.find("Ramon Nastase") < rendered.find("Ana Marin"));
    }

    #[test]
    fn day_table_renders_unset_as_dash() {
        let mut register = sample_register();
        register
            .record_attendance("2024-03-01", StudentId::FIRST, "p")
            .unwrap();
        let entries = register.view_date("2024-03-01").unwrap();
        let rendered = day_table(&entries).to_string();

        let ramon = rendered
            .lines()
            .find(|l| l.contains("Ramon Nastase"))
            .unwrap();
        assert!(ramon.contains("Present"));
        let ana = rendered.lines().find(|l| l.contains("Ana Marin")).unwrap();
        assert!(ana.contains(" - "));
        assert!(!ana.contains("Absent"));
    }

    #[test]
    fn history_table_keeps_order() {
        let records = vec![
            (
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                AttendanceStatus::Present,
            ),
            (
                NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                AttendanceStatus::Absent,
            ),
        ];
        let rendered = history_table(&records).to_string();
        assert!(rendered.contains("2024-01-10"));
        assert!(rendered.find("2024-01-10") < rendered.find("2024-02-03"));
        assert!(rendered.contains("Absent"));
    }

    #[test]
    fn summary_line_formats_rate() {
        let summary = AttendanceSummary {
            present: 3,
            absent: 1,
        };
        assert_eq!(summary_line(&summary), "3 present, 1 absent (75.0%)");
        assert_eq!(summary_line(&AttendanceSummary::default()), "no records");
    }
}

//! TOML seed data.
//!
//! Seed files pre-populate a register at startup with students and,
//! optionally, attendance records. They are applied through the normal
//! register operations so every invariant still holds.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{parse_date, AttendanceStatus};
use crate::register::Register;

/// The ten-student demo roster loaded when the builtin seed is enabled.
pub const BUILTIN_SEED: &str = r#"# rollcall demo roster

[[students]]
name = "Ramon Nastase"
group = "A1"

[[students]]
name = "Ioana Popescu"
group = "A1"

[[students]]
name = "Andrei Ionescu"
group = "A1"

[[students]]
name = "Maria Dumitrescu"
group = "A2"

[[students]]
name = "Alexandru Stan"
group = "A2"

[[students]]
name = "Elena Georgescu"
group = "A2"

[[students]]
name = "Mihai Constantin"
group = "B1"

[[students]]
name = "Ana Marin"
group = "B1"

[[students]]
name = "Cristian Stoica"
group = "B2"

[[students]]
name = "Laura Munteanu"
group = "B2"
"#;

/// Parsed seed data, still in raw string form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub students: Vec<SeedStudent>,
    #[serde(default)]
    pub attendance: Vec<SeedRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStudent {
    pub name: String,
    pub group: String,
}

/// An attendance record referring to its student by name.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord {
    pub date: String,
    pub student: String,
    pub status: String,
}

/// Parse the builtin demo roster.
pub fn builtin_seed() -> Result<Seed> {
    parse_seed_str(BUILTIN_SEED, Path::new("<builtin>"))
}

/// Parse a seed file from disk.
pub fn parse_seed(path: &Path) -> Result<Seed> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file: {}", path.display()))?;

    parse_seed_str(&content, path)
}

/// Parse a TOML string into a `Seed` (useful for testing).
pub fn parse_seed_str(content: &str, source_path: &Path) -> Result<Seed> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse seed TOML: {}", source_path.display()))
}

/// A problem found in a seed file.
#[derive(Debug, Clone)]
pub struct SeedWarning {
    /// Where in the file (e.g. `students[2]`).
    pub location: String,
    /// Warning message.
    pub message: String,
}

/// Check a seed for entries the register would reject.
pub fn validate_seed(seed: &Seed) -> Vec<SeedWarning> {
    let mut warnings = Vec::new();
    let mut warn = |location: String, message: String| {
        warnings.push(SeedWarning { location, message });
    };

    // Student fields and duplicate names
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (i, student) in seed.students.iter().enumerate() {
        let location = format!("students[{i}]");
        if student.name.trim().is_empty() {
            warn(location.clone(), "name is empty".into());
        }
        if student.group.trim().is_empty() {
            warn(location.clone(), "group is empty".into());
        }
        let key = student.name.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        if let Some(first) = seen.get(&key) {
            warn(
                location,
                format!(
                    "duplicate name '{}' (first declared at students[{first}])",
                    student.name.trim()
                ),
            );
        } else {
            seen.insert(key, i);
        }
    }

    // Attendance records
    for (i, record) in seed.attendance.iter().enumerate() {
        let location = format!("attendance[{i}]");
        if let Err(e) = parse_date(&record.date) {
            warn(location.clone(), e.to_string());
        }
        if !seen.contains_key(&record.student.trim().to_lowercase()) {
            warn(
                location.clone(),
                format!("student '{}' is not declared in this file", record.student.trim()),
            );
        }
        if let Err(e) = record.status.parse::<AttendanceStatus>() {
            warn(location, e.to_string());
        }
    }

    warnings
}

impl Register {
    /// Build a register from seeds, applied in order.
    ///
    /// Students are added before attendance within each seed, so a record
    /// may refer to any student declared earlier in the same or a previous
    /// seed. The first rejected entry aborts with its location.
    pub fn from_seeds(seeds: &[Seed]) -> Result<Register> {
        let mut register = Register::new();
        for (n, seed) in seeds.iter().enumerate() {
            register.apply_seed(seed).with_context(|| format!("seed #{}", n + 1))?;
        }
        Ok(register)
    }

    /// Apply one seed on top of the current state.
    pub fn apply_seed(&mut self, seed: &Seed) -> Result<()> {
        for (i, student) in seed.students.iter().enumerate() {
            self.add_student(&student.name, &student.group)
                .with_context(|| format!("students[{i}]"))?;
        }
        for (i, record) in seed.attendance.iter().enumerate() {
            self.record_attendance_by_name(&record.date, &record.student, &record.status)
                .with_context(|| format!("attendance[{i}]"))?;
        }
        tracing::debug!(
            students = seed.students.len(),
            records = seed.attendance.len(),
            "seed applied"
        );
        Ok(())
    }
}

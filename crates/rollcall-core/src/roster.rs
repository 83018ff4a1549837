//! The roster of registered students.

use std::collections::BTreeMap;

use crate::error::{RegisterError, Result};
use crate::model::{Student, StudentId};

/// Students keyed by ID, plus the counter that hands out new IDs.
///
/// IDs increase strictly and are never reused. Names are unique ignoring
/// case; lookups scan linearly, which is fine at classroom scale.
#[derive(Debug, Clone)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
    next_id: StudentId,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: StudentId::FIRST,
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student and return the newly allocated ID.
    pub fn add_student(&mut self, name: &str, group: &str) -> Result<StudentId> {
        let name = name.trim();
        let group = group.trim();

        if name.is_empty() {
            return Err(RegisterError::EmptyField { field: "name" });
        }
        if group.is_empty() {
            return Err(RegisterError::EmptyField { field: "group" });
        }
        if let Some(existing) = self.find_by_name(name) {
            return Err(RegisterError::DuplicateName {
                name: name.to_string(),
                existing,
            });
        }

        let id = self.next_id;
        self.next_id = id.next();
        self.students.insert(
            id,
            Student {
                id,
                name: name.to_string(),
                group: group.to_string(),
            },
        );

        tracing::debug!(%id, name, group, "student added");
        Ok(id)
    }

    /// Case-insensitive exact lookup of a trimmed name.
    pub fn find_by_name(&self, name: &str) -> Option<StudentId> {
        self.students
            .values()
            .find(|student| student.is_named(name))
            .map(|student| student.id)
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.students.contains_key(&id)
    }

    /// All students, ascending by ID.
    pub fn list(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut roster = Roster::new();
        let first = roster.add_student("Ioana Popescu", "A1").unwrap();
        let second = roster.add_student("Andrei Ionescu", "A2").unwrap();
        assert_eq!(first, StudentId::new(1));
        assert_eq!(second, StudentId::new(2));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn stores_trimmed_fields() {
        let mut roster = Roster::new();
        let id = roster.add_student("  Ana Marin ", " B1  ").unwrap();
        let student = roster.get(id).unwrap();
        assert_eq!(student.name, "Ana Marin");
        assert_eq!(student.group, "B1");
    }

    #[test]
    fn rejects_blank_fields() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.add_student("   ", "A1").unwrap_err(),
            RegisterError::EmptyField { field: "name" }
        );
        assert_eq!(
            roster.add_student("Ana Marin", "").unwrap_err(),
            RegisterError::EmptyField { field: "group" }
        );
        assert!(roster.is_empty());
    }

    #[test]
    fn rejects_duplicate_names_ignoring_case() {
        let mut roster = Roster::new();
        let id = roster.add_student("Mihai Constantin", "A1").unwrap();
        let err = roster.add_student("MIHAI constantin", "B2").unwrap_err();
        assert_eq!(
            err,
            RegisterError::DuplicateName {
                name: "MIHAI constantin".into(),
                existing: id,
            }
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn failed_add_does_not_consume_an_id() {
        let mut roster = Roster::new();
        roster.add_student("Laura Munteanu", "A1").unwrap();
        roster.add_student("laura munteanu", "A1").unwrap_err();
        roster.add_student("", "A1").unwrap_err();
        let next = roster.add_student("Cristian Stoica", "A2").unwrap();
        assert_eq!(next, StudentId::new(2));
    }

    #[test]
    fn find_by_name_any_casing() {
        let mut roster = Roster::new();
        let id = roster.add_student("Elena Georgescu", "B1").unwrap();
        assert_eq!(roster.find_by_name("elena georgescu"), Some(id));
        assert_eq!(roster.find_by_name(" ELENA GEORGESCU "), Some(id));
        assert_eq!(roster.find_by_name("Elena"), None);
    }

    #[test]
    fn list_is_sorted_and_restartable() {
        let mut roster = Roster::new();
        for name in ["Zoe", "Adam", "Mara"] {
            roster.add_student(name, "G").unwrap();
        }
        let ids: Vec<u32> = roster.list().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let names: Vec<&str> = roster.list().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Adam", "Mara"]);
    }
}

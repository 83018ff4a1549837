//! rollcall-core — Roster, attendance ledger, and the operations over them.
//!
//! This crate defines the data model, the error taxonomy, and the
//! `Register` state object that the menu and any other caller drive.

pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod register;
pub mod roster;
pub mod seed;

pub use error::{RegisterError, Result};
pub use ledger::Ledger;
pub use model::{AttendanceStatus, AttendanceSummary, DayEntry, Student, StudentId};
pub use register::{Register, StudentHistory};
pub use roster::Roster;

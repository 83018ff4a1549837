//! rollcall-report — Text tables for rosters, day views, and histories.

pub mod table;

pub use table::{day_table, history_table, roster_table, status_label, summary_line};

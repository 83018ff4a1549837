//! The `rollcall validate` command.

use std::path::PathBuf;

use anyhow::Result;

use rollcall_core::seed::{parse_seed, validate_seed};

pub fn execute(seed_path: PathBuf) -> Result<()> {
    let seed = parse_seed(&seed_path)?;

    println!(
        "Seed file: {} ({} students, {} attendance records)",
        seed_path.display(),
        seed.students.len(),
        seed.attendance.len()
    );

    let warnings = validate_seed(&seed);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.location, w.message);
    }

    if warnings.is_empty() {
        println!("Seed file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

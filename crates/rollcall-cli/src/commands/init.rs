//! The `rollcall init` command.

use std::path::Path;

use anyhow::{Context, Result};

const CONFIG_FILE: &str = "rollcall.toml";
const SEED_FILE: &str = "seed/roster.toml";

/// Starter files, written relative to the working directory.
const STARTER_FILES: [(&str, &str); 2] = [
    (CONFIG_FILE, SAMPLE_CONFIG),
    (SEED_FILE, EXAMPLE_SEED),
];

pub fn execute() -> Result<()> {
    let created = scaffold(Path::new("."))?;
    tracing::info!(created, "init finished");

    if created == 0 {
        println!("\nNothing to do; remove a file above to regenerate it.");
    } else {
        println!("\nEdit {SEED_FILE} with your class, then check it and start the menu:");
        println!("  rollcall validate --seed-file {SEED_FILE}");
        println!("  rollcall");
    }
    Ok(())
}

/// Write every starter file missing under `root`, returning how many were created.
fn scaffold(root: &Path) -> Result<usize> {
    let mut created = 0;
    for (relative, content) in STARTER_FILES {
        if write_if_missing(&root.join(relative), content)? {
            println!("Created {relative}");
            created += 1;
        } else {
            println!("{relative} already exists, skipping.");
        }
    }
    Ok(created)
}

fn write_if_missing(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

const SAMPLE_CONFIG: &str = r#"# rollcall configuration

log_filter = "rollcall=warn"

[seed]
# Load the ten-student demo roster before the seed file.
builtin = true
file = "seed/roster.toml"
"#;

const EXAMPLE_SEED: &str = r#"# Students are added in file order and get the next free IDs.

[[students]]
name = "Radu Vasile"
group = "C1"

[[students]]
name = "Irina Dobre"
group = "C1"

# Status accepts p/present or a/absent, in any case.
[[attendance]]
date = "2024-01-10"
student = "Radu Vasile"
status = "present"

[[attendance]]
date = "2024-01-10"
student = "Irina Dobre"
status = "a"
"#;

//! rollcall configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where startup seed data comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Load the ten-student demo roster.
    #[serde(default = "default_true")]
    pub builtin: bool,
    /// Extra seed file applied after the builtin roster.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level rollcall configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RollcallConfig {
    /// Seed data applied at startup.
    #[serde(default)]
    pub seed: SeedConfig,
    /// `tracing` filter directive used when `RUST_LOG` does not cover a target.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "rollcall=warn".to_string()
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            seed: SeedConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `rollcall.toml` in the current directory
/// 2. `~/.config/rollcall/config.toml`
///
/// Environment variable overrides: `ROLLCALL_SEED_FILE`, `ROLLCALL_NO_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<RollcallConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => default_locations().into_iter().find(|p| p.exists()),
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "config loaded");
            config
        }
        None => RollcallConfig::default(),
    };

    // Apply env var overrides
    if let Ok(file) = std::env::var("ROLLCALL_SEED_FILE") {
        config.seed.file = Some(PathBuf::from(file));
    }
    if std::env::var("ROLLCALL_NO_SEED").is_ok_and(|v| is_truthy(&v)) {
        config.seed.builtin = false;
    }

    config.seed.file = config
        .seed
        .file
        .as_ref()
        .map(|f| PathBuf::from(resolve_env_vars(&f.to_string_lossy())));

    Ok(config)
}

/// Parse a TOML string into a `RollcallConfig`.
pub fn parse_config_str(content: &str) -> Result<RollcallConfig> {
    Ok(toml::from_str(content)?)
}

fn default_locations() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("rollcall.toml")];
    if let Some(home) = dirs_path() {
        paths.push(home.join("config.toml"));
    }
    paths
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("rollcall"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_ROLLCALL_TEST_VAR", "fixtures");
        assert_eq!(resolve_env_vars("${_ROLLCALL_TEST_VAR}"), "fixtures");
        assert_eq!(
            resolve_env_vars("${_ROLLCALL_TEST_VAR}/roster.toml"),
            "fixtures/roster.toml"
        );
        assert_eq!(resolve_env_vars("no/vars/here"), "no/vars/here");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_ROLLCALL_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_expand_substituted_values() {
        std::env::set_var("_ROLLCALL_SELF_REF", "${_ROLLCALL_SELF_REF}");
        assert_eq!(
            resolve_env_vars("${_ROLLCALL_SELF_REF}"),
            "${_ROLLCALL_SELF_REF}"
        );
        assert_eq!(
            resolve_env_vars("a/${_ROLLCALL_SELF_REF}/${_ROLLCALL_UNSET_VAR}b"),
            "a/${_ROLLCALL_SELF_REF}/b"
        );
        std::env::remove_var("_ROLLCALL_SELF_REF");
    }

    #[test]
    fn default_config() {
        let config = RollcallConfig::default();
        assert!(config.seed.builtin);
        assert!(config.seed.file.is_none());
        assert_eq!(config.log_filter, "rollcall=warn");
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
log_filter = "rollcall=debug"

[seed]
builtin = false
file = "seed/roster.toml"
"#;
        let config = parse_config_str(toml_str).unwrap();
        assert!(!config.seed.builtin);
        assert_eq!(config.seed.file, Some(PathBuf::from("seed/roster.toml")));
        assert_eq!(config.log_filter, "rollcall=debug");
    }

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = parse_config_str("[seed]\nfile = \"x.toml\"\n").unwrap();
        assert!(config.seed.builtin);
        assert_eq!(config.log_filter, "rollcall=warn");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rollcall.toml");
        std::fs::write(&path, "log_filter = \"rollcall=info\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.log_filter, "rollcall=info");
    }

    #[test]
    fn truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("yes"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}

//! Engine configuration from environment variables.
//!
//! | Variable                | Meaning                                         | Default |
//! |-------------------------|-------------------------------------------------|---------|
//! | `PARLANCE_WORLD_PATH`   | JSON file with the world object list            | embedded demo |
//! | `PARLANCE_GRAMMAR_PATH` | JSON file with the template list                | embedded demo |
//! | `PARLANCE_STRICT_KINDS` | Fail loading when a slot kind has no objects    | `false` |
//! | `PARLANCE_LOWERCASE`    | Lowercase commands before matching              | `true`  |
//!
//! The two paths must be set together or not at all.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub const WORLD_PATH_VAR: &str = "PARLANCE_WORLD_PATH";
pub const GRAMMAR_PATH_VAR: &str = "PARLANCE_GRAMMAR_PATH";
pub const STRICT_KINDS_VAR: &str = "PARLANCE_STRICT_KINDS";
pub const LOWERCASE_VAR: &str = "PARLANCE_LOWERCASE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' (expected true/false)")]
    InvalidBool { key: &'static str, value: String },
    #[error("{set} is set but {missing} is not; catalog paths must be given together")]
    PartialCatalogPaths {
        set: &'static str,
        missing: &'static str,
    },
}

/// Where the world and grammar catalogs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Embedded,
    Files { world: PathBuf, grammar: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub catalogs: CatalogLocation,
    pub strict_kinds: bool,
    pub lowercase_commands: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalogs: CatalogLocation::Embedded,
            strict_kinds: false,
            lowercase_commands: true,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let catalogs = match (non_empty(WORLD_PATH_VAR), non_empty(GRAMMAR_PATH_VAR)) {
            (Some(world), Some(grammar)) => CatalogLocation::Files {
                world: PathBuf::from(world),
                grammar: PathBuf::from(grammar),
            },
            (None, None) => CatalogLocation::Embedded,
            (Some(_), None) => {
                return Err(ConfigError::PartialCatalogPaths {
                    set: WORLD_PATH_VAR,
                    missing: GRAMMAR_PATH_VAR,
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::PartialCatalogPaths {
                    set: GRAMMAR_PATH_VAR,
                    missing: WORLD_PATH_VAR,
                })
            }
        };

        let defaults = Self::default();
        Ok(Self {
            catalogs,
            strict_kinds: parse_bool(STRICT_KINDS_VAR, non_empty(STRICT_KINDS_VAR))?
                .unwrap_or(defaults.strict_kinds),
            lowercase_commands: parse_bool(LOWERCASE_VAR, non_empty(LOWERCASE_VAR))?
                .unwrap_or(defaults.lowercase_commands),
        })
    }
}

fn parse_bool(key: &'static str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
///
/// Earlier files win because dotenvy never overrides variables already set.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    load_dotenv_from(&repo_root);
}

/// Returns how many env files were read successfully.
fn load_dotenv_from(dir: &Path) -> usize {
    let mut loaded = 0;
    for filename in [".env.local", ".env"] {
        let path = dir.join(filename);
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path(&path) {
            Ok(()) => loaded += 1,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Ignoring unreadable env file");
            }
        }
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), Ok(EngineConfig::default()));
    }

    #[test]
    fn test_file_catalogs() {
        let config = config_from(&[
            (WORLD_PATH_VAR, "/data/world.json"),
            (GRAMMAR_PATH_VAR, " /data/grammar.json "),
        ])
        .expect("valid config");
        assert_eq!(
            config.catalogs,
            CatalogLocation::Files {
                world: PathBuf::from("/data/world.json"),
                grammar: PathBuf::from("/data/grammar.json"),
            }
        );
    }

    #[test]
    fn test_partial_catalog_paths_rejected() {
        assert_eq!(
            config_from(&[(WORLD_PATH_VAR, "/data/world.json")]),
            Err(ConfigError::PartialCatalogPaths {
                set: WORLD_PATH_VAR,
                missing: GRAMMAR_PATH_VAR,
            })
        );
        assert!(matches!(
            config_from(&[(GRAMMAR_PATH_VAR, "/data/grammar.json")]),
            Err(ConfigError::PartialCatalogPaths { .. })
        ));
    }

    #[test]
    fn test_blank_paths_count_as_unset() {
        let config = config_from(&[(WORLD_PATH_VAR, "  "), (GRAMMAR_PATH_VAR, "")])
            .expect("valid config");
        assert_eq!(config.catalogs, CatalogLocation::Embedded);
    }

    #[test]
    fn test_bool_flags() {
        let config = config_from(&[(STRICT_KINDS_VAR, "TRUE"), (LOWERCASE_VAR, "0")])
            .expect("valid config");
        assert!(config.strict_kinds);
        assert!(!config.lowercase_commands);
    }

    #[test]
    fn test_dotenv_skips_malformed_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(".env.local"),
            "PARLANCE_CONFIG_TEST_LOCAL=1\n",
        )
        .expect("write .env.local");
        std::fs::write(dir.path().join(".env"), "this line is not an assignment\n")
            .expect("write .env");

        assert_eq!(load_dotenv_from(dir.path()), 1);
        assert_eq!(
            std::env::var("PARLANCE_CONFIG_TEST_LOCAL").as_deref(),
            Ok("1")
        );
    }

    #[test]
    fn test_dotenv_missing_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert_eq!(load_dotenv_from(dir.path()), 0);
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let err = config_from(&[(STRICT_KINDS_VAR, "maybe")]).expect_err("invalid flag");
        assert_eq!(
            err.to_string(),
            "Invalid value for PARLANCE_STRICT_KINDS: 'maybe' (expected true/false)"
        );
    }
}

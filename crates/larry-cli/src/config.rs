use std::path::{Path, PathBuf};

use larry_dsl::{DuplicatePolicy, ParseOptions};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "LARRY_CONFIG";

/// CLI configuration loaded from larry.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LarryConfig {
    #[serde(default)]
    pub parse: ParseSettings,
    #[serde(default)]
    pub log: LogSettings,
}

/// Compiler settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSettings {
    #[serde(default)]
    pub duplicate_entities: DuplicateEntities,
}

/// How a second header with an already declared entity name is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateEntities {
    #[default]
    Replace,
    Reject,
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// A tracing filter such as `debug` or `larry_dsl=trace`.
    #[serde(default)]
    pub level: Option<String>,
}

impl LarryConfig {
    /// Compiler options derived from the `[parse]` section.
    pub fn parse_options(&self) -> ParseOptions {
        let duplicate_entities = match self.parse.duplicate_entities {
            DuplicateEntities::Replace => DuplicatePolicy::Replace,
            DuplicateEntities::Reject => DuplicatePolicy::Reject,
        };
        ParseOptions { duplicate_entities }
    }
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit)
/// 2. `LARRY_CONFIG` env var
/// 3. `./larry.toml` (project-local)
/// 4. `$XDG_CONFIG_HOME/larry/config.toml`
/// 5. `~/.config/larry/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<LarryConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    let local = PathBuf::from("larry.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("larry/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/larry/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(LarryConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<LarryConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

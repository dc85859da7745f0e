use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::DEFAULT_ALPHA;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Standard,
    Dev,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub alpha: f64,
    pub scratch_dir: PathBuf,
    pub eval_file_ending: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            scratch_dir: std::env::temp_dir().join("ahb-evalstats"),
            eval_file_ending: ".eval".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("dev mode requires override file {}", .0.display())]
    MissingDevOverride(PathBuf),
    #[error("dev mode requires a settings file to layer overrides onto")]
    DevWithoutSettings,
}

/// Loads settings from `path`; in dev mode keys of the sibling
/// `<stem>_dev.<ext>` file take precedence one by one.
pub fn load_settings(path: Option<&Path>, mode: Mode) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        if mode == Mode::Dev {
            return Err(ConfigError::DevWithoutSettings);
        }
        return Ok(Settings::default());
    };

    let mut table = read_table(path)?;
    if mode == Mode::Dev {
        let dev_path = dev_override_path(path);
        if !dev_path.is_file() {
            return Err(ConfigError::MissingDevOverride(dev_path));
        }
        let overrides = read_table(&dev_path)?;
        tracing::debug!(
            path = %dev_path.display(),
            n_keys = overrides.len(),
            "applying dev settings overrides"
        );
        table = merge_tables(table, overrides);
    }

    toml::Value::Table(table)
        .try_into::<Settings>()
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

pub fn dev_override_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_dev.{}", ext.to_string_lossy()),
        None => format!("{stem}_dev"),
    };
    path.with_file_name(name)
}

pub fn merge_tables(mut base: toml::Table, overrides: toml::Table) -> toml::Table {
    for (key, value) in overrides {
        base.insert(key, value);
    }
    base
}

fn read_table(path: &Path) -> Result<toml::Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    content
        .parse::<toml::Table>()
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};

use crate::io::storage::DATA_FILE;

const APP_NAME: &str = "etui";
/// Directory under `~/.local/share` used by earlier releases when
/// `XDG_DATA_HOME` was unset
const LEGACY_DIR_NAME: &str = "eisenhower-tui";

/// Overrides the directory holding `tasks.jsonl`
pub const DATA_DIR_ENV: &str = "ETUI_DATA_DIR";
/// Overrides the path of `config.toml`
pub const CONFIG_ENV: &str = "ETUI_CONFIG";

/// Error type for locating per-user directories
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("could not determine a home directory for per-user data")]
    NoHome,
    #[error("could not create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Pick the data directory: explicit flag, then environment, then the
/// platform data directory (`$XDG_DATA_HOME/etui` on Linux). An existing
/// task file in the legacy `~/.local/share/eisenhower-tui` is picked up
/// while the platform directory has none.
pub fn resolve_data_dir(flag: Option<&Path>, env_value: Option<String>) -> Result<PathBuf, PathError> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let platform = ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(PathError::NoHome)?;
    let legacy = legacy_data_dir(std::env::var_os("XDG_DATA_HOME"));
    Ok(prefer_legacy(platform, legacy))
}

/// The legacy directory only applies when `XDG_DATA_HOME` is unset
fn legacy_data_dir(xdg_data_home: Option<OsString>) -> Option<PathBuf> {
    if xdg_data_home.is_some_and(|v| !v.is_empty()) {
        return None;
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".local").join("share").join(LEGACY_DIR_NAME))
}

fn prefer_legacy(platform: PathBuf, legacy: Option<PathBuf>) -> PathBuf {
    match legacy {
        Some(legacy) if !platform.join(DATA_FILE).exists() && legacy.join(DATA_FILE).is_file() => {
            tracing::info!(path = %legacy.display(), "using legacy data directory");
            legacy
        }
        _ => platform,
    }
}

/// Resolve the data directory from the process environment and create it
pub fn data_dir(flag: Option<&Path>) -> Result<PathBuf, PathError> {
    let dir = resolve_data_dir(flag, std::env::var(DATA_DIR_ENV).ok())?;
    fs::create_dir_all(&dir).map_err(|e| PathError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

/// Pick the config file: explicit flag, then environment, then the
/// platform config directory. Returns None when no home directory exists.
pub fn resolve_config_path(flag: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Resolve the config file path from the process environment
pub fn config_path(flag: Option<&Path>) -> Option<PathBuf> {
    resolve_config_path(flag, std::env::var(CONFIG_ENV).ok())
}

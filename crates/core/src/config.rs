use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

static LOG_FILE_NAME: &str = "taskboard.log";
static ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";
static ENV_EMPTY: &str = "TASKBOARD_EMPTY";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "taskboard", "taskboard"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    log_dir: PathBuf,
    log_path: PathBuf,
    seed: bool,
}

impl AppConfig {
    /// Resolve the log directory from the override, environment variables, and
    /// platform defaults, creating it if needed. `empty` starts the board
    /// without the sample fixture.
    pub fn discover(log_dir_override: Option<PathBuf>, empty: bool) -> Result<Self> {
        let log_dir = resolve_log_dir(log_dir_override)?;
        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).with_context(|| {
                format!("Failed to create log directory at {}", log_dir.display())
            })?;
        }
        let seed = !(empty || env_flag(ENV_EMPTY));
        Ok(Self::from_log_dir(log_dir).with_seed(seed))
    }

    /// Construct [`AppConfig`] directly from a resolved log directory.
    pub fn from_log_dir(log_dir: PathBuf) -> Self {
        let log_path = log_dir.join(LOG_FILE_NAME);
        Self {
            log_dir,
            log_path,
            seed: true,
        }
    }

    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Whether the board starts from the sample fixture.
    pub fn seed(&self) -> bool {
        self.seed
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn resolve_log_dir(log_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = log_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_LOG_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let dev_dir = manifest_dir.join("..").join("tmp").join("dev-taskboard");
        return Ok(dev_dir);
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_local_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".taskboard"));
    }

    Ok(env::current_dir()?.join(".taskboard"))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn discover_creates_override_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs");
        let config = AppConfig::discover(Some(dir.clone()), true).unwrap();
        assert!(dir.is_dir());
        assert_eq!(config.log_dir(), dir.as_path());
        assert_eq!(config.log_path(), dir.join("taskboard.log").as_path());
        assert!(!config.seed());
    }

    #[test]
    fn from_log_dir_seeds_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::from_log_dir(temp_dir.path().to_path_buf());
        assert!(config.seed());
        assert!(!config.with_seed(false).seed());
    }
}

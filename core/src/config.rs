use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DATA_DIR_ENV: &str = "ATTENDANCE_HOME";

/// Where the tracker keeps its files. Relative file names resolve against
/// `data_dir`; absolute ones are used as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub database: PathBuf,
    pub log_file: PathBuf,
    pub export_file: PathBuf,
    pub schedule_copy: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            database: PathBuf::from("attendance.db"),
            log_file: PathBuf::from("attendance_tracker.log"),
            export_file: PathBuf::from("updated_attendance.csv"),
            schedule_copy: PathBuf::from("class_schedule_data.csv"),
        }
    }
}

impl AppConfig {
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::default()
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.resolve(&self.database)
    }

    pub fn log_path(&self) -> PathBuf {
        self.resolve(&self.log_file)
    }

    pub fn export_path(&self) -> PathBuf {
        self.resolve(&self.export_file)
    }

    pub fn schedule_copy_path(&self) -> PathBuf {
        self.resolve(&self.schedule_copy)
    }
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".attendance"))
}

/// Resolves the data directory, creates it, and reads `config.toml` from it
/// when present.
pub fn load_config(data_dir: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    let path = data_dir.join(CONFIG_FILE_NAME);
    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("parsing {}", path.display()))?
    } else {
        AppConfig::default()
    };
    config.data_dir = data_dir;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(config.database_path(), dir.path().join("attendance.db"));
        assert_eq!(config.log_path(), dir.path().join("attendance_tracker.log"));
        assert_eq!(config.export_path(), dir.path().join("updated_attendance.csv"));
    }

    #[test]
    fn test_config_file_overrides_some_fields() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("elsewhere.csv");
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            format!("database = \"term2.db\"\nexport_file = {:?}\n", export.display().to_string()),
        )
        .unwrap();

        let config = load_config(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(config.database_path(), dir.path().join("term2.db"));
        assert_eq!(config.export_path(), export);
        assert_eq!(config.log_file, PathBuf::from("attendance_tracker.log"));
    }

    #[test]
    fn test_bad_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "database = [").unwrap();
        assert!(load_config(Some(dir.path().to_path_buf())).is_err());
    }
}

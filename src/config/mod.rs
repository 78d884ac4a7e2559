use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// SQLite file holding the break collection and the internal log.
    pub store: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_confirm_deletes")]
    pub confirm_deletes: bool,
}

fn default_export_dir() -> String {
    ".".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_confirm_deletes() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            export_dir: default_export_dir(),
            separator_char: default_separator_char(),
            confirm_deletes: default_confirm_deletes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("breaktracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".breaktracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("breaktracker.conf")
    }

    /// Return the default path of the SQLite store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("breaktracker.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration file and return the resulting config.
    ///
    /// `custom_store` may be absolute or relative to the config directory.
    /// In test mode nothing is written.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let store_path = match custom_store {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::store_file(),
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}

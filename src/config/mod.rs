use crate::core::calendar::{Calendar, DEFAULT_TIMEZONE};
use crate::core::engine::{DEFAULT_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
    #[serde(default)]
    pub default_hourly_rate: f64,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}
fn default_lookback_days() -> i64 {
    DEFAULT_LOOKBACK_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            timezone: default_timezone(),
            lookback_days: default_lookback_days(),
            default_hourly_rate: 0.0,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimecard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimecard.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.calendar()?;
        if !(0..=MAX_LOOKBACK_DAYS).contains(&self.lookback_days) {
            return Err(AppError::Config(format!(
                "lookback_days must be between 0 and {} (got {})",
                MAX_LOOKBACK_DAYS, self.lookback_days
            )));
        }
        crate::rates::validate_rate(self.default_hourly_rate)
            .map_err(|e| AppError::Config(e.to_string()))?;
        Ok(())
    }

    pub fn calendar(&self) -> AppResult<Calendar> {
        Calendar::from_name(&self.timezone)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("rtimecard.sqlite"),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {}", e)))?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}

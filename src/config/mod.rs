use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration file name.
pub const CONFIG_FILE: &str = ".menurc.json";

/// Model shown in the main scene when none is configured.
pub const DEFAULT_MODEL: &str = "pie_lemon_meringue";

/// Seconds for one full turn of the model.
pub const DEFAULT_ROTATION_PERIOD_SECS: f64 = 10.0;

pub const DEFAULT_TICK_MS: u64 = 50;
pub const MIN_TICK_MS: u64 = 10;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 40;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration loaded from .menurc.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Menu file to load instead of the built-in menu.
    #[serde(default)]
    pub menu_file: Option<String>,

    /// Identifier of the model displayed in the main scene.
    #[serde(default = "default_model")]
    pub model: String,

    /// Seconds per full rotation. Non-positive values use the default.
    #[serde(
        default = "default_rotation_period",
        deserialize_with = "deserialize_rotation_period"
    )]
    pub rotation_period_secs: f64,

    /// Input poll and animation interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Width of the menu sidebar in columns.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_rotation_period() -> f64 {
    DEFAULT_ROTATION_PERIOD_SECS
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_sidebar_width() -> u16 {
    DEFAULT_SIDEBAR_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: None,
            model: default_model(),
            rotation_period_secs: default_rotation_period(),
            tick_ms: default_tick_ms(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default file name inside `dir`.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        Self::load(dir.as_ref().join(CONFIG_FILE))
    }

    /// Resolve the menu file path relative to `base_dir`.
    pub fn menu_path<P: AsRef<Path>>(&self, base_dir: P) -> Option<PathBuf> {
        let menu_file = self.menu_file.as_deref()?;
        let path = PathBuf::from(menu_file);
        if path.is_absolute() {
            Some(path)
        } else {
            Some(base_dir.as_ref().join(path))
        }
    }

    /// Poll interval, clamped so the loop never spins.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(MIN_TICK_MS))
    }

    /// Time for one full turn, falling back to the default for unusable values.
    pub fn rotation_period(&self) -> Duration {
        let secs = if self.rotation_period_secs > 0.0 {
            self.rotation_period_secs
        } else {
            DEFAULT_ROTATION_PERIOD_SECS
        };
        Duration::try_from_secs_f64(secs)
            .unwrap_or(Duration::from_secs_f64(DEFAULT_ROTATION_PERIOD_SECS))
    }
}

fn deserialize_rotation_period<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => match number.as_f64() {
            Some(secs) if secs.is_finite() && secs > 0.0 => Ok(secs),
            _ => Ok(DEFAULT_ROTATION_PERIOD_SECS),
        },
        serde_json::Value::Null => Ok(DEFAULT_ROTATION_PERIOD_SECS),
        _ => Err(serde::de::Error::custom(
            "rotation_period_secs must be a number",
        )),
    }
}

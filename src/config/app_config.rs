use crate::errors::{MasonryError, MasonryResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings of the terminal program.
///
/// This never carries the masonry configuration itself; that lives in memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub looping: LoopConfig,
    /// Route log output to this file while the TUI owns the terminal
    pub log_file: Option<String>,
    /// Activity log entries retained for the log overlay
    pub max_log_entries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            looping: LoopConfig::default(),
            log_file: None,
            max_log_entries: 200,
        }
    }
}

/// Terminal drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Upper bound on the time between input polls (ms)
    pub tick_rate_ms: u64,
    /// Pixels represented by one terminal column (gap, radius)
    pub px_per_column: u32,
    /// Pixels represented by one terminal row
    pub px_per_row: u32,
    /// Terminal rows used by a single grid row
    pub tile_height: u16,
    pub show_panel: bool,
    pub show_log: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            px_per_column: 8,
            px_per_row: 16,
            tile_height: 3,
            show_panel: true,
            show_log: false,
        }
    }
}

/// Loop mode timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Delay of each one-shot regeneration timer (ms)
    pub interval_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &str) -> MasonryResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MasonryError::Config(format!("cannot read {}: {}", path, e)))?;
        let config: AppConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(tick) = std::env::var("MASONRY_TICK_MS") {
            if let Ok(tick) = tick.parse::<u64>() {
                config.display.tick_rate_ms = tick;
            }
        }
        if let Ok(interval) = std::env::var("MASONRY_LOOP_MS") {
            if let Ok(interval) = interval.parse::<u64>() {
                config.looping.interval_ms = interval;
            }
        }
        if let Ok(height) = std::env::var("MASONRY_TILE_HEIGHT") {
            if let Ok(height) = height.parse::<u16>() {
                config.display.tile_height = height;
            }
        }
        if let Ok(path) = std::env::var("MASONRY_LOG_FILE") {
            if !path.is_empty() {
                config.log_file = Some(path);
            }
        }

        config
    }

    /// `MASONRY_CONFIG` names a settings file; otherwise read the environment
    pub fn discover() -> MasonryResult<Self> {
        let config = match std::env::var("MASONRY_CONFIG") {
            Ok(path) if !path.is_empty() => Self::load_from_file(&path)?,
            _ => Self::from_env(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.display.tick_rate_ms)
    }

    pub fn loop_interval(&self) -> Duration {
        Duration::from_millis(self.looping.interval_ms)
    }

    /// Validate configuration values
    pub fn validate(&self) -> MasonryResult<()> {
        if self.display.tick_rate_ms == 0 {
            return Err(MasonryError::Config("tick rate must be positive".into()));
        }
        if self.looping.interval_ms == 0 {
            return Err(MasonryError::Config("loop interval must be positive".into()));
        }
        if self.display.px_per_column == 0 || self.display.px_per_row == 0 {
            return Err(MasonryError::Config(
                "pixel to cell scale must be positive".into(),
            ));
        }
        if self.display.tile_height == 0 {
            return Err(MasonryError::Config("tile height must be positive".into()));
        }
        Ok(())
    }
}

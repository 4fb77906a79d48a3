//! User settings for credline
//!
//! Manages the items source, currency presentation, overlay geometry,
//! dial tolerances and the configurable selection semantics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::CredlinePaths;
use crate::error::CredlineError;
use crate::wizard::selection::{AmountDefault, PlanEquality};

/// Geometry knobs for the circular amount input, in dial-space units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialSettings {
    /// Width of the drawn ring
    pub stroke: f64,
    /// Gap between the widget edge and the ring
    pub padding: f64,
    /// Width of the band around the ring that accepts a drag start
    pub touch_tolerance: f64,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            stroke: 1.0,
            padding: 2.0,
            touch_tolerance: 4.0,
        }
    }
}

/// User settings for credline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Endpoint the step contents are fetched from
    #[serde(default = "default_items_url")]
    pub items_url: String,

    /// Currency symbol used when presenting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Initial amount policy before the user touches the dial
    #[serde(default)]
    pub amount_default: AmountDefault,

    /// Amount used by [`AmountDefault::Preset`]
    #[serde(default = "default_amount_preset")]
    pub amount_preset: f64,

    /// How a plan candidate is matched against the committed plan
    #[serde(default)]
    pub plan_equality: PlanEquality,

    /// Rows between the card stack and an open overlay
    #[serde(default = "default_overlay_margin")]
    pub overlay_margin: u16,

    /// Smallest overlay height ever produced, in rows
    #[serde(default = "default_min_overlay_height")]
    pub min_overlay_height: u16,

    /// Dial geometry
    #[serde(default)]
    pub dial: DialSettings,

    /// Tick rate of the TUI event loop in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_items_url() -> String {
    "https://api.mocklets.com/p6764/test_mint".to_string()
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_amount_preset() -> f64 {
    150_000.0
}

fn default_overlay_margin() -> u16 {
    1
}

fn default_min_overlay_height() -> u16 {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            items_url: default_items_url(),
            currency_symbol: default_currency(),
            amount_default: AmountDefault::default(),
            amount_preset: default_amount_preset(),
            plan_equality: PlanEquality::default(),
            overlay_margin: default_overlay_margin(),
            min_overlay_height: default_min_overlay_height(),
            dial: DialSettings::default(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &CredlinePaths) -> Result<Self, CredlineError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CredlineError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CredlineError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - `credline init` persists explicitly
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CredlinePaths) -> Result<(), CredlineError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CredlineError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CredlineError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Interval between TUI ticks
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Reject values the wizard cannot work with
    pub fn validate(&self) -> Result<(), CredlineError> {
        if self.min_overlay_height == 0 {
            return Err(CredlineError::Config(
                "min_overlay_height must be at least 1".into(),
            ));
        }
        if !(self.dial.touch_tolerance.is_finite() && self.dial.touch_tolerance >= 0.0) {
            return Err(CredlineError::Config(
                "dial.touch_tolerance must be a non-negative number".into(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(CredlineError::Config("tick_rate_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.amount_default, AmountDefault::Preset);
        assert_eq!(settings.plan_equality, PlanEquality::Value);
        assert_eq!(settings.overlay_margin, 1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CredlinePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.plan_equality = PlanEquality::Identity;
        settings.amount_default = AmountDefault::Zero;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.plan_equality, PlanEquality::Identity);
        assert_eq!(loaded.amount_default, AmountDefault::Zero);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CredlinePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"overlay_margin": 2}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.overlay_margin, 2);
        assert_eq!(loaded.min_overlay_height, 3);
        assert_eq!(loaded.items_url, default_items_url());
    }

    #[test]
    fn test_tick_rate_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(settings.tick_rate(), Duration::from_millis(250));
        settings.tick_rate_ms = 40;
        assert_eq!(settings.tick_rate(), Duration::from_millis(40));
    }

    #[test]
    fn test_stale_timeout_key_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CredlinePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"request_timeout_secs": 15}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.tick_rate_ms, 250);
        let saved = serde_json::to_string(&loaded).unwrap();
        assert!(!saved.contains("request_timeout_secs"));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CredlinePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"min_overlay_height": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CredlineError::Config(_)));
    }
}

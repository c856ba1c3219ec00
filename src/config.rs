use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Marker, COLS, LINE_LENGTH, ROWS};
use crate::party::{CoinConfig, ParcelConfig, PinConfig, WheelConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectFourConfig {
    pub rows: usize,
    pub columns: usize,
    pub first_marker: Marker,
}

impl Default for ConnectFourConfig {
    fn default() -> Self {
        ConnectFourConfig {
            rows: ROWS,
            columns: COLS,
            first_marker: Marker::X,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed RNG seed; random when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub connect_four: ConnectFourConfig,
    pub parcel: ParcelConfig,
    pub coin: CoinConfig,
    pub wheel: WheelConfig,
    pub pin: PinConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c4 = &self.connect_four;
        if c4.rows == 0 {
            return Err(ConfigError::Validation(
                "connect_four.rows must be > 0".into(),
            ));
        }
        if c4.columns == 0 {
            return Err(ConfigError::Validation(
                "connect_four.columns must be > 0".into(),
            ));
        }
        if c4.rows < LINE_LENGTH && c4.columns < LINE_LENGTH {
            return Err(ConfigError::Validation(format!(
                "connect_four board must have at least {LINE_LENGTH} rows or columns"
            )));
        }
        if c4.columns > 26 || c4.rows > 26 {
            return Err(ConfigError::Validation(
                "connect_four board must be at most 26x26 (columns are labelled A-Z)".into(),
            ));
        }

        if self.parcel.min_passes == 0 {
            return Err(ConfigError::Validation(
                "parcel.min_passes must be > 0".into(),
            ));
        }
        if self.parcel.max_passes <= self.parcel.min_passes {
            return Err(ConfigError::Validation(
                "parcel.max_passes must be > parcel.min_passes".into(),
            ));
        }

        if self.coin.min_half_turns == 0 {
            return Err(ConfigError::Validation(
                "coin.min_half_turns must be > 0".into(),
            ));
        }
        if self.coin.max_half_turns < self.coin.min_half_turns {
            return Err(ConfigError::Validation(
                "coin.max_half_turns must be >= coin.min_half_turns".into(),
            ));
        }

        if self.wheel.segment_count == 0 {
            return Err(ConfigError::Validation(
                "wheel.segment_count must be > 0".into(),
            ));
        }
        if self.wheel.max_spin <= self.wheel.min_spin {
            return Err(ConfigError::Validation(
                "wheel.max_spin must be > wheel.min_spin".into(),
            ));
        }

        if self.pin.field_width == 0 || self.pin.field_height == 0 {
            return Err(ConfigError::Validation(
                "pin.field_width and pin.field_height must be > 0".into(),
            ));
        }
        if self.pin.padding.saturating_mul(2) >= self.pin.field_width
            || self.pin.padding.saturating_mul(2) >= self.pin.field_height
        {
            return Err(ConfigError::Validation(
                "pin.padding must leave room for the target".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[connect_four]
rows = 8
first_marker = "O"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connect_four.rows, 8);
        assert_eq!(config.connect_four.first_marker, Marker::O);
        // Other fields should be defaults
        assert_eq!(config.connect_four.columns, 7);
        assert_eq!(config.parcel.min_passes, 4);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.connect_four.rows, default.connect_four.rows);
        assert_eq!(config.wheel.segment_count, default.wheel.segment_count);
        assert_eq!(config.coin.reset_after_degrees, 360_000);
    }

    #[test]
    fn test_unknown_marker_fails_to_parse() {
        let toml_str = r#"
[connect_four]
first_marker = "Z"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.connect_four.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = AppConfig::default();
        config.connect_four.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unwinnable_board() {
        let mut config = AppConfig::default();
        config.connect_four.rows = 3;
        config.connect_four.columns = 3;
        assert!(config.validate().is_err());

        config.connect_four.columns = 4;
        config.validate().expect("a 3x4 board can still be won");
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = AppConfig::default();
        config.connect_four.columns = 27;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_parcel_range() {
        let mut config = AppConfig::default();
        config.parcel.max_passes = config.parcel.min_passes;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_min_passes() {
        let mut config = AppConfig::default();
        config.parcel.min_passes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_half_turns() {
        let mut config = AppConfig::default();
        config.coin.min_half_turns = 7;
        config.coin.max_half_turns = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_segments() {
        let mut config = AppConfig::default();
        config.wheel.segment_count = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_spin_range() {
        let mut config = AppConfig::default();
        config.wheel.min_spin = 1440;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_padding_too_wide() {
        let mut config = AppConfig::default();
        config.pin.padding = config.pin.field_height / 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.connect_four.columns, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("party-games.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
seed = 1234

[wheel]
segment_count = 12
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.wheel.segment_count, 12);
        // Others are defaults
        assert_eq!(config.wheel.min_spin, 1080);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("party-games.toml");
        std::fs::write(&path, "[connect_four]\nrows = 0\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}

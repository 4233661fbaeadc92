//! Top-level widget configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::TooltipConfig;
use crate::error::ConfigError;

/// Configuration shared by every widget in a tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// Accent color applied to buttons
    #[validate(length(min = 1_u64, message = "must not be empty"))]
    pub global_color: String,
    /// Tooltip defaults
    #[validate(nested)]
    pub tooltip: TooltipConfig,
}

impl UiConfig {
    pub const DEFAULT_GLOBAL_COLOR: &'static str = "#1677ff";

    pub fn new() -> Self {
        Self {
            global_color: Self::DEFAULT_GLOBAL_COLOR.to_string(),
            tooltip: TooltipConfig::default(),
        }
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::from_json_error(&e))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Alignment;
    use std::time::Duration;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = UiConfig::from_json("{}").unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(config.tooltip.align, Alignment::Top);
        assert_eq!(config.tooltip.color, "#000");
        assert_eq!(config.tooltip.z_index, 1011);
        assert_eq!(config.tooltip.open_delay(), Duration::from_millis(150));
        assert_eq!(config.tooltip.close_delay(), Duration::from_millis(150));
    }

    #[test]
    fn test_partial_override() {
        let json = r##"{"globalColor":"#f00","tooltip":{"align":"leftTop","closeDelayMs":300}}"##;
        let config = UiConfig::from_json(json).unwrap();
        assert_eq!(config.global_color, "#f00");
        assert_eq!(config.tooltip.align, Alignment::LeftTop);
        assert_eq!(config.tooltip.close_delay_ms, 300);
        assert_eq!(config.tooltip.open_delay_ms, 150);
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let json = UiConfig::default().to_json().unwrap();
        assert!(json.contains("\"zIndex\": 1011"));
        assert_eq!(UiConfig::from_json(&json).unwrap(), UiConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_delay() {
        let err = UiConfig::from_json(r#"{"tooltip":{"openDelayMs":60000}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == "tooltip.openDelayMs"
        ));
    }

    #[test]
    fn test_rejects_negative_gap_and_empty_color() {
        let err = UiConfig::from_json(r#"{"tooltip":{"gap":-1.0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == "tooltip.gap"
        ));

        let err = UiConfig::from_json(r#"{"globalColor":""}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == "globalColor"
        ));
    }

    #[test]
    fn test_non_finite_gap_rejected_through_validate() {
        let config = UiConfig {
            tooltip: TooltipConfig { gap: f64::NAN, ..TooltipConfig::default() },
            ..UiConfig::default()
        };
        let err = ConfigError::from(config.validate().unwrap_err());
        assert_eq!(
            err,
            ConfigError::ValidationError {
                field: "tooltip.gap".to_string(),
                message: "must be a finite number".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = UiConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}

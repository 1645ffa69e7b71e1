//! Behaviour configuration
//!
//! Every delay, selector and label the page behaviours depend on lives in
//! [`BehaviorConfig`]. The defaults match the portal templates; a page can
//! override individual fields by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="stdsConfig">{ "alert_delay_ms": 6000 }</script>
//! ```

use serde::Deserialize;

use crate::error::{BehaviorError, Result};

/// Id of the optional `<script type="application/json">` override block
pub const CONFIG_ELEMENT_ID: &str = "stdsConfig";

/// Timings, element hooks and labels for the page behaviours
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Delay before the splash screen navigates away (2 s display + 0.7 s fade)
    pub splash_delay_ms: u32,
    /// Navigation target once the splash delay elapses
    pub redirect_path: String,
    /// Maximum number of digits kept in a token field
    pub token_max_len: usize,
    /// Ripple animation length
    pub ripple_duration_ms: u32,
    /// Final scale factor of the ripple keyframes
    pub ripple_scale: f64,
    /// Ripple fill colour
    pub ripple_color: String,
    /// Time an alert stays fully visible
    pub alert_delay_ms: u32,
    /// Alert opacity fade length
    pub alert_fade_ms: u32,
    /// How long the copy confirmation stays on screen
    pub copy_feedback_ms: u32,
    /// Text shown after a successful copy
    pub copy_label: String,
    /// Font size applied while the copy confirmation is shown
    pub copy_font_size: String,
    /// Tooltip placed on the token display
    pub copy_tooltip: String,
    /// Log each installed behaviour to the console
    pub debug: bool,
    /// Id of the splash container
    pub splash_id: String,
    /// Selector for token inputs
    pub token_input_selector: String,
    /// Selector for telephone inputs
    pub phone_input_selector: String,
    /// Selector for elements that get the ripple
    pub button_selector: String,
    /// Selector for alerts dismissed after load
    pub alert_selector: String,
    /// Id of the token display that copies on click
    pub token_display_id: String,
    /// Id of the injected `<style>` holding the ripple keyframes
    pub keyframes_style_id: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: 2900,
            redirect_path: "/".to_string(),
            token_max_len: 6,
            ripple_duration_ms: 550,
            ripple_scale: 2.5,
            ripple_color: "rgba(255,255,255,0.35)".to_string(),
            alert_delay_ms: 4000,
            alert_fade_ms: 500,
            copy_feedback_ms: 1200,
            copy_label: "Copied!".to_string(),
            copy_font_size: "1.6rem".to_string(),
            copy_tooltip: "Click to copy".to_string(),
            debug: false,
            splash_id: "splashScreen".to_string(),
            token_input_selector: r#"input[name="token"]"#.to_string(),
            phone_input_selector: r#"input[type="tel"]"#.to_string(),
            button_selector: ".btn".to_string(),
            alert_selector: ".alert".to_string(),
            token_display_id: "tokenNumber".to_string(),
            keyframes_style_id: "rippleStyle".to_string(),
        }
    }
}

impl BehaviorConfig {
    /// Parse a JSON override block; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `BehaviorError::ConfigParse` for malformed JSON or unknown
    /// fields, and `BehaviorError::InvalidConfig` when the parsed values fail
    /// [`BehaviorConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BehaviorError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values the behaviours cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `BehaviorError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.token_max_len == 0 {
            return Err(BehaviorError::InvalidConfig(
                "token_max_len must be at least 1".to_string(),
            ));
        }
        if !self.ripple_scale.is_finite() || self.ripple_scale <= 0.0 {
            return Err(BehaviorError::InvalidConfig(format!(
                "ripple_scale must be positive, got {}",
                self.ripple_scale
            )));
        }

        let hooks = [
            ("splash_id", &self.splash_id),
            ("token_input_selector", &self.token_input_selector),
            ("phone_input_selector", &self.phone_input_selector),
            ("button_selector", &self.button_selector),
            ("alert_selector", &self.alert_selector),
            ("token_display_id", &self.token_display_id),
            ("keyframes_style_id", &self.keyframes_style_id),
            ("redirect_path", &self.redirect_path),
        ];
        hooks
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .map_or(Ok(()), |(name, _)| {
                Err(BehaviorError::InvalidConfig(format!("{name} must not be empty")))
            })
    }

    /// Alert lifetime from page load to removal
    #[must_use]
    pub const fn alert_lifetime_ms(&self) -> u32 {
        self.alert_delay_ms.saturating_add(self.alert_fade_ms)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn given_defaults_when_validated_then_ok() {
        assert!(BehaviorConfig::default().validate().is_ok());
    }

    #[test]
    fn given_defaults_then_timings_match_portal() {
        let config = BehaviorConfig::default();
        assert_eq!(config.splash_delay_ms, 2900);
        assert_eq!(config.ripple_duration_ms, 550);
        assert_eq!(config.copy_feedback_ms, 1200);
        assert_eq!(config.alert_lifetime_ms(), 4500);
        assert_eq!(config.redirect_path, "/");
    }

    #[test]
    fn given_partial_json_when_parsed_then_missing_fields_default() {
        let config = BehaviorConfig::from_json(r#"{ "alert_delay_ms": 6000 }"#).unwrap();
        assert_eq!(config.alert_delay_ms, 6000);
        assert_eq!(config.alert_fade_ms, 500);
        assert_eq!(config.token_display_id, "tokenNumber");
    }

    #[test]
    fn given_empty_object_when_parsed_then_equals_default() {
        let config = BehaviorConfig::from_json("{}").unwrap();
        assert_eq!(config, BehaviorConfig::default());
    }

    #[test]
    fn given_unknown_field_when_parsed_then_config_parse_error() {
        let result = BehaviorConfig::from_json(r#"{ "splash_delay": 10 }"#);
        assert!(matches!(result, Err(BehaviorError::ConfigParse(_))));
    }

    #[test]
    fn given_malformed_json_when_parsed_then_config_parse_error() {
        let result = BehaviorConfig::from_json("{ not json");
        assert!(matches!(result, Err(BehaviorError::ConfigParse(_))));
    }

    #[test]
    fn given_zero_token_len_when_parsed_then_invalid() {
        let result = BehaviorConfig::from_json(r#"{ "token_max_len": 0 }"#);
        assert!(matches!(result, Err(BehaviorError::InvalidConfig(_))));
    }

    #[test]
    fn given_negative_ripple_scale_when_validated_then_invalid() {
        let config = BehaviorConfig {
            ripple_scale: -1.0,
            ..BehaviorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn given_blank_selector_when_validated_then_error_names_field() {
        let config = BehaviorConfig {
            button_selector: "  ".to_string(),
            ..BehaviorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("button_selector"));
    }

    #[test]
    fn given_saturating_timings_then_lifetime_does_not_overflow() {
        let config = BehaviorConfig {
            alert_delay_ms: u32::MAX,
            ..BehaviorConfig::default()
        };
        assert_eq!(config.alert_lifetime_ms(), u32::MAX);
    }
}

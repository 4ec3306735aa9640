//! Per-widget runtime configuration.

use flick_core::{ObserveMode, RenderOptions};
use serde::{Deserialize, Serialize};

/// Environment variable enabling the debug panel.
pub const DEBUG_VAR: &str = "FLICK_DEBUG";
/// Environment variable selecting the [`ObserveMode`].
pub const OBSERVE_VAR: &str = "FLICK_OBSERVE";

/// Errors produced while loading a [`WidgetConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse widget config: {0}")]
    Json(#[from] serde_json::Error),
    /// A variable held a value outside its accepted set.
    #[error("invalid value `{value}` for {key}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// How a widget instance observes its host and renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Append the raw snapshot to every render.
    pub debug: bool,
    /// Whether to keep listening for host updates after activation.
    pub observe: ObserveMode,
}

impl WidgetConfig {
    /// Parses a JSON config; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `json` is not a valid config object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads [`DEBUG_VAR`] and [`OBSERVE_VAR`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unrecognised values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unrecognised values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(DEBUG_VAR) {
            config.debug = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "" | "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: DEBUG_VAR,
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup(OBSERVE_VAR) {
            config.observe = match value.trim().to_ascii_lowercase().as_str() {
                "once" => ObserveMode::Once,
                "subscribe" => ObserveMode::Subscribe,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: OBSERVE_VAR,
                        value,
                    });
                }
            };
        }
        Ok(config)
    }

    /// The render options this config implies.
    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions { debug: self.debug }
    }
}

#[cfg(test)]
mod tests {
    use flick_core::ObserveMode;

    use super::{ConfigError, OBSERVE_VAR, WidgetConfig};

    #[test]
    fn defaults_subscribe_without_debug() {
        let config = WidgetConfig::default();
        assert!(!config.debug);
        assert_eq!(config.observe, ObserveMode::Subscribe);
    }

    #[test]
    fn json_fills_missing_keys() {
        let config = WidgetConfig::from_json(r#"{"observe": "once"}"#).expect("valid config");
        assert_eq!(config.observe, ObserveMode::Once);
        assert!(!config.debug);

        assert!(matches!(
            WidgetConfig::from_json(r#"{"observe": "poll"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn lookup_parses_flags() {
        let config = WidgetConfig::from_lookup(|key| match key {
            "FLICK_DEBUG" => Some("True".into()),
            "FLICK_OBSERVE" => Some("once".into()),
            _ => None,
        })
        .expect("valid variables");
        assert!(config.debug);
        assert_eq!(config.observe, ObserveMode::Once);
        assert!(config.render_options().debug);
    }

    #[test]
    fn lookup_rejects_unknown_modes() {
        let err = WidgetConfig::from_lookup(|key| (key == OBSERVE_VAR).then(|| "poll".into()))
            .expect_err("unknown mode");
        assert_eq!(err.to_string(), "invalid value `poll` for FLICK_OBSERVE");
    }
}

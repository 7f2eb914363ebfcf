//! UI Configuration
//!
//! Central settings for the three page widgets. Defaults match the deployed
//! pages; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::services::errors::{UiError, UiResult};

/// Configuration shared by every widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Search fallback guard settings
    pub search: SearchConfig,

    /// Password reset policy
    pub password: PasswordPolicyConfig,

    /// Sidebar widget settings
    pub sidebar: SidebarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How long a rejection notification stays on screen
    pub notification_timeout_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicyConfig {
    /// Minimum number of characters in a new password
    pub min_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Viewports narrower than this are treated as mobile
    pub mobile_breakpoint_px: u32,

    /// Local storage key holding the collapse preference
    pub storage_key: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: 5000,
        }
    }
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            storage_key: "sidebarCollapsed".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> UiResult<Self> {
        let config: UiConfig =
            serde_json::from_str(json).map_err(|e| UiError::Configuration {
                field: "<document>".to_string(),
                message: e.to_string(),
            })?;

        if let Err(errors) = config.validate() {
            return Err(UiError::Configuration {
                field: "<document>".to_string(),
                message: errors.join("; "),
            });
        }

        Ok(config)
    }

    /// Check every field and report all problems at once
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.search.notification_timeout_ms == 0 {
            errors.push("search.notification_timeout_ms must be greater than 0".to_string());
        }

        if self.password.min_length == 0 {
            errors.push("password.min_length must be greater than 0".to_string());
        }

        if self.sidebar.mobile_breakpoint_px == 0 {
            errors.push("sidebar.mobile_breakpoint_px must be greater than 0".to_string());
        }

        if self.sidebar.storage_key.trim().is_empty() {
            errors.push("sidebar.storage_key cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.notification_timeout_ms, 5000);
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.sidebar.mobile_breakpoint_px, 768);
        assert_eq!(config.sidebar.storage_key, "sidebarCollapsed");
    }

    #[test]
    fn test_invalid_config_reports_every_field() {
        let mut config = UiConfig::default();
        config.password.min_length = 0;
        config.sidebar.storage_key = "  ".to_string();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = UiConfig::from_json(r#"{"sidebar": {"mobile_breakpoint_px": 1024}}"#)
            .expect("partial override should parse");

        assert_eq!(config.sidebar.mobile_breakpoint_px, 1024);
        assert_eq!(config.sidebar.storage_key, "sidebarCollapsed");
        assert_eq!(config.password.min_length, 8);
    }

    #[test]
    fn test_json_with_invalid_values_is_rejected() {
        let result = UiConfig::from_json(r#"{"password": {"min_length": 0}}"#);
        assert!(matches!(result, Err(UiError::Configuration { .. })));

        let result = UiConfig::from_json("not json");
        assert!(result.is_err());
    }
}

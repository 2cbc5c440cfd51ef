//! Button configuration.
//!
//! [`ButtonConfig`] describes the initial state of a button. It can be built in
//! code with the `with_*` builder methods or loaded from a TOML document, where
//! every key is optional:
//!
//! ```
//! use tapnode::ButtonConfig;
//!
//! let config = ButtonConfig::from_toml_str(r#"
//! size = { width = 64.0, height = 32.0 }
//! auto_toggle_selection = true
//! "#).unwrap();
//!
//! assert_eq!(config.size.width, 64.0);
//! assert!(config.enabled);
//! assert!(config.auto_toggle_selection);
//! ```

use serde::{Deserialize, Serialize};
use tapnode_core::{Result, TapnodeError};
use tapnode_render::Size;

/// Initial state of a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Hit-area dimensions.
    pub size: Size,
    /// Whether the button starts enabled.
    pub enabled: bool,
    /// Whether the button starts selected.
    pub selected: bool,
    /// Whether a completed inside tap flips the selected state.
    pub auto_toggle_selection: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            size: Size::new(44.0, 44.0),
            enabled: true,
            selected: false,
            auto_toggle_selection: false,
        }
    }
}

impl ButtonConfig {
    /// Create a configuration with the given hit-area size.
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| TapnodeError::Config(e.message().to_owned()))
    }

    /// Check that the configuration describes a usable button.
    pub fn validate(&self) -> Result<()> {
        if self.size.is_valid() {
            Ok(())
        } else {
            Err(TapnodeError::InvalidSize {
                width: self.size.width,
                height: self.size.height,
            })
        }
    }

    /// Set the size using builder pattern.
    pub fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }

    /// Set the enabled flag using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the selected flag using builder pattern.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set automatic selection toggling using builder pattern.
    pub fn with_auto_toggle_selection(mut self, auto_toggle: bool) -> Self {
        self.auto_toggle_selection = auto_toggle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ButtonConfig::default();
        assert_eq!(config.size, Size::new(44.0, 44.0));
        assert!(config.enabled);
        assert!(!config.selected);
        assert!(!config.auto_toggle_selection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ButtonConfig::new((80.0, 30.0))
            .with_enabled(false)
            .with_selected(true)
            .with_auto_toggle_selection(true);

        assert_eq!(config.size, Size::new(80.0, 30.0));
        assert!(!config.enabled);
        assert!(config.selected);
        assert!(config.auto_toggle_selection);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ButtonConfig::from_toml_str("").unwrap();
        assert_eq!(config, ButtonConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = ButtonConfig::from_toml_str(
            r#"
            enabled = false
            selected = true
            auto_toggle_selection = true

            [size]
            width = 120.0
            height = 48.0
            "#,
        )
        .unwrap();

        assert_eq!(config.size, Size::new(120.0, 48.0));
        assert!(!config.enabled);
        assert!(config.selected);
        assert!(config.auto_toggle_selection);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = ButtonConfig::from_toml_str("enabled = \"yes\"").unwrap_err();
        assert!(matches!(err, TapnodeError::Config(_)));
    }

    #[test]
    fn test_negative_size_fails_validation() {
        let err = ButtonConfig::new((-4.0, 10.0)).validate().unwrap_err();
        assert_eq!(
            err,
            TapnodeError::InvalidSize {
                width: -4.0,
                height: 10.0
            }
        );
    }
}

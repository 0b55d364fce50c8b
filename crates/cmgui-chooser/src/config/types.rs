//! Configuration type definitions for cmgui choosers.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [menu]
//! fan_out = 16
//! label_prefix_chars = 10
//! group_separator = " ... "
//! empty_label = "none available"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.cmgui/chooser.toml`
/// 2. Project config: `./.cmgui/chooser.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChooserConfig {
    /// Menu layout settings
    #[serde(default)]
    pub menu: MenuConfig,
}

/// Menu layout configuration.
///
/// Controls when long item lists are split into cascading submenus and how
/// the submenu labels are synthesized. Unset fields fall back to the
/// built-in defaults through the accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuConfig {
    /// Maximum number of entries shown flat in one menu level.
    /// Default: 16.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fan_out: Option<usize>,

    /// Number of characters of the first and last member labels used in a
    /// submenu label.
    /// Default: 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_prefix_chars: Option<usize>,

    /// Text placed between the two label prefixes of a submenu.
    /// Default: `" ... "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_separator: Option<String>,

    /// Label of the disabled entry shown when there is nothing to choose.
    /// Default: `"none available"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_label: Option<String>,
}

impl MenuConfig {
    pub fn fan_out(&self) -> usize {
        self.fan_out.unwrap_or(super::defaults::DEFAULT_FAN_OUT)
    }

    pub fn label_prefix_chars(&self) -> usize {
        self.label_prefix_chars
            .unwrap_or(super::defaults::DEFAULT_LABEL_PREFIX_CHARS)
    }

    pub fn group_separator(&self) -> &str {
        self.group_separator
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_GROUP_SEPARATOR)
    }

    pub fn empty_label(&self) -> &str {
        self.empty_label
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_EMPTY_LABEL)
    }

    /// Copy of this config with the fan-out threshold replaced.
    #[must_use]
    pub fn with_fan_out(mut self, fan_out: usize) -> Self {
        self.fan_out = Some(fan_out);
        self
    }
}

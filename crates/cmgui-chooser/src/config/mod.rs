//! # Configuration System
//!
//! Hierarchical TOML configuration for cmgui choosers.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.cmgui/chooser.toml` (global user preferences)
//! 3. **Project config** - `./.cmgui/chooser.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.cmgui/chooser.toml
//! [menu]
//! fan_out = 20
//! empty_label = "<none>"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use cmgui_chooser::config::ChooserConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ChooserConfig::load_hierarchy()?;
//!     println!("submenus start above {} items", config.menu.fan_out());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{ChooserConfig, MenuConfig};
pub use validation::{MIN_FAN_OUT, validate_config};

impl ChooserConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

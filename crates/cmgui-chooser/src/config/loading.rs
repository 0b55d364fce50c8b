//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.cmgui/chooser.toml` (global user preferences)
//! 3. **Project config** - `./.cmgui/chooser.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::config::types::{ChooserConfig, MenuConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.cmgui/chooser.toml`)
/// 3. Project config (`./.cmgui/chooser.toml`)
///
/// # Errors
///
/// Returns an error if a config file cannot be parsed or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<ChooserConfig, ConfigError> {
    let project_dir = std::env::current_dir()?;
    load_hierarchy_from(dirs::home_dir().as_deref(), &project_dir)
}

/// Same as [`load_hierarchy`] with explicit user and project directories.
///
/// # Errors
///
/// See [`load_hierarchy`].
pub fn load_hierarchy_from(
    home_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<ChooserConfig, ConfigError> {
    let mut config = ChooserConfig::default();

    // No home directory means there is no user config to load
    if let Some(home) = home_dir
        && let Some(user_config) = load_optional(&config_path_in(home))?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_optional(&config_path_in(project_dir))? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load a config file that may legitimately be absent.
fn load_optional(path: &Path) -> Result<Option<ChooserConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::ConfigNotFound { .. }) => {
            debug!(event = "core.config.file_absent", path = %path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
///
/// # Errors
///
/// `ConfigNotFound` when the file does not exist, `ConfigParseError` for
/// malformed TOML, `IoError` for any other read failure.
pub fn load_config_file(path: &Path) -> Result<ChooserConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config: ChooserConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: ChooserConfig, override_config: ChooserConfig) -> ChooserConfig {
    ChooserConfig {
        menu: MenuConfig {
            fan_out: override_config.menu.fan_out.or(base.menu.fan_out),
            label_prefix_chars: override_config
                .menu
                .label_prefix_chars
                .or(base.menu.label_prefix_chars),
            group_separator: override_config
                .menu
                .group_separator
                .or(base.menu.group_separator),
            empty_label: override_config.menu.empty_label.or(base.menu.empty_label),
        },
    }
}

use crate::config::types::ChooserConfig;
use crate::errors::ConfigError;

/// Smallest fan-out for which grouping terminates.
pub const MIN_FAN_OUT: usize = 2;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` for a fan-out below
/// [`MIN_FAN_OUT`], a zero label prefix, or an empty placeholder label.
pub fn validate_config(config: &ChooserConfig) -> Result<(), ConfigError> {
    let menu = &config.menu;

    if menu.fan_out() < MIN_FAN_OUT {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "menu.fan_out must be at least {}, got {}",
                MIN_FAN_OUT,
                menu.fan_out()
            ),
        });
    }

    if menu.label_prefix_chars() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "menu.label_prefix_chars must be at least 1".to_string(),
        });
    }

    if menu.empty_label().trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "menu.empty_label cannot be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::MenuConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ChooserConfig::default()).is_ok());
    }

    #[test]
    fn test_fan_out_of_one_is_rejected() {
        let config = ChooserConfig {
            menu: MenuConfig::default().with_fan_out(1),
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("fan_out"));
    }

    #[test]
    fn test_zero_prefix_is_rejected() {
        let config = ChooserConfig {
            menu: MenuConfig {
                label_prefix_chars: Some(0),
                ..MenuConfig::default()
            },
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_empty_label_is_rejected() {
        let config = ChooserConfig {
            menu: MenuConfig {
                empty_label: Some("   ".to_string()),
                ..MenuConfig::default()
            },
        };
        assert!(validate_config(&config).is_err());
    }
}

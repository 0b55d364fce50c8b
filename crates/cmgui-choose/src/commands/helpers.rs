use clap::ArgMatches;
use tracing::{error, warn};

use cmgui_chooser::{ChooserConfig, CmguiError, ConfigError, MenuConfig, events};

/// Load the config hierarchy, falling back to defaults with a warning.
pub(crate) fn load_config_with_warning() -> ChooserConfig {
    match ChooserConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.cmgui/chooser.toml and ./.cmgui/chooser.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            ChooserConfig::default()
        }
    }
}

/// Menu config from the config files with command-line overrides applied.
pub(crate) fn resolve_menu_config(matches: &ArgMatches) -> Result<MenuConfig, ConfigError> {
    let mut config = load_config_with_warning();
    if let Some(fan_out) = matches.get_one::<usize>("fan-out") {
        config.menu = config.menu.with_fan_out(*fan_out);
    }
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        log_command_failure("cli.config.invalid", &e);
        return Err(e);
    }
    Ok(config.menu)
}

/// Log a failed command: user errors at warn, anything else at error.
pub(crate) fn log_command_failure<E: CmguiError>(event_name: &'static str, error: &E) {
    if error.is_user_error() {
        warn!(
            event = event_name,
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = event_name,
            error = %error,
            error_code = error.error_code()
        );
        events::log_app_error(error);
    }
}

//! Default values for configuration types.

/// Entries shown flat in one menu level before grouping into submenus.
pub const DEFAULT_FAN_OUT: usize = 16;

/// Characters kept from each end label when naming a submenu.
pub const DEFAULT_LABEL_PREFIX_CHARS: usize = 10;

pub const DEFAULT_GROUP_SEPARATOR: &str = " ... ";

pub const DEFAULT_EMPTY_LABEL: &str = "none available";

/// Name of the directory holding chooser config files.
pub const CONFIG_DIR_NAME: &str = ".cmgui";

pub const CONFIG_FILE_NAME: &str = "chooser.toml";

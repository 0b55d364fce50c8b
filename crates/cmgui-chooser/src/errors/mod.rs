use std::error::Error;

/// Base trait for all chooser errors
pub trait CmguiError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChooserError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to build menu {node}: {source}")]
    SurfaceFailed {
        node: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    #[error("No menu entry matches {entry}")]
    UnknownEntry { entry: String },
}

impl CmguiError for ChooserError {
    fn error_code(&self) -> &'static str {
        match self {
            ChooserError::InvalidArgument { .. } => "CHOOSER_INVALID_ARGUMENT",
            ChooserError::SurfaceFailed { .. } => "CHOOSER_SURFACE_FAILED",
            ChooserError::UnknownEntry { .. } => "CHOOSER_UNKNOWN_ENTRY",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ChooserError::InvalidArgument { .. } | ChooserError::UnknownEntry { .. } => true,
            ChooserError::SurfaceFailed { .. } => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found at '{path}'")]
    ConfigNotFound { path: String },

    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CmguiError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}

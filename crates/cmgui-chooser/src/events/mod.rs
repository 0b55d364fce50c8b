use tracing::{error, info};

use crate::errors::CmguiError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error<E: CmguiError>(error: &E) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_code = error.error_code(),
        error_type = std::any::type_name_of_val(error)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_events() {
        log_app_startup();

        let test_error = crate::errors::ChooserError::SurfaceFailed {
            node: "root".to_string(),
            source: "out of widgets".into(),
        };
        log_app_error(&test_error);
    }
}

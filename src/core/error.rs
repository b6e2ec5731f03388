//! Core error types for diagram processing
//!
//! The accumulation model itself never fails; errors only arise on the
//! surfaces around it (configuration loading, logging setup).

use thiserror::Error;

/// Errors raised by the diagram infrastructure
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Config error: {source}")]
    ConfigError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Logging error: {message}")]
    LoggingError { message: String },
}

impl DiagramError {
    /// Create a new logging error
    pub fn logging_error(message: impl Into<String>) -> Self {
        Self::LoggingError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_error() {
        let error = DiagramError::logging_error("subscriber already set");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Logging error"));
        assert!(error_msg.contains("subscriber already set"));
    }

    #[test]
    fn test_config_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: DiagramError = json_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Config error"));
    }
}

use thiserror::Error;

use super::config::ConfigError;
use crate::core::constants::ConstantsError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to load physical constants: {source}")]
    Constants {
        #[from]
        source: ConstantsError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert_with_their_message() {
        let err: EngineError = ConfigError::MissingParameter("protons").into();
        match &err {
            EngineError::Config { .. } => {}
            EngineError::Constants { .. } => panic!("expected a configuration error"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Missing required parameter: protons"
        );
    }
}

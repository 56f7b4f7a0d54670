//! Configuration Tests
//!
//! Environment parsing for the server configuration.

use crate::config::{LogFormat, ServerConfig, HOST_VAR, LOG_FORMAT_VAR, PORT_VAR};
use crate::error::AppError;
use std::net::IpAddr;

#[cfg(test)]
mod server_config_tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset([HOST_VAR, PORT_VAR, LOG_FORMAT_VAR], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                (HOST_VAR, Some("127.0.0.1")),
                (PORT_VAR, Some("9090")),
                (LOG_FORMAT_VAR, Some("JSON")),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.host, "127.0.0.1".parse::<IpAddr>().unwrap());
                assert_eq!(config.port, 9090);
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        temp_env::with_vars([(PORT_VAR, Some("eighty"))], || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
            assert!(err.to_string().contains(PORT_VAR));
        });
    }

    #[test]
    fn test_invalid_host() {
        temp_env::with_vars([(HOST_VAR, Some("not-an-ip"))], || {
            assert!(matches!(ServerConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_invalid_log_format() {
        temp_env::with_vars([(LOG_FORMAT_VAR, Some("xml"))], || {
            assert!(matches!(ServerConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!(" json ".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }
}

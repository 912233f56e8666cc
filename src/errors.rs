use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_meteo::errors::MeteoError;

/// Fixed message used whenever the upstream payload is missing or malformed
pub const INCOMPLETE_DATA: &str = "Incomplete or invalid data received from Open-Meteo API.";

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<MeteoError> for UnrecoverableError {
    fn from(e: MeteoError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Request-level error taxonomy surfaced to HTTP clients.
///
/// Every upstream failure is normalized into one of the 500-class kinds here;
/// nothing beyond the upstream status text is ever passed through.
#[derive(Debug, PartialEq)]
pub enum WeatherError {
    InvalidCoordinate,
    DataUnavailable(String),
    TransportFailure,
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::InvalidCoordinate => write!(f, "Invalid latitude or longitude values."),
            WeatherError::DataUnavailable(e) => write!(f, "{}", e),
            WeatherError::TransportFailure => write!(f, "Unable to fetch weather data."),
        }
    }
}
impl From<MeteoError> for WeatherError {
    fn from(e: MeteoError) -> Self {
        match e {
            MeteoError::Upstream(e) => WeatherError::DataUnavailable(e),
            MeteoError::Document(_) => WeatherError::DataUnavailable(INCOMPLETE_DATA.to_string()),
            MeteoError::Transport(_) => WeatherError::TransportFailure,
        }
    }
}

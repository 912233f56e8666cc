use std::env;
use std::fs;
use std::io::ErrorKind;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "weatherproxy.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web_server: WebServerConfig,
    pub meteo: MeteoConfig,
    pub pv: PvConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WebServerConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        WebServerConfig {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MeteoConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for MeteoConfig {
    fn default() -> Self {
        MeteoConfig {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Reference photovoltaic installation used for the energy estimate
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PvConfig {
    pub power_kw: f64,
    pub efficiency: f64,
}

impl Default for PvConfig {
    fn default() -> Self {
        PvConfig {
            power_kw: 2.5,
            efficiency: 0.2,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: "info".to_string() }
    }
}

/// Loads configuration and initializes logging.
///
/// The config file path is taken from the WEATHERPROXY_CONF environment
/// variable, falling back to `weatherproxy.toml` in the working directory.
/// A missing file yields the compiled defaults; a file that exists but does
/// not parse is an error.
pub fn config() -> Result<Config, ConfigError> {
    let path = env::var("WEATHERPROXY_CONF").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config: Config = match fs::read_to_string(&path) {
        Ok(raw) => toml::from_str(&raw)?,
        Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
        Err(e) => return Err(ConfigError::from(e)),
    };

    setup_logger(&config.log.level)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_sections() {
        let config = Config::default();

        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.meteo.base_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(config.pv.power_kw, 2.5);
        assert_eq!(config.pv.efficiency, 0.2);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let raw = r#"
            [web_server]
            bind_port = 9000

            [pv]
            power_kw = 5.0
        "#;
        let config: Config = toml::from_str(raw).unwrap();

        assert_eq!(config.web_server.bind_port, 9000);
        assert_eq!(config.web_server.bind_address, "0.0.0.0");
        assert_eq!(config.pv.power_kw, 5.0);
        assert_eq!(config.pv.efficiency, 0.2);
        assert_eq!(config.meteo.timeout_secs, 30);
    }
}

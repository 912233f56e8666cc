pub mod errors;
pub mod models;

use std::time::Duration;
use reqwest::Client;
use crate::initialization::MeteoConfig;
use crate::manager_meteo::errors::MeteoError;
use crate::manager_meteo::models::ForecastPayload;

/// Daily fields requested from Open-Meteo for both endpoint variants
const DAILY_FIELDS: &str = "weathercode,temperature_2m_min,temperature_2m_max,sunshine_duration";

/// Struct for managing weather forecasts fetched from the Open-Meteo API
pub struct OpenMeteo {
    client: Client,
    base_url: String,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'config' - upstream base url and request timeout
    pub fn new(config: &MeteoConfig) -> Result<OpenMeteo, MeteoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Retrieves the daily forecast arrays for the given location
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn daily_forecast(&self, lat: f64, long: f64) -> Result<ForecastPayload, MeteoError> {
        self.fetch(lat, long, false).await
    }

    /// Retrieves the daily forecast arrays plus hourly surface pressure,
    /// as needed by the weekly summary
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude of the location
    /// * 'long' - longitude of the location
    pub async fn weekly_forecast(&self, lat: f64, long: f64) -> Result<ForecastPayload, MeteoError> {
        self.fetch(lat, long, true).await
    }

    /// Makes exactly one GET request to the upstream forecast endpoint.
    ///
    /// `timezone=auto` keeps returned dates in the location's local calendar day.
    /// A non-success status is reported with the upstream status text; a body
    /// that does not parse into the expected daily arrays is reported as an
    /// incomplete document.
    async fn fetch(&self, lat: f64, long: f64, with_pressure: bool) -> Result<ForecastPayload, MeteoError> {
        let mut query: Vec<(&str, String)> = vec![
            ("latitude", lat.to_string()),
            ("longitude", long.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];
        if with_pressure {
            query.push(("hourly", "surface_pressure".to_string()));
        }

        let req = self.client
            .get(&self.base_url)
            .query(&query)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(MeteoError::Upstream(format!("Open-Meteo API Error: {}", status)));
        }

        let json = req.text().await?;
        let payload: ForecastPayload = serde_json::from_str(&json)?;

        payload.ensure_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_json() -> &'static str {
        r#"{
            "daily": {
                "time": ["2025-08-18", "2025-08-19"],
                "weathercode": [3, 61],
                "temperature_2m_min": [11.2, 9.8],
                "temperature_2m_max": [21.4, 17.6],
                "sunshine_duration": [412.0, 0.0]
            }
        }"#
    }

    #[test]
    fn parses_daily_payload() {
        let payload: ForecastPayload = serde_json::from_str(daily_json()).unwrap();
        assert_eq!(payload.daily.time.len(), 2);
        assert_eq!(payload.daily.weathercode, vec![3, 61]);
        assert!(payload.hourly.is_none());
        assert!(payload.ensure_complete().is_ok());
    }

    #[test]
    fn parses_hourly_pressure_when_present() {
        let json = r#"{
            "daily": {
                "time": ["2025-08-18"],
                "weathercode": [0],
                "temperature_2m_min": [10.0],
                "temperature_2m_max": [20.0],
                "sunshine_duration": [600.0]
            },
            "hourly": { "surface_pressure": [1013.2, 1012.8] }
        }"#;
        let payload: ForecastPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.hourly.unwrap().surface_pressure.len(), 2);
    }

    #[test]
    fn missing_daily_block_fails_to_parse() {
        let result: Result<ForecastPayload, _> = serde_json::from_str(r#"{"hourly": {"surface_pressure": []}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_weathercode_fails_to_parse() {
        let json = r#"{
            "daily": {
                "time": ["2025-08-18"],
                "temperature_2m_min": [10.0],
                "temperature_2m_max": [20.0],
                "sunshine_duration": [600.0]
            }
        }"#;
        let result: Result<ForecastPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn empty_time_series_is_incomplete() {
        let json = r#"{
            "daily": {
                "time": [],
                "weathercode": [],
                "temperature_2m_min": [],
                "temperature_2m_max": [],
                "sunshine_duration": []
            }
        }"#;
        let payload: ForecastPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(payload.ensure_complete(), Err(MeteoError::Document(_))));
    }
}

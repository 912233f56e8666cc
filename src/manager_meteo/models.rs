use chrono::NaiveDate;
use serde::Deserialize;
use crate::manager_meteo::errors::MeteoError;

/// Parsed body of an Open-Meteo forecast response.
///
/// The `hourly` block is only present when the request asked for hourly fields.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ForecastPayload {
    pub daily: DailyData,
    pub hourly: Option<HourlyData>,
}

/// Daily parallel arrays, index-aligned by upstream contract
#[derive(Debug, Deserialize, PartialEq)]
pub struct DailyData {
    pub time: Vec<NaiveDate>,
    pub weathercode: Vec<i64>,
    pub temperature_2m_min: Vec<f64>,
    pub temperature_2m_max: Vec<f64>,
    pub sunshine_duration: Vec<f64>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct HourlyData {
    pub surface_pressure: Vec<f64>,
}

impl ForecastPayload {
    /// Rejects a payload whose daily time series carries no days at all,
    /// before any transformer can divide by a zero length
    pub fn ensure_complete(self) -> Result<Self, MeteoError> {
        if self.daily.time.is_empty() || self.daily.weathercode.is_empty() {
            return Err(MeteoError::Document("empty daily time series".to_string()));
        }

        Ok(self)
    }
}

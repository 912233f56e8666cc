use chrono::NaiveDate;
use serde::Serialize;
use crate::errors::{WeatherError, INCOMPLETE_DATA};
use crate::initialization::PvConfig;
use crate::manager_meteo::models::{DailyData, ForecastPayload};

/// Weather codes within [61, 80] denote precipitation in the upstream coding
const RAINY_CODE_MIN: i64 = 61;
const RAINY_CODE_MAX: i64 = 80;

/// A week counts as rainy when more than this many days carry a rain code
const RAINY_DAYS_THRESHOLD: usize = 3;

/// One day of forecast detail with the estimated photovoltaic yield
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastPoint {
    pub date: NaiveDate,
    pub weather_code: i64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub generated_energy: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ExtremeTemps {
    pub min: f64,
    pub max: f64,
}

/// Aggregate view over the full forecast week
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub average_sun_exposure: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_pressure: Option<f64>,
    pub extreme_temps: ExtremeTemps,
    pub summary: String,
}

/// Maps the daily parallel arrays into per-day forecast points, in upstream
/// time order.
///
/// Sunshine duration arrives in minutes and is converted to hours before the
/// yield estimate. The arrays are zipped, so a misaligned upstream payload
/// truncates to the shortest array instead of panicking.
///
/// # Arguments
///
/// * 'daily' - the daily arrays from the upstream payload
/// * 'pv' - reference installation parameters for the yield estimate
pub fn daily_points(daily: &DailyData, pv: &PvConfig) -> Vec<DailyForecastPoint> {
    daily.time.iter()
        .zip(&daily.weathercode)
        .zip(&daily.temperature_2m_min)
        .zip(&daily.temperature_2m_max)
        .zip(&daily.sunshine_duration)
        .map(|((((date, code), min_temp), max_temp), sunshine)| {
            let exposure_hours = sunshine / 60.0;

            DailyForecastPoint {
                date: *date,
                weather_code: *code,
                min_temp: *min_temp,
                max_temp: *max_temp,
                generated_energy: round_2(pv.power_kw * exposure_hours * pv.efficiency),
            }
        })
        .collect()
}

/// Condenses the forecast week into a single summary.
///
/// Temperature extremes are global over the week, not any single day's pairing.
/// Average pressure is included only when the payload carries the hourly block.
/// Arrays that would make a mean divide by zero are reported as incomplete data
/// rather than producing NaN.
///
/// # Arguments
///
/// * 'payload' - the full upstream payload, daily plus optional hourly arrays
pub fn weekly_summary(payload: &ForecastPayload) -> Result<WeeklySummary, WeatherError> {
    let daily = &payload.daily;

    if daily.sunshine_duration.is_empty()
        || daily.temperature_2m_min.is_empty()
        || daily.temperature_2m_max.is_empty() {
        return Err(WeatherError::DataUnavailable(INCOMPLETE_DATA.to_string()));
    }

    let exposure_sum: f64 = daily.sunshine_duration.iter().map(|minutes| minutes / 60.0).sum();
    let average_sun_exposure = round_2(exposure_sum / daily.sunshine_duration.len() as f64);

    let min = daily.temperature_2m_min.iter().copied().fold(f64::INFINITY, f64::min);
    let max = daily.temperature_2m_max.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let average_pressure = match &payload.hourly {
        Some(hourly) => {
            if hourly.surface_pressure.is_empty() {
                return Err(WeatherError::DataUnavailable(INCOMPLETE_DATA.to_string()));
            }
            let sum: f64 = hourly.surface_pressure.iter().sum();
            Some(round_2(sum / hourly.surface_pressure.len() as f64))
        },
        None => None,
    };

    let rainy_days = daily.weathercode.iter()
        .filter(|code| (RAINY_CODE_MIN..=RAINY_CODE_MAX).contains(*code))
        .count();
    let summary = if rainy_days > RAINY_DAYS_THRESHOLD {
        "week with rainfall"
    } else {
        "week without rainfall"
    };

    Ok(WeeklySummary {
        average_sun_exposure,
        average_pressure,
        extreme_temps: ExtremeTemps { min, max },
        summary: summary.to_string(),
    })
}

/// Rounds a value to two decimals
fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

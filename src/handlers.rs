use actix_web::{get, web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use crate::coordinates::validate_coordinates;
use crate::errors::WeatherError;
use crate::{transform, AppState};

#[derive(Deserialize, Debug)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[get("/weather/daily")]
pub async fn daily_weather(params: web::Query<Coordinates>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    if let Err(e) = validate_coordinates(params.latitude, params.longitude) {
        return error_response(&e);
    }

    match data.meteo.daily_forecast(params.latitude, params.longitude).await {
        Ok(payload) => HttpResponse::Ok().json(transform::daily_points(&payload.daily, &data.pv)),
        Err(e) => {
            error!("failed to fetch daily forecast: {}", e);
            error_response(&WeatherError::from(e))
        },
    }
}

#[get("/weather/weekly-summary")]
pub async fn weekly_summary(params: web::Query<Coordinates>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    if let Err(e) = validate_coordinates(params.latitude, params.longitude) {
        return error_response(&e);
    }

    match data.meteo.weekly_forecast(params.latitude, params.longitude).await {
        Ok(payload) => match transform::weekly_summary(&payload) {
            Ok(summary) => HttpResponse::Ok().json(summary),
            Err(e) => {
                error!("failed to summarize forecast week: {}", e);
                error_response(&e)
            },
        },
        Err(e) => {
            error!("failed to fetch weekly forecast: {}", e);
            error_response(&WeatherError::from(e))
        },
    }
}

/// Maps the error taxonomy onto HTTP statuses: invalid coordinates are the
/// client's fault, everything upstream related is a server error
fn error_response(e: &WeatherError) -> HttpResponse {
    let body = ErrorBody { error: e.to_string() };

    match e {
        WeatherError::InvalidCoordinate => HttpResponse::BadRequest().json(body),
        WeatherError::DataUnavailable(_) | WeatherError::TransportFailure => {
            HttpResponse::InternalServerError().json(body)
        },
    }
}

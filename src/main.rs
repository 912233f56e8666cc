mod errors;
mod logging;
mod initialization;
mod coordinates;
mod handlers;
mod manager_meteo;
mod transform;

use actix_web::{web, App, HttpServer};
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::{config, PvConfig};
use crate::manager_meteo::OpenMeteo;

pub struct AppState {
    pub meteo: OpenMeteo,
    pub pv: PvConfig,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let meteo = OpenMeteo::new(&config.meteo)?;
    let state = web::Data::new(AppState { meteo, pv: config.pv });

    info!("starting weather proxy on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(handlers::daily_weather)
            .service(handlers::weekly_summary)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}

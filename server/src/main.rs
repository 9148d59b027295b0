mod config;
mod services;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use crate::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|err| {
        error!("{err}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("no se pudo abrir el navegador: {err}");
            }
        });
    }

    info!("Server running at {url} (API: {})", config.runtime.api_url);

    let runtime = web::Data::new(config.runtime.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(runtime.clone())
            .service(services::runtime_config::configure_routes())
            .default_service(web::route().to(services::embedded::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

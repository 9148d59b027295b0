//! `GET /config.json`: the runtime configuration the front end reads at
//! startup (currently the backend base URL).

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::web::{get, resource, Data};
use actix_web::{HttpResponse, Resource, Responder};
use common::config::RuntimeConfig;

const CONFIG_PATH: &str = "/config.json";

pub fn configure_routes() -> Resource {
    resource(CONFIG_PATH).route(get().to(process))
}

/// Never cached, so a restarted host with a new backend URL is picked up on
/// the next page load.
async fn process(config: Data<RuntimeConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(config.get_ref())
}

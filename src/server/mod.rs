//! main file for the server

pub mod model;
mod error;
mod routes;

use actix_web::dev::Server;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use crate::server::model::config::ServerConfig;
use crate::server::routes::{not_found, routes};

pub(crate) use crate::server::error::ServerError;

/// Bind the listener and build the server future without driving it.
pub(crate) fn start(config: ServerConfig) -> Result<Server, ServerError> {
    let ServerConfig { port } = config;
    let server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(routes)
            .default_service(web::to(not_found))
    })
        .bind(config.bind_addr())
        .map_err(|source| ServerError::Bind { port, source })?
        .run();
    info!("listening on {}", config.bind_addr());
    Ok(server)
}

fn startup_line(config: &ServerConfig) -> String {
    format!("Order service starting on port {}", config.port)
}

/// Run the server
pub(crate) async fn run(config: ServerConfig) -> Result<(), ServerError> {
    println!("{}", startup_line(&config));
    start(config)?.await.map_err(ServerError::Io)
}

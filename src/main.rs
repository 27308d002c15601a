mod config;
mod db;
mod handlers;
mod message;
mod models;
mod routes;
mod utils;


use std::io;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;

use crate::config::Settings;
use crate::db::Database;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    utils::logging::init();

    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let db = Database::connect(&settings.database_url)
        .await
        .map_err(io::Error::other)?;
    tracing::info!(database_url = %settings.database_url, "connected to the SQLite database");

    let db_data = web::Data::new(db.clone());
    let scheme = settings.password_scheme;
    tracing::info!(password_scheme = %scheme, "password scheme selected");

    tracing::info!("server is running on http://{}:{}", settings.host, settings.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(middleware::Logger::default())
            .configure(routes::configure(db_data.clone(), scheme))
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;

    db.close().await;
    tracing::info!("database connection closed");

    Ok(())
}

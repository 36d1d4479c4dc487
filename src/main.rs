use std::path::Path;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};

mod config;
mod db;
mod errors;
mod forms;
mod mail;
mod models;
mod routes;

use crate::config::AppConfig;
use crate::db::{schema::init_db, SqliteStore};
use crate::forms::Dependencies;
use crate::mail::ApiMailer;

fn ensure_data_dir(database_path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.exists() {
            info!("Creating data directory...");
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    if let Err(e) = ensure_data_dir(&config.database_path) {
        warn!("Failed to create data directory: {}", e);
    }

    // Bootstrap the records table before accepting traffic.
    init_db(&config.database_path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let mailer = ApiMailer::new(
        config.mail.base_url.clone(),
        config.mail.sender.clone(),
        config.mail.auth_token.clone(),
        config.mail.timeout,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let dependencies = web::Data::new(Dependencies {
        mailer: Arc::new(mailer),
        store: Arc::new(SqliteStore::new(config.database_path.clone())),
        operator_address: config.mail.operator_address.clone(),
    });

    info!("Starting server on http://{}:{}...", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(dependencies.clone())
            // --- Logging Middleware ---
            .wrap(actix_web::middleware::Logger::default())
            // --- Form Endpoints ---
            .service(routes::journal::send_email_handler)
            .service(routes::contact::contact_handler)
            .service(routes::conference::conference_email_handler)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Courier service entry point.
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;

use courier_service::{routes, AppError, AppState, Config};
use courier_service::db::DbPools;
use courier_service::jobs::session_sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to load configuration")?;
    info!(
        "Starting courier-service: env={}, addr={}:{}",
        config.app.env, config.app.host, config.app.port
    );

    let pools = DbPools::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!("Database pools created and verified");

    sqlx::migrate!("./migrations")
        .run(&pools.writer)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations completed");

    let state = AppState::build(pools, &config.jwt);

    // Periodic purge of expired sessions; lazily-detected ones are deleted
    // inline during validation.
    let sweeper_sessions = Arc::clone(&state.sessions);
    let sweep_interval = Duration::from_secs(config.session.cleanup_interval_secs);
    tokio::spawn(async move {
        session_sweeper::run(sweeper_sessions, sweep_interval).await;
    });

    let bind_addr = (config.app.host.clone(), config.app.port);
    info!("HTTP server listening on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(format!("Unable to bind request: {}", err)).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(format!("Invalid query parameters: {}", err)).into()
            }))
            .configure(routes::configure)
    })
    .bind(bind_addr)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")
}

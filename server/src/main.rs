mod config;
mod db;
mod error;
mod rate_limit;
mod routes;
mod services;
mod state;

use tokio::net::TcpListener;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    config.log_startup();

    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    tokio::task::spawn_blocking(services::account::prime_dummy_hash).await?;
    let port = config.port;
    let state = state::AppState::new(pool, config);

    let _sweeper = services::session::spawn_expired_session_sweeper(state.pool.clone());

    let app = routes::leptos_app(state)?;
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!(%port, "portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}

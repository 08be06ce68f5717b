mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router::router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router(AppState::new(db, config.api_key))).await?;

    Ok(())
}

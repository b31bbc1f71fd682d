//! Overtime Engine HTTP Server Binary
//!
//! Loads the overtime policy, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! OVERTIME_CONFIG_DIR=./config/default cargo run --bin overtime-server
//! ```
//!
//! # Environment Variables
//!
//! - `OVERTIME_CONFIG_DIR`: Policy directory (default: ./config/default)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use overtime_engine::api::{AppState, create_router};
use overtime_engine::config::ConfigLoader;
use overtime_engine::holidays::GermanHolidays;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Overtime Engine HTTP Server");

    let config_dir =
        env::var("OVERTIME_CONFIG_DIR").unwrap_or_else(|_| "./config/default".to_string());
    let config = ConfigLoader::load(&config_dir, &GermanHolidays)?;

    let state = AppState::new(config, GermanHolidays);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

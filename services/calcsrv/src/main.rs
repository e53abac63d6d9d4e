//! Calculator service entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use calcsrv::config::ServiceConfig;
use calcsrv::error::Result;
use calcsrv::logging;
use calcsrv::routes::create_routes;
use calcsrv::shutdown::wait_for_shutdown;
use calcsrv::state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about = "calcsrv - Calculator REST service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::load()?,
    };

    logging::init(&config.log_level)?;

    info!("Starting calcsrv v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.bind_addr()?;
    let state = Arc::new(AppState::new(config));
    let app = create_routes(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    #[cfg(feature = "swagger-ui")]
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

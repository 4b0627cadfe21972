//! Static responder binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p ordersig-web
//!
//! # Custom port and page
//! PORT=8080 INDEX_FILE=public/index.html cargo run -p ordersig-web
//! ```
//!
//! # Environment Variables
//!
//! - `PORT` — Listen port (default: `3000`)
//! - `INDEX_FILE` — HTML file to serve (default: `public/index.html`)
//! - `RUST_LOG` — Log level filter (default: `info`)

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use ordersig_web::{WebConfig, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("server failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), std::io::Error> {
    let config = WebConfig::from_env();
    let app = router(config.index_file.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(index_file = %config.index_file.display(), "server running at http://{addr}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

/// Waits for Ctrl-C or SIGTERM (Unix) to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down..."),
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down..."),
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.expect("failed to listen for Ctrl-C");
        tracing::info!("Received Ctrl-C, shutting down...");
    }
}

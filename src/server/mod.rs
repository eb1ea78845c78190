//! Development server: serves the output directory and rebuilds on change.

pub mod config;
pub mod watcher;

pub use config::ServerConfig;

use std::io;
use std::path::PathBuf;

use axum::Router;
use log::{error, info, warn};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::pipeline;
use crate::utils::fs::create_directory;

/// Errors that stop the development server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("cannot bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error(transparent)]
    Site(#[from] crate::utils::error::SiteError),

    #[error("server error: {0}")]
    Io(#[source] io::Error),
}

/// Router serving `root`, resolving directories to their `index.html`
pub fn create_app(root: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Build once, then serve the output directory until Ctrl+C
pub async fn serve(server_config: &ServerConfig, config: &SiteConfig) -> Result<(), ServerError> {
    info!("Building site before serving...");
    if let Err(e) = pipeline::build_site(config.clone()) {
        error!("Failed to build site: {}", e);
        warn!("Serving the existing output anyway");
    }

    let destination = config.output_dir.clone();
    create_directory(&destination)?;

    let _watcher = if server_config.watch {
        Some(watcher::watch_site(config)?)
    } else {
        None
    };

    let address = server_config.address_string();
    let listener = TcpListener::bind(address.as_str())
        .await
        .map_err(|source| ServerError::Bind { address: address.clone(), source })?;

    info!("Serving {} at {}", destination.display(), server_config.url());
    info!("Press Ctrl+C to stop");

    axum::serve(listener, create_app(destination))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Io)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down server (received Ctrl+C)...");
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PDF Generation Service
//!
//! Serves `POST /generate-pdf`, turning document descriptions into A4 PDF
//! files rendered from HTML templates.

use pdf_generation_service::{
    config::Config,
    services::{ChromeOptions, ChromeRenderer, DocumentService, TemplateService},
    AppState,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Headless browser is shut down after this long without documents.
const BROWSER_IDLE_TIMEOUT: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting PDF generation service");

    // Templates directory is created if missing
    let templates = TemplateService::new(&config.templates_dir)
        .expect("Failed to prepare templates directory");

    // The browser itself starts with the first document
    let renderer = Arc::new(ChromeRenderer::new(ChromeOptions {
        path: config.chrome_path.clone(),
        sandbox: config.chrome_sandbox,
        idle_timeout: BROWSER_IDLE_TIMEOUT,
    }));
    tracing::info!(
        chrome_path = ?config.chrome_path,
        sandbox = config.chrome_sandbox,
        max_concurrent_renders = config.max_concurrent_renders,
        "PDF renderer configured"
    );

    let documents = DocumentService::new(
        templates,
        renderer,
        config.max_concurrent_renders,
        config.render_timeout,
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        documents,
    });

    // Build router
    let app = pdf_generation_service::routes::create_router(state);

    // Start server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pdf_generation_service=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

/// Resolve on Ctrl-C or SIGTERM (container stop).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

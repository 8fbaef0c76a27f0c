// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitPulse API Server
//!
//! Serves the workout log, derived stats and check-in endpoint for the
//! FitPulse front-end.

use fitpulse::{
    config::Config,
    db::JsonFileStore,
    services::{notifier, provider_from_config, CheckInService},
    time_utils::SystemClock,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting FitPulse API");

    // Log store
    let store = JsonFileStore::new(&config.data_dir)?;

    // Motivation provider (Gemini when a key is configured)
    let motivation = provider_from_config(&config);

    let check_in = CheckInService::new(
        Arc::new(store),
        motivation,
        Arc::new(SystemClock),
        config.motivation_timeout,
    );

    // Post-save notifications
    notifier::spawn_notifier(check_in.subscribe());

    let state = Arc::new(AppState {
        config: config.clone(),
        check_in,
    });

    // Build router
    let app = fitpulse::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fitpulse=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}

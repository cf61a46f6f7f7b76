// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr};

use osinthub_server::api::router;
use osinthub_server::auth::{CredentialStore, SessionIssuer};
use osinthub_server::blockchain::{configured_networks, NftVerifier};
use osinthub_server::config::{self, HOST_ENV, LOG_FORMAT_ENV, PORT_ENV};
use osinthub_server::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    // Credential configuration is mandatory: an empty user set must prevent
    // startup (fail closed, no fallback accounts).
    let credentials = match CredentialStore::from_env() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(%error, "refusing to start without configured users");
            std::process::exit(1);
        }
    };

    let verifier = match NftVerifier::new(configured_networks()) {
        Ok(verifier) => verifier,
        Err(error) => {
            tracing::error!(%error, "invalid network configuration");
            std::process::exit(1);
        }
    };

    let sessions = SessionIssuer::new(config::session_secret());
    let state = AppState::new(credentials, sessions, verifier);
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var(PORT_ENV)
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    tracing::info!(%addr, "OSINT HUB auth server listening (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if env::var(LOG_FORMAT_ENV).is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

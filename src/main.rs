#![allow(dead_code, clippy::similar_names)]
mod alert_nexus;
mod config;
mod drone_control;
mod http_handler;
mod keychain;
mod logger;
mod mission_control;

use crate::alert_nexus::alert_endpoint;
use crate::config::DispatchConfig;
use crate::keychain::Keychain;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = DispatchConfig::from_env();
    info!(
        "Dispatcher starting: drone backend at {}, alert threshold {}",
        config.drone_base_url, config.alert_threshold
    );
    let keychain = Arc::new(Keychain::new(&config));

    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl-C received, shutting down");
            shutdown_clone.cancel();
        }
    });

    if let Err(e) = alert_endpoint::serve(&config.bind_addr, keychain, shutdown).await {
        fatal!("Alert endpoint failed: {e}");
    }
    info!("Dispatcher stopped");
}

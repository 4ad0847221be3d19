use crate::alert_nexus::AlertAggregator;
use crate::config::DispatchConfig;
use crate::drone_control::{ActuatorLink, DroneCommander};
use crate::http_handler::http_client::HTTPClient;
use crate::mission_control::MissionDispatcher;
use std::sync::Arc;

/// Struct representing the key components of the dispatcher, providing access
/// to the HTTP client for the drone backend, the per-sensor alert aggregator
/// and the mission dispatcher.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for performing requests against the drone backend.
    client: Arc<HTTPClient>,
    /// The per-sensor alert debouncer.
    aggregator: Arc<AlertAggregator>,
    /// The dispatcher executing missions against the single drone.
    dispatcher: Arc<MissionDispatcher>,
}

impl Keychain {
    /// Wires the whole system from startup configuration.
    pub fn new(config: &DispatchConfig) -> Self {
        let client = Arc::new(HTTPClient::new(&config.drone_base_url, config.request_timeout));
        let link: Arc<dyn ActuatorLink> = Arc::new(DroneCommander::new(Arc::clone(&client)));
        Self {
            client,
            aggregator: Arc::new(AlertAggregator::new(config.alert_threshold)),
            dispatcher: Arc::new(MissionDispatcher::new(link)),
        }
    }

    /// Test wiring: same topology with the HTTP actuator replaced by `link`.
    #[cfg(test)]
    pub(crate) fn with_link(threshold: u32, link: Arc<dyn ActuatorLink>) -> Self {
        let client = Arc::new(HTTPClient::new(
            "http://localhost:5000",
            std::time::Duration::from_secs(1),
        ));
        Self {
            client,
            aggregator: Arc::new(AlertAggregator::new(threshold)),
            dispatcher: Arc::new(MissionDispatcher::new(link)),
        }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the alert aggregator.
    pub fn aggregator(&self) -> Arc<AlertAggregator> { Arc::clone(&self.aggregator) }

    /// Provides a cloned reference to the mission dispatcher.
    pub fn dispatcher(&self) -> Arc<MissionDispatcher> { Arc::clone(&self.dispatcher) }
}

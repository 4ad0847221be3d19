use std::env;
use std::time::Duration;

/// Startup configuration for the dispatcher, read once from the environment.
///
/// Defaults match the local development setup: the drone backend on port 5000
/// and the alert endpoint on port 5001.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Address the alert endpoint binds to.
    pub bind_addr: String,
    /// Base URL of the drone backend.
    pub drone_base_url: String,
    /// Per-sensor alert count above which a mission is launched.
    pub alert_threshold: u32,
    /// Upper bound for every request against the drone backend.
    pub request_timeout: Duration,
}

impl DispatchConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("DISPATCH_BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:5001"));
        let drone_base_url =
            env::var("DRONE_BASE_URL").unwrap_or_else(|_| String::from("http://localhost:5000"));
        let alert_threshold = env::var("ALERT_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);
        let timeout_secs = env::var("DRONE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        Self {
            bind_addr,
            drone_base_url,
            alert_threshold,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

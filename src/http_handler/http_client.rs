use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// against the drone backend with a preconfigured base URL.
///
/// Every request carries a bounded timeout so a stalled actuator turns into a
/// transport error instead of an unbounded block.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL of the drone backend, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` for the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL of the drone backend (e.g. `"http://localhost:5000"`).
    /// * `timeout` – Upper bound applied to every request.
    pub fn new(base_url: &str, timeout: Duration) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder().timeout(timeout).build().unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }
}

pub mod aggregator;
pub mod alert_endpoint;

pub use aggregator::{AlertAggregator, AlertDecision};

#[cfg(test)]
mod tests;

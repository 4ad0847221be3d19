use super::drone_state::DroneState;
use crate::mission_control::{Command, CommandError, MissionError};
use async_trait::async_trait;

/// Seam between mission control and the drone backend. Production wires in
/// the HTTP-backed `DroneCommander`; tests substitute a recording fake.
#[async_trait]
pub trait ActuatorLink: Send + Sync {
    /// Current flight state, freshly queried.
    async fn query_status(&self) -> Result<DroneState, MissionError>;
    /// Executes a single command, returning the drone's acknowledgement text.
    async fn execute(&self, command: &Command) -> Result<String, CommandError>;
}

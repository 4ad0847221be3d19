use super::command::{CommandError, Coordinates};
use super::mission_context::MissionContext;
use super::strategy::FlightStrategy;
use crate::drone_control::ActuatorLink;
use crate::http_handler::common::HTTPError;
use crate::info;
use std::sync::Arc;
use strum_macros::Display;
use tokio::sync::Mutex;

#[derive(Debug, Display)]
pub enum MissionError {
    /// The status query failed; the mission is abandoned and the triggering
    /// alert counter is not restored (at-most-once per threshold crossing).
    #[strum(to_string = "actuator unreachable: {cause}")]
    ActuatorUnreachable { cause: HTTPError },
    /// The status string matched no known state; no commands were issued.
    #[strum(to_string = "unrecognized actuator state '{raw}'")]
    UnknownActuatorState { raw: String },
    /// A command in the sequence failed; the remainder was not sent.
    #[strum(to_string = "command {index} ({command}) failed: {cause}")]
    CommandFailed { index: usize, command: String, cause: CommandError },
}

impl std::error::Error for MissionError {}

/// Queries the drone's state, selects the matching strategy and pushes the
/// resulting command sequence, one mission at a time.
pub struct MissionDispatcher {
    link: Arc<dyn ActuatorLink>,
    /// The drone accepts a single command stream; missions serialize here.
    actuator_lock: Mutex<()>,
}

impl MissionDispatcher {
    pub fn new(link: Arc<dyn ActuatorLink>) -> Self {
        Self { link, actuator_lock: Mutex::new(()) }
    }

    /// One complete mission: status query, strategy selection, ordered
    /// execution. The state is never cached between calls since it decides
    /// which strategy applies.
    pub async fn dispatch(&self, target: Coordinates) -> Result<(), MissionError> {
        let _stream = self.actuator_lock.lock().await;
        let state = self.link.query_status().await?;
        let strategy = FlightStrategy::for_state(state);
        info!("Drone is {state}, selected strategy {strategy}");
        let mut context = MissionContext::new();
        context.set_strategy(strategy);
        for command in strategy.command_sequence(target) {
            context.add_command(command);
        }
        context.execute(self.link.as_ref()).await
    }
}

use super::command::{Command, Coordinates};
use super::dispatcher::MissionError;
use crate::drone_control::{ActuatorLink, DroneState};
use crate::info;
use strum_macros::Display;

/// Climb target for departures from the base point.
pub const TAKEOFF_ALTITUDE: f64 = 50.0;

/// Policy mapping the drone's state to the commands answering an alert.
///
/// The strategy and command sets are fixed and small, so this is a closed sum
/// type with explicit dispatch rather than a trait-object hierarchy.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FlightStrategy {
    /// Drone is grounded: take off, then head for the reported location.
    BaseDeparture,
    /// Drone is already airborne: re-route to the reported location.
    FlightChange,
}

impl FlightStrategy {
    pub fn for_state(state: DroneState) -> Self {
        match state {
            DroneState::Grounded => FlightStrategy::BaseDeparture,
            DroneState::Airborne => FlightStrategy::FlightChange,
        }
    }

    /// Ordered command sequence for one mission against `target`.
    pub fn command_sequence(self, target: Coordinates) -> Vec<Command> {
        match self {
            FlightStrategy::BaseDeparture => vec![
                Command::Takeoff { altitude: TAKEOFF_ALTITUDE },
                Command::MoveForward(target),
            ],
            FlightStrategy::FlightChange => vec![Command::MoveForward(target)],
        }
    }

    /// Runs `commands` strictly in order, no skipping or reordering. The
    /// first failure halts the rest of the sequence: a partially executed
    /// mission must not keep advancing a possibly inconsistent drone state.
    pub async fn execute(
        self,
        commands: &[Command],
        link: &dyn ActuatorLink,
    ) -> Result<(), MissionError> {
        info!("Executing strategy {self} with {} command(s)", commands.len());
        for (index, command) in commands.iter().enumerate() {
            match link.execute(command).await {
                Ok(ack) => info!("{command} acknowledged: {ack}"),
                Err(cause) => {
                    return Err(MissionError::CommandFailed {
                        index,
                        command: command.to_string(),
                        cause,
                    });
                }
            }
        }
        Ok(())
    }
}

use super::command::Command;
use super::dispatcher::MissionError;
use super::strategy::FlightStrategy;
use crate::drone_control::ActuatorLink;
use crate::warn;

/// Holds the selected strategy and the pending command sequence for exactly
/// one mission. Single-use: the sequence is discarded after execution whether
/// or not it succeeded.
#[derive(Debug, Default)]
pub struct MissionContext {
    strategy: Option<FlightStrategy>,
    commands: Vec<Command>,
}

impl MissionContext {
    pub fn new() -> Self { Self::default() }

    pub fn set_strategy(&mut self, strategy: FlightStrategy) { self.strategy = Some(strategy); }

    pub fn add_command(&mut self, command: Command) { self.commands.push(command); }

    pub fn pending_commands(&self) -> usize { self.commands.len() }

    /// Executes the accumulated sequence with the active strategy and clears
    /// it, success or partial failure alike.
    pub async fn execute(&mut self, link: &dyn ActuatorLink) -> Result<(), MissionError> {
        let commands = std::mem::take(&mut self.commands);
        let Some(strategy) = self.strategy.take() else {
            warn!("Mission context executed without a strategy, dropping {} command(s)", commands.len());
            return Ok(());
        };
        strategy.execute(&commands, link).await
    }
}

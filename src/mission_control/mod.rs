pub mod command;
pub mod dispatcher;
pub mod mission_context;
pub mod strategy;

pub use command::{Command, CommandError, Coordinates};
pub use dispatcher::{MissionDispatcher, MissionError};
pub use mission_context::MissionContext;
pub use strategy::{FlightStrategy, TAKEOFF_ALTITUDE};

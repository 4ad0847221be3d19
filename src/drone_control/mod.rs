pub mod drone_commander;
pub mod drone_state;
pub mod link;

pub use drone_commander::DroneCommander;
pub use drone_state::DroneState;
pub use link::ActuatorLink;

#[cfg(test)]
mod tests;

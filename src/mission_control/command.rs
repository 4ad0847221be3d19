use crate::http_handler::common::HTTPError;
use strum_macros::Display;

/// Target location reported by a sensor. Passed by value through the whole
/// pipeline and never mutated after receipt.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Atomic drone action carrying exactly the data it needs to execute.
/// Commands are created by one strategy invocation and consumed exactly once.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum Command {
    Takeoff { altitude: f64 },
    MoveForward(Coordinates),
    MoveBack(Coordinates),
    Turn { degree: f64 },
    Land,
}

impl Command {
    /// Local payload checks; a malformed command never reaches the network.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            Command::Takeoff { altitude } if !(altitude.is_finite() && *altitude > 0.0) => {
                Err(CommandError::InvalidPayload {
                    reason: "takeoff altitude must be finite and positive",
                })
            }
            Command::Turn { degree } if !degree.is_finite() => {
                Err(CommandError::InvalidPayload { reason: "turn degree must be finite" })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Display)]
pub enum CommandError {
    /// Payload validation failed locally; the actuator was never contacted.
    #[strum(to_string = "rejected before send: {reason}")]
    InvalidPayload { reason: &'static str },
    /// Network failure or non-success response for this command.
    #[strum(to_string = "transport failure: {cause}")]
    Transport { cause: HTTPError },
}

impl std::error::Error for CommandError {}

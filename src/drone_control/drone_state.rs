use strum_macros::Display;

/// Flight state of the drone as reported by `/drone_status`.
///
/// The dispatcher only ever holds a transient copy obtained via a query; the
/// state is re-queried for every dispatch decision because staleness changes
/// which strategy applies.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DroneState {
    Grounded,
    Airborne,
}

impl TryFrom<&str> for DroneState {
    type Error = String;

    /// Exact-match mapping from the backend's status text. An unrecognized
    /// string is handed back to the caller instead of being defaulted, so a
    /// garbled status can never select a strategy.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "grounded" => Ok(DroneState::Grounded),
            "airborne" => Ok(DroneState::Airborne),
            other => Err(String::from(other)),
        }
    }
}

impl From<DroneState> for &'static str {
    fn from(value: DroneState) -> Self {
        match value {
            DroneState::Grounded => "grounded",
            DroneState::Airborne => "airborne",
        }
    }
}

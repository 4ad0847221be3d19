use super::drone_commander::DroneCommander;
use super::drone_state::DroneState;
use super::link::ActuatorLink;
use crate::http_handler::http_client::HTTPClient;
use crate::mission_control::{Command, CommandError};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn status_text_maps_by_exact_match() {
    assert_eq!(DroneState::try_from("grounded"), Ok(DroneState::Grounded));
    assert_eq!(DroneState::try_from("airborne"), Ok(DroneState::Airborne));
}

#[test]
fn unrecognized_status_text_is_an_error_not_a_default() {
    assert_eq!(DroneState::try_from("Grounded"), Err(String::from("Grounded")));
    assert_eq!(DroneState::try_from("landed"), Err(String::from("landed")));
    assert_eq!(DroneState::try_from(""), Err(String::new()));
}

#[test]
fn state_round_trips_through_its_wire_text() {
    for state in [DroneState::Grounded, DroneState::Airborne] {
        let text: &'static str = state.into();
        assert_eq!(DroneState::try_from(text), Ok(state));
    }
}

#[tokio::test]
async fn malformed_payload_is_rejected_before_any_request() {
    // Unroutable backend: if the commander reached for the network at all,
    // the result would be a transport error rather than a local rejection.
    let client = Arc::new(HTTPClient::new("http://127.0.0.1:9", Duration::from_millis(200)));
    let commander = DroneCommander::new(client);

    let takeoff = commander.execute(&Command::Takeoff { altitude: -1.0 }).await;
    assert!(matches!(takeoff, Err(CommandError::InvalidPayload { .. })));
    let turn = commander.execute(&Command::Turn { degree: f64::NAN }).await;
    assert!(matches!(turn, Err(CommandError::InvalidPayload { .. })));
}

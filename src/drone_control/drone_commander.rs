use super::drone_state::DroneState;
use super::link::ActuatorLink;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    drone_status_get::DroneStatusRequest,
    landing_get::LandingRequest,
    move_back_post::MoveBackRequest,
    move_forward_post::MoveForwardRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
    takeoff_post::TakeoffRequest,
    turn_post::TurnRequest,
};
use crate::mission_control::{Command, CommandError, MissionError};
use async_trait::async_trait;
use std::sync::Arc;

/// Actuator client: translates a `Command` into a typed request against the
/// drone backend and maps the reply into an acknowledgement or failure.
/// Never panics across the component boundary.
#[derive(Debug)]
pub struct DroneCommander {
    client: Arc<HTTPClient>,
}

impl DroneCommander {
    pub fn new(client: Arc<HTTPClient>) -> Self { Self { client } }
}

#[async_trait]
impl ActuatorLink for DroneCommander {
    async fn query_status(&self) -> Result<DroneState, MissionError> {
        let response = DroneStatusRequest {}
            .send_request(&self.client)
            .await
            .map_err(|cause| MissionError::ActuatorUnreachable { cause })?;
        DroneState::try_from(response.message())
            .map_err(|raw| MissionError::UnknownActuatorState { raw })
    }

    async fn execute(&self, command: &Command) -> Result<String, CommandError> {
        // Malformed payloads fail here, before any network traffic.
        command.validate()?;
        let ack = match command {
            Command::Takeoff { altitude } => {
                TakeoffRequest { altitude: *altitude }.send_request(&self.client).await
            }
            Command::MoveForward(coordinates) => {
                MoveForwardRequest { coordinates: *coordinates }.send_request(&self.client).await
            }
            Command::MoveBack(coordinates) => {
                MoveBackRequest { coordinates: *coordinates }.send_request(&self.client).await
            }
            Command::Turn { degree } => {
                TurnRequest { degree: *degree }.send_request(&self.client).await
            }
            Command::Land => LandingRequest {}.send_request(&self.client).await,
        };
        ack.map(|resp| String::from(resp.message()))
            .map_err(|cause| CommandError::Transport { cause })
    }
}

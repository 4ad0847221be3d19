use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::mission_control::Coordinates;

/// Request type for the /move_forward endpoint.
#[derive(serde::Serialize, Debug)]
pub struct MoveForwardRequest {
    /// Target location the drone should head for.
    pub coordinates: Coordinates,
}

impl JSONBodyHTTPRequestType for MoveForwardRequest {
    type Body = MoveForwardRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for MoveForwardRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &'static str { "/move_forward" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

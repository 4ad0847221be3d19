use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use crate::mission_control::Coordinates;

/// Request type for the /move_back endpoint.
#[derive(serde::Serialize, Debug)]
pub struct MoveBackRequest {
    /// Location of the base point to return to.
    pub coordinates: Coordinates,
}

impl JSONBodyHTTPRequestType for MoveBackRequest {
    type Body = MoveBackRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for MoveBackRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &'static str { "/move_back" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

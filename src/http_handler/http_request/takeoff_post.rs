use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /takeoff endpoint.
#[derive(serde::Serialize, Debug)]
pub struct TakeoffRequest {
    /// Target altitude in meters, validated as finite and positive before send.
    pub altitude: f64,
}

impl JSONBodyHTTPRequestType for TakeoffRequest {
    type Body = TakeoffRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for TakeoffRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &'static str { "/takeoff" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

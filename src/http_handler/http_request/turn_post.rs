use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /turn endpoint.
#[derive(serde::Serialize, Debug)]
pub struct TurnRequest {
    /// Heading change in degrees, validated as finite before send.
    pub degree: f64,
}

impl JSONBodyHTTPRequestType for TurnRequest {
    type Body = TurnRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for TurnRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &'static str { "/turn" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

use super::super::http_response::ack::AckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct LandingRequest {}

impl NoBodyHTTPRequestType for LandingRequest {}

impl HTTPRequestType for LandingRequest {
    type Response = AckResponse;
    fn endpoint(&self) -> &'static str { "/landing" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}

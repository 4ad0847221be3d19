use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Plain `{message}` acknowledgement returned by every drone command endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct AckResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for AckResponse {}

impl AckResponse {
    pub fn message(&self) -> &str { self.message.as_str() }
}

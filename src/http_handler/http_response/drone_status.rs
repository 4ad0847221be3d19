use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /drone_status endpoint. The status arrives as free
/// text ("grounded" or "airborne") and is mapped to `DroneState` by the
/// caller.
#[derive(serde::Deserialize, Debug)]
pub struct DroneStatusResponse {
    message: String,
}

impl SerdeJSONBodyHTTPResponseType for DroneStatusResponse {}

impl DroneStatusResponse {
    pub fn message(&self) -> &str { self.message.as_str() }
}

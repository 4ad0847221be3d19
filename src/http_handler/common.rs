use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Umbrella error for anything that can go wrong talking to the drone
/// backend, request side or response side.
#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "request failed: {req}")]
    HTTPRequestError { req: RequestError },
    #[strum(to_string = "bad response: {res}")]
    HTTPResponseError { res: ResponseError },
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(req: RequestError) -> Self { HTTPError::HTTPRequestError { req } }
}

impl From<ResponseError> for HTTPError {
    fn from(res: ResponseError) -> Self { HTTPError::HTTPResponseError { res } }
}

use super::super::common::HTTPError;
use super::super::http_client::HTTPClient;
use super::super::http_response::response_common::HTTPResponseType;
use strum_macros::Display;

#[derive(Debug, Clone, Copy)]
pub enum HTTPRequestMethod {
    Get,
    Post,
}

/// A typed request against one endpoint of the drone backend.
pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &'static str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
}

#[derive(Debug, Display)]
pub enum RequestError {
    #[strum(to_string = "failed to send request: {cause}")]
    FailedToSend { cause: reqwest::Error },
}

impl std::error::Error for RequestError {}

fn builder_for(
    client: &HTTPClient,
    method: HTTPRequestMethod,
    endpoint: &str,
) -> reqwest::RequestBuilder {
    let url = format!("{}{}", client.url(), endpoint);
    match method {
        HTTPRequestMethod::Get => client.client().get(url),
        HTTPRequestMethod::Post => client.client().post(url),
    }
}

/// Request types carrying a JSON body.
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = builder_for(client, self.request_method(), self.endpoint())
            .json(self.body())
            .send()
            .await
            .map_err(|cause| HTTPError::from(RequestError::FailedToSend { cause }))?;
        Ok(Self::Response::read_response(response).await?)
    }
}

/// Request types without a body.
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = builder_for(client, self.request_method(), self.endpoint())
            .send()
            .await
            .map_err(|cause| HTTPError::from(RequestError::FailedToSend { cause }))?;
        Ok(Self::Response::read_response(response).await?)
    }
}

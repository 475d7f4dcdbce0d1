use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tickwatch_model::error::SocketError;
use tracing::debug;

/// Translates non-success HTTP responses into a [`SocketError`].
///
/// Exchanges usually answer failed requests with a structured error body, `ApiError` is that
/// body's shape.
pub trait HttpParser {
    type ApiError: DeserializeOwned;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> SocketError;

    /// Parse the payload of a non-success response, falling back to the raw payload text when it
    /// is not a recognised `ApiError`.
    fn parse_error_payload(&self, status: StatusCode, payload: &[u8]) -> SocketError {
        match serde_json::from_slice::<Self::ApiError>(payload) {
            Ok(api_error) => self.parse_api_error(status, api_error),
            Err(error) => {
                debug!(%status, %error, "error payload is not a recognised api error");
                SocketError::HttpResponse(status, String::from_utf8_lossy(payload).into_owned())
            }
        }
    }
}

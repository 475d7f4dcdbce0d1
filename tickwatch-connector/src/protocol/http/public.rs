use tickwatch_model::error::SocketError;

use super::{builder::HttpRequestBuilder, rest::RestPath};

/// [`HttpRequestBuilder`] that builds a non-authenticated Http request with no headers.
#[derive(Debug, Copy, Clone, Default)]
pub struct PublicNoHeaders;

impl HttpRequestBuilder for PublicNoHeaders {
    fn build(&self, _: &RestPath, builder: reqwest::RequestBuilder) -> Result<reqwest::Request, SocketError> {
        builder.build().map_err(SocketError::from)
    }
}

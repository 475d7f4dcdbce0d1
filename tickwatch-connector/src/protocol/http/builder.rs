use tickwatch_model::error::SocketError;

use super::rest::RestPath;

/// [`reqwest::Request`] build strategy for the API being interacted with.
///
/// An API that requires no authentication may just add mandatory `reqwest` headers to the
/// [`reqwest::RequestBuilder`] before building.
pub trait HttpRequestBuilder {
    /// Use the [`RestPath`] being requested and a [`reqwest::RequestBuilder`] that already carries
    /// the method and fully joined url to construct a [`reqwest::Request`] ready for executing.
    fn build(&self, path: &RestPath, builder: reqwest::RequestBuilder) -> Result<reqwest::Request, SocketError>;
}

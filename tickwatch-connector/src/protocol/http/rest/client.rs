use std::{borrow::Cow, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use tickwatch_model::error::SocketError;
use tracing::{debug, trace};
use url::Url;

use super::{HttpTransport, RestPath};
use crate::protocol::http::{builder::HttpRequestBuilder, parser::HttpParser};

pub const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configurable REST client capable of executing public or signed HTTP GET requests against
/// a fixed base url.
///
/// `Strategy` builds the final [`reqwest::Request`] (eg/ adding headers), `Parser` converts
/// non-success responses into a [`SocketError`].
#[derive(Debug, Clone)]
pub struct RestClient<Strategy, Parser> {
    /// HTTP [`reqwest::Client`] for executing signed [`reqwest::Request`]s.
    pub http_client: reqwest::Client,

    /// Base Url of the API being interacted with, eg/ `https://api.binance.com/api/v3`.
    pub base_url: Cow<'static, str>,

    /// [`HttpRequestBuilder`] strategy for building [`reqwest::Request`]s.
    pub strategy: Strategy,

    /// [`HttpParser`] that interprets error responses from the API.
    pub parser: Parser,
}

impl<Strategy, Parser> RestClient<Strategy, Parser> {
    /// Construct a new [`Self`] using the provided configuration and a default
    /// [`reqwest::Client`] with no request timeout.
    pub fn new<BaseUrl>(base_url: BaseUrl, strategy: Strategy, parser: Parser) -> Self
    where
        BaseUrl: Into<Cow<'static, str>>,
    {
        Self::with_http_client(base_url, reqwest::Client::new(), strategy, parser)
    }

    /// Construct a new [`Self`] whose requests fail with [`SocketError::HttpTimeout`] once
    /// `timeout` has elapsed.
    pub fn with_timeout<BaseUrl>(base_url: BaseUrl, strategy: Strategy, parser: Parser, timeout: Duration) -> Result<Self, SocketError>
    where
        BaseUrl: Into<Cow<'static, str>>,
    {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::with_http_client(base_url, http_client, strategy, parser))
    }

    /// Construct a new [`Self`] whose requests time out after [`DEFAULT_HTTP_REQUEST_TIMEOUT`].
    pub fn with_default_timeout<BaseUrl>(base_url: BaseUrl, strategy: Strategy, parser: Parser) -> Result<Self, SocketError>
    where
        BaseUrl: Into<Cow<'static, str>>,
    {
        Self::with_timeout(base_url, strategy, parser, DEFAULT_HTTP_REQUEST_TIMEOUT)
    }

    /// Construct a new [`Self`] around a caller configured [`reqwest::Client`].
    pub fn with_http_client<BaseUrl>(base_url: BaseUrl, http_client: reqwest::Client, strategy: Strategy, parser: Parser) -> Self
    where
        BaseUrl: Into<Cow<'static, str>>,
    {
        Self {
            http_client,
            base_url: base_url.into(),
            strategy,
            parser,
        }
    }

    /// Join the base url with the [`RestPath`], escaping every path segment, and attach the
    /// optional query string.
    pub fn url(&self, path: &RestPath, query: Option<&str>) -> Result<Url, SocketError> {
        let mut url = Url::parse(&self.base_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SocketError::UrlCannotBeABase(self.base_url.to_string()))?;

            segments
                .pop_if_empty()
                .extend(path.base().split('/').filter(|segment| !segment.is_empty()))
                .extend(path.segments());
        }
        url.set_query(query.filter(|query| !query.is_empty()));

        Ok(url)
    }
}

impl<Strategy, Parser> RestClient<Strategy, Parser>
where
    Strategy: HttpRequestBuilder,
    Parser: HttpParser,
{
    /// Execute a GET request for the [`RestPath`], returning the body of a successful response.
    pub async fn execute(&self, path: &RestPath, query: Option<&str>) -> Result<Bytes, SocketError> {
        let url = self.url(path, query)?;
        trace!(%url, "sending HTTP request");

        let builder = self.http_client.request(Method::GET, url);
        let request = self.strategy.build(path, builder)?;

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let payload = response.bytes().await?;

        debug!(%path, %status, bytes = payload.len(), "received HTTP response");
        trace!(payload = %String::from_utf8_lossy(&payload), "HTTP response payload");

        if status.is_success() {
            Ok(payload)
        } else {
            Err(self.parser.parse_error_payload(status, &payload))
        }
    }
}

#[async_trait]
impl<Strategy, Parser> HttpTransport for RestClient<Strategy, Parser>
where
    Strategy: HttpRequestBuilder + Send + Sync,
    Parser: HttpParser + Send + Sync,
{
    async fn get(&self, path: &RestPath, query: Option<&str>) -> Result<Bytes, SocketError> {
        self.execute(path, query).await
    }
}

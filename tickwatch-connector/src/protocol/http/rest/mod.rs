use std::{
    borrow::Cow,
    fmt::{self, Display},
    sync::Arc,
};

use async_trait::async_trait;
use bytes::Bytes;
use tickwatch_model::error::SocketError;

pub mod client;

/// Relative path of a REST resource.
///
/// `base` is a static, already url safe path such as `"ticker/24hr"`. Extra `segments` are
/// caller supplied values (eg/ a symbol) and are percent-escaped individually when the
/// [`RestClient`](client::RestClient) joins them onto its base url, so a segment containing `/`,
/// `?` or `#` can never change the shape of the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestPath {
    base: Cow<'static, str>,
    segments: Vec<String>,
}

impl RestPath {
    pub fn new<P>(base: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self {
            base: base.into(),
            segments: Vec::new(),
        }
    }

    /// Append a single path segment, escaped at request time.
    pub fn segment<S>(mut self, segment: S) -> Self
    where
        S: Into<String>,
    {
        self.segments.push(segment.into());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// Unescaped, for logging only.
impl Display for RestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// GET capability of an HTTP collaborator.
///
/// Implementors own the base url, authentication and status handling: a successful call yields
/// the raw response body, anything else (network failure, non-2xx status) a [`SocketError`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, path: &RestPath, query: Option<&str>) -> Result<Bytes, SocketError>;
}

#[async_trait]
impl<T> HttpTransport for Arc<T>
where
    T: HttpTransport + ?Sized,
{
    async fn get(&self, path: &RestPath, query: Option<&str>) -> Result<Bytes, SocketError> {
        (**self).get(path, query).await
    }
}

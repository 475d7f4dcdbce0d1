use reqwest::Error;
use thiserror::Error;

/// Failures raised by the HTTP collaborator while performing a request.
#[derive(Error, Debug)]
pub enum SocketError {
    #[error("error parsing Url: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Url cannot be used as a base for relative paths: {0}")]
    UrlCannotBeABase(String),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out")]
    HttpTimeout(reqwest::Error),

    /// REST http response error
    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(reqwest::StatusCode, String),
}

impl From<reqwest::Error> for SocketError {
    fn from(error: Error) -> Self {
        match error {
            error if error.is_timeout() => SocketError::HttpTimeout(error),
            error => SocketError::Http(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_error_http_response_display() {
        let error = SocketError::HttpResponse(reqwest::StatusCode::BAD_REQUEST, "Invalid symbol.".to_owned());
        assert_eq!(error.to_string(), "HTTP response (status=400 Bad Request) error: Invalid symbol.");
    }

    #[test]
    fn test_socket_error_from_url_parse() {
        let error = SocketError::from(url::Url::parse("not a url").unwrap_err());
        assert!(matches!(error, SocketError::UrlParse(_)));
    }
}

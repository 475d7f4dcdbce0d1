/// Failures surfaced by the exchange specific fetchers.
pub mod error;

/// Exchange specific REST bindings, eg/ Binance 24hr ticker statistics.
pub mod exchange;

/// HTTP collaborator used by the exchange bindings: path building, request strategies, error
/// parsing and a `reqwest` backed [`RestClient`](protocol::http::rest::client::RestClient).
pub mod protocol;

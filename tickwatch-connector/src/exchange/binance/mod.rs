use std::fmt::Debug;

use reqwest::StatusCode;
use serde::Deserialize;
use tickwatch_model::error::SocketError;

use crate::protocol::http::{parser::HttpParser, public::PublicNoHeaders, rest::client::RestClient};

use self::ticker::TickerSchema;

pub mod ticker;

pub const REST_BASE_URL_BINANCE_SPOT: &str = "https://api.binance.com";
pub const REST_BASE_URL_BINANCE_TESTNET: &str = "https://testnet.binance.vision";

/// [`RestClient`] configured for Binance public market data endpoints.
pub type BinanceRestClient = RestClient<PublicNoHeaders, BinanceParser>;

/// Binance deployment to talk to.
pub trait BinanceServer: Default + Debug + Clone + Send {
    fn rest_url() -> &'static str;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BinanceServerSpot;

impl BinanceServer for BinanceServerSpot {
    fn rest_url() -> &'static str {
        REST_BASE_URL_BINANCE_SPOT
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BinanceServerTestnet;

impl BinanceServer for BinanceServerTestnet {
    fn rest_url() -> &'static str {
        REST_BASE_URL_BINANCE_TESTNET
    }
}

/// Base url of a `Server` deployment for the API revision used by `Schema`,
/// eg/ `https://api.binance.com/api/v3`.
pub fn rest_base_url<Server, Schema>() -> String
where
    Server: BinanceServer,
    Schema: TickerSchema,
{
    format!("{}/{}", Server::rest_url(), Schema::API_PREFIX)
}

/// Construct a [`BinanceRestClient`] for the `Server` deployment and `Schema` API revision.
pub fn rest_client<Server, Schema>() -> BinanceRestClient
where
    Server: BinanceServer,
    Schema: TickerSchema,
{
    RestClient::new(rest_base_url::<Server, Schema>(), PublicNoHeaders, BinanceParser)
}

/// Binance error body, eg/ `{"code":-1121,"msg":"Invalid symbol."}`.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct BinanceApiError {
    pub code: i32,
    pub msg: String,
}

#[derive(Debug, Copy, Clone, Default)]
pub struct BinanceParser;

impl HttpParser for BinanceParser {
    type ApiError = BinanceApiError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> SocketError {
        SocketError::HttpResponse(status, format!("{} (code {})", api_error.msg, api_error.code))
    }
}

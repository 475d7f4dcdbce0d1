use std::{fmt::Debug, marker::PhantomData};

use serde::{de::DeserializeOwned, Serialize};
use tickwatch_model::{
    instruments::Symbol,
    ticker::{LegacyTick, Tick},
};
use tracing::{debug, error};

use crate::{
    error::TickerError,
    protocol::http::rest::{HttpTransport, RestPath},
};

use super::{rest_client, BinanceRestClient, BinanceServer};

/// Relative path of the 24 hour ticker statistics endpoint.
pub const TICKER_24HR_PATH: &str = "ticker/24hr";

/// Revision of the 24hr ticker wire format.
///
/// Each revision lives under its own API prefix and decodes into its own record type, the two
/// field sets are never merged.
pub trait TickerSchema: Debug + Copy + Default + Send + Sync + 'static {
    /// Path prefix appended to the server url, eg/ `api/v3`.
    const API_PREFIX: &'static str;

    type Tick: DeserializeOwned + Serialize + Debug + Send;
}

/// `/api/v1`: every numeric field carried in a string, no symbol. See [`LegacyTick`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct V1;

impl TickerSchema for V1 {
    const API_PREFIX: &'static str = "api/v1";
    type Tick = LegacyTick;
}

/// `/api/v3`: native numeric timestamps and trade range, with symbol and quantities. See [`Tick`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct V3;

impl TickerSchema for V3 {
    const API_PREFIX: &'static str = "api/v3";
    type Tick = Tick;
}

/// Fetches Binance 24 hour ticker statistics through an [`HttpTransport`].
///
/// Holds no state besides the transport, every call is a single independent GET. Safe to share
/// between tasks whenever the transport is.
///
/// ```ignore
/// let fetcher = TickerFetcher::<V3, _>::binance::<BinanceServerSpot>();
/// let tick = fetcher.ticker("ETHBTC").await?;
/// ```
#[derive(Debug, Clone)]
pub struct TickerFetcher<Schema, Transport> {
    transport: Transport,
    schema: PhantomData<Schema>,
}

impl<Schema> TickerFetcher<Schema, BinanceRestClient>
where
    Schema: TickerSchema,
{
    /// Construct a [`TickerFetcher`] backed by a public [`BinanceRestClient`] for `Server`.
    pub fn binance<Server>() -> Self
    where
        Server: BinanceServer,
    {
        Self::new(rest_client::<Server, Schema>())
    }
}

impl<Schema, Transport> TickerFetcher<Schema, Transport>
where
    Schema: TickerSchema,
    Transport: HttpTransport,
{
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            schema: PhantomData,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Fetch statistics for every symbol, in the order the exchange returned them.
    pub async fn tickers(&self) -> Result<Vec<Schema::Tick>, TickerError> {
        const OPERATION: &str = "tickers";

        let path = RestPath::new(TICKER_24HR_PATH);
        let payload = self
            .transport
            .get(&path, None)
            .await
            .map_err(|source| TickerError::Transport { operation: OPERATION, source })?;

        let ticks = decode::<Vec<Schema::Tick>>(OPERATION, &payload)?;
        debug!(api = Schema::API_PREFIX, count = ticks.len(), "fetched tickers");

        Ok(ticks)
    }

    /// Fetch statistics for a single `symbol`, eg/ "ETHBTC".
    ///
    /// The symbol becomes one escaped path segment of `ticker/24hr/<symbol>`. An empty answer is
    /// reported as [`TickerError::NotFound`].
    pub async fn ticker(&self, symbol: &str) -> Result<Schema::Tick, TickerError> {
        const OPERATION: &str = "ticker";

        // "." and ".." are dropped by url normalisation, leaving the all tickers path
        if matches!(symbol, "" | "." | "..") {
            return Err(TickerError::InvalidSymbol {
                operation: OPERATION,
                symbol: symbol.to_owned(),
            });
        }

        let path = RestPath::new(TICKER_24HR_PATH).segment(symbol);
        let payload = self
            .transport
            .get(&path, None)
            .await
            .map_err(|source| TickerError::Transport { operation: OPERATION, source })?;

        let tick = decode_one_or_many::<Schema::Tick>(OPERATION, &payload)?
            .into_iter()
            .next()
            .ok_or_else(|| TickerError::NotFound {
                operation: OPERATION,
                symbol: Symbol::new(symbol),
            })?;
        debug!(api = Schema::API_PREFIX, %symbol, "fetched ticker");

        Ok(tick)
    }
}

fn decode<T>(operation: &'static str, payload: &[u8]) -> Result<T, TickerError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice::<T>(payload).map_err(|source| {
        error!(
            operation,
            error = %source,
            payload = %String::from_utf8_lossy(payload),
            "cannot deserialize ticker response"
        );
        TickerError::Decode { operation, source }
    })
}

/// Single symbol requests are answered with either a one element array or a bare object.
fn decode_one_or_many<T>(operation: &'static str, payload: &[u8]) -> Result<Vec<T>, TickerError>
where
    T: DeserializeOwned,
{
    let is_object = payload
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|byte| *byte == b'{');

    if is_object {
        decode::<T>(operation, payload).map(|tick| vec![tick])
    } else {
        decode::<Vec<T>>(operation, payload)
    }
}

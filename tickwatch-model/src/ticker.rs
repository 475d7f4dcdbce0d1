use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{deserialization, instruments::Symbol};

pub type Ticks = Vec<Tick>;
pub type LegacyTicks = Vec<LegacyTick>;

/// Binance 24 hour rolling window statistics for one trading pair, `/api/v3/ticker/24hr`.
///
/// Decimals arrive as JSON strings, timestamps and the trade range as native JSON numbers.
///
/// ### Raw Payload Examples
/// See docs: <https://binance-docs.github.io/apidocs/spot/en/#24hr-ticker-price-change-statistics>
/// ```json
/// {
///     "symbol": "ETHBTC",
///     "priceChange": "0.00085500",
///     "priceChangePercent": "1.607",
///     "weightedAvgPrice": "0.05378237",
///     "prevClosePrice": "0.05319900",
///     "lastPrice": "0.05405400",
///     "lastQty": "0.18950000",
///     "bidPrice": "0.05405300",
///     "bidQty": "12.65830000",
///     "askPrice": "0.05405400",
///     "askQty": "4.38760000",
///     "openPrice": "0.05319900",
///     "highPrice": "0.05445000",
///     "lowPrice": "0.05300000",
///     "volume": "46261.11920000",
///     "quoteVolume": "2488.04561245",
///     "openTime": 1499783499040,
///     "closeTime": 1499869899040,
///     "firstId": 28385,
///     "lastId": 28460,
///     "count": 76
/// }
/// ```
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub symbol: Symbol,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub price_change: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub price_change_percent: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub weighted_avg_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub prev_close_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub last_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub last_qty: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub bid_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub bid_qty: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub ask_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub ask_qty: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub open_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub high_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub low_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub volume: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub quote_volume: Decimal,
    pub open_time: u64,
    pub close_time: u64,
    /// Binance reports `-1` when no trade happened inside the window.
    pub first_id: i64,
    pub last_id: i64,
    pub count: u64,
}

impl Tick {
    pub fn open_time_utc(&self) -> DateTime<Utc> {
        deserialization::datetime_utc_from_epoch_ms(self.open_time)
    }

    pub fn close_time_utc(&self) -> DateTime<Utc> {
        deserialization::datetime_utc_from_epoch_ms(self.close_time)
    }

    pub fn spread(&self) -> Decimal {
        self.ask_price - self.bid_price
    }

    pub fn trade_count(&self) -> u64 {
        self.count
    }
}

/// Binance 24 hour statistics as served by the retired `/api/v1/ticker/24hr` revision.
///
/// Every numeric field, timestamps and trade ids included, is carried in a JSON string and there
/// is no symbol. The first trade id key keeps its historical `fristId` spelling on the wire,
/// `firstId` is accepted when decoding.
///
/// ### Raw Payload Examples
/// ```json
/// {
///     "priceChange": "-94.99999800",
///     "priceChangePercent": "-95.960",
///     "weightedAvgPrice": "0.29628482",
///     "prevClosePrice": "0.10002000",
///     "lastPrice": "4.00000200",
///     "bidPrice": "4.00000000",
///     "askPrice": "4.00000200",
///     "openPrice": "99.00000000",
///     "highPrice": "100.00000000",
///     "lowPrice": "0.10000000",
///     "volume": "8913.30000000",
///     "openTime": "1499783499040",
///     "closeTime": "1499869899040",
///     "fristId": "28385",
///     "lastId": "28460",
///     "count": "76"
/// }
/// ```
#[derive(Clone, PartialEq, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTick {
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub price_change: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub price_change_percent: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub weighted_avg_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub prev_close_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub last_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub bid_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub ask_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub open_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub high_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub low_price: Decimal,
    #[serde(deserialize_with = "deserialization::de_decimal_str")]
    pub volume: Decimal,
    #[serde(deserialize_with = "deserialization::de_str", serialize_with = "deserialization::se_str")]
    pub open_time: u64,
    #[serde(deserialize_with = "deserialization::de_str", serialize_with = "deserialization::se_str")]
    pub close_time: u64,
    #[serde(
        rename = "fristId",
        alias = "firstId",
        deserialize_with = "deserialization::de_str",
        serialize_with = "deserialization::se_str"
    )]
    pub first_id: i64,
    #[serde(deserialize_with = "deserialization::de_str", serialize_with = "deserialization::se_str")]
    pub last_id: i64,
    #[serde(deserialize_with = "deserialization::de_str", serialize_with = "deserialization::se_str")]
    pub count: u64,
}

impl LegacyTick {
    pub fn open_time_utc(&self) -> DateTime<Utc> {
        deserialization::datetime_utc_from_epoch_ms(self.open_time)
    }

    pub fn close_time_utc(&self) -> DateTime<Utc> {
        deserialization::datetime_utc_from_epoch_ms(self.close_time)
    }

    pub fn spread(&self) -> Decimal {
        self.ask_price - self.bid_price
    }

    pub fn trade_count(&self) -> u64 {
        self.count
    }
}

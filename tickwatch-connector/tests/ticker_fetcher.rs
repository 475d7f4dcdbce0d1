use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use tickwatch_connector::{
    error::TickerError,
    exchange::binance::ticker::{TickerFetcher, V1, V3},
    protocol::http::rest::{HttpTransport, RestPath},
};
use tickwatch_model::{
    error::SocketError,
    ticker::{LegacyTicks, Ticks},
};

const ETHBTC: &str = r#"{
    "symbol": "ETHBTC", "priceChange": "0.00085500", "priceChangePercent": "1.607",
    "weightedAvgPrice": "0.05378237", "prevClosePrice": "0.05319900", "lastPrice": "0.05405400",
    "lastQty": "0.18950000", "bidPrice": "0.05405300", "bidQty": "12.65830000",
    "askPrice": "0.05405400", "askQty": "4.38760000", "openPrice": "0.05319900",
    "highPrice": "0.05445000", "lowPrice": "0.05300000", "volume": "46261.11920000",
    "quoteVolume": "2488.04561245", "openTime": 1499783499040, "closeTime": 1499869899040,
    "firstId": 28385, "lastId": 28460, "count": 76
}"#;

const LEGACY: &str = r#"{
    "priceChange": "-94.99999800", "priceChangePercent": "-95.960",
    "weightedAvgPrice": "0.29628482", "prevClosePrice": "0.10002000", "lastPrice": "4.00000200",
    "bidPrice": "4.00000000", "askPrice": "4.00000200", "openPrice": "99.00000000",
    "highPrice": "100.00000000", "lowPrice": "0.10000000", "volume": "8913.30000000",
    "openTime": "1499783499040", "closeTime": "1499869899040",
    "fristId": "28385", "lastId": "28460", "count": "76"
}"#;

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(StatusCode, &'static str),
}

/// Canned [`HttpTransport`] that records every requested path.
#[derive(Debug)]
struct MockTransport {
    reply: Reply,
    requests: Mutex<Vec<(RestPath, Option<String>)>>,
}

impl MockTransport {
    fn body<S: Into<String>>(body: S) -> Self {
        Self {
            reply: Reply::Body(body.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn status(status: StatusCode, msg: &'static str) -> Self {
        Self {
            reply: Reply::Status(status, msg),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<(RestPath, Option<String>)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, path: &RestPath, query: Option<&str>) -> Result<Bytes, SocketError> {
        self.requests.lock().push((path.clone(), query.map(str::to_owned)));

        match &self.reply {
            Reply::Body(body) => Ok(Bytes::from(body.clone())),
            Reply::Status(status, msg) => Err(SocketError::HttpResponse(*status, msg.to_string())),
        }
    }
}

fn tick_with_symbol(symbol: &str) -> String {
    ETHBTC.replace("ETHBTC", symbol)
}

#[tokio::test]
async fn test_tickers_preserves_wire_order() {
    let symbols = ["ETHBTC", "LTCBTC", "BNBBTC", "NEOBTC"];
    let body = format!(
        "[{}]",
        symbols.iter().map(|symbol| tick_with_symbol(symbol)).collect::<Vec<_>>().join(",")
    );
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body(body));

    let ticks: Ticks = fetcher.tickers().await.unwrap();

    assert_eq!(ticks.len(), symbols.len());
    for (tick, symbol) in ticks.iter().zip(symbols) {
        assert_eq!(tick.symbol, symbol);
    }
    assert_eq!(fetcher.transport().requests(), vec![(RestPath::new("ticker/24hr"), None)]);
}

#[tokio::test]
async fn test_tickers_empty_array() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body("[]"));
    assert!(fetcher.tickers().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_tickers_decode_failures() {
    struct TestCase {
        input: String,
    }

    let tests = vec![
        TestCase {
            // TC0: truncated body
            input: format!("[{}", ETHBTC),
        },
        TestCase {
            // TC1: non-numeric string in a decimal field
            input: format!("[{}]", ETHBTC.replace(r#""0.00085500""#, r#""n/a""#)),
        },
        TestCase {
            // TC2: non-integer trade count
            input: format!("[{}]", ETHBTC.replace(r#""count": 76"#, r#""count": 7.6"#)),
        },
        TestCase {
            // TC3: one bad element spoils the whole response
            input: format!("[{},{{}}]", ETHBTC),
        },
    ];

    for (index, test) in tests.into_iter().enumerate() {
        let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body(test.input));
        match fetcher.tickers().await {
            Err(TickerError::Decode { operation, .. }) => assert_eq!(operation, "tickers", "TC{} failed", index),
            other => panic!("TC{index} failed, expected decode error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_tickers_transport_failure() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::status(StatusCode::SERVICE_UNAVAILABLE, "maintenance"));

    match fetcher.tickers().await {
        Err(TickerError::Transport { operation, source }) => {
            assert_eq!(operation, "tickers");
            assert!(matches!(source, SocketError::HttpResponse(status, _) if status == StatusCode::SERVICE_UNAVAILABLE));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ticker_single_symbol() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body(format!("[{}]", ETHBTC)));

    let tick = fetcher.ticker("ETHBTC").await.unwrap();

    assert_eq!(tick.symbol, "ETHBTC");
    assert_eq!(tick.price_change, dec!(0.000855));
    assert_eq!(tick.count, 76);
    assert_eq!(
        fetcher.transport().requests(),
        vec![(RestPath::new("ticker/24hr").segment("ETHBTC"), None)]
    );
}

#[tokio::test]
async fn test_ticker_bare_object_response() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body(ETHBTC));
    assert_eq!(fetcher.ticker("ETHBTC").await.unwrap().symbol, "ETHBTC");
}

#[tokio::test]
async fn test_ticker_takes_first_of_many() {
    let body = format!("[{},{}]", ETHBTC, tick_with_symbol("LTCBTC"));
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body(body));
    assert_eq!(fetcher.ticker("ETHBTC").await.unwrap().symbol, "ETHBTC");
}

#[tokio::test]
async fn test_ticker_empty_array_is_not_found() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body("[]"));

    let error = fetcher.ticker("ETHBTC").await.unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(error.operation(), "ticker");
    assert_eq!(error.to_string(), "ticker: no ticker returned for symbol ETHBTC");
}

#[tokio::test]
async fn test_ticker_invalid_symbol_sends_nothing() {
    for symbol in ["", ".", ".."] {
        let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body("[]"));

        let error = fetcher.ticker(symbol).await.unwrap_err();

        assert!(matches!(error, TickerError::InvalidSymbol { .. }), "symbol {symbol:?}");
        assert!(fetcher.transport().requests().is_empty());
    }
}

#[tokio::test]
async fn test_ticker_reserved_characters_stay_one_segment() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::body("[]"));

    let _ = fetcher.ticker("ETH/BTC").await;

    let requests = fetcher.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0.segments(), ["ETH/BTC".to_owned()]);
}

#[tokio::test]
async fn test_ticker_transport_failure_skips_decode() {
    let fetcher = TickerFetcher::<V3, _>::new(MockTransport::status(StatusCode::BAD_REQUEST, "Invalid symbol."));

    let error = fetcher.ticker("NOPE").await.unwrap_err();

    assert!(matches!(error, TickerError::Transport { operation: "ticker", .. }));
}

#[tokio::test]
async fn test_legacy_schema() {
    let fetcher = TickerFetcher::<V1, _>::new(MockTransport::body(format!("[{},{}]", LEGACY, LEGACY)));

    let ticks: LegacyTicks = fetcher.tickers().await.unwrap();

    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].last_price, dec!(4.000002));
    assert_eq!(ticks[0].first_id, 28385);

    // v3 payloads do not satisfy the v1 schema
    let fetcher = TickerFetcher::<V1, _>::new(MockTransport::body(format!("[{}]", ETHBTC)));
    assert!(matches!(fetcher.tickers().await, Err(TickerError::Decode { .. })));
}

#[tokio::test]
async fn test_fetcher_shared_between_tasks() {
    let fetcher = Arc::new(TickerFetcher::<V3, _>::new(Arc::new(MockTransport::body(format!("[{}]", ETHBTC)))));

    let handles = (0..4)
        .map(|_| {
            let fetcher = Arc::clone(&fetcher);
            tokio::spawn(async move { fetcher.ticker("ETHBTC").await })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().symbol, "ETHBTC");
    }
    assert_eq!(fetcher.transport().requests().len(), 4);
}

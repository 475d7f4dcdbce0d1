use tickwatch_connector::exchange::binance::{
    ticker::{TickerFetcher, V3},
    BinanceServerSpot,
};
use tickwatch_model::ticker::{Tick, Ticks};
use tracing::info;

const DEFAULT_SYMBOL: &str = "ETHBTC";

// Initialise a DEBUG `Subscriber` for `Tracing` Json logs and install it as the global default.
fn init_logging() {
    tracing_subscriber::fmt()
        // Filter messages based on the `RUST_LOG` env var, DEBUG otherwise
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::DEBUG.into())
                .from_env_lossy(),
        )
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SYMBOL.to_owned());
    let fetcher = TickerFetcher::<V3, _>::binance::<BinanceServerSpot>();

    let tick: Tick = fetcher.ticker(&symbol).await?;
    info!(
        symbol = %tick.symbol,
        last_price = %tick.last_price,
        price_change_percent = %tick.price_change_percent,
        spread = %tick.spread(),
        volume = %tick.volume,
        trades = tick.trade_count(),
        close_time = %tick.close_time_utc(),
        "Received ticker"
    );

    let ticks: Ticks = fetcher.tickers().await?;
    info!(count = ticks.len(), "Received tickers");

    Ok(())
}

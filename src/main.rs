use serde::Serialize;
use stockscan::config::Config;
use stockscan::sources::TradierClient;
use stockscan::{Analyzer, Quote, Report};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: stockscan <TICKER> [--json]";

/// JSON document printed with `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    symbol: &'a str,
    quote: &'a Quote,
    candle_count: usize,
    report: &'a Report,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockscan=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut ticker = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if ticker.is_none() => ticker = Some(arg),
            _ => anyhow::bail!(USAGE),
        }
    }
    let ticker = ticker.ok_or_else(|| anyhow::anyhow!(USAGE))?;

    let config = Config::from_env();
    let client = TradierClient::new(&config)?;

    let data = client.fetch_stock_data(&ticker).await?;
    info!("Analyzing {} ({} candles)", data.symbol, data.candles.len());

    let report = Analyzer::default().analyze(&data.candles)?;

    if json {
        let output = JsonOutput {
            symbol: &data.symbol,
            quote: &data.quote,
            candle_count: data.candles.len(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&data.symbol, &data.quote, &report);
    }

    Ok(())
}

fn print_report(symbol: &str, quote: &Quote, report: &Report) {
    let s = &report.snapshot;
    let rec = &report.recommendation;

    println!(
        "{}  ${:.2}  {:+.2} ({:+.2}%)",
        symbol, quote.last, quote.change, quote.change_percent
    );
    println!();
    println!(
        "{} {}  (score {:+}, confidence {})",
        rec.emoji,
        rec.recommendation,
        report.score,
        rec.confidence.label()
    );
    println!("Position size: {}", rec.position_size);
    println!("{}", rec.reason);

    println!();
    println!("Indicators");
    println!("  RSI(14)      {:.1}", s.rsi);
    println!(
        "  MACD         {:.3} / signal {:.3} / hist {:.3}",
        s.macd, s.macd_signal, s.macd_histogram
    );
    println!(
        "  Bollinger    {:.2} / {:.2} / {:.2}  (bandwidth {:.2}%)",
        s.bb_lower,
        s.bb_middle,
        s.bb_upper,
        s.bandwidth()
    );
    println!(
        "  EMA 20/50/200 {:.2} / {:.2} / {:.2}",
        s.ema20, s.ema50, s.ema200
    );
    println!("  SMA(5)       {:.2}", s.sma5);
    println!("  ATR(14)      {:.2}", s.atr);
    println!(
        "  ADX(14)      {:.1}  (+DI {:.1}, -DI {:.1})",
        s.adx, s.di_plus, s.di_minus
    );
    println!("  Stochastic   %K {:.1}  %D {:.1}", s.stoch_k, s.stoch_d);
    println!("  OBV          {:.0}", s.obv);
    println!("  RVOL         {:.2}x", s.rvol);
    println!(
        "  Support {:.2}  Pivot {:.2}  Resistance {:.2}",
        s.support, s.pivots.pivot, s.resistance
    );
    println!("  Patterns     {}", report.pattern_result.pattern_string());

    println!();
    println!("Score breakdown");
    for entry in &report.breakdown {
        println!("  {}", entry);
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings");
        for warning in &report.warnings {
            println!("  {}", warning);
        }
    }

    if !report.suggested_actions.is_empty() {
        println!();
        println!("Suggested actions");
        for action in &report.suggested_actions {
            println!("  {}", action);
        }
    }

    println!();
    println!("Tips");
    for tip in &report.tips {
        println!("  {}", tip);
    }
}

//! Tradier API client for stock quotes and daily history.
//!
//! Supplies the analyzer with an ascending daily candle series. Quote and
//! history requests run concurrently.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::types::{Candle, Quote, StockData};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Tradier answers a single record as an object and several as an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// `/markets/quotes` response.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotesResponse {
    pub quotes: Option<QuotesBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotesBody {
    pub quote: Option<OneOrMany<TradierQuote>>,
}

/// Quote record. Most numeric fields are null outside market hours.
#[derive(Debug, Clone, Deserialize)]
pub struct TradierQuote {
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub quote_type: Option<String>,
    pub last: Option<f64>,
    pub close: Option<f64>,
    pub change: Option<f64>,
    pub change_percentage: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub open: Option<f64>,
    pub prevclose: Option<f64>,
}

/// `/markets/history` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub history: Option<HistoryBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryBody {
    pub day: Option<OneOrMany<HistoryDay>>,
}

/// One daily bar as returned by Tradier.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryDay {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Convert a quote response, rejecting unknown symbols.
pub fn parse_quote(symbol: &str, response: QuotesResponse) -> Result<Quote> {
    let quote = response
        .quotes
        .and_then(|q| q.quote)
        .and_then(|q| q.into_vec().into_iter().next())
        .ok_or_else(|| AppError::NotFound(format!("No data available for {}", symbol)))?;

    if quote.quote_type.as_deref() == Some("null") {
        return Err(AppError::NotFound(format!("Invalid symbol: {}", symbol)));
    }
    let last = match quote.last {
        Some(last) if last != 0.0 => last,
        _ => return Err(AppError::NotFound(format!("Invalid symbol: {}", symbol))),
    };

    Ok(Quote {
        last,
        change: quote.change.unwrap_or(0.0),
        change_percent: quote.change_percentage.unwrap_or(0.0),
        high: quote.high.unwrap_or(last),
        low: quote.low.unwrap_or(last),
        open: quote.open.unwrap_or(last),
        previous_close: quote.prevclose.unwrap_or(last),
    })
}

/// Convert history records into candles sorted by date.
///
/// Each bar is stamped at midnight UTC of its trading date.
pub fn transform_history(symbol: &str, response: HistoryResponse) -> Result<Vec<Candle>> {
    let days = response
        .history
        .and_then(|h| h.day)
        .map(OneOrMany::into_vec)
        .ok_or_else(|| {
            AppError::NotFound(format!("No historical data available for {}", symbol))
        })?;

    let mut candles = days
        .into_iter()
        .map(|day| {
            let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|e| {
                AppError::ExternalApi(format!("Bad history date {:?}: {}", day.date, e))
            })?;
            let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                AppError::ExternalApi(format!("Bad history date {:?}", day.date))
            })?;

            Ok(Candle {
                timestamp: Utc.from_utc_datetime(&midnight).timestamp(),
                open: day.open,
                high: day.high,
                low: day.low,
                close: day.close,
                volume: day.volume,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    candles.sort_by_key(|c| c.timestamp);
    Ok(candles)
}

/// Tradier market-data client.
pub struct TradierClient {
    client: Client,
    base_url: String,
    api_key: String,
    history_days: i64,
}

impl TradierClient {
    /// Create a client from configuration. Fails without an API key.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .tradier_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::Config("TRADIER_API_KEY is not set".to_string()))?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.tradier_base_url.trim_end_matches('/').to_string(),
            api_key,
            history_days: config.history_days,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Tradier {} returned {}: {}", path, status, body);
            return Err(AppError::ExternalApi(format!(
                "{} returned status {}",
                path, status
            )));
        }

        Ok(response.json().await?)
    }

    /// Fetch the latest quote.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        debug!("Fetching quote for {}", symbol);
        let response: QuotesResponse = self
            .get_json(
                "/markets/quotes",
                &[("symbols", symbol.to_string()), ("greeks", "false".to_string())],
            )
            .await?;
        parse_quote(symbol, response)
    }

    /// Fetch daily candles covering the configured number of calendar days.
    pub async fn fetch_candles(&self, symbol: &str) -> Result<Vec<Candle>> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(self.history_days);
        debug!("Fetching candles for {} from {} to {}", symbol, start, end);

        let response: HistoryResponse = self
            .get_json(
                "/markets/history",
                &[
                    ("symbol", symbol.to_string()),
                    ("interval", "daily".to_string()),
                    ("start", start.format("%Y-%m-%d").to_string()),
                    ("end", end.format("%Y-%m-%d").to_string()),
                ],
            )
            .await?;
        transform_history(symbol, response)
    }

    /// Fetch quote and history in parallel.
    pub async fn fetch_stock_data(&self, symbol: &str) -> Result<StockData> {
        let symbol = symbol.trim().to_uppercase();
        let (quote, candles) =
            tokio::try_join!(self.fetch_quote(&symbol), self.fetch_candles(&symbol))?;

        info!("Fetched {} daily candles for {}", candles.len(), symbol);

        Ok(StockData {
            symbol,
            quote,
            candles,
        })
    }
}

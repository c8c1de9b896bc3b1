use serde::{Deserialize, Serialize};

use super::Candle;

/// Latest quote for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub last: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
}

/// Everything fetched for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    /// Upper-cased ticker.
    pub symbol: String,
    pub quote: Quote,
    /// Daily bars, oldest first.
    pub candles: Vec<Candle>,
}

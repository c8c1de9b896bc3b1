//! End-to-end analysis of a daily candle series.

use crate::error::AnalysisError;
use crate::services::signals::indicators::{
    pivot_points, Adx, Atr, BollingerBands, Ema, Indicator, Macd, Obv, Rsi, Rvol, Sma, Stochastic,
};
use crate::services::signals::math::latest;
use crate::services::signals::patterns::detect_patterns;
use crate::services::signals::recommendation::{generate_recommendation, suggested_actions};
use crate::services::signals::scoring::calculate_score;
use crate::services::signals::tips::generate_tips;
use crate::types::{validate_candles, Candle, IndicatorSnapshot, PriceSeries, Report};
use tracing::debug;

/// Minimum history: the 200-day EMA needs 200 bars for its first value.
pub const MIN_CANDLES: usize = 200;

/// Runs validation, indicators, patterns and scoring in one pass.
///
/// Holds only indicator parameters, so one analyzer can serve any number
/// of requests concurrently.
pub struct Analyzer {
    min_candles: usize,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    ema20: Ema,
    ema50: Ema,
    ema200: Ema,
    sma5: Sma,
    atr: Atr,
    adx: Adx,
    stochastic: Stochastic,
    obv: Obv,
    rvol: Rvol,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            min_candles: MIN_CANDLES,
            rsi: Rsi::default(),
            macd: Macd::default(),
            bollinger: BollingerBands::default(),
            ema20: Ema::new(20),
            ema50: Ema::new(50),
            ema200: Ema::new(200),
            sma5: Sma::new(5),
            atr: Atr::default(),
            adx: Adx::default(),
            stochastic: Stochastic::default(),
            obv: Obv,
            rvol: Rvol::default(),
        }
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require more history than the default. Values below the default are
    /// ignored, since the long EMA would have no value.
    pub fn with_min_candles(mut self, min_candles: usize) -> Self {
        self.min_candles = min_candles.max(MIN_CANDLES);
        self
    }

    pub fn min_candles(&self) -> usize {
        self.min_candles
    }

    /// Analyze a candle series, oldest first.
    pub fn analyze(&self, candles: &[Candle]) -> Result<Report, AnalysisError> {
        let snapshot = self.snapshot(candles)?;
        let pattern_result = detect_patterns(candles);
        let card = calculate_score(&snapshot);
        let recommendation = generate_recommendation(&card);
        let suggested_actions = suggested_actions(recommendation.recommendation, &snapshot);
        let tips = generate_tips(&snapshot, &pattern_result);

        debug!(
            "Scored {} candles: {} -> {} ({} warnings, patterns: {})",
            candles.len(),
            card.score,
            recommendation.recommendation,
            card.warnings.len(),
            pattern_result.pattern_string()
        );

        Ok(Report {
            snapshot,
            pattern_result,
            score: card.score,
            breakdown: card.breakdown,
            warnings: card.warnings,
            recommendation,
            suggested_actions,
            tips,
        })
    }

    /// Validate the series and take the latest value of every indicator.
    pub fn snapshot(&self, candles: &[Candle]) -> Result<IndicatorSnapshot, AnalysisError> {
        if candles.len() < self.min_candles {
            return Err(AnalysisError::InsufficientData {
                required: self.min_candles,
                actual: candles.len(),
            });
        }
        validate_candles(candles)?;

        let [.., last] = candles else {
            return Err(AnalysisError::InsufficientData {
                required: self.min_candles,
                actual: 0,
            });
        };

        let prices = PriceSeries::from(candles);
        debug!("Computing indicators over {} candles", prices.len());

        let macd = self.macd.calculate(&prices);
        let bands = self.bollinger.calculate(&prices);
        let adx = self.adx.calculate(&prices);
        let stoch = self.stochastic.calculate(&prices);
        let obv = self.obv.calculate(&prices);
        let pivots = pivot_points(last.high, last.low, last.close);

        let obv_prev = obv
            .len()
            .checked_sub(2)
            .and_then(|i| obv[i])
            .ok_or(AnalysisError::UndefinedIndicator { name: "OBV" })?;

        Ok(IndicatorSnapshot {
            price: last.close,
            rsi: value(self.rsi.name(), &self.rsi.calculate(&prices))?,
            macd: value("MACD", &macd.macd)?,
            macd_signal: value("MACD signal", &macd.signal)?,
            macd_histogram: value("MACD histogram", &macd.histogram)?,
            bb_upper: value("Bollinger upper", &bands.upper)?,
            bb_middle: value("Bollinger middle", &bands.middle)?,
            bb_lower: value("Bollinger lower", &bands.lower)?,
            ema20: value(self.ema20.name(), &self.ema20.calculate(&prices))?,
            ema50: value(self.ema50.name(), &self.ema50.calculate(&prices))?,
            ema200: value(self.ema200.name(), &self.ema200.calculate(&prices))?,
            sma5: value(self.sma5.name(), &self.sma5.calculate(&prices))?,
            atr: value(self.atr.name(), &self.atr.calculate(&prices))?,
            adx: value(self.adx.name(), &adx.adx)?,
            di_plus: value("+DI", &adx.di_plus)?,
            di_minus: value("-DI", &adx.di_minus)?,
            stoch_k: value("Stochastic %K", &stoch.k)?,
            stoch_d: value("Stochastic %D", &stoch.d)?,
            obv: value(self.obv.name(), &obv)?,
            obv_prev,
            rvol: value(self.rvol.name(), &self.rvol.calculate(&prices))?,
            support: pivots.support(),
            resistance: pivots.resistance(),
            pivots,
        })
    }
}

fn value(name: &'static str, series: &[Option<f64>]) -> Result<f64, AnalysisError> {
    latest(series).ok_or(AnalysisError::UndefinedIndicator { name })
}

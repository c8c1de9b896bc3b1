//! Rule-based composite scoring.
//!
//! Nine additive rules run in a fixed order over an [`IndicatorSnapshot`].
//! The order only matters for the breakdown log; the score is the plain sum
//! of the contributions. Ties (price equal to SMA5, flat OBV, equal EMAs,
//! MACD equal to signal) all take the bearish branch.

use crate::types::{IndicatorSnapshot, Mark, ScoreCard, ScoreRule, Warning};

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const SQUEEZE_BANDWIDTH: f64 = 5.0;
pub const ADX_STRONG: f64 = 25.0;
pub const ADX_WEAK: f64 = 20.0;
pub const RVOL_HIGH: f64 = 2.0;
pub const RVOL_LOW: f64 = 0.8;
pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;

/// Score a snapshot, collecting the breakdown and any warnings.
pub fn calculate_score(s: &IndicatorSnapshot) -> ScoreCard {
    let mut card = ScoreCard::default();

    score_rsi(&mut card, s);
    score_macd(&mut card, s);
    score_bollinger(&mut card, s);
    score_sma5(&mut card, s);
    score_adx(&mut card, s);
    score_rvol(&mut card, s);
    score_long_term_trend(&mut card, s);
    score_obv(&mut card, s);
    score_stochastic(&mut card, s);

    card
}

fn score_rsi(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.rsi < RSI_OVERSOLD {
        card.push(ScoreRule::Rsi, Mark::Bullish, 2, format!("RSI Oversold ({:.1})", s.rsi));
    } else if s.rsi > RSI_OVERBOUGHT {
        card.push(ScoreRule::Rsi, Mark::Bearish, -2, format!("RSI Overbought ({:.1})", s.rsi));
    } else {
        card.push(ScoreRule::Rsi, Mark::Neutral, 0, format!("RSI Neutral ({:.1})", s.rsi));
    }
}

// No neutral branch: equal lines score bearish.
fn score_macd(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.is_macd_bullish() {
        card.push(ScoreRule::Macd, Mark::Bullish, 2, "MACD Bullish");
    } else {
        card.push(ScoreRule::Macd, Mark::Bearish, -2, "MACD Bearish");
    }
}

fn score_bollinger(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.price < s.bb_lower {
        card.push(ScoreRule::Bollinger, Mark::Bullish, 2, "Price bounced off Lower BB");
    } else if s.price > s.bb_upper {
        card.push(ScoreRule::Bollinger, Mark::Bearish, -2, "Price rejected at Upper BB");
    } else if s.bandwidth() < SQUEEZE_BANDWIDTH {
        card.warn(Warning::BollingerSqueeze);
        card.push(ScoreRule::Bollinger, Mark::Warning, 0, "Bollinger Squeeze detected");
    } else {
        card.push(ScoreRule::Bollinger, Mark::Neutral, 0, "Price within Bollinger Bands");
    }
}

fn score_sma5(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.is_above_sma5() {
        card.push(ScoreRule::Sma5, Mark::Bullish, 1, "Price ABOVE 5-Day SMA");
    } else {
        card.push(ScoreRule::Sma5, Mark::Bearish, -1, "Price BELOW 5-Day SMA");
    }
}

fn score_adx(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.adx > ADX_STRONG {
        if s.is_above_sma5() {
            card.push(
                ScoreRule::Adx,
                Mark::Bullish,
                2,
                format!("Strong uptrend (ADX={:.1}, Price>SMA)", s.adx),
            );
        } else {
            card.push(
                ScoreRule::Adx,
                Mark::Bearish,
                -2,
                format!("Strong downtrend (ADX={:.1}, Price<SMA)", s.adx),
            );
        }
    } else if s.adx < ADX_WEAK {
        card.warn(Warning::WeakTrend { adx: s.adx });
        card.push(
            ScoreRule::Adx,
            Mark::Warning,
            0,
            format!("Weak trend (ADX={:.1})", s.adx),
        );
    } else {
        card.push(
            ScoreRule::Adx,
            Mark::Neutral,
            0,
            format!("Trend developing (ADX={:.1})", s.adx),
        );
    }
}

// Support is checked before resistance when both are within reach.
fn score_rvol(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.rvol > RVOL_HIGH {
        if s.is_at_support() {
            card.push(
                ScoreRule::Rvol,
                Mark::Bullish,
                2,
                format!("High Volume at Support (RVOL={:.1}x)", s.rvol),
            );
        } else if s.is_at_resistance() {
            card.push(
                ScoreRule::Rvol,
                Mark::Bearish,
                -2,
                format!("High Volume at Resistance (RVOL={:.1}x)", s.rvol),
            );
        } else {
            card.push(
                ScoreRule::Rvol,
                Mark::Neutral,
                0,
                format!("High Volume (RVOL={:.1}x)", s.rvol),
            );
        }
    } else if s.rvol < RVOL_LOW {
        card.warn(Warning::LowVolume { rvol: s.rvol });
        card.push(
            ScoreRule::Rvol,
            Mark::Warning,
            0,
            format!("Low Volume (RVOL={:.1}x)", s.rvol),
        );
    } else {
        card.push(
            ScoreRule::Rvol,
            Mark::Neutral,
            0,
            format!("Normal Volume (RVOL={:.1}x)", s.rvol),
        );
    }
}

fn score_long_term_trend(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.is_golden_cross() {
        card.push(ScoreRule::LongTermTrend, Mark::Bullish, 1, "Long-term Golden Cross");
    } else {
        card.push(ScoreRule::LongTermTrend, Mark::Bearish, -1, "Long-term Death Cross");
    }
}

fn score_obv(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.is_obv_rising() {
        card.push(ScoreRule::Obv, Mark::Bullish, 1, "OBV Increasing");
    } else {
        card.push(ScoreRule::Obv, Mark::Bearish, -1, "OBV Decreasing");
    }
}

// The neutral band leaves no breakdown line.
fn score_stochastic(card: &mut ScoreCard, s: &IndicatorSnapshot) {
    if s.stoch_k < STOCH_OVERSOLD {
        card.push(
            ScoreRule::Stochastic,
            Mark::Bullish,
            1,
            format!("Stoch Oversold (K={:.1})", s.stoch_k),
        );
    } else if s.stoch_k > STOCH_OVERBOUGHT {
        card.push(
            ScoreRule::Stochastic,
            Mark::Bearish,
            -1,
            format!("Stoch Overbought (K={:.1})", s.stoch_k),
        );
    }
}

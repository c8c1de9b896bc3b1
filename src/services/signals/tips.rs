//! Plain-language commentary on a snapshot. No effect on the score.

use crate::types::{IndicatorSnapshot, PatternResult};

/// Trading tips in a fixed order: RSI, Bollinger, MACD, SMA5, ADX, RVOL,
/// long-term cross, then any detected patterns.
///
/// ADX between 20 and 25 and RVOL between 0.8 and 2.0 produce no tip.
pub fn generate_tips(s: &IndicatorSnapshot, patterns: &PatternResult) -> Vec<String> {
    let mut tips = Vec::new();

    if s.rsi > 70.0 {
        tips.push("RSI is Overbought (>70). Watch for a potential pullback or reversal.".to_string());
    } else if s.rsi < 30.0 {
        tips.push("RSI is Oversold (<30). Watch for a potential bounce.".to_string());
    } else {
        tips.push(format!("RSI is Neutral ({:.1}). Trend is steady.", s.rsi));
    }

    if s.price > s.bb_upper {
        tips.push("Price is ABOVE the Upper Bollinger Band. Short-term overextended (Mean Reversion likely).".to_string());
    } else if s.price < s.bb_lower {
        tips.push("Price is BELOW the Lower Bollinger Band. Short-term oversold (Mean Reversion likely).".to_string());
    } else if s.bandwidth() < 5.0 {
        tips.push("Bollinger Bands are tightening (Squeeze). Watch for an explosive breakout.".to_string());
    } else {
        tips.push("Price is within Bollinger Bands. Normal volatility.".to_string());
    }

    if s.is_macd_bullish() {
        tips.push("MACD is Bullish (MACD > Signal). Momentum is positive.".to_string());
    } else {
        tips.push("MACD is Bearish (MACD < Signal). Momentum is negative.".to_string());
    }

    if s.is_above_sma5() {
        tips.push("Price is ABOVE the 5-Day SMA. Short-term trend is UP.".to_string());
    } else {
        tips.push("Price is BELOW the 5-Day SMA. Short-term trend is DOWN.".to_string());
    }

    if s.adx > 25.0 {
        tips.push(format!(
            "ADX is {:.1} (>25). Strong trend detected. Trade with the trend.",
            s.adx
        ));
    } else if s.adx < 20.0 {
        tips.push(format!(
            "ADX is {:.1} (<20). Weak trend / Choppy market. Caution on breakouts.",
            s.adx
        ));
    }

    if s.rvol > 2.0 {
        tips.push(format!(
            "High Relative Volume ({:.1}x). Strong conviction in today's move.",
            s.rvol
        ));
    } else if s.rvol < 0.8 {
        tips.push(format!(
            "Low Relative Volume ({:.1}x). Move may lack conviction.",
            s.rvol
        ));
    }

    if s.is_golden_cross() {
        tips.push("Long-term trend is BULLISH (Golden Cross). Consider waiting for pullback.".to_string());
    } else {
        tips.push("Long-term trend is BEARISH (Death Cross). Trade with caution.".to_string());
    }

    if !patterns.is_empty() {
        tips.push(format!("Pattern Detected: {}", patterns.pattern_string()));
        for desc in &patterns.descriptions {
            tips.push(format!("  → {}: {}", desc.name, desc.description));
        }
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::scoring::tests::{bullish_snapshot, neutral_snapshot};
    use crate::types::CandlePattern;

    #[test]
    fn test_neutral_tips_skip_dead_zones() {
        let tips = generate_tips(&neutral_snapshot(), &PatternResult::default());
        assert_eq!(
            tips,
            vec![
                "RSI is Neutral (50.0). Trend is steady.",
                "Price is within Bollinger Bands. Normal volatility.",
                "MACD is Bearish (MACD < Signal). Momentum is negative.",
                "Price is BELOW the 5-Day SMA. Short-term trend is DOWN.",
                "Long-term trend is BEARISH (Death Cross). Trade with caution.",
            ]
        );
    }

    #[test]
    fn test_bullish_tips() {
        let tips = generate_tips(&bullish_snapshot(), &PatternResult::default());
        assert_eq!(tips.len(), 7);
        assert_eq!(tips[0], "RSI is Oversold (<30). Watch for a potential bounce.");
        assert!(tips[1].starts_with("Price is BELOW the Lower Bollinger Band"));
        assert_eq!(
            tips[4],
            "ADX is 30.0 (>25). Strong trend detected. Trade with the trend."
        );
        assert_eq!(
            tips[5],
            "High Relative Volume (2.5x). Strong conviction in today's move."
        );
        assert!(tips[6].contains("Golden Cross"));
    }

    #[test]
    fn test_weak_adx_low_volume_and_squeeze_tips() {
        let snapshot = IndicatorSnapshot {
            adx: 10.0,
            rvol: 0.3,
            bb_upper: 101.0,
            bb_lower: 99.0,
            ..neutral_snapshot()
        };
        let tips = generate_tips(&snapshot, &PatternResult::default());
        assert!(tips.contains(&"Bollinger Bands are tightening (Squeeze). Watch for an explosive breakout.".to_string()));
        assert!(tips.contains(&"ADX is 10.0 (<20). Weak trend / Choppy market. Caution on breakouts.".to_string()));
        assert!(tips.contains(&"Low Relative Volume (0.3x). Move may lack conviction.".to_string()));
    }

    #[test]
    fn test_pattern_tips_listed_last() {
        let mut patterns = PatternResult::default();
        patterns.push(CandlePattern::Doji);
        patterns.push(CandlePattern::Hammer);

        let tips = generate_tips(&neutral_snapshot(), &patterns);
        let n = tips.len();
        assert_eq!(tips[n - 3], "Pattern Detected: Doji, Hammer");
        assert!(tips[n - 2].starts_with("  → DOJI: Indecision candle."));
        assert!(tips[n - 1].starts_with("  → HAMMER: Bullish reversal signal."));
    }
}

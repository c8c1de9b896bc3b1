//! Candlestick pattern detection on the two most recent bars.
//!
//! Each detector is evaluated independently, so one bar can match several
//! patterns at once (a flat bar is both a Doji and a Hammer).

use crate::types::{Candle, CandlePattern, PatternResult};

/// Body no larger than 10% of the bar's range.
pub fn is_doji(candle: &Candle) -> bool {
    candle.body() <= candle.range() * 0.1
}

/// Lower wick at least twice the body, upper wick no larger than the body.
pub fn is_hammer(candle: &Candle) -> bool {
    let body = candle.body();
    candle.lower_wick() >= 2.0 * body && candle.upper_wick() <= body
}

/// Red bar followed by a green bar whose body covers the red body.
pub fn is_bullish_engulfing(current: &Candle, previous: &Candle) -> bool {
    previous.is_bearish()
        && current.is_bullish()
        && current.open <= previous.close
        && current.close >= previous.open
}

/// Detect all patterns for the latest bar, in Doji, Hammer, Bullish
/// Engulfing order.
///
/// Fewer than two bars yields an empty result rather than an error.
pub fn detect_patterns(candles: &[Candle]) -> PatternResult {
    let mut result = PatternResult::default();

    let [.., previous, latest] = candles else {
        return result;
    };

    if is_doji(latest) {
        result.push(CandlePattern::Doji);
    }
    if is_hammer(latest) {
        result.push(CandlePattern::Hammer);
    }
    if is_bullish_engulfing(latest, previous) {
        result.push(CandlePattern::BullishEngulfing);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            timestamp: 0,
            open,
            high,
            low,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_doji() {
        assert!(is_doji(&candle(10.0, 11.0, 9.0, 10.1)));
        // body exactly 10% of range still counts
        assert!(is_doji(&candle(10.0, 13.0, 8.0, 10.5)));
        assert!(!is_doji(&candle(10.0, 11.0, 9.0, 10.5)));
    }

    #[test]
    fn test_hammer() {
        // body 1, lower wick 3, upper wick 0.5
        assert!(is_hammer(&candle(10.0, 11.5, 7.0, 11.0)));
        // upper wick larger than body
        assert!(!is_hammer(&candle(10.0, 13.0, 7.0, 11.0)));
        // lower wick too short
        assert!(!is_hammer(&candle(10.0, 11.0, 9.5, 11.0)));
    }

    #[test]
    fn test_bullish_engulfing() {
        let previous = candle(11.0, 11.5, 9.5, 10.0);
        assert!(is_bullish_engulfing(&candle(9.8, 11.6, 9.7, 11.2), &previous));
        // opens above the previous close
        assert!(!is_bullish_engulfing(&candle(10.2, 11.6, 10.1, 11.2), &previous));
        // previous bar green
        let green = candle(10.0, 11.5, 9.5, 11.0);
        assert!(!is_bullish_engulfing(&candle(9.8, 11.6, 9.7, 11.2), &green));
    }

    #[test]
    fn test_detect_requires_two_candles() {
        assert!(detect_patterns(&[]).is_empty());
        assert!(detect_patterns(&[candle(10.0, 10.0, 10.0, 10.0)]).is_empty());
    }

    #[test]
    fn test_doji_and_hammer_reported_together() {
        // tiny body at the top of a long lower wick
        let latest = candle(10.0, 10.02, 8.0, 10.02);
        assert!(is_doji(&latest));
        assert!(is_hammer(&latest));

        let result = detect_patterns(&[candle(10.0, 10.5, 9.5, 10.2), latest]);
        assert_eq!(
            result.patterns,
            vec![CandlePattern::Doji, CandlePattern::Hammer]
        );
        assert_eq!(result.descriptions.len(), 2);
        assert_eq!(result.descriptions[0].name, "DOJI");
    }

    #[test]
    fn test_detect_uses_latest_pair_only() {
        let candles = vec![
            candle(10.0, 10.0, 10.0, 10.0),
            candle(11.0, 11.5, 9.5, 10.0),
            candle(9.8, 11.6, 9.7, 11.2),
        ];
        let result = detect_patterns(&candles);
        assert_eq!(result.patterns, vec![CandlePattern::BullishEngulfing]);
        assert_eq!(result.pattern_string(), "Bullish Engulfing");
    }
}

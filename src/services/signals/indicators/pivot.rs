//! Classic floor pivot points.

use crate::types::{Candle, PivotLevels};

/// Pivot levels from a single bar.
///
/// pivot = (H + L + C) / 3, r1 = 2P - L, r2 = P + (H - L),
/// s1 = 2P - H, s2 = P - (H - L).
pub fn pivot_points(high: f64, low: f64, close: f64) -> PivotLevels {
    let pivot = (high + low + close) / 3.0;
    let range = high - low;

    PivotLevels {
        pivot,
        r1: 2.0 * pivot - low,
        r2: pivot + range,
        s1: 2.0 * pivot - high,
        s2: pivot - range,
    }
}

impl From<&Candle> for PivotLevels {
    fn from(candle: &Candle) -> Self {
        pivot_points(candle.high, candle.low, candle.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_points_known_bar() {
        let levels = pivot_points(110.0, 90.0, 100.0);
        assert_eq!(levels.pivot, 100.0);
        assert_eq!(levels.r1, 110.0);
        assert_eq!(levels.r2, 120.0);
        assert_eq!(levels.s1, 90.0);
        assert_eq!(levels.s2, 80.0);
        assert_eq!(levels.resistance(), 120.0);
        assert_eq!(levels.support(), 80.0);
    }

    #[test]
    fn test_pivot_points_from_candle() {
        let candle = Candle {
            timestamp: 0,
            open: 10.0,
            high: 12.0,
            low: 9.0,
            close: 12.0,
            volume: 1,
        };
        let levels = PivotLevels::from(&candle);
        assert_eq!(levels.pivot, 11.0);
        assert_eq!(levels.s2, 8.0);
        assert_eq!(levels.r2, 14.0);
    }
}

//! Average Directional Index (ADX) indicator.

use super::atr::true_range;
use super::Indicator;
use crate::services::signals::math::{combine, moving_average, Padded, Series};
use crate::types::PriceSeries;

/// ADX (Average Directional Index) indicator.
///
/// Measures trend strength (not direction):
/// - Below 20: Weak trend / ranging market
/// - 20-25: Trend developing
/// - Above 25: Strong trend
///
/// Combined with +DI and -DI for direction. True range, DI and DX are all
/// smoothed with a plain SMA.
pub struct Adx {
    period: usize,
}

impl Default for Adx {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Adx {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// +DM and -DM per bar. The first bar has no movement.
    ///
    /// A move only counts when it is positive and strictly larger than the
    /// opposite move, so equal moves produce zero on both sides.
    fn directional_movement(prices: &PriceSeries) -> (Vec<f64>, Vec<f64>) {
        let PriceSeries { highs, lows, .. } = prices;
        let mut plus_dm = Vec::with_capacity(highs.len());
        let mut minus_dm = Vec::with_capacity(highs.len());

        for i in 0..highs.len() {
            if i == 0 {
                plus_dm.push(0.0);
                minus_dm.push(0.0);
                continue;
            }

            let up_move = highs[i] - highs[i - 1];
            let down_move = lows[i - 1] - lows[i];

            plus_dm.push(if up_move > down_move && up_move > 0.0 {
                up_move
            } else {
                0.0
            });
            minus_dm.push(if down_move > up_move && down_move > 0.0 {
                down_move
            } else {
                0.0
            });
        }

        (plus_dm, minus_dm)
    }

    /// Directional index from one bar's movement and the smoothed range.
    fn directional_index(dm: &[f64], atr: &[Option<f64>]) -> Series {
        dm.iter()
            .zip(atr)
            .map(|(dm, atr)| atr.map(|atr| if atr == 0.0 { 0.0 } else { dm / atr * 100.0 }))
            .collect()
    }
}

/// ADX with its directional components, all full length.
#[derive(Debug, Clone, PartialEq)]
pub struct AdxSeries {
    pub adx: Series,
    pub di_plus: Series,
    pub di_minus: Series,
}

impl Indicator for Adx {
    type Output = AdxSeries;

    fn name(&self) -> &'static str {
        "ADX (14)"
    }

    /// Warm-up of the ADX line: one period for the range, one for DX.
    fn warmup(&self) -> usize {
        2 * self.period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> AdxSeries {
        let atr = moving_average(&true_range(prices), self.period);
        let (plus_dm, minus_dm) = Self::directional_movement(prices);

        let di_plus = Self::directional_index(&plus_dm, &atr);
        let di_minus = Self::directional_index(&minus_dm, &atr);

        let dx = combine(&di_plus, &di_minus, |plus, minus| {
            let sum = plus + minus;
            if sum == 0.0 {
                0.0
            } else {
                (plus - minus).abs() / sum * 100.0
            }
        });
        let adx = Padded::split(&dx).apply(|values| moving_average(values, self.period));

        AdxSeries {
            adx,
            di_plus,
            di_minus,
        }
    }
}

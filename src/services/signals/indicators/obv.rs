//! On-Balance Volume (OBV) indicator.

use super::Indicator;
use crate::services::signals::math::Series;
use crate::types::PriceSeries;

/// OBV (On-Balance Volume) indicator.
///
/// Cumulative volume indicator starting from the first bar's volume:
/// - If close > previous close: OBV += volume
/// - If close < previous close: OBV -= volume
/// - Otherwise unchanged
///
/// The scorer only compares the last two values.
#[derive(Default)]
pub struct Obv;

impl Indicator for Obv {
    type Output = Series;

    fn name(&self) -> &'static str {
        "OBV"
    }

    fn warmup(&self) -> usize {
        0
    }

    fn calculate(&self, prices: &PriceSeries) -> Series {
        let PriceSeries {
            closes, volumes, ..
        } = prices;

        let mut result = Vec::with_capacity(closes.len());
        let mut obv = 0.0;

        for i in 0..closes.len() {
            if i == 0 {
                obv = volumes[0];
            } else if closes[i] > closes[i - 1] {
                obv += volumes[i];
            } else if closes[i] < closes[i - 1] {
                obv -= volumes[i];
            }
            result.push(Some(obv));
        }

        result
    }
}

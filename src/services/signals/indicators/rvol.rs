//! Relative Volume (RVOL) indicator.

use super::Indicator;
use crate::services::signals::math::{moving_average, Series};
use crate::types::PriceSeries;

/// RVOL (Relative Volume).
///
/// Current volume divided by its trailing SMA(20):
/// - Above 2.0: unusually heavy participation
/// - Below 0.8: thin participation, moves lack conviction
///
/// A zero average reads as a ratio of 1.
pub struct Rvol {
    period: usize,
}

impl Default for Rvol {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Rvol {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Rvol {
    type Output = Series;

    fn name(&self) -> &'static str {
        "RVOL (20)"
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn calculate(&self, prices: &PriceSeries) -> Series {
        let average = moving_average(&prices.volumes, self.period);

        prices
            .volumes
            .iter()
            .zip(average)
            .map(|(volume, avg)| avg.map(|avg| if avg == 0.0 { 1.0 } else { volume / avg }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::test_support::flat;
    use crate::services::signals::math::{latest, warmup_len};

    #[test]
    fn test_rvol_length_and_warmup() {
        let result = Rvol::default().calculate(&flat(30, 10.0, 100.0));
        assert_eq!(result.len(), 30);
        assert_eq!(warmup_len(&result), 19);
    }

    #[test]
    fn test_rvol_constant_volume_is_one() {
        let result = Rvol::default().calculate(&flat(30, 10.0, 100.0));
        assert!(result.iter().flatten().all(|v| *v == 1.0));
    }

    #[test]
    fn test_rvol_spike() {
        let mut prices = flat(5, 10.0, 100.0);
        prices.volumes[4] = 600.0;
        // average (4 * 100 + 600) / 5 = 200
        assert_eq!(latest(&Rvol::new(5).calculate(&prices)), Some(3.0));
    }

    #[test]
    fn test_rvol_zero_average_reads_one() {
        let result = Rvol::new(3).calculate(&flat(5, 10.0, 0.0));
        assert_eq!(result[4], Some(1.0));
    }
}

//! Rolling-window primitives shared by every indicator.
//!
//! A [`Series`] always has exactly one slot per input bar. Slots that cannot
//! be computed yet (the warm-up prefix) are `None`, so arithmetic on an
//! undefined value cannot silently produce a number.

/// One indicator value per bar, `None` while warming up.
pub type Series = Vec<Option<f64>>;

/// Simple moving average of the trailing `period` values, inclusive of `i`.
///
/// The first `period - 1` slots are undefined.
pub fn moving_average(data: &[f64], period: usize) -> Series {
    if period == 0 {
        return vec![None; data.len()];
    }

    (0..data.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                let window = &data[i + 1 - period..=i];
                Some(window.iter().sum::<f64>() / period as f64)
            }
        })
        .collect()
}

/// Exponential moving average seeded with the plain average of the first
/// `period` values.
///
/// The seed lands at index `period - 1` and is not itself a recursive EMA
/// step. From there on `ema[i] = (data[i] - ema[i-1]) * 2/(period+1) + ema[i-1]`.
pub fn exponential_moving_average(data: &[f64], period: usize) -> Series {
    if period == 0 || data.len() < period {
        return vec![None; data.len()];
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = data[..period].iter().sum::<f64>() / period as f64;

    let mut result = vec![None; period - 1];
    result.reserve(data.len() + 1 - period);
    result.push(Some(ema));

    for value in &data[period..] {
        ema = (value - ema) * multiplier + ema;
        result.push(Some(ema));
    }

    result
}

/// Elementwise combination that is undefined wherever either side is.
pub fn combine(a: &[Option<f64>], b: &[Option<f64>], f: impl Fn(f64, f64) -> f64) -> Series {
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}

/// Last slot of a series, if it is defined.
pub fn latest(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

/// Number of leading undefined slots.
pub fn warmup_len(series: &[Option<f64>]) -> usize {
    series.iter().take_while(|v| v.is_none()).count()
}

/// A series held as its warm-up length plus the defined values after it.
///
/// Used wherever an indicator is smoothed again (MACD signal line,
/// stochastic %K and %D): the smoothing runs on `values` only and the
/// result is re-padded with `warmup` undefined slots, so the output length
/// is always `warmup + values.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Padded {
    pub warmup: usize,
    pub values: Vec<f64>,
}

impl Padded {
    /// Split a series into its undefined count and its defined values.
    pub fn split(series: &[Option<f64>]) -> Self {
        let values: Vec<f64> = series.iter().flatten().copied().collect();
        Self {
            warmup: series.len() - values.len(),
            values,
        }
    }

    /// Run `f` over the defined values and restore the original length.
    ///
    /// `f` must return one slot per defined value.
    pub fn apply(&self, f: impl FnOnce(&[f64]) -> Series) -> Series {
        let smoothed = f(&self.values);
        let mut result = vec![None; self.warmup + self.values.len() - smoothed.len()];
        result.extend(smoothed);
        result
    }

    /// Restore the full-length series without transforming it.
    pub fn into_series(self) -> Series {
        let mut result = vec![None; self.warmup];
        result.extend(self.values.into_iter().map(Some));
        result
    }
}

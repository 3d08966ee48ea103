//! Mean and population variance over ordered sequences.
//!
//! All accumulation happens in `f64`, wider than [`DataType`](crate::DataType),
//! so sums over large samples neither overflow nor lose integer precision.
//! Empty input yields `0.0` from every function here.

/// Running accumulator for Welford's online mean/variance update.
#[derive(Debug, Clone, Copy, Default)]
pub struct Welford {
    count: u64,
    mean: f64,
    /// Sum of squared deviations from the running mean.
    m2: f64,
}

impl Welford {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance (`M2 / n`).
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }
}

impl<T: Into<f64>> Extend<T> for Welford {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x.into());
        }
    }
}

/// Arithmetic mean.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0f64, 0u64), |(s, n), v| (s + v.into(), n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Population variance in a single pass (Welford).
pub fn variance<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let mut acc = Welford::new();
    acc.extend(values);
    acc.variance()
}

/// Population variance as the mean squared deviation from `mean`.
///
/// `mean` must be the mean of the same sequence; the driver passes the
/// value it has just computed and printed.
pub fn variance_two_pass<I>(values: I, mean: f64) -> f64
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let (sum_sq, count) = values.into_iter().fold((0.0f64, 0u64), |(s, n), v| {
        let diff = v.into() - mean;
        (s + diff * diff, n + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum_sq / count as f64
    }
}

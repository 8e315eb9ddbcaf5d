// STATISTICS COMPONENT --------------------------------------------------------

/// Running mean and standard deviation over an unbounded stream, maintained
/// incrementally with Welford's accumulators. The raw history is never stored;
/// each accepted sample updates `count`, `mean` and the `m2` sum of squared
/// deviations in O(1).
#[derive(Debug, Clone, Default)]
pub struct RunningStatistics {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStatistics {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Folds one sample into the accumulators. Must be called exactly once
    /// per accepted reading, in arrival order.
    pub fn update(&mut self, sample: f64) {
        self.count += 1;
        let delta = sample - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (sample - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance. A stream with fewer than two samples has no
    /// spread, so this is 0.0 for count < 2.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        self.m2 / self.count as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

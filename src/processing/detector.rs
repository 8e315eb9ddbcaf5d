use super::statistics::RunningStatistics;
use thiserror::Error;

// DETECTOR COMPONENT ----------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectorError {
    #[error("invalid configuration: threshold must be a finite non-negative number, got {0}")]
    InvalidConfiguration(f64),
    #[error("invalid input: readings must be finite, got {0}")]
    InvalidInput(f64),
}

/// The per-reading output: the reading's value, its 0-based position in the
/// stream, and whether it fell outside the anomaly band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub index: usize,
    pub value: f64,
    pub anomalous: bool,
}

/// Streaming anomaly detector. Each accepted reading updates the running
/// statistics and is then classified against the band
/// `[mean - std - threshold, mean + std + threshold]`, where mean and std
/// are taken over the full history including the reading itself.
///
/// The update-then-classify order is deliberate: the band is always computed
/// from statistics that include the current reading. A consequence is that
/// the first reading is never anomalous for any non-negative threshold.
#[derive(Debug)]
pub struct Detector {
    threshold: f64,
    statistics: RunningStatistics,
}

impl Detector {
    /// Builds a detector with empty statistics. The threshold margin widens
    /// the band beyond one standard deviation and is fixed for the
    /// detector's lifetime.
    pub fn new(threshold: f64) -> Result<Self, DetectorError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(DetectorError::InvalidConfiguration(threshold));
        }
        Ok(Self {
            threshold,
            statistics: RunningStatistics::new(),
        })
    }

    /// Feeds one reading into the detector and classifies it.
    ///
    /// Non-finite values are rejected before touching the statistics, so a
    /// failed call has no effect on subsequent classifications.
    pub fn observe(&mut self, value: f64) -> Result<Verdict, DetectorError> {
        if !value.is_finite() {
            return Err(DetectorError::InvalidInput(value));
        }

        let index = self.statistics.count();
        self.statistics.update(value);

        let mean = self.statistics.mean();
        let std_dev = self.statistics.std_dev();
        let anomalous = value > mean + std_dev + self.threshold
            || value < mean - std_dev - self.threshold;

        Ok(Verdict {
            index,
            value,
            anomalous,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn statistics(&self) -> &RunningStatistics {
        &self.statistics
    }

    /// Returns the detector to zero observed readings.
    pub fn reset(&mut self) {
        self.statistics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe_all(detector: &mut Detector, readings: &[f64]) -> Vec<Verdict> {
        readings
            .iter()
            .map(|&r| detector.observe(r).unwrap())
            .collect()
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = Detector::new(-0.5).unwrap_err();
        assert_eq!(err, DetectorError::InvalidConfiguration(-0.5));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        assert!(Detector::new(f64::NAN).is_err());
        assert!(Detector::new(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_threshold_is_valid() {
        assert!(Detector::new(0.0).is_ok());
    }

    #[test]
    fn first_reading_is_never_anomalous() {
        for threshold in [0.0, 0.1, 2.0, 1000.0] {
            let mut detector = Detector::new(threshold).unwrap();
            let verdict = detector.observe(-3721.9).unwrap();
            assert_eq!(verdict.index, 0);
            assert!(!verdict.anomalous, "threshold {} flagged first reading", threshold);
        }
    }

    #[test]
    fn constant_stream_is_never_anomalous() {
        let mut detector = Detector::new(0.0).unwrap();
        for i in 0..1000 {
            let verdict = detector.observe(10.0).unwrap();
            assert_eq!(verdict.index, i);
            assert!(!verdict.anomalous);
        }
        assert_eq!(detector.statistics().count(), 1000);
        assert_eq!(detector.statistics().mean(), 10.0);
    }

    #[test]
    fn isolated_spike_is_flagged() {
        let mut detector = Detector::new(2.0).unwrap();
        for i in 0..50 {
            let jitter = if i % 2 == 0 { 0.01 } else { -0.01 };
            let verdict = detector.observe(10.0 + jitter).unwrap();
            assert!(!verdict.anomalous, "reading {} flagged in tight cluster", i);
        }
        let verdict = detector.observe(10000.0).unwrap();
        assert!(verdict.anomalous);
        assert_eq!(verdict.index, 50);
    }

    #[test]
    fn spike_scenario_with_threshold_two() {
        let mut detector = Detector::new(2.0).unwrap();
        let verdicts = observe_all(&mut detector, &[10.0, 10.0, 10.0, 10.0, 10.0, 25.0]);

        for verdict in &verdicts[..5] {
            assert!(!verdict.anomalous, "index {} wrongly flagged", verdict.index);
        }
        // mean 12.5, std ~5.59 over all six readings; 25 > 12.5 + 5.59 + 2
        assert!(verdicts[5].anomalous);
        assert_eq!(verdicts[5].value, 25.0);
    }

    #[test]
    fn flat_stream_with_zero_threshold() {
        let mut detector = Detector::new(0.0).unwrap();
        let verdicts = observe_all(&mut detector, &[5.0, 5.0, 5.0]);
        assert!(verdicts.iter().all(|v| !v.anomalous));
    }

    #[test]
    fn replay_produces_identical_verdicts() {
        let readings = [9.7, 10.2, 10.0, 9.9, 18.4, 10.1, 3.2, 10.0];
        let mut a = Detector::new(1.5).unwrap();
        let mut b = Detector::new(1.5).unwrap();
        assert_eq!(observe_all(&mut a, &readings), observe_all(&mut b, &readings));
    }

    #[test]
    fn non_finite_input_leaves_state_untouched() {
        let mut detector = Detector::new(2.0).unwrap();
        let mut reference = Detector::new(2.0).unwrap();
        for &r in &[10.0, 10.3, 9.8] {
            detector.observe(r).unwrap();
            reference.observe(r).unwrap();
        }

        let err = detector.observe(f64::NAN).unwrap_err();
        assert!(matches!(err, DetectorError::InvalidInput(v) if v.is_nan()));
        assert!(detector.observe(f64::INFINITY).is_err());
        assert!(detector.observe(f64::NEG_INFINITY).is_err());

        // The rejected calls must not have shifted the statistics: the next
        // valid reading classifies exactly as if they never happened.
        assert_eq!(detector.statistics().count(), 3);
        assert_eq!(
            detector.observe(10.1).unwrap(),
            reference.observe(10.1).unwrap()
        );
    }

    #[test]
    fn indices_are_sequential_from_zero() {
        let mut detector = Detector::new(1.0).unwrap();
        for expected in 0..10 {
            assert_eq!(detector.observe(expected as f64).unwrap().index, expected);
        }
    }

    #[test]
    fn reset_restores_fresh_behaviour() {
        let mut detector = Detector::new(2.0).unwrap();
        observe_all(&mut detector, &[10.0, 10.0, 500.0]);
        detector.reset();
        assert_eq!(detector.statistics().count(), 0);

        // After reset the detector behaves like a newly constructed one.
        let verdict = detector.observe(500.0).unwrap();
        assert_eq!(verdict.index, 0);
        assert!(!verdict.anomalous);
    }
}

// GENERATOR COMPONENT ---------------------------------------------------------

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Total number of readings to emit.
    pub size: usize,
    /// Base value of the stream.
    pub base_level: f64,
    /// Standard deviation of the Gaussian noise added to each reading.
    pub noise_level: f64,
    /// Probability of a spike being injected at each step.
    pub anomaly_chance: f64,
    /// Range of spike magnitudes added on top of the base value, (min, max).
    pub spike_intensity: (f64, f64),
    /// Fixed RNG seed for reproducible streams; a fresh seed per run if unset.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            base_level: 10.0,
            noise_level: 0.7,
            anomaly_chance: 0.005,
            spike_intensity: (5.0, 10.0),
            seed: None,
        }
    }
}

/// Synthetic data stream: a noisy baseline with large-magnitude spikes
/// injected at low probability. Upstream producer only; it knows nothing
/// about the detector.
pub struct StreamGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    emitted: usize,
}

impl StreamGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            emitted: 0,
        }
    }

    pub fn with_seed(mut config: GeneratorConfig, seed: u64) -> Self {
        config.seed = Some(seed);
        Self::new(config)
    }

    pub fn remaining(&self) -> usize {
        self.config.size.saturating_sub(self.emitted)
    }

    // Box-Muller transform over two uniform draws; 1.0 - gen() keeps the
    // log argument strictly positive.
    fn standard_normal(&mut self) -> f64 {
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

impl Iterator for StreamGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.emitted >= self.config.size {
            return None;
        }
        self.emitted += 1;

        let base_value = self.config.base_level + self.config.noise_level * self.standard_normal();

        let (spike_min, spike_max) = self.config.spike_intensity;
        if self.rng.gen::<f64>() < self.config.anomaly_chance {
            let spike = if spike_max > spike_min {
                self.rng.gen_range(spike_min..spike_max)
            } else {
                spike_min
            };
            Some(base_value + spike)
        } else {
            Some(base_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_exactly_size_readings() {
        let config = GeneratorConfig {
            size: 250,
            ..Default::default()
        };
        let generator = StreamGenerator::with_seed(config, 7);
        assert_eq!(generator.count(), 250);
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let a: Vec<f64> = StreamGenerator::with_seed(GeneratorConfig::default(), 42).collect();
        let b: Vec<f64> = StreamGenerator::with_seed(GeneratorConfig::default(), 42).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn readings_are_finite() {
        let generator = StreamGenerator::with_seed(GeneratorConfig::default(), 3);
        assert!(generator.into_iter().all(|r| r.is_finite()));
    }

    #[test]
    fn noiseless_stream_without_spikes_is_flat() {
        let config = GeneratorConfig {
            size: 100,
            base_level: 10.0,
            noise_level: 0.0,
            anomaly_chance: 0.0,
            ..Default::default()
        };
        for reading in StreamGenerator::with_seed(config, 1) {
            assert_eq!(reading, 10.0);
        }
    }

    #[test]
    fn guaranteed_spikes_exceed_minimum_intensity() {
        let config = GeneratorConfig {
            size: 100,
            base_level: 10.0,
            noise_level: 0.0,
            anomaly_chance: 1.0,
            spike_intensity: (5.0, 10.0),
            ..Default::default()
        };
        for reading in StreamGenerator::with_seed(config, 9) {
            assert!(reading >= 15.0 && reading < 20.0);
        }
    }
}

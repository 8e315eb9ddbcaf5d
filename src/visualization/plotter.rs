// src/visualization/plotter.rs

use super::VisualizationConfig;
use crate::processing::Verdict;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Bounded buffers of plotted verdicts, shared between the feed thread that
/// drives the detector and the window that renders the series.
pub struct VerdictPlotter {
    config: VisualizationConfig,
    series: VecDeque<(f64, f64)>,    // (index, value)
    anomalies: VecDeque<(f64, f64)>, // flagged points only
    anomaly_total: usize,
    finished: bool,
}

impl VerdictPlotter {
    pub fn new(config: VisualizationConfig) -> Self {
        Self {
            series: VecDeque::with_capacity(config.buffer_size),
            anomalies: VecDeque::with_capacity(config.buffer_size),
            config,
            anomaly_total: 0,
            finished: false,
        }
    }

    pub fn push(&mut self, verdict: &Verdict) {
        let point = (verdict.index as f64, verdict.value);

        self.series.push_back(point);
        if self.series.len() > self.config.buffer_size {
            self.series.pop_front();
        }

        if verdict.anomalous {
            self.anomaly_total += 1;
            if self.config.show_anomalies {
                self.anomalies.push_back(point);
                if self.anomalies.len() > self.config.buffer_size {
                    self.anomalies.pop_front();
                }
            }
        }
    }

    pub fn series(&self) -> Vec<[f64; 2]> {
        self.series.iter().map(|&(i, v)| [i, v]).collect()
    }

    pub fn anomalies(&self) -> Vec<[f64; 2]> {
        self.anomalies.iter().map(|&(i, v)| [i, v]).collect()
    }

    pub fn reading_count(&self) -> usize {
        self.series.len()
    }

    pub fn anomaly_total(&self) -> usize {
        self.anomaly_total
    }

    /// Marks the end of the stream so the window can report completion.
    pub fn mark_finished(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn clear(&mut self) {
        self.series.clear();
        self.anomalies.clear();
        self.anomaly_total = 0;
        self.finished = false;
    }
}

pub type SharedPlotter = Arc<Mutex<VerdictPlotter>>;

pub fn create_shared_plotter(config: VisualizationConfig) -> SharedPlotter {
    Arc::new(Mutex::new(VerdictPlotter::new(config)))
}

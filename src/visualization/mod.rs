// src/visualization/mod.rs

pub mod plotter;
pub mod window;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VisualizationConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Maximum number of points kept in the plot buffers.
    pub buffer_size: usize,
    /// Delay between readings fed to the detector, in milliseconds.
    pub update_interval_ms: u64,
    pub show_anomalies: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
            buffer_size: 5000,
            update_interval_ms: 10,
            show_anomalies: true,
        }
    }
}

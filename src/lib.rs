pub mod config;
pub mod generator;
pub mod processing;
pub mod utils;
pub mod visualization;

pub use processing::{Detector, DetectorError, Verdict};

pub mod detector;
pub mod statistics;

pub use detector::{Detector, DetectorError, Verdict};
pub use statistics::RunningStatistics;

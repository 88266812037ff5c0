//! System configuration parameters
//!
//! All tunable parameters for the FloodStation system.  Risk-band
//! thresholds are deliberately NOT here — they are a fixed contract of
//! the classification engine (see `classify`).

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    // --- Sampling ---
    /// Fixed period between sample ticks (milliseconds)
    pub sample_period_ms: u32,
    /// Main loop poll granularity (milliseconds)
    pub poll_interval_ms: u32,

    // --- Ultrasonic gauges ---
    /// Hard cap on the echo wait (microseconds, ~5 m round trip)
    pub echo_timeout_us: u32,
    /// Calibrated rain-container height (millimetres)
    pub rain_gauge_height_mm: i32,
    /// Calibrated river-channel height (millimetres)
    pub river_channel_height_mm: i32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            // Sampling
            sample_period_ms: 2000, // one classified sample every 2 s
            poll_interval_ms: 50,

            // Gauges
            echo_timeout_us: 30_000,
            rain_gauge_height_mm: 100,
            river_channel_height_mm: 140,
        }
    }
}

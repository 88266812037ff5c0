//! Log-based sample sink adapter.
//!
//! Implements [`SampleSink`] by writing structured station events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! Samples whose worst signal is Danger log at `warn` so they stand out
//! in a serial capture.

use log::{info, warn};

use crate::app::events::{Sample, StationEvent};
use crate::app::ports::SampleSink;
use crate::classify::Severity;

/// Adapter that logs every [`StationEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSink for LogEventSink {
    fn publish(&mut self, event: &StationEvent) {
        match event {
            StationEvent::Sample(s) => log_sample(s),
            StationEvent::PumpChanged { pump, on } => {
                info!("PUMP  | {} -> {}", pump.label(), if *on { "ON" } else { "OFF" });
            }
            StationEvent::Started => {
                info!("START | station sample loop up");
            }
        }
    }
}

fn log_sample(s: &Sample) {
    let line = format!(
        "SAMPLE | T={} RH={} | rain={} ({:?}) wind={} ({:?}) | \
         levels rain={}mm river={}mm ({:?})",
        fmt_opt(s.temperature_c),
        fmt_opt(s.humidity_pct),
        s.rain_raw,
        s.rain_band,
        s.wind_raw,
        s.wind_band,
        s.rain_level_mm,
        s.river_level_mm,
        s.river_band,
    );
    if s.max_severity() == Severity::Danger {
        warn!("{line}");
    } else {
        info!("{line}");
    }
}

fn fmt_opt(v: Option<f32>) -> String {
    v.map_or_else(|| "--".to_string(), |v| format!("{v:.1}"))
}

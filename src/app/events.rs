//! Outbound application events and the per-tick [`Sample`] aggregate.
//!
//! The [`StationService`](super::service::StationService) emits these
//! through the [`SampleSink`](super::ports::SampleSink) port.  Adapters
//! on the other side decide what to do with them — log to serial,
//! encode for the dashboard transport, etc.

use serde::Serialize;

use crate::classify::{RainBand, RiverBand, Severity, WindBand};
use crate::drivers::relay::PumpChannel;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum StationEvent {
    /// One fully classified per-tick aggregate.
    Sample(Sample),

    /// A pump relay changed state (reflected back to the display layer,
    /// informational only).
    PumpChanged { pump: PumpChannel, on: bool },

    /// The application service has started.
    Started,
}

/// The per-tick aggregate handed to the sink by value.
///
/// Temperature and humidity are absent when the environment read failed
/// this tick; every other field is always populated.  Levels are signed
/// and unclamped — over-height means overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub temperature_c: Option<f32>,
    pub humidity_pct: Option<f32>,
    pub rain_raw: u16,
    pub wind_raw: u16,
    pub rain_level_mm: i32,
    pub river_level_mm: i32,
    pub rain_band: RainBand,
    pub wind_band: WindBand,
    pub river_band: RiverBand,
}

impl Sample {
    /// Worst severity across the three classified signals — drives the
    /// log level and the dashboard's headline colour.
    pub fn max_severity(&self) -> Severity {
        self.rain_band
            .severity()
            .max(self.wind_band.severity())
            .max(self.river_band.severity())
    }
}

//! Station service — the hexagonal core.
//!
//! [`StationService`] orchestrates one atomic sample tick and applies
//! out-of-band actuator commands.  It exposes a clean, hardware-agnostic
//! API; all I/O flows through port traits injected at call sites, making
//! the entire service testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌────────────────────────────┐ ──▶ SampleSink
//!                  │       StationService        │
//! ActuatorPort ◀── │  convert · classify · emit  │
//!                  └────────────────────────────┘
//! ```
//!
//! Classification is a pure, stateless function of the current tick's
//! values: the service carries no band memory, no hysteresis, and no
//! per-signal history between ticks.

use log::{debug, info};

use crate::classify::{classify_rain, classify_river, classify_wind};
use crate::config::StationConfig;
use crate::level::to_level_mm;

use super::commands::StationCommand;
use super::events::{Sample, StationEvent};
use super::ports::{ActuatorPort, SampleSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// StationService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct StationService {
    config: StationConfig,
    tick_count: u64,
}

impl StationService {
    pub fn new(config: StationConfig) -> Self {
        Self {
            config,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the service to the sink.  Call once before the first tick.
    pub fn start(&mut self, sink: &mut impl SampleSink) {
        sink.publish(&StationEvent::Started);
        info!(
            "StationService started (period {}ms)",
            self.config.sample_period_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one atomic sample tick: acquire every raw input, convert the
    /// gauge distances to levels, classify all three signals, and hand
    /// the finished [`Sample`] to the sink.
    ///
    /// Everything is computed before the sink sees anything: the sink
    /// can never observe a partially classified sample.  Pumps are not
    /// touched here — actuation is exclusively command-driven.
    pub fn sample(&mut self, hw: &mut impl SensorPort, sink: &mut impl SampleSink) {
        self.tick_count += 1;

        let snap = hw.read_all();

        let rain_level_mm = to_level_mm(snap.rain_distance_cm, self.config.rain_gauge_height_mm);
        let river_level_mm =
            to_level_mm(snap.river_distance_cm, self.config.river_channel_height_mm);

        let sample = Sample {
            temperature_c: snap.env.map(|e| e.temperature_c),
            humidity_pct: snap.env.map(|e| e.humidity_pct),
            rain_raw: snap.rain_raw,
            wind_raw: snap.wind_raw,
            rain_level_mm,
            river_level_mm,
            rain_band: classify_rain(snap.rain_raw),
            wind_band: classify_wind(snap.wind_raw),
            river_band: classify_river(river_level_mm),
        };

        if snap.env.is_none() {
            debug!(
                "tick #{}: environment reading absent, sample emitted without it",
                self.tick_count
            );
        }

        sink.publish(&StationEvent::Sample(sample));
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply an external command.  Runs whenever a command arrives —
    /// between ticks, never queued behind one — and reflects the
    /// resulting relay state back to the sink.
    pub fn handle_command(
        &mut self,
        cmd: StationCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl SampleSink,
    ) {
        match cmd {
            StationCommand::SetPump { pump, on } => {
                hw.set_pump(pump, on);
                let applied = hw.pump_is_on(pump);
                info!(
                    "pump '{}' switched {}",
                    pump.label(),
                    if applied { "ON" } else { "OFF" }
                );
                sink.publish(&StationEvent::PumpChanged { pump, on: applied });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total sample ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Clone of the live configuration (for display read-back).
    pub fn current_config(&self) -> StationConfig {
        self.config.clone()
    }
}

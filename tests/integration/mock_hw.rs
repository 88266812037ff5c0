//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call and every published event so tests can
//! assert on the full history without touching real GPIO/ADC registers.

use floodstation::app::events::{Sample, StationEvent};
use floodstation::app::ports::{ActuatorPort, SampleSink, SensorPort};
use floodstation::drivers::relay::PumpChannel;
use floodstation::sensors::dht::EnvReading;
use floodstation::sensors::RawSnapshot;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorCall {
    SetPump { pump: PumpChannel, on: bool },
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Snapshot handed back on every `read_all` — tests mutate this
    /// between ticks to script sensor behaviour.
    pub snapshot: RawSnapshot,
    pub calls: Vec<ActuatorCall>,
    rain_on: bool,
    river_on: bool,
}

#[allow(dead_code)]
impl MockHardware {
    /// A quiet station: empty containers, dry grid, calm air.
    pub fn new() -> Self {
        Self {
            snapshot: RawSnapshot {
                rain_distance_cm: 10.0,
                river_distance_cm: 14.0,
                rain_raw: 4095,
                wind_raw: 0,
                env: Some(EnvReading {
                    temperature_c: 22.5,
                    humidity_pct: 60.0,
                }),
            },
            calls: Vec::new(),
            rain_on: false,
            river_on: false,
        }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_all(&mut self) -> RawSnapshot {
        self.snapshot
    }
}

impl ActuatorPort for MockHardware {
    fn set_pump(&mut self, pump: PumpChannel, on: bool) {
        match pump {
            PumpChannel::Rain => self.rain_on = on,
            PumpChannel::River => self.river_on = on,
        }
        self.calls.push(ActuatorCall::SetPump { pump, on });
    }

    fn pump_is_on(&self, pump: PumpChannel) -> bool {
        match pump {
            PumpChannel::Rain => self.rain_on,
            PumpChannel::River => self.river_on,
        }
    }

    fn all_off(&mut self) {
        self.rain_on = false;
        self.river_on = false;
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<StationEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Just the published samples, in order.
    pub fn samples(&self) -> Vec<Sample> {
        self.events
            .iter()
            .filter_map(|e| match e {
                StationEvent::Sample(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn last_sample(&self) -> Option<Sample> {
        self.samples().last().copied()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSink for RecordingSink {
    fn publish(&mut self, event: &StationEvent) {
        self.events.push(event.clone());
    }
}

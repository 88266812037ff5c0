//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both pump relays, exposing them through
//! [`SensorPort`] and [`ActuatorPort`].  This is the only module in the
//! system that touches actual hardware.  On non-espidf targets, the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::relay::{PumpChannel, RelayDriver};
use crate::sensors::{RawSnapshot, SensorHub};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    rain_pump: RelayDriver,
    river_pump: RelayDriver,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub, rain_pump: RelayDriver, river_pump: RelayDriver) -> Self {
        Self {
            sensor_hub,
            rain_pump,
            river_pump,
        }
    }

    fn relay(&self, pump: PumpChannel) -> &RelayDriver {
        match pump {
            PumpChannel::Rain => &self.rain_pump,
            PumpChannel::River => &self.river_pump,
        }
    }

    fn relay_mut(&mut self, pump: PumpChannel) -> &mut RelayDriver {
        match pump {
            PumpChannel::Rain => &mut self.rain_pump,
            PumpChannel::River => &mut self.river_pump,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_all(&mut self) -> RawSnapshot {
        self.sensor_hub.read_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_pump(&mut self, pump: PumpChannel, on: bool) {
        self.relay_mut(pump).set(on);
    }

    fn pump_is_on(&self, pump: PumpChannel) -> bool {
        self.relay(pump).is_on()
    }

    fn all_off(&mut self) {
        self.rain_pump.set(false);
        self.river_pump.set(false);
    }
}

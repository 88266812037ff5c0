//! DHT22 (AM2302) humidity/temperature sensor.
//!
//! Single-wire protocol: the host pulls the data line low for ≥1 ms,
//! releases it, and the sensor answers with an 80 µs low / 80 µs high
//! preamble followed by 40 data bits.  Bit value is encoded in the
//! length of the high phase (~26 µs = 0, ~70 µs = 1).  The fifth byte
//! is a checksum over the first four.
//!
//! A failed read (no response, bad checksum) yields `None` — the caller
//! leaves the sample's optional fields absent rather than carrying
//! stale or sentinel values forward.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the data line via hw_init helpers.
//! On host/test: reads injected values from statics.

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU32};
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use log::warn;

use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

// Injected environment for host builds, in deci-units so the statics
// stay integer atomics.
static SIM_ENV_VALID: AtomicBool = AtomicBool::new(true);
static SIM_TEMP_DECI_C: AtomicI32 = AtomicI32::new(225); // 22.5 °C
static SIM_HUM_DECI_PCT: AtomicU32 = AtomicU32::new(600); // 60.0 %

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_env(temperature_c: f32, humidity_pct: f32) {
    SIM_TEMP_DECI_C.store((temperature_c * 10.0) as i32, Ordering::Relaxed);
    SIM_HUM_DECI_PCT.store((humidity_pct * 10.0) as u32, Ordering::Relaxed);
    SIM_ENV_VALID.store(true, Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_env_fault() {
    SIM_ENV_VALID.store(false, Ordering::Relaxed);
}

/// One successful humidity/temperature acquisition.
#[derive(Debug, Clone, Copy)]
pub struct EnvReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

pub struct EnvSensor {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    gpio: i32,
}

impl EnvSensor {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    /// Acquire one reading.  `None` signals a transient sensor fault —
    /// the next tick retries naturally.
    pub fn read(&mut self) -> Option<EnvReading> {
        match self.read_raw() {
            Ok(reading) => Some(reading),
            Err(e) => {
                warn!("env sensor: {}", e);
                None
            }
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&self) -> Result<EnvReading, SensorError> {
        // Start signal: drive low ≥1 ms, then release to the pull-up.
        hw_init::gpio_direction_output(self.gpio);
        hw_init::gpio_write(self.gpio, false);
        hw_init::delay_us(1100);
        hw_init::gpio_direction_input(self.gpio);

        // Sensor preamble: response within ~40 µs, then ~80 µs low,
        // ~80 µs high.
        wait_for_level(self.gpio, false, 100)?;
        wait_for_level(self.gpio, true, 100)?;
        wait_for_level(self.gpio, false, 100)?;

        // 40 data bits: 50 µs low separator, then a high phase whose
        // length encodes the bit.
        let mut frame = [0u8; 5];
        for bit in 0..40 {
            wait_for_level(self.gpio, true, 70)?;
            let high_us = pulse_width(self.gpio, 100)?;
            if high_us > 45 {
                frame[bit / 8] |= 1 << (7 - (bit % 8));
            }
        }

        let sum = frame[0]
            .wrapping_add(frame[1])
            .wrapping_add(frame[2])
            .wrapping_add(frame[3]);
        if sum != frame[4] {
            return Err(SensorError::EnvChecksum);
        }

        let humidity_pct = f32::from(u16::from_be_bytes([frame[0], frame[1]])) / 10.0;
        let temp_raw = u16::from_be_bytes([frame[2] & 0x7F, frame[3]]);
        let mut temperature_c = f32::from(temp_raw) / 10.0;
        if frame[2] & 0x80 != 0 {
            temperature_c = -temperature_c;
        }

        Ok(EnvReading {
            temperature_c,
            humidity_pct,
        })
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&self) -> Result<EnvReading, SensorError> {
        if !SIM_ENV_VALID.load(Ordering::Relaxed) {
            return Err(SensorError::EnvNoResponse);
        }
        Ok(EnvReading {
            temperature_c: SIM_TEMP_DECI_C.load(Ordering::Relaxed) as f32 / 10.0,
            humidity_pct: SIM_HUM_DECI_PCT.load(Ordering::Relaxed) as f32 / 10.0,
        })
    }
}

/// Busy-wait until the data line reaches `level`.
/// Errors with [`SensorError::EnvNoResponse`] after `timeout_us`.
#[cfg(target_os = "espidf")]
fn wait_for_level(gpio: i32, level: bool, timeout_us: u32) -> Result<(), SensorError> {
    let deadline = hw_init::micros() + u64::from(timeout_us);
    while hw_init::gpio_read(gpio) != level {
        if hw_init::micros() >= deadline {
            return Err(SensorError::EnvNoResponse);
        }
    }
    Ok(())
}

/// Time how long the line stays high, capped at `timeout_us`.
#[cfg(target_os = "espidf")]
fn pulse_width(gpio: i32, timeout_us: u32) -> Result<u32, SensorError> {
    let start = hw_init::micros();
    let deadline = start + u64::from(timeout_us);
    while hw_init::gpio_read(gpio) {
        if hw_init::micros() >= deadline {
            return Err(SensorError::EnvNoResponse);
        }
    }
    Ok((hw_init::micros() - start) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faulted_sensor_reads_none_then_recovers() {
        let mut env = EnvSensor::new(6);

        sim_set_env(31.5, 78.0);
        let reading = env.read().expect("injected reading");
        assert!((reading.temperature_c - 31.5).abs() < 1e-4);
        assert!((reading.humidity_pct - 78.0).abs() < 1e-4);

        sim_set_env_fault();
        assert!(env.read().is_none());

        sim_set_env(22.5, 60.0);
        assert!(env.read().is_some());
    }
}

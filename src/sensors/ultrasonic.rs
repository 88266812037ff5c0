//! HC-SR04 ultrasonic water-level gauges (rain container and river channel).
//!
//! One trigger/echo cycle: hold trigger low ≥2 µs, pulse it high for
//! exactly 10 µs, then time how long the echo line stays high.  The echo
//! wait is hard-capped so a missing target can never stall the loop.
//!
//! A timed-out echo reads as **0.0 cm** — callers treat zero as
//! "invalid / no target".  The timeout is still surfaced to diagnostics
//! as a [`SensorError::EchoTimeout`] log line.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: bit-bangs the trigger line and busy-waits on the echo
//! line via hw_init helpers with `micros()` timing.
//! On host/test: reads a per-gauge injected echo duration (0 = timeout).

use core::sync::atomic::AtomicU32;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use log::warn;

use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Half the two-way speed of sound in air (cm/µs) at the assumed ambient
/// temperature.  Not temperature-compensated.
const SOUND_CM_PER_US: f32 = 0.0343;

/// Injected echo durations for host builds, indexed by [`Gauge`].
static SIM_ECHO_US: [AtomicU32; 2] = [AtomicU32::new(0), AtomicU32::new(0)];

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_echo_us(gauge: Gauge, echo_us: u32) {
    SIM_ECHO_US[gauge as usize].store(echo_us, Ordering::Relaxed);
}

/// Which physical gauge a sensor instance drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gauge {
    RainContainer = 0,
    RiverChannel = 1,
}

pub struct UltrasonicSensor {
    gauge: Gauge,
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    trig_gpio: i32,
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    echo_gpio: i32,
    timeout_us: u32,
}

impl UltrasonicSensor {
    pub fn new(gauge: Gauge, trig_gpio: i32, echo_gpio: i32, timeout_us: u32) -> Self {
        Self {
            gauge,
            trig_gpio,
            echo_gpio,
            timeout_us,
        }
    }

    /// Run one trigger/echo cycle and return the distance in centimetres.
    ///
    /// Safe to repeat back-to-back; no state is retained between calls.
    /// Never blocks longer than the configured timeout.
    pub fn measure(&mut self) -> f32 {
        match self.echo_duration_us() {
            Ok(echo_us) => echo_to_cm(echo_us),
            Err(e) => {
                warn!("{:?} gauge: {}", self.gauge, e);
                0.0
            }
        }
    }

    #[cfg(target_os = "espidf")]
    fn echo_duration_us(&self) -> Result<u32, SensorError> {
        hw_init::gpio_write(self.trig_gpio, false);
        hw_init::delay_us(2);
        hw_init::gpio_write(self.trig_gpio, true);
        hw_init::delay_us(10);
        hw_init::gpio_write(self.trig_gpio, false);

        let deadline = hw_init::micros() + u64::from(self.timeout_us);

        // Wait for the echo rising edge.
        while !hw_init::gpio_read(self.echo_gpio) {
            if hw_init::micros() >= deadline {
                return Err(SensorError::EchoTimeout);
            }
        }
        let rise = hw_init::micros();

        // Time the high phase (one-way flight time × 2).
        while hw_init::gpio_read(self.echo_gpio) {
            if hw_init::micros() >= deadline {
                return Err(SensorError::EchoTimeout);
            }
        }

        Ok((hw_init::micros() - rise) as u32)
    }

    #[cfg(not(target_os = "espidf"))]
    fn echo_duration_us(&self) -> Result<u32, SensorError> {
        let injected = SIM_ECHO_US[self.gauge as usize].load(Ordering::Relaxed);
        if injected == 0 || injected >= self.timeout_us {
            Err(SensorError::EchoTimeout)
        } else {
            Ok(injected)
        }
    }
}

fn echo_to_cm(echo_us: u32) -> f32 {
    echo_us as f32 * SOUND_CM_PER_US / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_conversion_is_half_speed_of_sound() {
        assert!((echo_to_cm(1000) - 17.15).abs() < 1e-4);
        assert!((echo_to_cm(0) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn timed_out_echo_measures_zero() {
        let mut gauge =
            UltrasonicSensor::new(Gauge::RainContainer, 1, 2, 30_000);
        sim_set_echo_us(Gauge::RainContainer, 0);
        assert!((gauge.measure() - 0.0).abs() < f32::EPSILON);

        // A duration at/over the cap is the same as no echo at all.
        sim_set_echo_us(Gauge::RainContainer, 30_000);
        assert!((gauge.measure() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn measurement_is_deterministic_for_a_fixed_echo() {
        let mut gauge =
            UltrasonicSensor::new(Gauge::RiverChannel, 3, 4, 30_000);
        sim_set_echo_us(Gauge::RiverChannel, 583); // ≈ 10 cm
        let first = gauge.measure();
        let second = gauge.measure();
        assert!((first - second).abs() < f32::EPSILON);
        assert!((first - 9.99845).abs() < 1e-3);
    }
}

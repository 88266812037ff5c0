//! Wind-proxy sensor (anemometer amplifier), read through the ADC.
//!
//! Unlike the rain grid, the wind proxy reads HIGHER with more wind.
//! The raw value is classified directly; no unit conversion is applied.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH8 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

// Calm-air default.
static SIM_WIND_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_wind_adc(raw: u16) {
    SIM_WIND_ADC.store(raw, Ordering::Relaxed);
}

pub struct WindSensor {
    _adc_gpio: i32,
}

impl WindSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    pub fn read(&self) -> u16 {
        self.read_adc()
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_WIND)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_WIND_ADC.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_injected_raw_value() {
        let sensor = WindSensor::new(9);
        sim_set_wind_adc(160);
        assert_eq!(sensor.read(), 160);
    }
}

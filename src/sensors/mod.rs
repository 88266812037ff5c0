//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].
//!
//! The hub owns every sensor driver and produces a fresh [`RawSnapshot`]
//! each tick.  Nothing here is retained between ticks.

pub mod dht;
pub mod rain;
pub mod ultrasonic;
pub mod wind;

use dht::{EnvReading, EnvSensor};
use rain::RainSensor;
use ultrasonic::UltrasonicSensor;
use wind::WindSensor;

/// A point-in-time snapshot of every raw input in the system.
///
/// Distances are already converted from echo time to centimetres (a
/// timed-out gauge reads 0.0); ADC values are raw 12-bit counts; the
/// environment reading is absent when the DHT read failed this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSnapshot {
    /// Rain-container gauge distance to the water surface (cm).
    pub rain_distance_cm: f32,
    /// River-channel gauge distance to the water surface (cm).
    pub river_distance_cm: f32,
    /// Raw rain-intensity grid value (lower = more rain).
    pub rain_raw: u16,
    /// Raw wind-proxy value (higher = more wind).
    pub wind_raw: u16,
    /// Humidity/temperature, absent on a failed read.
    pub env: Option<EnvReading>,
}

/// Aggregates all sensor drivers and produces a unified snapshot.
pub struct SensorHub {
    rain_gauge: UltrasonicSensor,
    river_gauge: UltrasonicSensor,
    rain: RainSensor,
    wind: WindSensor,
    env: EnvSensor,
}

impl SensorHub {
    /// Construct a new hub.  Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(
        rain_gauge: UltrasonicSensor,
        river_gauge: UltrasonicSensor,
        rain: RainSensor,
        wind: WindSensor,
        env: EnvSensor,
    ) -> Self {
        Self {
            rain_gauge,
            river_gauge,
            rain,
            wind,
            env,
        }
    }

    /// Read every sensor and return a unified snapshot.
    ///
    /// Read order does not affect correctness — every acquisition is
    /// independent.  Individual failures are handled inside each driver
    /// (zero distance, absent environment reading) so a flaky sensor
    /// can never abort the tick.
    pub fn read_all(&mut self) -> RawSnapshot {
        RawSnapshot {
            rain_distance_cm: self.rain_gauge.measure(),
            river_distance_cm: self.river_gauge.measure(),
            rain_raw: self.rain.read(),
            wind_raw: self.wind.read(),
            env: self.env.read(),
        }
    }
}

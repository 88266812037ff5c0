//! Unified sensor error types for the FloodStation firmware.
//!
//! All variants are `Copy` so they can be cheaply passed through the
//! sampling path without allocation.  Sensor failures are never fatal:
//! drivers log them and collapse to the documented fallback value
//! (zero distance, absent environment reading).

use core::fmt;

/// A sensor could not be read or returned invalid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Ultrasonic echo not received within the hard timeout.
    EchoTimeout,
    /// DHT sensor did not answer the start signal.
    EnvNoResponse,
    /// DHT frame received but its checksum did not match.
    /// Only producible by the on-target bit-bang path.
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    EnvChecksum,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EchoTimeout => write!(f, "echo timed out"),
            Self::EnvNoResponse => write!(f, "no response from environment sensor"),
            Self::EnvChecksum => write!(f, "environment frame checksum mismatch"),
        }
    }
}

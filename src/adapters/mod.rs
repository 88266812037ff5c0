//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                 |
//! |-------------|--------------|-----------------------------|
//! | `hardware`  | SensorPort   | ESP32 ADC, GPIO             |
//! |             | ActuatorPort | Pump relays                 |
//! | `log_sink`  | SampleSink   | Serial log output           |
//! | `dashboard` | SampleSink   | Display transport (JSON)    |
//! | `time`      | —            | ESP32 system timer          |

pub mod dashboard;
pub mod hardware;
pub mod log_sink;
pub mod time;

//! GPIO / peripheral pin assignments for the FloodStation main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Ultrasonic water-level gauges (HC-SR04)
// ---------------------------------------------------------------------------

/// Digital output: trigger pulse for the rain-container gauge.
pub const RAIN_TRIG_GPIO: i32 = 1;
/// Digital input: echo return for the rain-container gauge.
pub const RAIN_ECHO_GPIO: i32 = 2;

/// Digital output: trigger pulse for the river-channel gauge.
pub const RIVER_TRIG_GPIO: i32 = 3;
/// Digital input: echo return for the river-channel gauge.
pub const RIVER_ECHO_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Resistive rain-intensity grid — analog voltage via divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).  Lower reading = more rain.
pub const RAIN_ADC_GPIO: i32 = 5;

/// Wind-proxy sensor (anemometer amplifier output).
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).  Higher reading = more wind.
pub const WIND_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// DHT22 humidity/temperature sensor — single-wire data line with pull-up.
pub const DHT_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// Pump relays (active HIGH)
// ---------------------------------------------------------------------------

/// Relay driving the rain-container drain pump.
pub const RAIN_PUMP_GPIO: i32 = 7;
/// Relay driving the river-channel relief pump.
pub const RIVER_PUMP_GPIO: i32 = 8;

//! Risk-band classification engine.
//!
//! Three independent pure mapping functions, each evaluated every tick
//! from a fresh input — no carried state, no smoothing, no hysteresis.
//! Every function is total over its input type; there is no error path.
//!
//! Boundary contract: thresholds are strict `<` / `>`.  A value exactly
//! at a threshold falls to the next-lower-severity band
//! (`classify_rain(1500)` is `Medium`, not `High`).

use serde::Serialize;

// ═══════════════════════════════════════════════════════════════
//  Threshold tables
// ═══════════════════════════════════════════════════════════════

// Rain intensity grid: lower ADC value = more water bridging the grid.
const RAIN_HIGH_BELOW: u16 = 1500;
const RAIN_MEDIUM_BELOW: u16 = 3000;
const RAIN_LOW_BELOW: u16 = 3800;

// Wind proxy: higher ADC value = more wind.
const WIND_HIGH_ABOVE: u16 = 150;
const WIND_MEDIUM_ABOVE: u16 = 100;

// River level in millimetres above the channel floor.
const RIVER_ALERT_ABOVE_MM: i32 = 100;
const RIVER_HIGH_ABOVE_MM: i32 = 50;

// ═══════════════════════════════════════════════════════════════
//  Bands
// ═══════════════════════════════════════════════════════════════

/// Presentation severity attached to every band.  Deterministically
/// derived from the band — never independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// Rainfall intensity band, ordered from calm to severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RainBand {
    NoRain,
    Low,
    Medium,
    High,
}

/// Wind-proxy band, ordered from calm to severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WindBand {
    Low,
    Medium,
    High,
}

/// River-level band, ordered from calm to severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiverBand {
    Normal,
    HighLevel,
    FloodAlert,
}

impl RainBand {
    pub fn severity(self) -> Severity {
        match self {
            Self::NoRain => Severity::Success,
            Self::Low => Severity::Info,
            Self::Medium => Severity::Warning,
            Self::High => Severity::Danger,
        }
    }
}

impl WindBand {
    pub fn severity(self) -> Severity {
        match self {
            Self::Low => Severity::Success,
            Self::Medium => Severity::Warning,
            Self::High => Severity::Danger,
        }
    }
}

impl RiverBand {
    pub fn severity(self) -> Severity {
        match self {
            Self::Normal => Severity::Success,
            Self::HighLevel => Severity::Warning,
            Self::FloodAlert => Severity::Danger,
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Classifiers
// ═══════════════════════════════════════════════════════════════

/// Classify rainfall intensity from the raw rain-grid ADC value.
/// Evaluated low-to-high, first match wins.
pub fn classify_rain(raw: u16) -> RainBand {
    if raw < RAIN_HIGH_BELOW {
        RainBand::High
    } else if raw < RAIN_MEDIUM_BELOW {
        RainBand::Medium
    } else if raw < RAIN_LOW_BELOW {
        RainBand::Low
    } else {
        RainBand::NoRain
    }
}

/// Classify wind from the raw wind-proxy ADC value.
pub fn classify_wind(raw: u16) -> WindBand {
    if raw > WIND_HIGH_ABOVE {
        WindBand::High
    } else if raw > WIND_MEDIUM_ABOVE {
        WindBand::Medium
    } else {
        WindBand::Low
    }
}

/// Classify the river level (millimetres above the channel floor).
/// Negative and over-height inputs are valid — an over-height level is
/// precisely what a flood looks like.
pub fn classify_river(level_mm: i32) -> RiverBand {
    if level_mm > RIVER_ALERT_ABOVE_MM {
        RiverBand::FloodAlert
    } else if level_mm > RIVER_HIGH_ABOVE_MM {
        RiverBand::HighLevel
    } else {
        RiverBand::Normal
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════

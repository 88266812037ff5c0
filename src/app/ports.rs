//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ StationService (domain)
//! ```
//!
//! Driven adapters (sensors, relays, sample sinks) implement these
//! traits.  The [`StationService`](super::service::StationService)
//! consumes them via generics, so the domain core never touches
//! hardware — and never reaches into display/session state either; the
//! sink owns all of that.

use crate::drivers::relay::PumpChannel;
use crate::sensors::RawSnapshot;

use super::events::StationEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick to obtain every
/// raw input.
pub trait SensorPort {
    /// Read every sensor and return a unified snapshot.
    fn read_all(&mut self) -> RawSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the pump relays.
pub trait ActuatorPort {
    /// Switch a pump relay.  Applied immediately and unconditionally.
    fn set_pump(&mut self, pump: PumpChannel, on: bool);

    /// Current commanded state of a pump relay.
    fn pump_is_on(&self, pump: PumpChannel) -> bool;

    /// De-energise both relays — safe boot/shutdown state.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Sample sink port (driven adapter: domain → display layer)
// ───────────────────────────────────────────────────────────────

/// The domain hands every [`StationEvent`] to this port by reference,
/// fire-and-forget: no acknowledgement, no retry.  Adapters decide
/// where events go (serial log, dashboard transport, both).  A sink
/// that cannot deliver must swallow the failure — it can never stall
/// the sample loop.
pub trait SampleSink {
    fn publish(&mut self, event: &StationEvent);
}

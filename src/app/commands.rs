//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world (the remote
//! display's manual toggles) that the
//! [`StationService`](super::service::StationService) applies.

use crate::drivers::relay::PumpChannel;

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationCommand {
    /// Switch a pump relay.  Arrives asynchronously from the display
    /// layer and is applied immediately — never gated by the sample
    /// tick, and never an input to classification.
    SetPump { pump: PumpChannel, on: bool },
}

//! Remote-display sink adapter.
//!
//! The dashboard owns all display/session state; the core only pushes
//! finished values through here.  Each published sample (and every pump
//! state reflection) is encoded as a JSON line that the display
//! transport ships to the remote widget layer.  Delivery is
//! fire-and-forget — an unreachable display changes nothing about the
//! sample loop.
//!
//! Inbound direction: the transport calls [`DashboardSink::push_command`]
//! whenever the operator flips a pump toggle (possibly from another
//! task); the main loop drains the mailbox each iteration via
//! [`DashboardSink::take_pending_commands`] and applies the commands
//! immediately.

use log::{debug, warn};

use crate::app::commands::StationCommand;
use crate::app::events::StationEvent;
use crate::app::ports::SampleSink;

/// Upper bound on toggles buffered between two loop iterations.
const MAX_PENDING_COMMANDS: usize = 8;

pub struct DashboardSink {
    pending: heapless::Vec<StationCommand, MAX_PENDING_COMMANDS>,
    last_payload: Option<String>,
}

impl DashboardSink {
    pub fn new() -> Self {
        Self {
            pending: heapless::Vec::new(),
            last_payload: None,
        }
    }

    /// Queue a pump toggle received from the display transport.
    /// Returns `false` if the mailbox is full (toggle dropped).
    pub fn push_command(&mut self, cmd: StationCommand) -> bool {
        self.pending.push(cmd).is_ok()
    }

    /// Hand over every toggle received since the last poll.
    pub fn take_pending_commands(
        &mut self,
    ) -> heapless::Vec<StationCommand, MAX_PENDING_COMMANDS> {
        core::mem::take(&mut self.pending)
    }

    /// Most recently encoded payload (what the transport last shipped).
    pub fn last_payload(&self) -> Option<&str> {
        self.last_payload.as_deref()
    }
}

impl Default for DashboardSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSink for DashboardSink {
    fn publish(&mut self, event: &StationEvent) {
        match event {
            StationEvent::Sample(s) => match serde_json::to_string(s) {
                Ok(json) => {
                    debug!("dashboard <- {json}");
                    self.last_payload = Some(json);
                }
                Err(e) => warn!("dashboard: sample encode failed: {e}"),
            },
            StationEvent::PumpChanged { pump, on } => {
                let json = serde_json::json!({ "pump": pump.label(), "on": on }).to_string();
                debug!("dashboard <- {json}");
                self.last_payload = Some(json);
            }
            StationEvent::Started => {}
        }
    }
}

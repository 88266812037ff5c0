//! Event system for the single control loop.
//!
//! Events are produced by:
//! - The sample pacer (fixed-period tick)
//! - The display transport (pump toggles, possibly from another task)
//!
//! Events are consumed by the main control loop, which drains them one
//! at a time in FIFO order.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Sample pacer │────▶│              │     │              │
//! │ Display      │────▶│  Event Queue │────▶│  Main Loop   │
//! │  transport   │     │  (lock-free) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 32;

/// System event types, ordered by rough priority.
/// Lower discriminant = higher priority when multiple events
/// are pending simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    // ── Actuator commands (applied immediately, never gated) ──
    /// Rain-container drain pump commanded on.
    RainPumpOn     = 0,
    /// Rain-container drain pump commanded off.
    RainPumpOff    = 1,
    /// River-channel relief pump commanded on.
    RiverPumpOn    = 2,
    /// River-channel relief pump commanded off.
    RiverPumpOff   = 3,

    // ── Sampling ──────────────────────────────────────────────
    /// Fixed-period sample tick is due.
    SampleTick     = 20,
}

// ── Lock-free SPSC ring buffer ────────────────────────────────
//
// Producers write, main loop reads (consumes).
// Uses atomic head/tail indices.  The buffer is intentionally
// kept in a static so transport callbacks can access it.

static EVENT_HEAD: AtomicU8 = AtomicU8::new(0);
static EVENT_TAIL: AtomicU8 = AtomicU8::new(0);
// SAFETY: EVENT_BUFFER is accessed exclusively through push_event
// (one producer context) and pop_event (main-loop consumer).  The
// acquire/release pairing on the head/tail atomics enforces the SPSC
// discipline; no concurrent mutable access to a slot is possible.
static mut EVENT_BUFFER: [u8; EVENT_QUEUE_CAP] = [0; EVENT_QUEUE_CAP];

/// Push an event into the queue.
/// Lock-free — safe to call from a transport callback context.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    let head = EVENT_HEAD.load(Ordering::Relaxed);
    let tail = EVENT_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % EVENT_QUEUE_CAP as u8;

    if next_head == tail {
        return false; // Queue full — drop event.
    }

    // SAFETY: single producer; the slot at `head` is not visible to the
    // consumer until the Release store below.
    unsafe {
        EVENT_BUFFER[head as usize] = event as u8;
    }

    EVENT_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next event from the queue.
/// Called from the main loop (single consumer).
/// Returns `None` if the queue is empty.
pub fn pop_event() -> Option<Event> {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    let raw = unsafe { EVENT_BUFFER[tail as usize] };
    EVENT_TAIL.store((tail + 1) % EVENT_QUEUE_CAP as u8, Ordering::Release);

    event_from_u8(raw)
}

/// Drain all pending events into a callback.
/// Processes events in FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

// ── Internal ──────────────────────────────────────────────────

fn event_from_u8(raw: u8) -> Option<Event> {
    match raw {
        0  => Some(Event::RainPumpOn),
        1  => Some(Event::RainPumpOff),
        2  => Some(Event::RiverPumpOn),
        3  => Some(Event::RiverPumpOff),
        20 => Some(Event::SampleTick),
        _  => None,
    }
}

//! Fixed-period sample pacing.
//!
//! A two-state machine drives the sampling cadence:
//!
//! ```text
//!   IDLE ──[elapsed ≥ period]──▶ SAMPLING ──[tick complete]──▶ IDLE
//! ```
//!
//! [`SampleLoop::poll`] performs the Idle→Sampling transition when the
//! time since the last tick START reaches the configured period, and
//! [`SampleLoop::complete`] returns to Idle once the tick's work is
//! done.  Re-entry is impossible while Sampling, so no two ticks can
//! ever overlap — the loop is single-threaded by construction and this
//! type makes the invariant explicit and testable.
//!
//! The pacer is deliberately decoupled from sensors and events: it only
//! consumes a monotonic millisecond clock and reports "a tick is due".

use log::trace;

/// The two pacing states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the next period boundary.
    Idle,
    /// One atomic tick is in progress.
    Sampling,
}

/// Fixed-period two-state sample pacer.
pub struct SampleLoop {
    period_ms: u32,
    state: LoopState,
    /// Start time of the most recent tick.  `None` until the first
    /// tick fires — the station samples immediately at boot.
    last_start_ms: Option<u64>,
}

impl SampleLoop {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            state: LoopState::Idle,
            last_start_ms: None,
        }
    }

    /// Check whether a tick is due and, if so, enter Sampling.
    ///
    /// Returns `true` exactly when the caller should run one atomic
    /// sample tick.  While Sampling, always returns `false`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.state == LoopState::Sampling {
            return false;
        }

        let due = match self.last_start_ms {
            None => true,
            Some(start) => now_ms.saturating_sub(start) >= u64::from(self.period_ms),
        };

        if due {
            self.state = LoopState::Sampling;
            self.last_start_ms = Some(now_ms);
            trace!("sample tick due at t={}ms", now_ms);
        }
        due
    }

    /// Return to Idle after the tick's work is done.  The next period is
    /// measured from the tick START recorded by [`poll`].
    pub fn complete(&mut self) {
        self.state = LoopState::Idle;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires_immediately() {
        let mut pacer = SampleLoop::new(2000);
        assert!(pacer.poll(0));
        assert_eq!(pacer.state(), LoopState::Sampling);
    }

    #[test]
    fn period_is_measured_from_tick_start() {
        let mut pacer = SampleLoop::new(2000);
        assert!(pacer.poll(100));
        pacer.complete();

        assert!(!pacer.poll(2099)); // 1999 ms elapsed
        assert!(pacer.poll(2100)); // exactly one period
    }

    #[test]
    fn no_refire_while_sampling() {
        let mut pacer = SampleLoop::new(2000);
        assert!(pacer.poll(0));
        // Even far past the period boundary, a second tick cannot start
        // until the first completes.
        assert!(!pacer.poll(10_000));
        assert_eq!(pacer.state(), LoopState::Sampling);

        pacer.complete();
        assert!(pacer.poll(10_000));
    }

    #[test]
    fn slow_tick_does_not_shift_the_start_anchor() {
        let mut pacer = SampleLoop::new(2000);
        assert!(pacer.poll(0));
        // The tick itself took 500 ms.
        pacer.complete();
        // Next tick is due 2000 ms after the START, not after completion.
        assert!(!pacer.poll(1500));
        assert!(pacer.poll(2000));
    }
}

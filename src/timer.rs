//! One-shot timer collaborator.
//!
//! The screen controller waits on exactly one thing: a timer it has started
//! itself. [`OneShotTimer`] is the narrow interface it consumes, and
//! [`SoftwareTimer`] implements it on top of any [`TimeSource`].

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// A timer that reports expiry once after a fixed duration and never repeats.
///
/// All methods must return immediately. `expired` is idempotent: it reports
/// `false` until the timer has been started and the duration has elapsed,
/// then keeps reporting `true` until the next [`init`](Self::init).
pub trait OneShotTimer {
    /// Arms the timer with a new duration. Any running countdown is discarded.
    fn init(&mut self, duration_ms: u64);

    /// Starts the countdown from now.
    fn start(&mut self);

    /// Returns true once the started countdown has run out.
    fn expired(&mut self) -> bool;
}

/// One-shot timer that compares elapsed time from a [`TimeSource`] against
/// its duration on every `expired` check.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct SoftwareTimer<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    duration: I::Duration,
    started_at: Option<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> SoftwareTimer<'t, I, T> {
    /// Creates an unarmed timer with zero duration.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            duration: I::Duration::from_millis(0),
            started_at: None,
        }
    }

    /// Returns true if the timer has been started since the last `init`.
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns the configured duration.
    pub fn duration(&self) -> I::Duration {
        self.duration
    }
}

impl<'t, I: TimeInstant, T: TimeSource<I>> OneShotTimer for SoftwareTimer<'t, I, T> {
    fn init(&mut self, duration_ms: u64) {
        self.duration = I::Duration::from_millis(duration_ms);
        self.started_at = None;
    }

    fn start(&mut self) {
        self.started_at = Some(self.time_source.now());
    }

    fn expired(&mut self) -> bool {
        match self.started_at {
            Some(start) => {
                let elapsed = self.time_source.now().duration_since(start);
                elapsed.as_millis() >= self.duration.as_millis()
            }
            None => false,
        }
    }
}

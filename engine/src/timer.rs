//! Cooldown Timer
//!
//! A one-shot (or repeating) delayed action driven by simulated time.
//! There are no threads and no engine timer manager: the owner calls
//! [`CooldownTimer::advance`] once per tick and handles whatever action
//! comes back, on the same thread, inside the same tick.
//!
//! # Semantics
//!
//! - `arm(delay, action)` schedules `action` to fire once `delay` seconds of
//!   simulated time have elapsed.
//! - Re-arming before expiry replaces the pending action. The old action is
//!   dropped without firing.
//! - `cancel()` drops the pending action without firing.
//! - A delay `<= 0` fires on the next `advance` call, whatever its `dt`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use skyhook_engine::timer::CooldownTimer;
//!
//! #[derive(Clone, Copy)]
//! enum Phase { EndDash }
//!
//! let mut timer = CooldownTimer::new();
//! timer.arm(0.1, Phase::EndDash);
//!
//! // Each frame:
//! if let Some(Phase::EndDash) = timer.advance(delta_time) {
//!     // stop the dash
//! }
//! ```

/// Slack applied when comparing remaining time against zero.
///
/// Accumulated `f32` frame deltas rarely land exactly on the delay, so a
/// timer counts as expired once it is within this many seconds of zero.
pub const TIMER_EPSILON: f32 = 1e-5;

/// A pending delayed action.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCallback<A> {
    /// Simulated seconds until the action fires
    pub remaining_seconds: f32,
    /// The action handed back to the owner on expiry
    pub action: A,
    /// Re-arm with `interval` after firing instead of clearing
    pub repeat: bool,
    /// Delay used when re-arming a repeating callback
    pub interval: f32,
}

/// Single-slot scheduled action, advanced explicitly by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct CooldownTimer<A> {
    pending: Option<ScheduledCallback<A>>,
}

impl<A> Default for CooldownTimer<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A: Clone> CooldownTimer<A> {
    /// Create an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once after `delay_seconds`.
    ///
    /// Replaces any pending action.
    pub fn arm(&mut self, delay_seconds: f32, action: A) {
        self.pending = Some(ScheduledCallback {
            remaining_seconds: delay_seconds,
            action,
            repeat: false,
            interval: delay_seconds,
        });
    }

    /// Schedule `action` to fire every `interval_seconds` until cancelled.
    ///
    /// Non-positive intervals fire at most once per `advance` call.
    pub fn arm_repeating(&mut self, interval_seconds: f32, action: A) {
        self.pending = Some(ScheduledCallback {
            remaining_seconds: interval_seconds,
            action,
            repeat: true,
            interval: interval_seconds,
        });
    }

    /// Drop the pending action, if any, without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an action is waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Seconds until the pending action fires, or `None` when idle.
    pub fn remaining(&self) -> Option<f32> {
        self.pending.as_ref().map(|p| p.remaining_seconds.max(0.0))
    }

    /// Borrow the pending callback.
    pub fn pending(&self) -> Option<&ScheduledCallback<A>> {
        self.pending.as_ref()
    }

    /// Advance simulated time by `dt` seconds.
    ///
    /// Returns the action if the timer expired during this tick. One-shot
    /// timers become idle; repeating timers re-arm, carrying any overshoot.
    pub fn advance(&mut self, dt: f32) -> Option<A> {
        let pending = self.pending.as_mut()?;

        // Already expired (non-positive delay) fires regardless of dt
        if pending.remaining_seconds > TIMER_EPSILON {
            pending.remaining_seconds -= dt.max(0.0);
            if pending.remaining_seconds > TIMER_EPSILON {
                return None;
            }
        }

        if pending.repeat {
            let action = pending.action.clone();
            if pending.interval > 0.0 {
                pending.remaining_seconds += pending.interval;
            } else {
                pending.remaining_seconds = 0.0;
            }
            Some(action)
        } else {
            self.pending.take().map(|p| p.action)
        }
    }
}

//! Double-Tap Detector
//!
//! Turns raw directional key presses into dash actions. Two presses of the
//! same direction within `window` seconds of simulated time produce one
//! `InputAction::Dash`; the triggering press consumes the pair, so a third
//! quick press starts a new pair instead of dashing again.

use std::collections::HashMap;

use super::InputAction;
use crate::player::DashDirection;

/// Default double-tap window in seconds
pub const DOUBLE_TAP_WINDOW: f32 = 0.25;

/// Per-direction double-tap tracker.
#[derive(Debug, Clone)]
pub struct DoubleTapDetector {
    window: f32,
    /// Seconds since the unpaired press for each direction
    press_age: HashMap<DashDirection, f32>,
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::with_window(DOUBLE_TAP_WINDOW)
    }
}

impl DoubleTapDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: f32) -> Self {
        Self {
            window,
            press_age: HashMap::new(),
        }
    }

    pub fn window(&self) -> f32 {
        self.window
    }

    /// Age pending presses by `dt` and forget those older than the window.
    pub fn advance(&mut self, dt: f32) {
        let (dt, window) = (dt.max(0.0), self.window);
        self.press_age.retain(|_, age| {
            *age += dt;
            *age <= window
        });
    }

    /// Register a press. Returns a dash action on the second press in the window.
    pub fn press(&mut self, direction: DashDirection) -> Option<InputAction> {
        match self.press_age.remove(&direction) {
            Some(age) if age <= self.window => Some(InputAction::Dash(direction)),
            _ => {
                self.press_age.insert(direction, 0.0);
                None
            }
        }
    }

    /// Whether `direction` has an unpaired press inside the window.
    pub fn is_pending(&self, direction: DashDirection) -> bool {
        self.press_age.contains_key(&direction)
    }

    /// Forget all pending presses.
    pub fn reset(&mut self) {
        self.press_age.clear();
    }
}

//! Movement Mode Controller
//!
//! Owns the sprint/walk speed cap and the multi-jump budget.
//!
//! # Jump Model
//!
//! - Each `jump()` launches the character straight up with `jump_height`
//!   (vertical velocity overridden, horizontal velocity kept)
//! - Up to `jump_limit` jumps are allowed between landings, so
//!   `jump_limit > 1` permits mid-air jumps
//! - The counter only resets in `on_landed()`, which the host calls once per
//!   ground-contact transition
//!
//! # Usage
//!
//! ```rust,ignore
//! use skyhook_engine::player::MovementModeController;
//!
//! let mut movement = MovementModeController::new();
//!
//! if input.jump_pressed {
//!     movement.jump(&mut body);
//! }
//! if body.step(delta_time) {
//!     movement.on_landed();
//! }
//! ```

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::host::CharacterBody;

/// Walk speed cap in world units per second
pub const WALK_SPEED: f32 = 600.0;

/// Sprint speed cap in world units per second
pub const SPRINT_SPEED: f32 = 1000.0;

/// Upward launch velocity of a jump in world units per second
pub const JUMP_HEIGHT: f32 = 600.0;

/// Jumps allowed between landings
pub const JUMP_LIMIT: u32 = 2;

/// Tuning for [`MovementModeController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Speed cap while walking
    pub walk_speed: f32,
    /// Speed cap while sprinting
    pub sprint_speed: f32,
    /// Vertical launch velocity per jump
    pub jump_height: f32,
    /// Jumps allowed before landing again
    pub jump_limit: u32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            sprint_speed: SPRINT_SPEED,
            jump_height: JUMP_HEIGHT,
            jump_limit: JUMP_LIMIT,
        }
    }
}

/// Speed-cap and jump-budget state owned by one character.
///
/// Invariant: `jump_count` stays within `0..=jump_limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementState {
    pub current_walk_speed: f32,
    pub sprint_speed: f32,
    pub walk_speed: f32,
    pub jump_count: u32,
    pub jump_limit: u32,
}

/// Sprint/walk toggling and multi-jump.
#[derive(Debug, Clone)]
pub struct MovementModeController {
    state: MovementState,

    /// Upward launch velocity per jump
    jump_height: f32,
}

impl Default for MovementModeController {
    fn default() -> Self {
        Self::with_config(MovementConfig::default())
    }
}

impl MovementModeController {
    /// Create a controller with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from explicit tuning.
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            state: MovementState {
                current_walk_speed: config.walk_speed,
                sprint_speed: config.sprint_speed,
                walk_speed: config.walk_speed,
                jump_count: 0,
                jump_limit: config.jump_limit,
            },
            jump_height: config.jump_height,
        }
    }

    /// Snapshot of the movement state.
    pub fn state(&self) -> &MovementState {
        &self.state
    }

    /// Speed cap currently pushed to the movement system.
    pub fn current_speed(&self) -> f32 {
        self.state.current_walk_speed
    }

    /// Whether the sprint cap is active.
    pub fn is_sprinting(&self) -> bool {
        self.state.current_walk_speed == self.state.sprint_speed
            && self.state.sprint_speed != self.state.walk_speed
    }

    /// Jumps used since the last landing.
    pub fn jump_count(&self) -> u32 {
        self.state.jump_count
    }

    /// Jumps allowed between landings.
    pub fn jump_limit(&self) -> u32 {
        self.state.jump_limit
    }

    /// Vertical launch velocity per jump.
    pub fn jump_height(&self) -> f32 {
        self.jump_height
    }

    /// Whether another jump is available before landing.
    pub fn can_jump(&self) -> bool {
        self.state.jump_count < self.state.jump_limit
    }

    /// Select the sprint or walk cap and push it to the movement system.
    ///
    /// Always succeeds; calling it twice with the same flag is a no-op.
    pub fn set_sprinting<B: CharacterBody + ?Sized>(&mut self, sprinting: bool, body: &mut B) {
        let speed = if sprinting {
            self.state.sprint_speed
        } else {
            self.state.walk_speed
        };
        if speed != self.state.current_walk_speed {
            debug!("speed cap {} -> {}", self.state.current_walk_speed, speed);
        }
        self.state.current_walk_speed = speed;
        body.set_max_speed(speed);
    }

    /// Attempt a jump. Returns `true` if the launch was applied.
    ///
    /// Once the budget is spent this is a silent no-op until `on_landed()`.
    pub fn jump<B: CharacterBody + ?Sized>(&mut self, body: &mut B) -> bool {
        if !self.can_jump() {
            return false;
        }

        body.launch(Vec3::new(0.0, 0.0, self.jump_height), false, true);
        self.state.jump_count += 1;
        debug!(
            "jump {}/{} (launch {})",
            self.state.jump_count, self.state.jump_limit, self.jump_height
        );
        true
    }

    /// Reset the jump budget. Call once per ground-contact transition.
    pub fn on_landed(&mut self) {
        if self.state.jump_count != 0 {
            debug!("landed, jump count reset from {}", self.state.jump_count);
        }
        self.state.jump_count = 0;
    }

    /// Reset to walking with a full jump budget.
    pub fn reset<B: CharacterBody + ?Sized>(&mut self, body: &mut B) {
        self.state.jump_count = 0;
        self.set_sprinting(false, body);
    }
}

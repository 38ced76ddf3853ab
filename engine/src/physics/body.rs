//! Kinematic Character Body
//!
//! Minimal walking movement component used by the sandbox and the
//! integration tests. Flat ground plane, constant gravity along -Z.
//!
//! Per step:
//! - Pending movement input accelerates the horizontal velocity, never past
//!   `max(max_speed, current speed)` so launches are not clipped
//! - Without input, grounded bodies brake (constant deceleration plus
//!   friction proportional to speed)
//! - Airborne bodies fall under gravity (midpoint integration)
//! - `step` returns `true` on the airborne -> grounded edge

use serde::{Deserialize, Serialize};

use super::types::Vec3;
use crate::host::{CharacterBody, launch_velocity};
use crate::player::{DEFAULT_BRAKING_FRICTION, WALK_SPEED};

/// Gravity acceleration in world units per second squared
pub const GRAVITY: f32 = 980.0;

/// Input acceleration in world units per second squared
pub const MAX_ACCELERATION: f32 = 2048.0;

/// Constant braking deceleration while grounded with no input
pub const BRAKING_DECELERATION: f32 = 2048.0;

/// Tuning for [`KinematicBody`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub gravity: f32,
    pub max_acceleration: f32,
    pub braking_deceleration: f32,
    pub ground_height: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_acceleration: MAX_ACCELERATION,
            braking_deceleration: BRAKING_DECELERATION,
            ground_height: 0.0,
        }
    }
}

/// Reference [`CharacterBody`] implementation.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    velocity: Vec3,
    /// Flat, normalized body facing
    facing: Vec3,
    max_speed: f32,
    braking_friction: f32,
    grounded: bool,
    pending_input: Vec3,
    config: BodyConfig,
}

impl KinematicBody {
    pub fn new(position: Vec3) -> Self {
        Self::with_config(position, BodyConfig::default())
    }

    pub fn with_config(position: Vec3, config: BodyConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            facing: Vec3::X,
            max_speed: WALK_SPEED,
            braking_friction: DEFAULT_BRAKING_FRICTION,
            grounded: position.z <= config.ground_height,
            pending_input: Vec3::ZERO,
            config,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn braking_friction(&self) -> f32 {
        self.braking_friction
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, self.velocity.y, 0.0).length()
    }

    pub fn pending_input(&self) -> Vec3 {
        self.pending_input
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = position.z <= self.config.ground_height && self.velocity.z <= 0.0;
    }

    /// Turn the body to face `forward`, ignoring its vertical component.
    ///
    /// A vertical or zero vector keeps the current facing.
    pub fn set_facing(&mut self, forward: Vec3) {
        let flat = Vec3::new(forward.x, forward.y, 0.0).normalize_or_zero();
        if flat != Vec3::ZERO {
            self.facing = flat;
        }
    }

    /// Advance the body by `dt` seconds.
    ///
    /// Returns `true` when this step landed the body.
    pub fn step(&mut self, dt: f32) -> bool {
        if dt <= 0.0 {
            return false;
        }
        // Clamp delta time to prevent physics explosions
        let dt = dt.min(0.1);

        if self.grounded && self.velocity.z > 0.0 {
            self.grounded = false;
        }

        let input = std::mem::take(&mut self.pending_input);
        let input = Vec3::new(input.x, input.y, 0.0).clamp_length_max(1.0);
        let mut horizontal = Vec3::new(self.velocity.x, self.velocity.y, 0.0);

        if input.length_squared() > 1e-6 {
            let speed_cap = self.max_speed.max(horizontal.length());
            horizontal += input * self.config.max_acceleration * dt;
            horizontal = horizontal.clamp_length_max(speed_cap);
        } else if self.grounded {
            let speed = horizontal.length();
            let decel = self.config.braking_deceleration + self.braking_friction * speed;
            let new_speed = (speed - decel * dt).max(0.0);
            horizontal = horizontal.normalize_or_zero() * new_speed;
        }

        let prev_vertical = self.velocity.z;
        let mut vertical = prev_vertical;
        if !self.grounded {
            vertical -= self.config.gravity * dt;
        }
        let delta_z = (prev_vertical + vertical) * 0.5 * dt;

        self.velocity = Vec3::new(horizontal.x, horizontal.y, vertical);
        self.position += Vec3::new(horizontal.x * dt, horizontal.y * dt, delta_z);

        let ground = self.config.ground_height;
        if self.position.z <= ground && self.velocity.z <= 0.0 {
            let landed = !self.grounded;
            self.position.z = ground;
            self.velocity.z = 0.0;
            self.grounded = true;
            landed
        } else {
            self.grounded = false;
            false
        }
    }
}

impl CharacterBody for KinematicBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn forward_vector(&self) -> Vec3 {
        self.facing
    }

    fn apply_velocity_delta(&mut self, delta: Vec3) {
        self.velocity += delta;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn stop_all_movement(&mut self) {
        self.velocity = Vec3::ZERO;
        self.pending_input = Vec3::ZERO;
    }

    fn set_max_speed(&mut self, speed: f32) {
        self.max_speed = speed;
    }

    fn set_braking_friction(&mut self, friction: f32) {
        self.braking_friction = friction;
    }

    fn launch(&mut self, velocity: Vec3, override_xy: bool, override_z: bool) {
        self.velocity = launch_velocity(self.velocity, velocity, override_xy, override_z);
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }
}

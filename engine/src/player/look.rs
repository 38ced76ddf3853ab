//! Look Controller
//!
//! First-person view orientation (yaw/pitch) driving the aim used by dash
//! and grapple. Two input styles are supported:
//! - Absolute deltas (mouse): `add_yaw` / `add_pitch` in degrees
//! - Rates (analog stick): `turn_at_rate` / `look_up_at_rate`, scaled by the
//!   base rate and the frame time
//!
//! # Coordinate System
//! - +Z = up
//! - yaw=0, pitch=0 looks along +X
//! - positive yaw turns toward +Y (right), positive pitch looks up
//!
//! Pitch is clamped to ±89 degrees.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch limit in degrees
const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Default turn rate for rate-style input, degrees per second
pub const BASE_TURN_RATE: f32 = 45.0;

/// Default look-up rate for rate-style input, degrees per second
pub const BASE_LOOK_UP_RATE: f32 = 45.0;

/// Tuning for [`LookController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            base_turn_rate: BASE_TURN_RATE,
            base_look_up_rate: BASE_LOOK_UP_RATE,
        }
    }
}

/// View orientation controller.
#[derive(Clone, Debug)]
pub struct LookController {
    /// Horizontal angle in degrees, wraps around
    pub yaw: f32,
    /// Vertical angle in degrees, clamped to ±89
    pub pitch: f32,
    pub base_turn_rate: f32,
    pub base_look_up_rate: f32,
}

impl Default for LookController {
    fn default() -> Self {
        Self::with_config(LookConfig::default())
    }
}

impl LookController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LookConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            base_turn_rate: config.base_turn_rate,
            base_look_up_rate: config.base_look_up_rate,
        }
    }

    /// Add a yaw delta in degrees.
    pub fn add_yaw(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees).rem_euclid(360.0);
    }

    /// Add a pitch delta in degrees (clamped).
    pub fn add_pitch(&mut self, degrees: f32) {
        self.pitch = (self.pitch + degrees).clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    }

    /// Turn at `rate` (normalized -1..1) of the base turn rate for `dt` seconds.
    pub fn turn_at_rate(&mut self, rate: f32, dt: f32) {
        self.add_yaw(rate * self.base_turn_rate * dt);
    }

    /// Look up at `rate` (normalized -1..1) of the base look-up rate for `dt` seconds.
    pub fn look_up_at_rate(&mut self, rate: f32, dt: f32) {
        self.add_pitch(rate * self.base_look_up_rate * dt);
    }

    /// Set the view angles directly, in degrees.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw.rem_euclid(360.0);
        self.pitch = pitch.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    }

    /// View rotation taking local +X (forward), +Y (right), +Z (up) to world.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.yaw.to_radians()) * Quat::from_rotation_y(-self.pitch.to_radians())
    }

    /// Normalized look direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp).normalize()
    }

    /// Horizontal right vector.
    #[inline]
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(-sy, cy, 0.0)
    }

    /// Horizontal forward vector (yaw only).
    #[inline]
    pub fn flat_forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cy, sy, 0.0)
    }

    /// Point the view at `target` from `eye`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        let to_target = target - eye;
        let distance = to_target.length();

        if distance > 0.001 {
            let yaw = to_target.y.atan2(to_target.x).to_degrees();
            let pitch = (to_target.z / distance).asin().to_degrees();
            self.set_angles(yaw, pitch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 0.001
    }

    #[test]
    fn test_default_looks_along_x() {
        let look = LookController::new();
        assert!(approx_vec(look.forward(), Vec3::X));
        assert!(approx_vec(look.right(), Vec3::Y));
    }

    #[test]
    fn test_yaw_turns_right() {
        let mut look = LookController::new();
        look.add_yaw(90.0);
        assert!(approx_vec(look.forward(), Vec3::Y));
        assert!(approx_vec(look.right(), -Vec3::X));
    }

    #[test]
    fn test_yaw_wraps() {
        let mut look = LookController::new();
        look.add_yaw(-90.0);
        assert!((look.yaw - 270.0).abs() < 0.001);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut look = LookController::new();
        look.add_pitch(500.0);
        assert_eq!(look.pitch, 89.0);
        look.add_pitch(-1000.0);
        assert_eq!(look.pitch, -89.0);
    }

    #[test]
    fn test_rate_input_scales_with_dt() {
        let mut look = LookController::new();
        look.turn_at_rate(1.0, 0.5);
        assert!((look.yaw - BASE_TURN_RATE * 0.5).abs() < 0.001);

        look.look_up_at_rate(-1.0, 0.2);
        assert!((look.pitch + BASE_LOOK_UP_RATE * 0.2).abs() < 0.001);
    }

    #[test]
    fn test_rotation_matches_forward() {
        let mut look = LookController::new();
        look.set_angles(35.0, 20.0);
        assert!(approx_vec(look.rotation() * Vec3::X, look.forward()));
        assert!(approx_vec(look.rotation() * Vec3::Y, look.right()));
    }

    #[test]
    fn test_look_at() {
        let mut look = LookController::new();
        look.look_at(Vec3::ZERO, Vec3::new(0.0, 100.0, 100.0));
        assert!((look.yaw - 90.0).abs() < 0.01);
        assert!((look.pitch - 45.0).abs() < 0.01);
    }
}

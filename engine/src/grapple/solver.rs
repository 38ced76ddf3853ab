//! Grapple Solver
//!
//! Pure pull-force computation from an anchor point, the current velocity and
//! the current position.
//!
//! # Force Modes
//!
//! - [`GrappleForceMode::FixedBoost`]: the solver contributes nothing, so
//!   the only pull is the boost captured when the hook attaches.
//! - [`GrappleForceMode::ReflectPull`] applies the reflection term: the
//!   velocity component pointing away from the anchor is reflected back
//!   toward it (`-2 · n · (n · v)`, `n = normalize(position - anchor)`),
//!   recomputed every tick.
//!
//! Both factors use the normalized direction. Scaling by `dot(d, v)` with the
//! raw offset `d` would grow with rope length.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How the grapple pull is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrappleForceMode {
    /// Solver returns zero; pull is the constant connect-time boost.
    #[default]
    FixedBoost,
    /// Solver reflects outward radial velocity every tick, plus the boost.
    ReflectPull,
}

/// Reflection-style pull candidate.
///
/// Returns zero when the position coincides with the anchor or the
/// character is not moving away from it.
pub fn reflect_pull(anchor: Vec3, velocity: Vec3, position: Vec3) -> Vec3 {
    let n = (position - anchor).normalize_or_zero();
    let outward = n.dot(velocity);
    if outward <= 0.0 {
        return Vec3::ZERO;
    }
    -2.0 * n * outward
}

/// Solver contribution for `mode`.
pub fn grapple_force(mode: GrappleForceMode, anchor: Vec3, velocity: Vec3, position: Vec3) -> Vec3 {
    match mode {
        GrappleForceMode::FixedBoost => Vec3::ZERO,
        GrappleForceMode::ReflectPull => reflect_pull(anchor, velocity, position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    #[test]
    fn test_fixed_boost_is_zero() {
        let force = grapple_force(
            GrappleForceMode::FixedBoost,
            Vec3::new(1000.0, 0.0, 500.0),
            Vec3::new(-300.0, 20.0, 0.0),
            Vec3::ZERO,
        );
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_reflect_moving_away() {
        // Anchor at +X, character at origin moving -X (away)
        let force = reflect_pull(Vec3::new(100.0, 0.0, 0.0), Vec3::new(-10.0, 0.0, 0.0), Vec3::ZERO);
        assert!((force - Vec3::new(20.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_reflect_keeps_tangential_motion() {
        // Moving purely sideways relative to the rope
        let force = reflect_pull(Vec3::new(100.0, 0.0, 0.0), Vec3::new(0.0, 50.0, 0.0), Vec3::ZERO);
        assert!(force.length() < EPSILON);
    }

    #[test]
    fn test_reflect_moving_toward_anchor_is_zero() {
        let force = reflect_pull(Vec3::new(100.0, 0.0, 0.0), Vec3::new(30.0, 0.0, 0.0), Vec3::ZERO);
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_reflect_at_anchor_is_zero() {
        let p = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(reflect_pull(p, Vec3::new(1.0, 2.0, 3.0), p), Vec3::ZERO);
    }

    #[test]
    fn test_reflected_velocity_points_at_anchor() {
        let anchor = Vec3::new(0.0, 0.0, 1000.0);
        let position = Vec3::ZERO;
        let velocity = Vec3::new(100.0, 0.0, -400.0);
        let after = velocity + reflect_pull(anchor, velocity, position);

        // Radial component flips sign, magnitude is preserved
        assert!((after.length() - velocity.length()).abs() < 0.01);
        assert!(after.z > 0.0);
        assert!((after.x - 100.0).abs() < EPSILON);
    }
}

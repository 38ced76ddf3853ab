//! Grapple Controller
//!
//! Orchestrates raycast request -> anchor capture -> per-tick pull ->
//! disconnect. Toggling is always allowed; there is no reconnect cooldown.

use glam::Vec3;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::solver::{GrappleForceMode, grapple_force};
use crate::host::{CharacterBody, WorldQuery};

/// Maximum hook range in world units
pub const GRAPPLE_MAX_DISTANCE: f32 = 6000.0;

/// Radius of the swept detection sphere
pub const GRAPPLE_DETECTION_RADIUS: f32 = 20.0;

/// Boost along the look direction captured when the hook attaches
pub const GRAPPLE_BOOST: f32 = 1000.0;

/// Tuning for [`GrappleController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrappleConfig {
    pub max_distance: f32,
    pub detection_radius: f32,
    pub boost_magnitude: f32,
    pub force_mode: GrappleForceMode,
}

impl Default for GrappleConfig {
    fn default() -> Self {
        Self {
            max_distance: GRAPPLE_MAX_DISTANCE,
            detection_radius: GRAPPLE_DETECTION_RADIUS,
            boost_magnitude: GRAPPLE_BOOST,
            force_mode: GrappleForceMode::FixedBoost,
        }
    }
}

/// Grapple state owned by one character.
///
/// Invariant: `pull_force` is zero unless `connected`; `anchor_point` is
/// only meaningful while `connected`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrappleState {
    pub connected: bool,
    pub anchor_point: Vec3,
    pub pull_force: Vec3,
    pub max_distance: f32,
    pub detection_radius: f32,
    pub boost_magnitude: f32,
}

/// Outcome of [`GrappleController::toggle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrappleToggle {
    /// Hook attached at the anchor point
    Attached(Vec3),
    /// Hook released
    Released,
    /// Raycast found nothing; still disconnected
    Missed,
}

/// Grapple hook controller.
#[derive(Debug, Clone)]
pub struct GrappleController {
    state: GrappleState,
    force_mode: GrappleForceMode,
    /// Look-direction boost captured at connect time
    boost: Vec3,
    cable_visible: bool,
}

impl Default for GrappleController {
    fn default() -> Self {
        Self::with_config(GrappleConfig::default())
    }
}

impl GrappleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GrappleConfig) -> Self {
        Self {
            state: GrappleState {
                connected: false,
                anchor_point: Vec3::ZERO,
                pull_force: Vec3::ZERO,
                max_distance: config.max_distance,
                detection_radius: config.detection_radius,
                boost_magnitude: config.boost_magnitude,
            },
            force_mode: config.force_mode,
            boost: Vec3::ZERO,
            cable_visible: false,
        }
    }

    pub fn state(&self) -> &GrappleState {
        &self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.connected
    }

    /// Anchor point while connected.
    pub fn anchor(&self) -> Option<Vec3> {
        self.state.connected.then_some(self.state.anchor_point)
    }

    pub fn pull_force(&self) -> Vec3 {
        self.state.pull_force
    }

    pub fn force_mode(&self) -> GrappleForceMode {
        self.force_mode
    }

    /// Whether the cable visual should be drawn.
    pub fn is_cable_visible(&self) -> bool {
        self.cable_visible
    }

    /// Connect if disconnected, disconnect if connected.
    ///
    /// Connecting sweeps a sphere of `detection_radius` from the character
    /// position along `look_forward` for `max_distance` against static
    /// geometry. A miss leaves the controller disconnected.
    pub fn toggle<B, W>(&mut self, look_forward: Vec3, body: &B, world: &W) -> GrappleToggle
    where
        B: CharacterBody + ?Sized,
        W: WorldQuery + ?Sized,
    {
        if self.state.connected {
            self.release();
            return GrappleToggle::Released;
        }

        let direction = look_forward.normalize_or_zero();
        let origin = body.position();
        let Some(anchor) = world.cast_sphere_static(
            origin,
            direction,
            self.state.max_distance,
            self.state.detection_radius,
        ) else {
            debug!("grapple missed from {:?} along {:?}", origin, direction);
            return GrappleToggle::Missed;
        };

        self.boost = direction * self.state.boost_magnitude;
        self.state.connected = true;
        self.state.anchor_point = anchor;
        self.state.pull_force =
            grapple_force(self.force_mode, anchor, body.velocity(), origin) + self.boost;
        self.cable_visible = true;

        debug!(
            "grapple attached at {:?}, pull {:?}",
            anchor, self.state.pull_force
        );
        GrappleToggle::Attached(anchor)
    }

    /// Disconnect immediately. No-op when already disconnected.
    pub fn release(&mut self) {
        if self.state.connected {
            debug!("grapple released from {:?}", self.state.anchor_point);
        }
        self.state.connected = false;
        self.state.anchor_point = Vec3::ZERO;
        self.state.pull_force = Vec3::ZERO;
        self.boost = Vec3::ZERO;
        self.cable_visible = false;
    }

    /// Velocity to add this tick.
    ///
    /// Zero while disconnected. In `FixedBoost` mode the same connect-time
    /// force is returned every tick; in `ReflectPull` mode the solver term is
    /// recomputed from the current pose.
    pub fn velocity_delta<B: CharacterBody + ?Sized>(&mut self, body: &B) -> Vec3 {
        if !self.state.connected {
            return Vec3::ZERO;
        }

        if self.force_mode == GrappleForceMode::ReflectPull {
            self.state.pull_force = grapple_force(
                self.force_mode,
                self.state.anchor_point,
                body.velocity(),
                body.position(),
            ) + self.boost;
        }

        trace!("grapple pull {:?}", self.state.pull_force);
        self.state.pull_force
    }

    /// Add this tick's pull directly to the body's velocity.
    pub fn apply_per_tick<B: CharacterBody + ?Sized>(&mut self, body: &mut B) {
        let delta = self.velocity_delta(&*body);
        if delta != Vec3::ZERO {
            body.apply_velocity_delta(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test_support::{FixedWorld, RecordingBody};

    #[test]
    fn test_default_disconnected() {
        let grapple = GrappleController::new();
        assert!(!grapple.is_connected());
        assert_eq!(grapple.anchor(), None);
        assert_eq!(grapple.pull_force(), Vec3::ZERO);
        assert!(!grapple.is_cable_visible());
    }

    #[test]
    fn test_toggle_hit_connects() {
        let mut grapple = GrappleController::new();
        let body = RecordingBody {
            position: Vec3::new(0.0, 0.0, 100.0),
            ..Default::default()
        };
        let anchor = Vec3::new(3000.0, 0.0, 800.0);
        let world = FixedWorld::hitting(anchor);

        let result = grapple.toggle(Vec3::new(2.0, 0.0, 0.0), &body, &world);
        assert_eq!(result, GrappleToggle::Attached(anchor));
        assert!(grapple.is_connected());
        assert_eq!(grapple.anchor(), Some(anchor));
        assert!(grapple.is_cable_visible());
        // Fixed boost along the normalized look direction
        assert_eq!(grapple.pull_force(), Vec3::new(GRAPPLE_BOOST, 0.0, 0.0));

        let query = world.last_query.get();
        assert_eq!(
            query,
            Some((
                Vec3::new(0.0, 0.0, 100.0),
                Vec3::X,
                GRAPPLE_MAX_DISTANCE,
                GRAPPLE_DETECTION_RADIUS
            ))
        );
    }

    #[test]
    fn test_toggle_miss_stays_disconnected() {
        let mut grapple = GrappleController::new();
        let body = RecordingBody::default();
        let world = FixedWorld::missing();

        for _ in 0..3 {
            assert_eq!(grapple.toggle(Vec3::X, &body, &world), GrappleToggle::Missed);
            assert!(!grapple.is_connected());
            assert_eq!(grapple.pull_force(), Vec3::ZERO);
        }
    }

    #[test]
    fn test_toggle_twice_releases() {
        let mut grapple = GrappleController::new();
        let body = RecordingBody::default();
        let world = FixedWorld::hitting(Vec3::new(100.0, 0.0, 0.0));

        grapple.toggle(Vec3::X, &body, &world);
        assert_eq!(grapple.toggle(Vec3::X, &body, &world), GrappleToggle::Released);
        assert!(!grapple.is_connected());
        assert_eq!(grapple.pull_force(), Vec3::ZERO);
        assert!(!grapple.is_cable_visible());
        assert_eq!(grapple.anchor(), None);
    }

    #[test]
    fn test_fixed_pull_is_constant_each_tick() {
        let mut grapple = GrappleController::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::hitting(Vec3::new(100.0, 0.0, 0.0));
        grapple.toggle(Vec3::X, &body, &world);

        for tick in 1..=3 {
            grapple.apply_per_tick(&mut body);
            assert_eq!(body.velocity, Vec3::new(GRAPPLE_BOOST * tick as f32, 0.0, 0.0));
        }
    }

    #[test]
    fn test_no_pull_while_disconnected() {
        let mut grapple = GrappleController::new();
        let mut body = RecordingBody::default();
        grapple.apply_per_tick(&mut body);
        assert_eq!(body.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_reflect_mode_recomputes() {
        let mut grapple = GrappleController::with_config(GrappleConfig {
            boost_magnitude: 0.0,
            force_mode: GrappleForceMode::ReflectPull,
            ..Default::default()
        });
        let mut body = RecordingBody::default();
        let world = FixedWorld::hitting(Vec3::new(0.0, 0.0, 1000.0));
        grapple.toggle(Vec3::Z, &body, &world);
        assert_eq!(grapple.pull_force(), Vec3::ZERO);

        // Falling away from an anchor overhead gets reflected upward
        body.velocity = Vec3::new(0.0, 0.0, -200.0);
        let delta = grapple.velocity_delta(&body);
        assert!((delta - Vec3::new(0.0, 0.0, 400.0)).length() < 0.01);
    }
}

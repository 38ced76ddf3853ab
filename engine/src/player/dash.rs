//! Dash Controller
//!
//! Directional dash-dodge with a two-phase timer.
//!
//! # Phases
//!
//! - **Ready**: a dash command is accepted
//! - **Dashing**: the launch has been applied and braking friction is zero,
//!   so the character slides for `active_seconds` without decelerating
//! - **Cooldown**: movement was hard-stopped and friction restored; no new
//!   dash until `cooldown_seconds` elapse
//!
//! Commands received outside **Ready** are dropped. Dashes never queue and
//! never interrupt a dash in flight.
//!
//! # Direction
//!
//! The look forward vector is flattened onto the XY plane (Z zeroed), rotated
//! about +Z by 0° / 180° / -90° / +90° for forward / back / left / right, and
//! renormalized. A look vector pointing straight up or down flattens to zero
//! and yields a zero launch.

use std::fmt;

use glam::{Quat, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::host::CharacterBody;
use crate::timer::CooldownTimer;

/// Launch speed of a dash in world units per second
pub const DASH_DISTANCE: f32 = 6000.0;

/// Length of the frictionless launch window in seconds
pub const DASH_ACTIVE_SECONDS: f32 = 0.1;

/// Delay after the launch window before another dash is allowed
pub const DASH_COOLDOWN_SECONDS: f32 = 1.0;

/// Braking friction restored when the launch window closes
pub const DEFAULT_BRAKING_FRICTION: f32 = 2.0;

/// Tuning for [`DashController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Launch speed along the dash direction
    pub distance: f32,
    /// Frictionless launch window in seconds
    pub active_seconds: f32,
    /// Cooldown after the launch window in seconds
    pub cooldown_seconds: f32,
    /// Friction used while the launch window is open
    pub braking_friction_override: f32,
    /// Friction restored once the launch window closes
    pub default_braking_friction: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            distance: DASH_DISTANCE,
            active_seconds: DASH_ACTIVE_SECONDS,
            cooldown_seconds: DASH_COOLDOWN_SECONDS,
            braking_friction_override: 0.0,
            default_braking_friction: DEFAULT_BRAKING_FRICTION,
        }
    }
}

/// Direction of a dash relative to the look direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashDirection {
    Forward,
    Back,
    Left,
    Right,
}

impl DashDirection {
    /// All four directions, in binding order.
    pub const ALL: [DashDirection; 4] = [
        DashDirection::Forward,
        DashDirection::Back,
        DashDirection::Left,
        DashDirection::Right,
    ];

    /// Rotation about +Z applied to the flattened look vector, in degrees.
    pub fn yaw_offset_degrees(&self) -> f32 {
        match self {
            DashDirection::Forward => 0.0,
            DashDirection::Back => 180.0,
            DashDirection::Left => -90.0,
            DashDirection::Right => 90.0,
        }
    }

    /// Unit horizontal dash direction for a given look vector.
    ///
    /// Returns `Vec3::ZERO` when the look vector has no horizontal part.
    pub fn horizontal_direction(&self, look_forward: Vec3) -> Vec3 {
        let flat = Vec3::new(look_forward.x, look_forward.y, 0.0);
        let rotation = Quat::from_rotation_z(self.yaw_offset_degrees().to_radians());
        let rotated = rotation * flat;
        // Rotation about Z can leave float noise in z
        Vec3::new(rotated.x, rotated.y, 0.0).normalize_or_zero()
    }
}

impl fmt::Display for DashDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DashDirection::Forward => "forward",
            DashDirection::Back => "back",
            DashDirection::Left => "left",
            DashDirection::Right => "right",
        };
        f.write_str(name)
    }
}

/// Dash state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing,
    Cooldown,
}

/// Dash flags and tuning owned by one character.
///
/// Invariant: `can_dash` is false from the trigger until
/// `dash_active_seconds + dash_cooldown_seconds` later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashState {
    pub can_dash: bool,
    pub dash_distance: f32,
    pub dash_cooldown_seconds: f32,
    pub dash_active_seconds: f32,
    pub braking_friction_override: f32,
}

/// Phase change reported by [`DashController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTransition {
    /// Launch window closed; movement stopped, friction restored
    Ended,
    /// Cooldown elapsed; the next dash is accepted
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashTimerAction {
    EndActive,
    EndCooldown,
}

/// Dash-dodge controller.
#[derive(Debug, Clone)]
pub struct DashController {
    state: DashState,
    phase: DashPhase,
    default_braking_friction: f32,
    timer: CooldownTimer<DashTimerAction>,
    /// Impulse applied by the dash in flight, if any
    last_impulse: Option<Vec3>,
}

impl Default for DashController {
    fn default() -> Self {
        Self::with_config(DashConfig::default())
    }
}

impl DashController {
    /// Create a controller with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from explicit tuning.
    pub fn with_config(config: DashConfig) -> Self {
        Self {
            state: DashState {
                can_dash: true,
                dash_distance: config.distance,
                dash_cooldown_seconds: config.cooldown_seconds,
                dash_active_seconds: config.active_seconds,
                braking_friction_override: config.braking_friction_override,
            },
            phase: DashPhase::Ready,
            default_braking_friction: config.default_braking_friction,
            timer: CooldownTimer::new(),
            last_impulse: None,
        }
    }

    pub fn state(&self) -> &DashState {
        &self.state
    }

    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn can_dash(&self) -> bool {
        self.state.can_dash
    }

    /// Seconds until the current phase ends, `None` while ready.
    pub fn phase_remaining(&self) -> Option<f32> {
        self.timer.remaining()
    }

    /// Launch impulse of the dash in flight.
    pub fn last_impulse(&self) -> Option<Vec3> {
        self.last_impulse
    }

    /// Launch impulse a dash in `direction` would apply for `look_forward`.
    pub fn impulse_for(&self, direction: DashDirection, look_forward: Vec3) -> Vec3 {
        direction.horizontal_direction(look_forward) * self.state.dash_distance
    }

    /// Start a dash. Returns `true` if the dash was accepted.
    ///
    /// The launch overwrites both horizontal and vertical velocity.
    pub fn trigger<B: CharacterBody + ?Sized>(
        &mut self,
        direction: DashDirection,
        look_forward: Vec3,
        body: &mut B,
    ) -> bool {
        if self.phase != DashPhase::Ready {
            return false;
        }

        let impulse = self.impulse_for(direction, look_forward);
        body.set_braking_friction(self.state.braking_friction_override);
        body.launch(impulse, true, true);

        self.state.can_dash = false;
        self.phase = DashPhase::Dashing;
        self.last_impulse = Some(impulse);
        self.timer
            .arm(self.state.dash_active_seconds, DashTimerAction::EndActive);

        debug!("dash {} started, impulse {:?}", direction, impulse);
        true
    }

    /// Advance the dash timers by `dt` seconds.
    pub fn advance<B: CharacterBody + ?Sized>(
        &mut self,
        dt: f32,
        body: &mut B,
    ) -> Option<DashTransition> {
        match self.timer.advance(dt)? {
            DashTimerAction::EndActive => {
                body.stop_all_movement();
                self.timer
                    .arm(self.state.dash_cooldown_seconds, DashTimerAction::EndCooldown);
                body.set_braking_friction(self.default_braking_friction);
                self.phase = DashPhase::Cooldown;
                self.last_impulse = None;
                debug!("dash ended, cooling down {}s", self.state.dash_cooldown_seconds);
                Some(DashTransition::Ended)
            }
            DashTimerAction::EndCooldown => {
                self.state.can_dash = true;
                self.phase = DashPhase::Ready;
                debug!("dash ready");
                Some(DashTransition::Ready)
            }
        }
    }

    /// Return to **Ready** immediately, dropping any pending phase change.
    ///
    /// Friction is restored if a launch window was open.
    pub fn reset<B: CharacterBody + ?Sized>(&mut self, body: &mut B) {
        if self.phase == DashPhase::Dashing {
            body.set_braking_friction(self.default_braking_friction);
        }
        self.timer.cancel();
        self.state.can_dash = true;
        self.phase = DashPhase::Ready;
        self.last_impulse = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test_support::RecordingBody;

    const EPSILON: f32 = 0.001;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_direction_rotations() {
        let look = Vec3::new(1.0, 0.0, 0.0);
        assert!(approx_vec(DashDirection::Forward.horizontal_direction(look), Vec3::X));
        assert!(approx_vec(DashDirection::Right.horizontal_direction(look), Vec3::Y));
        assert!(approx_vec(DashDirection::Left.horizontal_direction(look), -Vec3::Y));
        assert!(approx_vec(DashDirection::Back.horizontal_direction(look), -Vec3::X));
    }

    #[test]
    fn test_direction_ignores_pitch() {
        // Looking up 45 degrees still dashes flat
        let look = Vec3::new(0.0, 1.0, 1.0).normalize();
        let dir = DashDirection::Forward.horizontal_direction(look);
        assert!(approx_vec(dir, Vec3::Y));
        assert_eq!(dir.z, 0.0);
    }

    #[test]
    fn test_direction_degenerate_look() {
        let dir = DashDirection::Left.horizontal_direction(Vec3::Z);
        assert_eq!(dir, Vec3::ZERO);
    }

    #[test]
    fn test_trigger_from_ready() {
        let mut dash = DashController::new();
        let mut body = RecordingBody {
            velocity: Vec3::new(10.0, 10.0, -300.0),
            ..Default::default()
        };

        assert!(dash.trigger(DashDirection::Forward, Vec3::X, &mut body));
        assert_eq!(dash.phase(), DashPhase::Dashing);
        assert!(!dash.can_dash());
        assert_eq!(body.braking_friction, 0.0);
        // Velocity overwritten, not added
        assert!(approx_vec(body.velocity, Vec3::new(DASH_DISTANCE, 0.0, 0.0)));
        assert_eq!(body.launches.len(), 1);
        assert!(body.launches[0].1 && body.launches[0].2);
    }

    #[test]
    fn test_full_cycle_timing() {
        let mut dash = DashController::new();
        let mut body = RecordingBody::default();
        dash.trigger(DashDirection::Forward, Vec3::X, &mut body);

        // Launch window: 0.1s
        assert_eq!(dash.advance(0.05, &mut body), None);
        assert_eq!(dash.advance(0.05, &mut body), Some(DashTransition::Ended));
        assert_eq!(dash.phase(), DashPhase::Cooldown);
        assert_eq!(body.stops, 1);
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.braking_friction, DEFAULT_BRAKING_FRICTION);
        assert!(!dash.can_dash());

        // Cooldown: 1.0s
        for _ in 0..19 {
            assert_eq!(dash.advance(0.05, &mut body), None);
            assert!(!dash.can_dash());
        }
        assert_eq!(dash.advance(0.05, &mut body), Some(DashTransition::Ready));
        assert_eq!(dash.phase(), DashPhase::Ready);
        assert!(dash.can_dash());
    }

    #[test]
    fn test_trigger_ignored_while_dashing_or_cooling() {
        let mut dash = DashController::new();
        let mut body = RecordingBody::default();
        dash.trigger(DashDirection::Forward, Vec3::X, &mut body);

        assert!(!dash.trigger(DashDirection::Left, Vec3::X, &mut body));
        assert_eq!(dash.phase(), DashPhase::Dashing);
        assert_eq!(body.launches.len(), 1);

        dash.advance(0.1, &mut body);
        assert!(!dash.trigger(DashDirection::Back, Vec3::X, &mut body));
        assert_eq!(dash.phase(), DashPhase::Cooldown);
        assert!(!dash.can_dash());
        assert_eq!(body.launches.len(), 1);
    }

    #[test]
    fn test_equal_magnitudes() {
        let dash = DashController::new();
        let look = Vec3::new(0.3, -0.8, 0.2);
        for direction in DashDirection::ALL {
            let impulse = dash.impulse_for(direction, look);
            assert!((impulse.length() - DASH_DISTANCE).abs() < 0.5);
        }
    }

    #[test]
    fn test_reset_mid_dash_restores_friction() {
        let mut dash = DashController::new();
        let mut body = RecordingBody::default();
        dash.trigger(DashDirection::Right, Vec3::X, &mut body);

        dash.reset(&mut body);
        assert_eq!(dash.phase(), DashPhase::Ready);
        assert!(dash.can_dash());
        assert_eq!(body.braking_friction, DEFAULT_BRAKING_FRICTION);
        assert_eq!(dash.advance(5.0, &mut body), None);
    }
}

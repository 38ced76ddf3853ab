//! First-Person Character
//!
//! Composition root for the movement augmentations. The character exclusively
//! owns one of each controller; nothing is shared between characters.
//!
//! # Frame Flow
//!
//! 1. Route this frame's inputs through [`FirstPersonCharacter::handle_action`]
//! 2. Call [`FirstPersonCharacter::tick`] once; it advances the dash timers and
//!    applies the summed per-tick velocity contributions
//! 3. Step the host movement system, and call
//!    [`FirstPersonCharacter::on_landed`] on the airborne -> grounded edge
//!
//! # Usage
//!
//! ```rust,ignore
//! use skyhook_engine::{CharacterConfig, FirstPersonCharacter, InputAction, KinematicBody, StaticWorld};
//!
//! let mut character = FirstPersonCharacter::with_config(&CharacterConfig::default());
//! let mut body = KinematicBody::new(spawn);
//!
//! character.handle_action(InputAction::Jump, &mut body, &world, dt);
//! character.tick(dt, &mut body);
//! if body.step(dt) {
//!     character.on_landed();
//! }
//! for event in character.drain_events() {
//!     hud.show(event);
//! }
//! ```

use glam::Vec3;
use log::trace;

use super::dash::{DashController, DashDirection, DashTransition};
use super::look::LookController;
use super::movement_mode::MovementModeController;
use crate::config::CharacterConfig;
use crate::grapple::{GrappleController, GrappleToggle};
use crate::host::{CharacterBody, WorldQuery};
use crate::input::InputAction;

/// Muzzle offset from the character in view space (forward, right, up)
pub const GUN_OFFSET: Vec3 = Vec3::new(100.0, 0.0, 10.0);

/// Something the host may want to react to (sound, HUD, projectile spawn).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacterEvent {
    Jumped { count: u32 },
    DashStarted { direction: DashDirection, impulse: Vec3 },
    DashEnded,
    DashReady,
    GrappleAttached { anchor: Vec3 },
    GrappleReleased,
    /// Projectile spawn request; spawning is the host's job
    FireRequested { origin: Vec3, direction: Vec3 },
}

/// Independent per-tick velocity contributions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickContribution {
    pub base: Vec3,
    pub dash: Vec3,
    pub grapple: Vec3,
}

impl TickContribution {
    /// Sum of all contributions.
    pub fn total(&self) -> Vec3 {
        self.base + self.dash + self.grapple
    }
}

/// A first-person character with multi-jump, sprint, dash and grapple.
#[derive(Debug, Clone)]
pub struct FirstPersonCharacter {
    movement: MovementModeController,
    dash: DashController,
    grapple: GrappleController,
    look: LookController,
    gun_offset: Vec3,
    /// Timer-driven events not yet drained by the host
    events: Vec<CharacterEvent>,
}

impl Default for FirstPersonCharacter {
    fn default() -> Self {
        Self::with_config(&CharacterConfig::default())
    }
}

impl FirstPersonCharacter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &CharacterConfig) -> Self {
        Self {
            movement: MovementModeController::with_config(config.movement),
            dash: DashController::with_config(config.dash),
            grapple: GrappleController::with_config(config.grapple),
            look: LookController::with_config(config.look),
            gun_offset: config.gun_offset,
            events: Vec::new(),
        }
    }

    pub fn movement(&self) -> &MovementModeController {
        &self.movement
    }

    pub fn dash(&self) -> &DashController {
        &self.dash
    }

    pub fn grapple(&self) -> &GrappleController {
        &self.grapple
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    pub fn look_mut(&mut self) -> &mut LookController {
        &mut self.look
    }

    /// Route one input into the owning controller.
    ///
    /// Returns the event produced by a successful discrete action. Rejected
    /// actions (jump budget spent, dash not ready, grapple miss) return `None`
    /// and change nothing. `dt` scales rate-style look inputs.
    pub fn handle_action<B, W>(
        &mut self,
        action: InputAction,
        body: &mut B,
        world: &W,
        dt: f32,
    ) -> Option<CharacterEvent>
    where
        B: CharacterBody + ?Sized,
        W: WorldQuery + ?Sized,
    {
        match action {
            InputAction::Jump => self.movement.jump(body).then(|| CharacterEvent::Jumped {
                count: self.movement.jump_count(),
            }),
            InputAction::SprintPressed => {
                self.movement.set_sprinting(true, body);
                None
            }
            InputAction::SprintReleased => {
                self.movement.set_sprinting(false, body);
                None
            }
            InputAction::Fire => Some(CharacterEvent::FireRequested {
                origin: body.position() + self.look.rotation() * self.gun_offset,
                direction: self.look.forward(),
            }),
            InputAction::GrappleToggle => {
                match self.grapple.toggle(self.look.forward(), &*body, world) {
                    GrappleToggle::Attached(anchor) => {
                        Some(CharacterEvent::GrappleAttached { anchor })
                    }
                    GrappleToggle::Released => Some(CharacterEvent::GrappleReleased),
                    GrappleToggle::Missed => None,
                }
            }
            InputAction::Dash(direction) => {
                let look_forward = self.look.forward();
                self.dash
                    .trigger(direction, look_forward, body)
                    .then(|| CharacterEvent::DashStarted {
                        direction,
                        impulse: self.dash.last_impulse().unwrap_or(Vec3::ZERO),
                    })
            }
            InputAction::MoveForward(value) => {
                if value != 0.0 {
                    let forward = body.forward_vector();
                    body.add_movement_input(forward, value);
                }
                None
            }
            InputAction::MoveRight(value) => {
                if value != 0.0 {
                    let forward = body.forward_vector();
                    let right = Vec3::new(-forward.y, forward.x, 0.0).normalize_or_zero();
                    body.add_movement_input(right, value);
                }
                None
            }
            InputAction::Turn(degrees) => {
                self.look.add_yaw(degrees);
                None
            }
            InputAction::TurnRate(rate) => {
                self.look.turn_at_rate(rate, dt);
                None
            }
            InputAction::LookUp(degrees) => {
                self.look.add_pitch(degrees);
                None
            }
            InputAction::LookUpRate(rate) => {
                self.look.look_up_at_rate(rate, dt);
                None
            }
        }
    }

    /// Advance timers and apply this tick's velocity contributions.
    ///
    /// Dash phase changes are queued for [`Self::drain_events`].
    pub fn tick<B: CharacterBody + ?Sized>(&mut self, dt: f32, body: &mut B) -> TickContribution {
        match self.dash.advance(dt, body) {
            Some(DashTransition::Ended) => self.events.push(CharacterEvent::DashEnded),
            Some(DashTransition::Ready) => self.events.push(CharacterEvent::DashReady),
            None => {}
        }

        let contribution = TickContribution {
            base: Vec3::ZERO,
            dash: Vec3::ZERO,
            grapple: self.grapple.velocity_delta(&*body),
        };

        let total = contribution.total();
        if total != Vec3::ZERO {
            trace!("tick contribution {:?}", contribution);
            body.apply_velocity_delta(total);
        }
        contribution
    }

    /// Reset the jump budget. Call once per ground-contact transition.
    pub fn on_landed(&mut self) {
        self.movement.on_landed();
    }

    /// Take the queued timer-driven events.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }

    /// Back to walking, dash ready, grapple released, jump budget full.
    pub fn reset<B: CharacterBody + ?Sized>(&mut self, body: &mut B) {
        self.movement.reset(body);
        self.dash.reset(body);
        self.grapple.release();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::test_support::{FixedWorld, RecordingBody};
    use crate::player::DashPhase;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 0.01
    }

    #[test]
    fn test_jump_events_report_count() {
        let mut character = FirstPersonCharacter::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::missing();

        assert_eq!(
            character.handle_action(InputAction::Jump, &mut body, &world, 0.016),
            Some(CharacterEvent::Jumped { count: 1 })
        );
        assert_eq!(
            character.handle_action(InputAction::Jump, &mut body, &world, 0.016),
            Some(CharacterEvent::Jumped { count: 2 })
        );
        assert_eq!(
            character.handle_action(InputAction::Jump, &mut body, &world, 0.016),
            None
        );
    }

    #[test]
    fn test_sprint_press_release() {
        let mut character = FirstPersonCharacter::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::missing();

        character.handle_action(InputAction::SprintPressed, &mut body, &world, 0.016);
        assert_eq!(body.max_speed, 1000.0);
        character.handle_action(InputAction::SprintReleased, &mut body, &world, 0.016);
        assert_eq!(body.max_speed, 600.0);
    }

    #[test]
    fn test_dash_uses_look_direction() {
        let mut character = FirstPersonCharacter::new();
        character.look_mut().set_angles(90.0, 30.0);
        let mut body = RecordingBody::default();
        let world = FixedWorld::missing();

        let event = character.handle_action(
            InputAction::Dash(DashDirection::Forward),
            &mut body,
            &world,
            0.016,
        );
        match event {
            Some(CharacterEvent::DashStarted { direction, impulse }) => {
                assert_eq!(direction, DashDirection::Forward);
                assert!(approx_vec(impulse, Vec3::new(0.0, 6000.0, 0.0)));
            }
            other => panic!("expected dash start, got {:?}", other),
        }
        assert_eq!(character.dash().phase(), DashPhase::Dashing);
    }

    #[test]
    fn test_tick_queues_dash_events() {
        let mut character = FirstPersonCharacter::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::missing();
        character.handle_action(InputAction::Dash(DashDirection::Back), &mut body, &world, 0.0);

        character.tick(0.1, &mut body);
        assert_eq!(character.drain_events(), vec![CharacterEvent::DashEnded]);
        assert!(character.drain_events().is_empty());

        character.tick(1.0, &mut body);
        assert_eq!(character.drain_events(), vec![CharacterEvent::DashReady]);
    }

    #[test]
    fn test_tick_applies_grapple_contribution() {
        let mut character = FirstPersonCharacter::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::hitting(Vec3::new(500.0, 0.0, 0.0));

        assert_eq!(
            character.handle_action(InputAction::GrappleToggle, &mut body, &world, 0.016),
            Some(CharacterEvent::GrappleAttached {
                anchor: Vec3::new(500.0, 0.0, 0.0)
            })
        );

        let contribution = character.tick(0.016, &mut body);
        assert_eq!(contribution.base, Vec3::ZERO);
        assert_eq!(contribution.dash, Vec3::ZERO);
        assert!(approx_vec(contribution.grapple, Vec3::new(1000.0, 0.0, 0.0)));
        assert!(approx_vec(body.velocity, Vec3::new(1000.0, 0.0, 0.0)));
    }

    #[test]
    fn test_fire_reports_muzzle() {
        let mut character = FirstPersonCharacter::new();
        character.look_mut().set_angles(90.0, 0.0);
        let mut body = RecordingBody {
            position: Vec3::new(10.0, 20.0, 30.0),
            ..Default::default()
        };
        let world = FixedWorld::missing();

        match character.handle_action(InputAction::Fire, &mut body, &world, 0.016) {
            Some(CharacterEvent::FireRequested { origin, direction }) => {
                assert!(approx_vec(origin, Vec3::new(10.0, 120.0, 40.0)));
                assert!(approx_vec(direction, Vec3::Y));
            }
            other => panic!("expected fire request, got {:?}", other),
        }
    }

    #[test]
    fn test_movement_axes_use_body_facing() {
        let mut character = FirstPersonCharacter::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::missing();

        character.handle_action(InputAction::MoveForward(1.0), &mut body, &world, 0.016);
        character.handle_action(InputAction::MoveRight(-0.5), &mut body, &world, 0.016);
        character.handle_action(InputAction::MoveRight(0.0), &mut body, &world, 0.016);

        assert_eq!(body.inputs.len(), 2);
        assert!(approx_vec(body.inputs[0].0, Vec3::X));
        assert_eq!(body.inputs[0].1, 1.0);
        assert!(approx_vec(body.inputs[1].0, Vec3::Y));
        assert_eq!(body.inputs[1].1, -0.5);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut character = FirstPersonCharacter::new();
        let mut body = RecordingBody::default();
        let world = FixedWorld::hitting(Vec3::new(500.0, 0.0, 0.0));
        character.handle_action(InputAction::Jump, &mut body, &world, 0.0);
        character.handle_action(InputAction::GrappleToggle, &mut body, &world, 0.0);
        character.handle_action(InputAction::Dash(DashDirection::Left), &mut body, &world, 0.0);

        character.reset(&mut body);
        assert_eq!(character.movement().jump_count(), 0);
        assert!(character.dash().can_dash());
        assert!(!character.grapple().is_connected());
    }
}

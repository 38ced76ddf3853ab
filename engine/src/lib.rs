//! Skyhook Engine Library
//!
//! Movement augmentations for a first-person character: sprint, multi-jump,
//! directional dash with cooldown, and a grapple hook. The core is
//! host-agnostic; it talks to the world through the traits in [`host`].
//!
//! # Modules
//!
//! - [`timer`] - Tick-driven one-shot/repeating cooldown timer
//! - [`player`] - Movement mode, dash, look, and the composed character
//! - [`grapple`] - Grapple solver and controller
//! - [`input`] - Logical input actions and double-tap dash detection
//! - [`host`] - `CharacterBody` / `WorldQuery` host interfaces
//! - [`physics`] - Reference host: kinematic body and static box scene
//! - [`config`] - JSON-loadable tuning
//!
//! # Example
//!
//! ```ignore
//! use skyhook_engine::{
//!     Aabb, CharacterConfig, FirstPersonCharacter, InputAction, KinematicBody, StaticWorld,
//! };
//! use glam::Vec3;
//!
//! let config = CharacterConfig::default();
//! let mut character = FirstPersonCharacter::with_config(&config);
//! let mut body = KinematicBody::new(Vec3::ZERO);
//! let world = StaticWorld::with_boxes(vec![Aabb::new(
//!     Vec3::new(2000.0, -500.0, 0.0),
//!     Vec3::new(2200.0, 500.0, 3000.0),
//! )]);
//!
//! // Each frame:
//! character.handle_action(InputAction::Jump, &mut body, &world, dt);
//! body.set_facing(character.look().flat_forward());
//! character.tick(dt, &mut body);
//! if body.step(dt) {
//!     character.on_landed();
//! }
//! ```

pub mod config;
pub mod grapple;
pub mod host;
pub mod input;
pub mod physics;
pub mod player;
pub mod timer;

// Re-export the commonly used types at crate level for convenience
pub use config::{CharacterConfig, ConfigError};
pub use grapple::{GrappleController, GrappleForceMode, GrappleToggle};
pub use host::{CharacterBody, WorldQuery};
pub use input::{DoubleTapDetector, InputAction};
pub use physics::{Aabb, KinematicBody, StaticWorld};
pub use player::{
    CharacterEvent, DashController, DashDirection, DashPhase, FirstPersonCharacter,
    LookController, MovementModeController, TickContribution,
};
pub use timer::CooldownTimer;

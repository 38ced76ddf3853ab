//! Player Module
//!
//! Movement augmentations for a first-person character.
//!
//! # Components
//!
//! - [`MovementModeController`] - Walk/sprint speed switching and multi-jump budget
//! - [`DashController`] - Directional dash impulse with active window and cooldown
//! - [`LookController`] - Yaw/pitch view orientation used for aiming
//! - [`FirstPersonCharacter`] - Owns one of each (plus the grapple) and routes input

pub mod character;
pub mod dash;
pub mod look;
pub mod movement_mode;

pub use character::{CharacterEvent, FirstPersonCharacter, GUN_OFFSET, TickContribution};
pub use dash::{
    DASH_ACTIVE_SECONDS, DASH_COOLDOWN_SECONDS, DASH_DISTANCE, DEFAULT_BRAKING_FRICTION,
    DashConfig, DashController, DashDirection, DashPhase, DashState, DashTransition,
};
pub use look::{BASE_LOOK_UP_RATE, BASE_TURN_RATE, LookConfig, LookController};
pub use movement_mode::{
    JUMP_HEIGHT, JUMP_LIMIT, MovementConfig, MovementModeController, MovementState, SPRINT_SPEED,
    WALK_SPEED,
};

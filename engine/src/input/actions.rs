//! Input Actions
//!
//! The closed set of logical player inputs the character understands.
//! Mapping physical keys, touch or gamepads onto these actions is the host's
//! job; the core only consumes the logical events.

use crate::player::DashDirection;

/// Discrete and axis inputs routed into [`crate::player::FirstPersonCharacter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Jump pressed
    Jump,
    /// Sprint modifier pressed
    SprintPressed,
    /// Sprint modifier released
    SprintReleased,
    /// Fire pressed
    Fire,
    /// Grapple toggle pressed
    GrappleToggle,
    /// Directional double-tap
    Dash(DashDirection),
    /// Forward/back movement axis, -1..1
    MoveForward(f32),
    /// Right/left movement axis, -1..1
    MoveRight(f32),
    /// Absolute yaw delta in degrees (mouse)
    Turn(f32),
    /// Yaw rate, -1..1 of the base turn rate (stick)
    TurnRate(f32),
    /// Absolute pitch delta in degrees (mouse)
    LookUp(f32),
    /// Pitch rate, -1..1 of the base look-up rate (stick)
    LookUpRate(f32),
}

impl InputAction {
    /// Whether this is a continuous axis value rather than a button event.
    pub fn is_axis(&self) -> bool {
        matches!(
            self,
            InputAction::MoveForward(_)
                | InputAction::MoveRight(_)
                | InputAction::Turn(_)
                | InputAction::TurnRate(_)
                | InputAction::LookUp(_)
                | InputAction::LookUpRate(_)
        )
    }
}

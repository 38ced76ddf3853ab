//! Input Module
//!
//! Logical player inputs, decoupled from any device or windowing system.
//!
//! # Example
//!
//! ```rust,ignore
//! use skyhook_engine::input::{DoubleTapDetector, InputAction};
//! use skyhook_engine::player::DashDirection;
//!
//! let mut taps = DoubleTapDetector::new();
//!
//! // Each frame:
//! taps.advance(delta_time);
//! if w_pressed {
//!     if let Some(action) = taps.press(DashDirection::Forward) {
//!         character.handle_action(action, &mut body, &world, delta_time);
//!     }
//! }
//! ```

pub mod actions;
pub mod double_tap;

pub use actions::InputAction;
pub use double_tap::{DOUBLE_TAP_WINDOW, DoubleTapDetector};

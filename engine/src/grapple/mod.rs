//! Grapple Module
//!
//! Grapple hook that pulls the player toward a raycast-detected anchor.
//!
//! # Components
//!
//! - [`solver`] - Pure pull-force computation
//! - [`controller`] - Toggle, anchor capture and per-tick pull

pub mod controller;
pub mod solver;

pub use controller::{
    GrappleConfig, GrappleController, GrappleState, GrappleToggle,
    GRAPPLE_BOOST, GRAPPLE_DETECTION_RADIUS, GRAPPLE_MAX_DISTANCE,
};
pub use solver::{GrappleForceMode, grapple_force, reflect_pull};

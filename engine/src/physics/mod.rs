//! Physics module
//!
//! Reference host for the movement core: a kinematic walking body and a
//! static box scene. Built from scratch without external physics library
//! dependencies.
//!
//! # Unit System
//!
//! **1 unit = 1 centimetre**, **+Z is up**
//!
//! - Distances in centimetres
//! - Velocities in cm/s
//! - Gravity 980 cm/s²
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`body`] - `KinematicBody`, the reference `CharacterBody`
//! - [`collision`] - Ray-AABB slab tests and the `StaticWorld` sphere sweep

pub mod body;
pub mod collision;
pub mod types;

pub use body::{BodyConfig, GRAVITY, KinematicBody};
pub use collision::{Aabb, StaticWorld, SweepHit, aabb_surface_normal, ray_aabb_intersect};
pub use types::{Quat, Vec3};

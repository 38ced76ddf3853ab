//! Math types for the reference host
//!
//! `glam` vectors and quaternions, Z-up, in centimetres.

pub use glam::{Quat, Vec3};

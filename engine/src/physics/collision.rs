//! Collision detection module
//!
//! Static scene queries for the reference host. Sphere sweeps are reduced to
//! ray casts against boxes inflated by the sphere radius.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use skyhook_engine::physics::{Aabb, StaticWorld};
//! use skyhook_engine::host::WorldQuery;
//! use glam::Vec3;
//!
//! let mut world = StaticWorld::new();
//! world.add_box(Aabb::new(Vec3::new(900.0, -100.0, 0.0), Vec3::new(1100.0, 100.0, 2000.0)));
//!
//! if let Some(impact) = world.cast_sphere_static(Vec3::ZERO, Vec3::X, 6000.0, 20.0) {
//!     println!("Hook lands at {:?}", impact);
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::types::Vec3;
use crate::host::WorldQuery;

/// Axis-aligned box of static geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box from two corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box from center and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grow every face outward by `amount`.
    pub fn inflated(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(amount),
            max: self.max + Vec3::splat(amount),
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Closest point on or inside the box.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Ray-AABB entry distance using the slab method.
///
/// `ray_dir` must be normalized. Returns the distance to the first face the
/// ray enters, or `0.0` when the origin is already inside the box. Boxes
/// entirely behind the origin miss.
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < 1e-10 {
            // Parallel to this slab: must already be between its planes
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        Some(t_min.max(0.0))
    } else {
        None
    }
}

/// Computes the outward surface normal for a point on an AABB surface.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// Result of a sphere sweep against the static scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Impact point on the struck box
    pub position: Vec3,
    /// Outward normal of the struck face
    pub normal: Vec3,
    /// Distance travelled by the sphere centre
    pub distance: f32,
    /// Index of the struck box
    pub index: usize,
}

/// Static scene made of axis-aligned boxes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticWorld {
    boxes: Vec<Aabb>,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boxes(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    /// Add a box and return its index.
    pub fn add_box(&mut self, aabb: Aabb) -> usize {
        self.boxes.push(aabb);
        self.boxes.len() - 1
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Sweep a sphere and return the nearest blocking hit.
    pub fn sweep_sphere(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        radius: f32,
    ) -> Option<SweepHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }
        let radius = radius.max(0.0);

        let mut nearest: Option<SweepHit> = None;
        for (index, aabb) in self.boxes.iter().enumerate() {
            let grown = aabb.inflated(radius);
            let Some(t) = ray_aabb_intersect(origin, dir, grown.min, grown.max) else {
                continue;
            };
            if t > max_distance || nearest.is_some_and(|hit| hit.distance <= t) {
                continue;
            }

            let centre = origin + dir * t;
            let position = aabb.closest_point(centre);
            nearest = Some(SweepHit {
                position,
                normal: aabb_surface_normal(position, aabb.min, aabb.max),
                distance: t,
                index,
            });
        }
        nearest
    }
}

impl WorldQuery for StaticWorld {
    fn cast_sphere_static(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        radius: f32,
    ) -> Option<Vec3> {
        self.sweep_sphere(origin, direction, max_distance, radius)
            .map(|hit| hit.position)
    }
}

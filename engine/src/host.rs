//! Host Interfaces
//!
//! The engine-side collaborators the movement core talks to. Any host
//! integration (a game engine binding, the sandbox binary, the test harness)
//! provides these; the core never owns the world or the movement component.
//!
//! World convention: **+Z is up**.

use glam::Vec3;

/// Pose queries and movement-system mutators for one character.
pub trait CharacterBody {
    /// World position of the character.
    fn position(&self) -> Vec3;

    /// Current velocity of the movement component.
    fn velocity(&self) -> Vec3;

    /// Actor forward vector (body facing, used for movement axes).
    fn forward_vector(&self) -> Vec3;

    /// Add `delta` to the current velocity.
    fn apply_velocity_delta(&mut self, delta: Vec3);

    /// Overwrite the current velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Zero velocity and drop any pending movement input.
    fn stop_all_movement(&mut self);

    /// Cap for input-driven ground speed.
    fn set_max_speed(&mut self, speed: f32);

    /// Deceleration applied while grounded with no movement input.
    fn set_braking_friction(&mut self, friction: f32);

    /// Instantaneous launch.
    ///
    /// `override_xy` replaces the horizontal velocity instead of adding to
    /// it, `override_z` does the same for the vertical component.
    fn launch(&mut self, velocity: Vec3, override_xy: bool, override_z: bool);

    /// Queue movement input along `direction` scaled by `scale` for the
    /// next movement step.
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);
}

/// Synchronous world queries.
pub trait WorldQuery {
    /// Sweep a sphere of `radius` from `origin` along `direction` for up to
    /// `max_distance`, against static geometry only.
    ///
    /// Returns the impact point of the first hit.
    fn cast_sphere_static(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        radius: f32,
    ) -> Option<Vec3>;
}

/// Launch helper implementing the override rules of [`CharacterBody::launch`].
///
/// Hosts that keep velocity as a plain `Vec3` can call this from their
/// `launch` implementation.
pub fn launch_velocity(current: Vec3, launch: Vec3, override_xy: bool, override_z: bool) -> Vec3 {
    let (x, y) = if override_xy {
        (launch.x, launch.y)
    } else {
        (current.x + launch.x, current.y + launch.y)
    };
    let z = if override_z {
        launch.z
    } else {
        current.z + launch.z
    };
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_override_both() {
        let v = launch_velocity(Vec3::new(5.0, 5.0, 5.0), Vec3::new(1.0, 2.0, 0.0), true, true);
        assert_eq!(v, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_launch_vertical_only_keeps_horizontal() {
        let v = launch_velocity(Vec3::new(3.0, -4.0, -9.0), Vec3::new(0.0, 0.0, 600.0), false, true);
        assert_eq!(v, Vec3::new(3.0, -4.0, 600.0));
    }

    #[test]
    fn test_launch_additive() {
        let v = launch_velocity(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0), false, false);
        assert_eq!(v, Vec3::new(2.0, 2.0, 2.0));
    }
}

use cgmath::prelude::*;
use cgmath::{Point3, Vector3};

use crate::config::PhysicsConfig;
use crate::float::*;
use crate::targeting;

/// Index of a cube in the playground's cube list
pub type CubeId = usize;

/// How the renderer should color a cube
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorState {
    Neutral,
    Targeted,
    Falling,
}

impl ColorState {
    /// Value of the `u_color` uniform in the cube shader
    pub fn shader_id(self) -> i32 {
        match self {
            ColorState::Neutral => 0,
            ColorState::Targeted => 1,
            ColorState::Falling => 2,
        }
    }
}

/// Unit cube placed in the scene
#[derive(Clone, Debug)]
pub struct Cube {
    /// Name used in logs and reports
    pub name: String,
    /// Position of the center in world coordinates
    pub position: Point3<Float>,
    /// Displacement per frame, zero when at rest
    pub velocity: Vector3<Float>,
    /// Is this the closest cube on the camera's line of sight
    pub targeted: bool,
    /// Is the cube falling after being released
    pub is_moving: bool,
    /// Can the cube be picked up
    pub movable: bool,
}

impl Cube {
    pub fn new(name: &str, position: Point3<Float>, movable: bool) -> Cube {
        Cube {
            name: name.to_string(),
            position,
            velocity: Vector3::zero(),
            targeted: false,
            is_moving: false,
            movable,
        }
    }

    /// Check whether the line of sight of the camera hits a face of this cube
    pub fn is_targeted(&self, orig: Point3<Float>, dir: Vector3<Float>, half_extent: Float) -> bool {
        targeting::ray_hits_box(orig, dir, self.position, half_extent)
    }

    /// Apply gravity for one frame and move the cube.
    /// Returns false once the cube has landed on the ground.
    pub fn advance(&mut self, dt: Float, physics: &PhysicsConfig) -> bool {
        // Velocity is a per frame displacement, not a rate
        self.velocity.y -= dt * physics.gravity;
        self.position += self.velocity;
        if self.position.y < physics.rest_height {
            self.position.y = physics.rest_height;
            self.velocity = Vector3::zero();
            self.is_moving = false;
            return false;
        }
        true
    }

    pub fn color_state(&self) -> ColorState {
        if self.is_moving {
            ColorState::Falling
        } else if self.targeted {
            ColorState::Targeted
        } else {
            ColorState::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn falls_monotonically_and_lands() {
        let physics = PhysicsConfig::default();
        let mut cube = Cube::new("cube", Point3::new(0.0, 3.0, 0.0), true);
        cube.is_moving = true;

        let mut last_y = cube.position.y;
        let mut steps = 0;
        while cube.advance(0.02, &physics) {
            assert!(cube.position.y < last_y);
            last_y = cube.position.y;
            steps += 1;
            assert!(steps < 1000, "cube never landed");
        }
        assert_abs_diff_eq!(cube.position.y, 0.5);
        assert_eq!(cube.velocity, Vector3::zero());
        assert!(!cube.is_moving);

        for _ in 0..5 {
            assert!(!cube.advance(0.02, &physics));
        }
    }

    #[test]
    fn resting_cube_stays_put() {
        let physics = PhysicsConfig::default();
        let mut cube = Cube::new("cube", Point3::new(1.5, 0.5, -1.5), true);
        assert!(!cube.advance(0.02, &physics));
        assert_eq!(cube.position, Point3::new(1.5, 0.5, -1.5));
        assert_eq!(cube.velocity, Vector3::zero());
    }

    #[test]
    fn velocity_carries_horizontal_motion() {
        let physics = PhysicsConfig::default();
        let mut cube = Cube::new("cube", Point3::new(0.0, 2.0, 0.0), true);
        cube.velocity = Vector3::new(0.1, 0.0, -0.2);
        assert!(cube.advance(0.02, &physics));
        assert_abs_diff_eq!(cube.position.x, 0.1);
        assert_abs_diff_eq!(cube.position.z, -0.2);
        assert_abs_diff_eq!(cube.position.y, 2.0 - 0.01);
    }

    #[test]
    fn falling_color_wins_over_targeted() {
        let mut cube = Cube::new("cube", Point3::new(0.0, 0.5, 0.0), true);
        assert_eq!(cube.color_state(), ColorState::Neutral);
        cube.targeted = true;
        assert_eq!(cube.color_state(), ColorState::Targeted);
        cube.is_moving = true;
        assert_eq!(cube.color_state(), ColorState::Falling);
        assert_eq!(cube.color_state().shader_id(), 2);
    }
}

//! Cubes on a floor that can be picked up, carried around and tossed
use std::collections::BTreeSet;

use cgmath::prelude::*;
use cgmath::{Deg, Matrix3, Point3, Vector3};

use crate::camera::{Camera, Look};
use crate::config::Config;
use crate::cube::{Cube, CubeId};
use crate::float::*;
use crate::targeting;
use crate::toss;

/// Everything that happened since the previous frame
#[derive(Clone, Debug)]
pub struct Frame {
    /// Seconds since the start of the program
    pub time: Float,
    /// Seconds since the previous frame
    pub dt: Float,
    /// Is the drag button held down
    pub drag: bool,
    /// Translation of the camera during this frame
    pub translation: Vector3<Float>,
    /// Rotation of the camera during this frame
    pub look: Option<Look>,
}

pub struct Playground {
    pub cubes: Vec<Cube>,
    /// Light source, drawn but never targeted
    pub light: Cube,
    /// Cubes currently falling
    falling: BTreeSet<CubeId>,
    targeted: Option<CubeId>,
    held: Option<CubeId>,
    /// Camera direction before the latest look change
    prev_front: Vector3<Float>,
    /// Start of the frame with the latest look change
    last_look: Float,
}

impl Playground {
    /// Nine cubes on a 3x3 grid in front of the camera
    pub fn new() -> Playground {
        let mut cubes = Vec::new();
        let grid = [
            (0.0, 0.0),
            (1.5, 1.5),
            (1.5, 0.0),
            (1.5, -1.5),
            (0.0, -1.5),
            (-1.5, -1.5),
            (-1.5, 0.0),
            (-1.5, 1.5),
            (0.0, 1.5),
        ];
        for (i, &(x, z)) in grid.iter().enumerate() {
            cubes.push(Cube::new(&format!("cube{}", i), Point3::new(x, 0.5, z), true));
        }
        Playground::with_cubes(cubes)
    }

    pub fn with_cubes(cubes: Vec<Cube>) -> Playground {
        Playground {
            cubes,
            light: Cube::new("light", Point3::new(0.0, 4.0, 1.5), false),
            falling: BTreeSet::new(),
            targeted: None,
            held: None,
            prev_front: -Vector3::unit_z(),
            last_look: 0.0,
        }
    }

    pub fn targeted(&self) -> Option<CubeId> {
        self.targeted
    }

    pub fn held(&self) -> Option<CubeId> {
        self.held
    }

    pub fn is_falling(&self, id: CubeId) -> bool {
        self.falling.contains(&id)
    }

    /// Advance the scene by one frame. `camera` is the camera after this
    /// frame's input has been applied.
    pub fn step(&mut self, camera: &Camera, frame: &Frame, config: &Config) {
        if let Some(look) = frame.look {
            self.carry_rotated(camera, &look, frame.drag);
            self.prev_front = look.prev_front;
            // The turn happened over the whole frame, not at its end
            self.last_look = frame.time - frame.dt;
        }
        self.update_target(camera, config);
        self.update_drag(camera, frame, config);
        self.update_falling(frame.dt, config);
    }

    /// Swing a held cube around the camera along with the view
    fn carry_rotated(&mut self, camera: &Camera, look: &Look, drag: bool) {
        let id = match self.held {
            Some(id) if drag => id,
            _ => return,
        };
        let cube = &mut self.cubes[id];
        let to_cube = cube.position - camera.pos;
        // Positive yaw turns right, which is a negative rotation around up
        let around_y = Matrix3::from_axis_angle(Vector3::unit_y(), Deg(-look.d_yaw));
        let around_right = Matrix3::from_axis_angle(camera.right, Deg(look.d_pitch));
        cube.position = camera.pos + around_right * around_y * to_cube;
    }

    fn update_target(&mut self, camera: &Camera, config: &Config) {
        for cube in &mut self.cubes {
            cube.targeted = false;
        }
        let target = targeting::nearest_targeted(
            &self.cubes,
            camera.pos,
            camera.front,
            config.physics.half_extent,
        );
        if let Some(id) = target {
            self.cubes[id].targeted = true;
        }
        if target != self.targeted {
            match target {
                Some(id) => log::debug!("Targeting {}", self.cubes[id].name),
                None => log::debug!("No target"),
            }
        }
        self.targeted = target;
    }

    fn update_drag(&mut self, camera: &Camera, frame: &Frame, config: &Config) {
        let grab = if frame.drag {
            self.targeted.filter(|&id| self.cubes[id].movable)
        } else {
            None
        };

        if let Some(id) = self.held {
            if grab != Some(id) {
                self.release(id, camera, frame, config);
            }
        }

        if let Some(id) = grab {
            if self.held != Some(id) {
                log::info!("Picked up {}", self.cubes[id].name);
            }
            self.falling.remove(&id);
            let cube = &mut self.cubes[id];
            cube.is_moving = false;
            cube.position += frame.translation;
            cube.velocity = frame.translation;
        }
        self.held = grab;
    }

    fn release(&mut self, id: CubeId, camera: &Camera, frame: &Frame, config: &Config) {
        let cube = &mut self.cubes[id];
        let r = cube.position - camera.pos;
        let duration = frame.time - self.last_look;
        match toss::release_velocity(self.prev_front, camera.front, camera.right, duration, r, &config.toss) {
            Some(v) => cube.velocity += v,
            None => log::debug!("No toss impulse for {}", cube.name),
        }
        cube.is_moving = true;
        self.falling.insert(id);
        log::info!("Released {} with velocity {:?}", cube.name, cube.velocity);
    }

    /// Integrate falling cubes and drop the ones that landed
    fn update_falling(&mut self, dt: Float, config: &Config) {
        let cubes = &mut self.cubes;
        self.falling.retain(|&id| {
            let cube = &mut cubes[id];
            let falling = cube.advance(dt, &config.physics);
            if !falling {
                log::info!("{} landed at {:?}", cube.name, cube.position);
            }
            falling
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOLERANCE: Float = 1e3 * Float::EPSILON;

    fn camera_at(pos: Point3<Float>) -> Camera {
        Camera::new(pos)
    }

    fn frame(time: Float, drag: bool) -> Frame {
        Frame {
            time,
            dt: 0.02,
            drag,
            translation: Vector3::zero(),
            look: None,
        }
    }

    fn check_invariants(playground: &Playground) {
        let targeted = playground.cubes.iter().filter(|c| c.targeted).count();
        assert!(targeted <= 1);
        for (id, cube) in playground.cubes.iter().enumerate() {
            assert_eq!(cube.is_moving, playground.is_falling(id), "{}", cube.name);
            if !cube.movable {
                assert!(!cube.is_moving);
                assert_ne!(playground.held(), Some(id));
            }
        }
    }

    #[test]
    fn grid_layout() {
        let playground = Playground::new();
        assert_eq!(playground.cubes.len(), 9);
        assert_eq!(playground.cubes[4].name, "cube4");
        assert!(playground.cubes.iter().all(|c| c.position.y == 0.5 && c.movable));
        assert!(!playground.light.movable);
    }

    #[test]
    fn default_view_targets_front_cube() {
        // From (0, 1.5, 4) looking down -z the ray passes over the whole grid
        let mut playground = Playground::new();
        let config = Config::tutorial();
        let camera = Camera::default();
        playground.step(&camera, &frame(0.0, false), &config);
        assert_eq!(playground.targeted(), None);

        // Lower the camera to cube height, cube8 is in front of cube0 and cube4
        let camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.02, false), &config);
        assert_eq!(playground.targeted(), Some(8));
        assert!(playground.cubes[8].targeted);
        check_invariants(&playground);
    }

    #[test]
    fn target_moves_when_cube_is_gone() {
        let mut playground = Playground::with_cubes(vec![
            Cube::new("near", Point3::new(0.0, 0.5, 0.0), true),
            Cube::new("far", Point3::new(0.0, 0.5, -3.0), true),
        ]);
        let config = Config::tutorial();
        let camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.0, false), &config);
        assert_eq!(playground.targeted(), Some(0));

        playground.cubes[0].position.x = 5.0;
        playground.step(&camera, &frame(0.02, false), &config);
        assert_eq!(playground.targeted(), Some(1));
        assert!(!playground.cubes[0].targeted);
        check_invariants(&playground);
    }

    #[test]
    fn held_cube_follows_camera_translation() {
        let mut playground = Playground::with_cubes(vec![Cube::new(
            "cube",
            Point3::new(0.0, 0.5, 0.0),
            true,
        )]);
        let config = Config::tutorial();
        let mut camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.0, true), &config);
        assert_eq!(playground.held(), Some(0));

        let translation = Vector3::new(0.0, 0.0, -0.05);
        camera.pos += translation;
        let moved = Frame {
            translation,
            ..frame(0.02, true)
        };
        playground.step(&camera, &moved, &config);
        assert_eq!(playground.held(), Some(0));
        assert_abs_diff_eq!(playground.cubes[0].position.z, -0.05);
        assert_eq!(playground.cubes[0].velocity, translation);
        check_invariants(&playground);
    }

    #[test]
    fn release_tosses_and_cube_lands() {
        let mut playground = Playground::with_cubes(vec![Cube::new(
            "cube",
            Point3::new(0.0, 0.5, 0.0),
            true,
        )]);
        let config = Config::tutorial();
        let mut camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.0, true), &config);
        assert_eq!(playground.held(), Some(0));

        // Turn right and up while holding, the cube swings along
        let look = camera.look(20.0, 200.0, &config.camera);
        let turned = Frame {
            look: Some(look),
            ..frame(0.02, true)
        };
        playground.step(&camera, &turned, &config);
        assert_eq!(playground.held(), Some(0));
        let cube = &playground.cubes[0];
        assert!(cube.position.x > 0.0);
        assert!(cube.position.y > 0.5);
        assert_abs_diff_eq!((cube.position - camera.pos).magnitude(), 4.0, epsilon = TOLERANCE);

        // Let go of the button
        playground.step(&camera, &frame(0.04, false), &config);
        assert_eq!(playground.held(), None);
        assert!(playground.is_falling(0));
        assert!(playground.cubes[0].is_moving);
        check_invariants(&playground);

        let mut time = 0.04;
        while playground.is_falling(0) {
            time += 0.02;
            playground.step(&camera, &frame(time, false), &config);
            check_invariants(&playground);
            assert!(time < 60.0, "cube never landed");
        }
        let cube = &playground.cubes[0];
        assert_eq!(cube.position.y, 0.5);
        assert_eq!(cube.velocity, Vector3::zero());
        // Thrown to the right
        assert!(cube.position.x > 0.0);
    }

    #[test]
    fn letting_go_mid_turn_still_tosses() {
        let mut playground = Playground::with_cubes(vec![Cube::new(
            "cube",
            Point3::new(0.0, 0.5, 0.0),
            true,
        )]);
        let config = Config::tutorial();
        let mut camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.0, true), &config);

        let look = camera.look(20.0, 0.0, &config.camera);
        let turned = Frame {
            look: Some(look),
            ..frame(0.02, true)
        };
        playground.step(&camera, &turned, &config);
        assert_eq!(playground.held(), Some(0));

        // Keep turning right and up and let go in the same frame
        let look = camera.look(20.0, 200.0, &config.camera);
        let flicked = Frame {
            look: Some(look),
            ..frame(0.04, false)
        };
        playground.step(&camera, &flicked, &config);
        assert_eq!(playground.held(), None);
        assert!(playground.is_falling(0));
        let velocity = playground.cubes[0].velocity;
        assert!(velocity.x > 0.0, "{:?}", velocity);
        assert!(velocity.y > 0.0, "{:?}", velocity);
        check_invariants(&playground);
    }

    #[test]
    fn release_happens_once_when_target_is_lost() {
        let mut playground = Playground::with_cubes(vec![Cube::new(
            "cube",
            Point3::new(0.0, 0.5, 0.0),
            true,
        )]);
        let config = Config::tutorial();
        let mut camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.0, true), &config);
        assert_eq!(playground.held(), Some(0));

        let look = camera.look(20.0, 0.0, &config.camera);
        let turned = Frame {
            look: Some(look),
            ..frame(0.02, true)
        };
        playground.step(&camera, &turned, &config);
        assert_eq!(playground.held(), Some(0));

        // Cube leaves the line of sight while the button stays down
        playground.cubes[0].position += Vector3::new(3.0, 1.5, 0.0);
        playground.step(&camera, &frame(0.04, true), &config);
        assert_eq!(playground.held(), None);
        assert!(playground.is_falling(0));
        let velocity = playground.cubes[0].velocity;
        assert!(velocity.x > 0.0);

        playground.step(&camera, &frame(0.06, true), &config);
        // Only gravity, no second impulse
        assert_abs_diff_eq!(playground.cubes[0].velocity.x, velocity.x);
        check_invariants(&playground);
    }

    #[test]
    fn falling_cube_can_be_caught() {
        let mut playground = Playground::with_cubes(vec![Cube::new(
            "cube",
            Point3::new(0.0, 0.5, 0.0),
            true,
        )]);
        let config = Config::tutorial();
        let camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.cubes[0].position.y = 2.0;
        playground.cubes[0].is_moving = true;
        playground.falling.insert(0);

        // Catch it once it drops into the line of sight
        let mut time = 0.0;
        while playground.held().is_none() {
            time += 0.02;
            playground.step(&camera, &frame(time, true), &config);
            check_invariants(&playground);
            assert!(time < 60.0, "cube never caught");
        }
        assert!(!playground.is_falling(0));
        assert!(!playground.cubes[0].is_moving);
        assert!(playground.cubes[0].position.y > 0.5);
    }

    #[test]
    fn immovable_cubes_are_not_picked_up() {
        let mut playground = Playground::with_cubes(vec![Cube::new(
            "anchor",
            Point3::new(0.0, 0.5, 0.0),
            false,
        )]);
        let config = Config::tutorial();
        let camera = camera_at(Point3::new(0.0, 0.5, 4.0));
        playground.step(&camera, &frame(0.0, true), &config);
        assert_eq!(playground.targeted(), Some(0));
        assert_eq!(playground.held(), None);
        playground.step(&camera, &frame(0.02, false), &config);
        assert!(!playground.is_falling(0));
        check_invariants(&playground);
    }
}

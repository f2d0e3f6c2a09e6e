/// Module containing the camera functionality
use cgmath::prelude::*;
use cgmath::{Deg, Matrix4, Point3, Rad, Vector3};

use glium::glutin::event::VirtualKeyCode;

use crate::config::CameraConfig;
use crate::float::*;
use crate::input::InputState;

/// Change of the viewing direction caused by one mouse movement
#[derive(Clone, Copy, Debug)]
pub struct Look {
    /// Forward vector before the movement
    pub prev_front: Vector3<Float>,
    /// Change in yaw in degrees, positive to the right
    pub d_yaw: Float,
    /// Change in pitch in degrees, positive upwards
    pub d_pitch: Float,
}

/// First person camera controlled with yaw and pitch angles
#[derive(Clone, Debug)]
pub struct Camera {
    /// Position of the camera in world coordinates
    pub pos: Point3<Float>,
    /// Rotation around the world y-axis in degrees
    pub yaw: Float,
    /// Rotation above the horizon in degrees
    pub pitch: Float,
    pub front: Vector3<Float>,
    pub right: Vector3<Float>,
    pub up: Vector3<Float>,
    /// Vertical field-of-view in degrees
    pub zoom: Float,
    /// Near plane of the camera
    near: Float,
    /// Far plane of the camera
    far: Float,
}

impl Default for Camera {
    fn default() -> Camera {
        Camera::new(Point3::new(0.0, 1.5, 4.0))
    }
}

impl Camera {
    pub fn new(pos: Point3<Float>) -> Camera {
        let mut camera = Camera {
            pos,
            yaw: -90.0,
            pitch: 0.0,
            front: -Vector3::unit_z(),
            right: Vector3::unit_x(),
            up: Vector3::unit_y(),
            zoom: 45.0,
            near: 0.1,
            far: 100.0,
        };
        camera.update_vectors();
        camera
    }

    fn update_vectors(&mut self) {
        let yaw = Rad::from(Deg(self.yaw));
        let pitch = Rad::from(Deg(self.pitch));
        self.front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(Vector3::unit_y()).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Get the world to camera transformation matrix
    fn world_to_camera(&self) -> Matrix4<Float> {
        Matrix4::look_at_rh(self.pos, self.pos + self.front, self.up)
    }

    /// Get the camera to clip space transformation matrix
    fn camera_to_clip(&self, aspect: Float) -> Matrix4<Float> {
        cgmath::perspective(Deg(self.zoom), aspect, self.near, self.far)
    }

    /// Get the combined world to clip transformation
    pub fn world_to_clip(&self, aspect: Float) -> Matrix4<Float> {
        self.camera_to_clip(aspect) * self.world_to_camera()
    }

    /// Move with wasd, returns the translation of the camera
    pub fn process_keys(&mut self, input: &InputState, dt: Float, config: &CameraConfig) -> Vector3<Float> {
        let distance = config.speed * dt;
        let mut movement = Vector3::zero();
        if input.is_pressed(VirtualKeyCode::W) {
            movement += self.front * distance;
        }
        if input.is_pressed(VirtualKeyCode::S) {
            movement -= self.front * distance;
        }
        if input.is_pressed(VirtualKeyCode::A) {
            movement -= self.right * distance;
        }
        if input.is_pressed(VirtualKeyCode::D) {
            movement += self.right * distance;
        }
        self.pos += movement;
        movement
    }

    /// Turn the camera by mouse offsets in pixels, `dy` positive upwards
    pub fn look(&mut self, dx: Float, dy: Float, config: &CameraConfig) -> Look {
        let prev_front = self.front;
        let prev_yaw = self.yaw;
        let prev_pitch = self.pitch;

        self.yaw += dx * config.sensitivity;
        // Keep the view from flipping over
        self.pitch = (self.pitch + dy * config.sensitivity).max(-89.0).min(89.0);
        self.update_vectors();

        Look {
            prev_front,
            d_yaw: self.yaw - prev_yaw,
            d_pitch: self.pitch - prev_pitch,
        }
    }

    /// Scrolling changes the field-of-view
    pub fn zoom(&mut self, d_scroll: Float) {
        self.zoom = (self.zoom - d_scroll).max(1.0).min(45.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: Float = 1e3 * Float::EPSILON;

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = Camera::default();
        assert_relative_eq!(camera.front, -Vector3::unit_z(), epsilon = TOLERANCE);
        assert_relative_eq!(camera.right, Vector3::unit_x(), epsilon = TOLERANCE);
        assert_relative_eq!(camera.up, Vector3::unit_y(), epsilon = TOLERANCE);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        let config = CameraConfig::default();
        let look = camera.look(0.0, 5000.0, &config);
        assert_eq!(camera.pitch, 89.0);
        assert_eq!(look.d_pitch, 89.0);
        let look = camera.look(0.0, 10.0, &config);
        assert_eq!(look.d_pitch, 0.0);
    }

    #[test]
    fn look_reports_previous_front() {
        let mut camera = Camera::default();
        let config = CameraConfig::default();
        let look = camera.look(900.0, 0.0, &config);
        assert_relative_eq!(look.prev_front, -Vector3::unit_z(), epsilon = TOLERANCE);
        assert_relative_eq!(look.d_yaw, 90.0);
        // Turned right from -z to +x
        assert_relative_eq!(camera.front, Vector3::unit_x(), epsilon = TOLERANCE);
    }

    #[test]
    fn zoom_stays_in_range() {
        let mut camera = Camera::default();
        camera.zoom(100.0);
        assert_eq!(camera.zoom, 1.0);
        camera.zoom(-100.0);
        assert_eq!(camera.zoom, 45.0);
    }
}

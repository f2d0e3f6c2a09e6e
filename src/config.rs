use std::time::Duration;

use glium::glutin::{dpi::LogicalSize, event::VirtualKeyCode};

use crate::float::*;

#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Downward acceleration applied to falling cubes
    pub gravity: Float,
    /// Height of a cube center resting on the ground
    pub rest_height: Float,
    /// Half of the edge length of a cube
    pub half_extent: Float,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            rest_height: 0.5,
            half_extent: 0.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TossConfig {
    /// Damping from camera angular velocity to cube speed.
    /// Picked by feel, there is no physical meaning behind it.
    pub scale: Float,
}

impl Default for TossConfig {
    fn default() -> Self {
        Self { scale: 0.005 }
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    /// Movement speed in units per second
    pub speed: Float,
    /// Degrees of rotation per pixel of mouse movement
    pub sensitivity: Float,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            speed: 2.5,
            sensitivity: 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Width of the window in pixels
    pub width: u32,
    /// Height of the window in pixels
    pub height: u32,
    /// Minimum time between two frames
    pub frame_time: Duration,
    pub physics: PhysicsConfig,
    pub toss: TossConfig,
    pub camera: CameraConfig,
}

impl Config {
    pub fn tutorial() -> Self {
        Self {
            width: 800,
            height: 600,
            frame_time: Duration::from_millis(20),
            physics: PhysicsConfig::default(),
            toss: TossConfig::default(),
            camera: CameraConfig::default(),
        }
    }

    pub fn low_gravity() -> Self {
        Self {
            physics: PhysicsConfig {
                gravity: 0.1,
                ..PhysicsConfig::default()
            },
            ..Self::tutorial()
        }
    }

    pub fn dimensions(&self) -> LogicalSize<u32> {
        LogicalSize::new(self.width, self.height)
    }

    pub fn handle_key(&mut self, key: VirtualKeyCode) {
        match key {
            VirtualKeyCode::Equals => {
                self.toss.scale *= 2.0;
                log::info!("Toss scale: {}", self.toss.scale);
            }
            VirtualKeyCode::Minus => {
                self.toss.scale /= 2.0;
                log::info!("Toss scale: {}", self.toss.scale);
            }
            VirtualKeyCode::F1 => {
                log::info!("Config: Tutorial");
                *self = Self::tutorial();
            }
            VirtualKeyCode::F2 => {
                log::info!("Config: Low gravity");
                *self = Self::low_gravity();
            }
            _ => (),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::tutorial()
    }
}

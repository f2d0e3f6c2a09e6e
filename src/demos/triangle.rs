use cgmath::{Matrix4, Rad};

use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::{uniform, Surface, VertexBuffer};

use super::Demo;
use crate::error::Error;
use crate::float::*;
use crate::vertex::ColorVertex;

const ORANGE: [f32; 3] = [1.0, 0.5, 0.2];

/// Single triangle spinning around the view axis
pub struct Triangle {
    program: glium::Program,
    vertices: VertexBuffer<ColorVertex>,
}

impl Triangle {
    pub fn new<F: Facade>(facade: &F) -> Result<Triangle, Error> {
        let v = |x, y| ColorVertex {
            pos: [x, y, 0.0],
            color: ORANGE,
        };
        let vertices = VertexBuffer::new(facade, &[v(-0.5, -0.5), v(0.5, -0.5), v(0.0, 0.5)])?;
        Ok(Triangle {
            program: super::gradient_program(facade)?,
            vertices,
        })
    }

    /// Rotation after `seconds`, one radian per second
    pub fn transform(seconds: Float) -> Matrix4<Float> {
        Matrix4::from_angle_z(Rad(seconds))
    }
}

impl Demo for Triangle {
    fn draw(&self, target: &mut glium::Frame, seconds: Float) -> Result<(), Error> {
        let uniforms = uniform! {
            transform: Triangle::transform(seconds).into_array(),
        };
        target.draw(
            &self.vertices,
            &NoIndices(PrimitiveType::TrianglesList),
            &self.program,
            &uniforms,
            &Default::default(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::Vector4;

    #[test]
    fn half_turn_after_pi_seconds() {
        let top = Vector4::new(0.0, 0.5, 0.0, 1.0);
        let rotated = Triangle::transform(std::f64::consts::PI as Float) * top;
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, -0.5, epsilon = 1e-6);
    }
}

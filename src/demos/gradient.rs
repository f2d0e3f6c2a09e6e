use cgmath::prelude::*;
use cgmath::Matrix4;

use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::{uniform, Surface, VertexBuffer};

use super::Demo;
use crate::error::Error;
use crate::float::*;
use crate::vertex::ColorVertex;

/// Two triangles side by side with red, green and blue corners
pub struct Gradient {
    program: glium::Program,
    vertices: VertexBuffer<ColorVertex>,
}

pub fn gradient_vertices() -> Vec<ColorVertex> {
    let v = |x, y, color| ColorVertex {
        pos: [x, y, 0.0],
        color,
    };
    let red = [1.0, 0.0, 0.0];
    let green = [0.0, 1.0, 0.0];
    let blue = [0.0, 0.0, 1.0];
    vec![
        // Left
        v(-0.9, -0.5, red),
        v(-0.1, -0.5, green),
        v(-0.5, 0.5, blue),
        // Right
        v(0.1, -0.5, blue),
        v(0.9, -0.5, red),
        v(0.5, 0.5, green),
    ]
}

impl Gradient {
    pub fn new<F: Facade>(facade: &F) -> Result<Gradient, Error> {
        Ok(Gradient {
            program: super::gradient_program(facade)?,
            vertices: VertexBuffer::new(facade, &gradient_vertices())?,
        })
    }
}

impl Demo for Gradient {
    fn draw(&self, target: &mut glium::Frame, _seconds: Float) -> Result<(), Error> {
        let identity: Matrix4<Float> = Matrix4::identity();
        let uniforms = uniform! {
            transform: identity.into_array(),
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

    #[test]
    fn triangles_do_not_overlap() {
        let vertices = gradient_vertices();
        assert_eq!(vertices.len(), 6);
        assert!(vertices[..3].iter().all(|v| v.pos[0] < 0.0));
        assert!(vertices[3..].iter().all(|v| v.pos[0] > 0.0));
    }
}

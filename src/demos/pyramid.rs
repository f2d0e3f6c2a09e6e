use cgmath::{Deg, Matrix4, Point3, Rad, Vector3};

use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::texture::{RawImage2d, Texture2d};
use glium::uniforms::MagnifySamplerFilter;
use glium::{uniform, DrawParameters, Surface, VertexBuffer};

use image::{Rgba, RgbaImage};

use super::Demo;
use crate::error::Error;
use crate::float::*;
use crate::vertex::TexVertex;

const TEXTURE_SIZE: u32 = 64;
const CHECKER_SIZE: u32 = 8;

/// Square based pyramid with a checkered texture turning around the y-axis
pub struct Pyramid {
    program: glium::Program,
    vertices: VertexBuffer<TexVertex>,
    texture: Texture2d,
}

/// Checkerboard image used as the pyramid texture
pub fn checker_image() -> RgbaImage {
    RgbaImage::from_fn(TEXTURE_SIZE, TEXTURE_SIZE, |x, y| {
        if (x / CHECKER_SIZE + y / CHECKER_SIZE) % 2 == 0 {
            Rgba([230, 180, 60, 255])
        } else {
            Rgba([40, 40, 60, 255])
        }
    })
}

pub fn pyramid_vertices() -> Vec<TexVertex> {
    let apex = [0.0, 0.5, 0.0];
    let base = [
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, -0.5, -0.5],
        [-0.5, -0.5, -0.5],
    ];
    let v = |pos, tex_coords| TexVertex { pos, tex_coords };

    let mut vertices = Vec::with_capacity(18);
    for i in 0..4 {
        let next = (i + 1) % 4;
        vertices.push(v(base[i], [0.0, 0.0]));
        vertices.push(v(base[next], [1.0, 0.0]));
        vertices.push(v(apex, [0.5, 1.0]));
    }
    // Bottom as two triangles
    for &(i, t) in &[
        (0, [0.0, 0.0]),
        (3, [0.0, 1.0]),
        (2, [1.0, 1.0]),
        (2, [1.0, 1.0]),
        (1, [1.0, 0.0]),
        (0, [0.0, 0.0]),
    ] {
        vertices.push(v(base[i], t));
    }
    vertices
}

impl Pyramid {
    pub fn new<F: Facade>(facade: &F) -> Result<Pyramid, Error> {
        let program = glium::Program::from_source(
            facade,
            include_str!("../shaders/textured.vert"),
            include_str!("../shaders/textured.frag"),
            None,
        )?;
        let image = checker_image();
        let dimensions = image.dimensions();
        let pixels = image.into_raw();
        let raw = RawImage2d::from_raw_rgba_reversed(&pixels, dimensions);
        Ok(Pyramid {
            program,
            vertices: VertexBuffer::new(facade, &pyramid_vertices())?,
            texture: Texture2d::new(facade, raw)?,
        })
    }

    pub fn transform(seconds: Float, aspect: Float) -> Matrix4<Float> {
        let projection = cgmath::perspective(Deg(45.0), aspect, 0.1, 100.0);
        let view = Matrix4::look_at_rh(
            Point3::new(0.0, 0.8, 2.5),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::unit_y(),
        );
        projection * view * Matrix4::from_angle_y(Rad(seconds))
    }
}

impl Demo for Pyramid {
    fn draw(&self, target: &mut glium::Frame, seconds: Float) -> Result<(), Error> {
        let (width, height) = target.get_dimensions();
        let uniforms = uniform! {
            transform: Pyramid::transform(seconds, width.to_float() / height.to_float()).into_array(),
            tex: self.texture.sampled().magnify_filter(MagnifySamplerFilter::Nearest),
        };
        let draw_parameters = DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            ..Default::default()
        };
        target.draw(
            &self.vertices,
            &NoIndices(PrimitiveType::TrianglesList),
            &self.program,
            &uniforms,
            &draw_parameters,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sides_and_a_square_bottom() {
        let vertices = pyramid_vertices();
        assert_eq!(vertices.len(), 18);
        let apexes = vertices.iter().filter(|v| v.pos[1] == 0.5).count();
        assert_eq!(apexes, 4);
    }

    #[test]
    fn checker_alternates() {
        let image = checker_image();
        assert_eq!(image.dimensions(), (TEXTURE_SIZE, TEXTURE_SIZE));
        assert_ne!(image.get_pixel(0, 0), image.get_pixel(CHECKER_SIZE, 0));
        assert_eq!(image.get_pixel(0, 0), image.get_pixel(CHECKER_SIZE, CHECKER_SIZE));
    }
}

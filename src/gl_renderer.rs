use cgmath::Matrix4;
use cgmath::prelude::*;

use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::{uniform, DrawParameters, Surface, VertexBuffer};

use crate::camera::Camera;
use crate::error::Error;
use crate::float::*;
use crate::mesh;
use crate::playground::Playground;
use crate::vertex::{FlatVertex, RawVertex};

const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const CROSSHAIR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

pub struct GlRenderer {
    cube_shader: glium::Program,
    plain_shader: glium::Program,
    overlay_shader: glium::Program,
    cube: VertexBuffer<RawVertex>,
    crosshair: VertexBuffer<FlatVertex>,
}

impl GlRenderer {
    pub fn new<F: Facade>(facade: &F) -> Result<GlRenderer, Error> {
        let cube_shader = glium::Program::from_source(
            facade,
            include_str!("shaders/cube.vert"),
            include_str!("shaders/cube.frag"),
            None,
        )?;
        let plain_shader = glium::Program::from_source(
            facade,
            include_str!("shaders/plain.vert"),
            include_str!("shaders/plain.frag"),
            None,
        )?;
        let overlay_shader = glium::Program::from_source(
            facade,
            include_str!("shaders/overlay.vert"),
            include_str!("shaders/plain.frag"),
            None,
        )?;
        Ok(GlRenderer {
            cube_shader,
            plain_shader,
            overlay_shader,
            cube: mesh::upload_cube(facade)?,
            crosshair: mesh::upload_crosshair(facade)?,
        })
    }

    pub fn render<S: Surface>(
        &self,
        target: &mut S,
        playground: &Playground,
        camera: &Camera,
    ) -> Result<(), Error> {
        let (width, height) = target.get_dimensions();
        let world_to_clip = camera.world_to_clip(width.to_float() / height.to_float());
        let draw_parameters = DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let triangles = NoIndices(PrimitiveType::TrianglesList);
        let light_pos = playground.light.position.into_array();

        for cube in &playground.cubes {
            let uniforms = uniform! {
                local_to_world: Matrix4::from_translation(cube.position.to_vec()).into_array(),
                world_to_clip: world_to_clip.into_array(),
                u_light_pos: light_pos,
                u_light_color: LIGHT_COLOR,
                u_color: cube.color_state().shader_id(),
            };
            target.draw(&self.cube, &triangles, &self.cube_shader, &uniforms, &draw_parameters)?;
        }

        let light = &playground.light;
        let uniforms = uniform! {
            local_to_world: Matrix4::from_translation(light.position.to_vec()).into_array(),
            world_to_clip: world_to_clip.into_array(),
            u_color: LIGHT_COLOR,
        };
        target.draw(&self.cube, &triangles, &self.plain_shader, &uniforms, &draw_parameters)?;

        // Crosshair goes over everything in screen space
        let uniforms = uniform! {
            u_color: CROSSHAIR_COLOR,
        };
        target.draw(
            &self.crosshair,
            &triangles,
            &self.overlay_shader,
            &uniforms,
            &Default::default(),
        )?;
        Ok(())
    }
}

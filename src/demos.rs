//! The smaller tutorial scenes, each drawn as a function of time only
mod gradient;
mod pyramid;
mod triangle;

use glium::backend::Facade;

use crate::error::Error;
use crate::float::*;

pub use self::gradient::Gradient;
pub use self::pyramid::Pyramid;
pub use self::triangle::Triangle;

pub trait Demo {
    fn draw(&self, target: &mut glium::Frame, seconds: Float) -> Result<(), Error>;
}

fn gradient_program<F: Facade>(facade: &F) -> Result<glium::Program, Error> {
    Ok(glium::Program::from_source(
        facade,
        include_str!("shaders/gradient.vert"),
        include_str!("shaders/gradient.frag"),
        None,
    )?)
}

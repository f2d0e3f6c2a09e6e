use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create display: {0}")]
    Display(#[from] glium::backend::glutin::DisplayCreationError),
    #[error("failed to create shader program: {0}")]
    Program(#[from] glium::ProgramCreationError),
    #[error("failed to create vertex buffer: {0}")]
    VertexBuffer(#[from] glium::vertex::BufferCreationError),
    #[error("failed to create index buffer: {0}")]
    IndexBuffer(#[from] glium::index::BufferCreationError),
    #[error("failed to create texture: {0}")]
    Texture(#[from] glium::texture::TextureCreationError),
    #[error("draw call failed: {0}")]
    Draw(#[from] glium::DrawError),
    #[error("failed to swap buffers: {0}")]
    Swap(#[from] glium::SwapBuffersError),
    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

mod camera;
mod config;
mod consts;
mod cube;
mod demos;
mod error;
mod float;
mod gl_renderer;
mod input;
mod mesh;
mod playground;
mod report;
mod targeting;
mod toss;
mod vertex;

use std::time::Instant;

use clap::{Parser, ValueEnum};

use glium::glutin::event::{ElementState, Event, KeyboardInput, StartCause, VirtualKeyCode, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoop};
use glium::glutin::window::{CursorGrabMode, WindowBuilder};
use glium::{Display, Surface};

use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::camera::Camera;
use crate::config::Config;
use crate::demos::Demo;
use crate::error::Error;
use crate::float::*;
use crate::gl_renderer::GlRenderer;
use crate::input::InputState;
use crate::playground::{Frame, Playground};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Program {
    /// Pick up and toss cubes with the mouse
    Cubes,
    /// Spinning triangle
    Triangle,
    /// Color interpolation across two triangles
    Gradient,
    /// Textured pyramid
    Pyramid,
}

#[derive(Debug, Parser)]
#[command(version, about = "Small OpenGL scenes")]
struct Args {
    /// Scene to show
    #[arg(value_enum, default_value_t = Program::Cubes)]
    program: Program,
}

fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;
    let args = Args::parse();
    let config = Config::tutorial();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Cube toss")
        .with_inner_size(config.dimensions());
    let context = glium::glutin::ContextBuilder::new().with_depth_buffer(24);
    let display = Display::new(window, context, &event_loop)?;

    log::info!("Showing {:?}", args.program);
    let demo: Box<dyn Demo> = match args.program {
        Program::Cubes => {
            let renderer = GlRenderer::new(&display)?;
            run_playground(event_loop, display, renderer, config)
        }
        Program::Triangle => Box::new(demos::Triangle::new(&display)?),
        Program::Gradient => Box::new(demos::Gradient::new(&display)?),
        Program::Pyramid => Box::new(demos::Pyramid::new(&display)?),
    };
    run_demo(event_loop, display, demo, config)
}

/// Finish the frame even if drawing failed, glium panics on unfinished frames
fn present(mut target: glium::Frame, draw: impl FnOnce(&mut glium::Frame) -> Result<(), Error>) -> Result<(), Error> {
    target.clear_color_and_depth((0.1, 0.1, 0.12, 1.0), 1.0);
    let drawn = draw(&mut target);
    let finished = target.finish().map_err(Error::from);
    drawn.and(finished)
}

fn is_key_press(event: &WindowEvent<'_>) -> Option<VirtualKeyCode> {
    match event {
        WindowEvent::KeyboardInput {
            input:
                KeyboardInput {
                    state: ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => Some(*key),
        _ => None,
    }
}

fn grab_cursor(display: &Display) {
    let gl_window = display.gl_window();
    let window = gl_window.window();
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
    if let Err(err) = grabbed {
        log::warn!("Could not grab the cursor: {}", err);
    }
    window.set_cursor_visible(false);
}

fn run_playground(event_loop: EventLoop<()>, display: Display, renderer: GlRenderer, mut config: Config) -> ! {
    grab_cursor(&display);
    let mut playground = Playground::new();
    let mut camera = Camera::default();
    let mut input = InputState::new();
    let start = Instant::now();
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        input.update(&event);
        match event {
            Event::WindowEvent { event, .. } => {
                if let WindowEvent::CloseRequested = event {
                    *control_flow = ControlFlow::Exit;
                }
                match is_key_press(&event) {
                    Some(VirtualKeyCode::Escape) => *control_flow = ControlFlow::Exit,
                    Some(VirtualKeyCode::Tab) => report::print_cubes(&playground.cubes),
                    Some(key) => config.handle_key(key),
                    None => (),
                }
            }
            Event::NewEvents(StartCause::Init) | Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                let now = Instant::now();
                *control_flow = ControlFlow::WaitUntil(now + config.frame_time);

                let dt = (now - last_frame).as_secs_f64().to_float();
                last_frame = now;
                let translation = camera.process_keys(&input, dt, &config.camera);
                let (dx, dy) = input.d_mouse;
                let look = if dx != 0.0 || dy != 0.0 {
                    // Screen y grows downwards
                    Some(camera.look(dx, -dy, &config.camera))
                } else {
                    None
                };
                camera.zoom(input.d_scroll);
                let frame = Frame {
                    time: (now - start).as_secs_f64().to_float(),
                    dt,
                    drag: input.dragging(),
                    translation,
                    look,
                };
                playground.step(&camera, &frame, &config);
                input.reset_deltas();

                let shown = present(display.draw(), |target| renderer.render(target, &playground, &camera));
                if let Err(err) = shown {
                    log::error!("{}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => (),
        }
    })
}

fn run_demo(event_loop: EventLoop<()>, display: Display, demo: Box<dyn Demo>, config: Config) -> ! {
    let start = Instant::now();
    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => {
            if let WindowEvent::CloseRequested = event {
                *control_flow = ControlFlow::Exit;
            }
            if let Some(VirtualKeyCode::Escape) = is_key_press(&event) {
                *control_flow = ControlFlow::Exit;
            }
        }
        Event::NewEvents(StartCause::Init) | Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            *control_flow = ControlFlow::WaitUntil(Instant::now() + config.frame_time);
            let seconds = start.elapsed().as_secs_f64().to_float();
            if let Err(err) = present(display.draw(), |target| demo.draw(target, seconds)) {
                log::error!("{}", err);
                *control_flow = ControlFlow::Exit;
            }
        }
        _ => (),
    })
}

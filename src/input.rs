use std::collections::HashMap;
use std::time::Instant;

use glium::glutin::event::{
    DeviceEvent, ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta,
    VirtualKeyCode, WindowEvent,
};

use crate::float::*;

pub struct InputState {
    /// Raw mouse movement since the last reset
    pub d_mouse: (Float, Float),
    /// Scroll wheel movement since the last reset in lines
    pub d_scroll: Float,
    /// Currently pressed mouse buttons with the time of the press
    pub mouse_presses: HashMap<MouseButton, Instant>,
    /// Currently pressed keys with the time of the press
    pub key_presses: HashMap<VirtualKeyCode, Instant>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            d_mouse: (0.0, 0.0),
            d_scroll: 0.0,
            mouse_presses: HashMap::new(),
            key_presses: HashMap::new(),
        }
    }
}

impl InputState {
    /// Get a new empty input state
    pub fn new() -> InputState {
        InputState::default()
    }

    /// Reset the accumulated movement at the end of a frame
    pub fn reset_deltas(&mut self) {
        self.d_mouse = (0.0, 0.0);
        self.d_scroll = 0.0;
    }

    /// Is the button used for picking up cubes down
    pub fn dragging(&self) -> bool {
        self.mouse_presses.contains_key(&MouseButton::Left)
    }

    pub fn is_pressed(&self, key: VirtualKeyCode) -> bool {
        self.key_presses.contains_key(&key)
    }

    /// Update the state with an event
    pub fn update<T>(&mut self, event: &Event<'_, T>) {
        match event {
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                self.d_mouse.0 += delta.0.to_float();
                self.d_mouse.1 += delta.1.to_float();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::MouseInput { state, button, .. } => match state {
                    ElementState::Pressed => {
                        self.mouse_presses.entry(*button).or_insert_with(Instant::now);
                    }
                    ElementState::Released => {
                        self.mouse_presses.remove(button);
                    }
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    self.d_scroll += match delta {
                        MouseScrollDelta::LineDelta(_, y) => y.to_float(),
                        MouseScrollDelta::PixelDelta(pos) => pos.y.to_float() / 20.0,
                    };
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => match state {
                    ElementState::Pressed => {
                        self.key_presses.entry(*key).or_insert_with(Instant::now);
                    }
                    ElementState::Released => {
                        self.key_presses.remove(key);
                    }
                },
                WindowEvent::Focused(false) => {
                    self.mouse_presses.clear();
                    self.key_presses.clear();
                }
                _ => (),
            },
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_deltas_but_keeps_presses() {
        let mut input = InputState::new();
        input.d_mouse = (3.0, -2.0);
        input.d_scroll = 1.0;
        input.mouse_presses.insert(MouseButton::Left, Instant::now());
        input.reset_deltas();
        assert_eq!(input.d_mouse, (0.0, 0.0));
        assert_eq!(input.d_scroll, 0.0);
        assert!(input.dragging());
    }
}

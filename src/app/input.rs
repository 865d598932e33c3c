use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Per-frame input state accumulated from window events. Deltas collect
/// across a frame and are cleared by [`Input::end_frame`].
#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Current cursor position in window coordinates.
    pub cursor_position: Vec2,
    /// Cursor displacement since the previous frame (dx, dy).
    pub cursor_delta: Vec2,
    /// Scroll amount this frame (x, y).
    pub scroll_delta: Vec2,
    /// Window size.
    pub screen_size: Vec2,
    /// Keys currently held down.
    pub keys: HashSet<KeyCode>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// End-of-frame cleanup; clears the deltas so a stationary mouse
    /// stops turning the camera.
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        // First event has no previous position; report no delta for it.
        if self.cursor_position != Vec2::ZERO {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
    }

    pub fn handle_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys.insert(key);
            }
            ElementState::Released => {
                self.keys.remove(&key);
            }
        }
    }

    pub fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        match delta {
            MouseScrollDelta::LineDelta(x, y) => {
                self.scroll_delta += Vec2::new(x, y);
            }
            MouseScrollDelta::PixelDelta(pos) => {
                // PixelDelta values run much larger than line counts.
                self.scroll_delta += Vec2::new(pos.x as f32, pos.y as f32) * 0.1;
            }
        }
    }

    #[must_use]
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }
}

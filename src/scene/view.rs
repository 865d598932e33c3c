//! Per-frame view state
//!
//! [`ViewContext`] owns the camera, the projection mode, the viewport size
//! and the frame timer. All camera and window state lives here and is
//! passed by reference; nothing in the view layer is global.

use glam::{Mat4, Vec2};
use winit::keyboard::KeyCode;

use crate::app::Input;
use crate::render::uniforms::{ShaderUniforms, Uniform};
use crate::scene::camera::{Camera, CameraMovement};
use crate::utils::time::Timer;

pub const PERSPECTIVE_NEAR: f32 = 0.1;
pub const PERSPECTIVE_FAR: f32 = 100.0;

/// Half-extent of the orthographic volume, in world units.
const ORTHO_EXTENT: f32 = 25.0;
const ORTHO_DEPTH: f32 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    Perspective,
    Orthographic,
}

/// Movement key map. Q and E move along the camera's own up axis.
const KEY_BINDINGS: [(KeyCode, CameraMovement); 6] = [
    (KeyCode::KeyW, CameraMovement::Forward),
    (KeyCode::KeyS, CameraMovement::Backward),
    (KeyCode::KeyA, CameraMovement::Left),
    (KeyCode::KeyD, CameraMovement::Right),
    (KeyCode::KeyQ, CameraMovement::Down),
    (KeyCode::KeyE, CameraMovement::Up),
];

pub struct ViewContext {
    pub camera: Camera,
    pub projection: ProjectionType,
    viewport: Vec2,
    timer: Timer,
}

impl ViewContext {
    #[must_use]
    pub fn new(camera: Camera, width: f32, height: f32) -> Self {
        Self {
            camera,
            projection: ProjectionType::Perspective,
            viewport: Vec2::new(width, height),
            timer: Timer::new(),
        }
    }

    /// Ticks the frame timer and returns the delta time in seconds.
    /// Movement processed this frame is paced by this value.
    pub fn begin_frame(&mut self) -> f32 {
        self.timer.tick();
        self.timer.dt_seconds()
    }

    /// Applies one frame of aggregated input to the camera and the
    /// projection mode. Cursor Y grows downward on screen, so the delta
    /// is inverted before it reaches the camera.
    pub fn process_input(&mut self, input: &Input) {
        let dt = self.timer.dt_seconds();

        for (key, movement) in KEY_BINDINGS {
            if input.is_key_pressed(key) {
                self.camera.process_keyboard(movement, dt);
            }
        }

        if input.is_key_pressed(KeyCode::KeyP) {
            self.projection = ProjectionType::Perspective;
        }
        if input.is_key_pressed(KeyCode::KeyO) {
            self.projection = ProjectionType::Orthographic;
        }

        if input.cursor_delta != Vec2::ZERO {
            self.camera
                .process_mouse(input.cursor_delta.x, -input.cursor_delta.y);
        }
        if input.scroll_delta.y != 0.0 {
            self.camera.process_scroll(input.scroll_delta.y);
        }
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            ProjectionType::Perspective => Mat4::perspective_rh(
                self.camera.zoom.to_radians(),
                self.viewport.x / self.viewport.y,
                PERSPECTIVE_NEAR,
                PERSPECTIVE_FAR,
            ),
            ProjectionType::Orthographic => Mat4::orthographic_rh(
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_DEPTH,
                ORTHO_DEPTH,
            ),
        }
    }

    /// Writes `view`, `projection` and `viewPosition` for this frame.
    pub fn publish(&self, shader: &mut dyn ShaderUniforms) {
        Uniform::View(self.camera.view_matrix()).write_to(shader);
        Uniform::Projection(self.projection_matrix()).write_to(shader);
        Uniform::ViewPosition(self.camera.position).write_to(shader);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}

//! First-person walk-around camera driven by yaw/pitch Euler angles.
//! Angles are kept in degrees; conversion happens at the trig call sites.

use glam::{Mat4, Vec3};

/// Movement directions mapped from key bindings. Vertical movement
/// follows the camera's own up vector, not the world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

const PITCH_LIMIT_DEG: f32 = 89.0;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    /// Degrees around the world up axis; 0 looks along +X.
    yaw: f32,
    /// Degrees above the horizon, clamped to avoid gimbal flip.
    pitch: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Camera {
    /// Builds a camera at `position` looking along `front`. Yaw and pitch
    /// are derived from the given direction, so the first mouse event
    /// continues from the initial view instead of snapping elsewhere.
    #[must_use]
    pub fn new(position: Vec3, front: Vec3, world_up: Vec3, zoom: f32) -> Self {
        let front = front.normalize();
        let mut camera = Self {
            position,
            front,
            right: Vec3::X,
            up: world_up,
            world_up,
            pitch: front.y.asin().to_degrees(),
            yaw: front.z.atan2(front.x).to_degrees(),
            zoom,
            movement_speed: 1.0,
            mouse_sensitivity: 0.01,
        };
        camera.update_vectors();
        camera
    }

    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Moves the camera along its basis vectors, scaled by the frame
    /// delta time in seconds.
    pub fn process_keyboard(&mut self, movement: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match movement {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Applies a cursor delta to yaw and pitch. Pitch is clamped so the
    /// view never crosses the vertical.
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.update_vectors();
    }

    /// Scroll adjusts movement speed, and mouse sensitivity with it at a
    /// fixed 100:1 ratio. If either would go negative both reset to zero,
    /// so the pair stays in lockstep.
    pub fn process_scroll(&mut self, y_offset: f32) {
        self.movement_speed += y_offset;
        self.mouse_sensitivity += y_offset / 100.0;
        if self.movement_speed < 0.0 || self.mouse_sensitivity < 0.0 {
            self.movement_speed = 0.0;
            self.mouse_sensitivity = 0.0;
        }
    }

    /// Rebuilds the orthonormal basis from yaw and pitch.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

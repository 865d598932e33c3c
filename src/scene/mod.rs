//! Scene module
//!
//! The still-life scene as data plus the machinery that replays it:
//! - `script`: draw-step records and the scene description
//! - `catalog`: the built-in tabletop arrangement as literal data
//! - `renderer`: prepare/render orchestration against the shader seam
//! - `camera`: first-person walk-around camera
//! - `view`: per-frame camera/projection/timer state

pub mod camera;
pub mod catalog;
pub mod renderer;
pub mod script;
pub mod view;

pub use camera::{Camera, CameraMovement};
pub use renderer::{compose_model_matrix, SceneRenderer};
pub use script::{DrawStep, SceneDescription, SceneScript, Surface, TextureSource};
pub use view::{ProjectionType, ViewContext};

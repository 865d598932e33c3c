#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod app;
pub mod errors;
pub mod render;
pub mod resources;
pub mod scene;
pub mod utils;

pub use app::Input;
pub use errors::{Result, TableauError};
pub use render::{MeshKind, MeshLibrary, MeshService, ShaderUniforms, Uniform, UniformStore};
pub use resources::primitives::*;
pub use resources::{
    Geometry, LightRig, LightSource, Material, MaterialRegistry, ResourceRegistry, TextureDevice,
    TextureHandle, TextureImage, TextureRegistry, TextureSampler,
};
pub use scene::{
    catalog, Camera, CameraMovement, DrawStep, ProjectionType, SceneDescription, SceneRenderer,
    SceneScript, Surface, TextureSource, ViewContext,
};
pub use utils::Timer;

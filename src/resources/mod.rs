//! Core resource definitions
//!
//! CPU-side data structures plus the tag-addressed tables the renderer
//! resolves draw steps against, independent of any GPU implementation:
//! - Geometry: planar vertex attributes and indices
//! - Primitives: procedural plane/cylinder/sphere/torus/box generators
//! - Texture: decoded images, sampling policy, slot registry
//! - Material: Phong parameter sets keyed by tag
//! - Light: the fixed-capacity light rig

pub mod geometry;
pub mod light;
pub mod material;
pub mod primitives;
pub mod texture;

pub use geometry::{Attribute, BoundingBox, BoundingSphere, Geometry};
pub use light::{LightRig, LightSource, MAX_LIGHT_SOURCES};
pub use material::{Material, MaterialRegistry};
pub use texture::{
    PixelFormat, TextureDevice, TextureEntry, TextureHandle, TextureImage, TextureRegistry,
    TextureSampler, MAX_TEXTURE_SLOTS,
};

/// The three tables a scene draws against, grouped so setup code can pass
/// them around as one unit.
#[derive(Default)]
pub struct ResourceRegistry {
    pub textures: TextureRegistry,
    pub materials: MaterialRegistry,
    pub lights: LightRig,
}

impl ResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

//! Scene script data model
//!
//! A scene is plain data: a texture manifest, a material catalog, a light
//! catalog and an ordered table of draw steps. The renderer walks the
//! table once per frame; authoring tools can serialize the whole
//! description to JSON and back.

use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::render::MeshKind;
use crate::resources::{LightSource, Material};

/// A draw step's color-or-texture binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Flat RGBA color; texturing is disabled for the step.
    Color(Vec4),
    /// Registered texture tag, resolved to a texture-unit slot at render
    /// time.
    Texture { tag: String },
}

/// One record of the scene script, executed once per frame in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawStep {
    pub name: String,
    pub scale: Vec3,
    /// Euler rotation in degrees, applied X then Y then Z.
    pub rotation_deg: Vec3,
    pub position: Vec3,
    pub surface: Surface,
    /// Texture tiling factors; consumed only by textured surfaces.
    pub uv_scale: Vec2,
    /// Material tag, resolved against the registry each draw.
    pub material: String,
    pub mesh: MeshKind,
    /// Tube thickness for torus steps. When present the renderer
    /// regenerates the shared torus mesh before this step's draw.
    pub torus_thickness: Option<f32>,
}

/// The ordered draw-step table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneScript {
    pub steps: Vec<DrawStep>,
}

impl SceneScript {
    pub fn iter(&self) -> impl Iterator<Item = &DrawStep> {
        self.steps.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Relative path and tag of one manifest texture. Manifest order is
/// registration order, which fixes slot assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureSource {
    pub path: String,
    pub tag: String,
}

/// A complete scene as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lights: Vec<LightSource>,
    pub script: SceneScript,
}

impl SceneDescription {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Scene orchestration
//!
//! [`SceneRenderer`] owns a [`SceneDescription`] plus the resource
//! registries it populates, and replays the description's draw script
//! against a shader and a mesh service each frame. It has two phases:
//!
//! - [`SceneRenderer::prepare_scene`] runs once: decode and upload
//!   textures, define materials, publish the light rig, generate meshes.
//! - [`SceneRenderer::render_scene`] runs per frame: for every draw step,
//!   write the full transform/surface/material state and issue the draw.
//!
//! Every uniform write goes through [`Uniform`], so the renderer never
//! spells a shader name twice.

use std::path::Path;

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::errors::{Result, TableauError};
use crate::render::mesh::{MeshKind, MeshService};
use crate::render::uniforms::{LightField, MaterialField, ShaderUniforms, Uniform};
use crate::resources::light::LightSource;
use crate::resources::material::Material;
use crate::resources::texture::TextureDevice;
use crate::resources::ResourceRegistry;
use crate::scene::script::{SceneDescription, Surface};

/// Composes a model matrix in the fixed order translate, then rotate
/// around X, Y, Z, then scale. Column-vector convention: the scale is
/// applied to vertices first and the translation last.
#[must_use]
pub fn compose_model_matrix(scale: Vec3, rotation_deg: Vec3, position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_x(rotation_deg.x.to_radians())
        * Mat4::from_rotation_y(rotation_deg.y.to_radians())
        * Mat4::from_rotation_z(rotation_deg.z.to_radians())
        * Mat4::from_scale(scale)
}

/// Replays a scene description against a shader and a mesh service.
pub struct SceneRenderer {
    desc: SceneDescription,
    pub registry: ResourceRegistry,
}

impl SceneRenderer {
    #[must_use]
    pub fn new(desc: SceneDescription) -> Self {
        Self {
            desc,
            registry: ResourceRegistry::new(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &SceneDescription {
        &self.desc
    }

    /// Writes the `model` uniform for the given decomposed transform.
    pub fn set_transform(
        &self,
        shader: &mut dyn ShaderUniforms,
        scale: Vec3,
        rotation_deg: Vec3,
        position: Vec3,
    ) {
        let model = compose_model_matrix(scale, rotation_deg, position);
        Uniform::Model(model).write_to(shader);
    }

    /// Switches the shader to flat color. Always clears the texture flag
    /// first, so a color step after a textured one cannot inherit its
    /// sampler state.
    pub fn set_color(&self, shader: &mut dyn ShaderUniforms, color: Vec4) {
        self.disable_texture(shader);
        Uniform::ObjectColor(color).write_to(shader);
    }

    /// Clears `bUseTexture`. The single place the flag goes false.
    pub fn disable_texture(&self, shader: &mut dyn ShaderUniforms) {
        Uniform::UseTexture(false).write_to(shader);
    }

    /// Points the sampler at the slot registered under `tag`. An unknown
    /// tag logs a warning and falls back to untextured, keeping the
    /// sampler slot valid by construction.
    pub fn set_texture(&self, shader: &mut dyn ShaderUniforms, tag: &str) {
        match self.registry.textures.find_slot(tag) {
            Some(slot) => {
                Uniform::UseTexture(true).write_to(shader);
                Uniform::ObjectTexture(slot as i32).write_to(shader);
            }
            None => {
                log::warn!("texture tag '{tag}' not registered, drawing untextured");
                self.disable_texture(shader);
            }
        }
    }

    pub fn set_uv_scale(&self, shader: &mut dyn ShaderUniforms, scale: Vec2) {
        Uniform::UvScale(scale).write_to(shader);
    }

    /// Writes the full `material` block for `tag`. An unknown tag logs a
    /// warning and writes the default material instead, so every draw
    /// step leaves all five fields freshly set.
    pub fn set_material(&self, shader: &mut dyn ShaderUniforms, tag: &str) {
        match self.registry.materials.find(tag) {
            Some(material) => Self::write_material(material, shader),
            None => {
                log::warn!("material tag '{tag}' not defined, using default material");
                Self::write_material(&Material::default(), shader);
            }
        }
    }

    fn write_material(material: &Material, shader: &mut dyn ShaderUniforms) {
        for field in [
            MaterialField::AmbientColor(material.ambient_color),
            MaterialField::AmbientStrength(material.ambient_strength),
            MaterialField::DiffuseColor(material.diffuse_color),
            MaterialField::SpecularColor(material.specular_color),
            MaterialField::Shininess(material.shininess),
        ] {
            Uniform::Material(field).write_to(shader);
        }
    }

    fn write_light(index: usize, light: &LightSource, shader: &mut dyn ShaderUniforms) {
        for field in [
            LightField::Position(light.position),
            LightField::AmbientColor(light.ambient_color),
            LightField::DiffuseColor(light.diffuse_color),
            LightField::SpecularColor(light.specular_color),
            LightField::FocalStrength(light.focal_strength),
            LightField::SpecularIntensity(light.specular_intensity),
        ] {
            Uniform::Light { index, field }.write_to(shader);
        }
    }

    /// One-time scene setup: textures, materials, lights, meshes.
    ///
    /// Texture paths are resolved relative to `asset_root`. A texture that
    /// fails to read or decode is logged and skipped, and the scene renders
    /// without it; duplicate tags and capacity overflow are programming
    /// errors in the description and fail the whole call.
    pub fn prepare_scene(
        &mut self,
        asset_root: &Path,
        shader: &mut dyn ShaderUniforms,
        meshes: &mut dyn MeshService,
        device: &mut dyn TextureDevice,
    ) -> Result<()> {
        for source in &self.desc.textures {
            let path = asset_root.join(&source.path);
            match self.registry.textures.register_file(&path, &source.tag, device) {
                Ok(_) => {}
                Err(
                    err @ (TableauError::DuplicateTag(_)
                    | TableauError::TextureCapacityExceeded { .. }),
                ) => return Err(err),
                Err(err) => {
                    log::error!(
                        "skipping texture '{}' ({}): {err}",
                        source.tag,
                        path.display()
                    );
                }
            }
        }
        self.registry.textures.bind_all(device);

        for material in &self.desc.materials {
            self.registry.materials.define(material.clone())?;
        }

        for light in &self.desc.lights {
            let index = self.registry.lights.add(*light)?;
            Self::write_light(index, light, shader);
        }
        Uniform::UseLighting(true).write_to(shader);

        let mut kinds: Vec<MeshKind> = Vec::new();
        for step in self.desc.script.iter() {
            let base = step.mesh.base_kind();
            if !kinds.contains(&base) {
                kinds.push(base);
            }
        }
        for kind in kinds {
            meshes.load(kind);
        }

        log::info!(
            "scene prepared: {} textures, {} materials, {} lights, {} draw steps",
            self.registry.textures.len(),
            self.registry.materials.len(),
            self.registry.lights.len(),
            self.desc.script.len()
        );
        Ok(())
    }

    /// Replays the draw script. Each step writes its complete state before
    /// drawing: transform, then surface (color, or UV scale plus texture),
    /// then material. Steps that carry a torus thickness re-generate the
    /// torus geometry before the draw.
    pub fn render_scene(&self, shader: &mut dyn ShaderUniforms, meshes: &mut dyn MeshService) {
        for step in self.desc.script.iter() {
            self.set_transform(shader, step.scale, step.rotation_deg, step.position);
            match &step.surface {
                Surface::Color(color) => self.set_color(shader, *color),
                Surface::Texture { tag } => {
                    self.set_uv_scale(shader, step.uv_scale);
                    self.set_texture(shader, tag);
                }
            }
            self.set_material(shader, &step.material);
            if let Some(thickness) = step.torus_thickness {
                meshes.load_torus(thickness);
            }
            meshes.draw(step.mesh);
        }
    }

    /// Releases every device texture held by the registry.
    pub fn release_all(&mut self, device: &mut dyn TextureDevice) {
        self.registry.textures.release_all(device);
    }
}

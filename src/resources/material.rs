use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TableauError};

/// Phong-style surface parameters, addressed by tag from draw steps.
/// Materials are immutable once defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    /// The fallback material the renderer substitutes when a draw step
    /// names a tag that was never defined: matte gray, no highlight.
    fn default() -> Self {
        Self {
            tag: "default".to_string(),
            ambient_color: Vec3::ONE,
            ambient_strength: 0.1,
            diffuse_color: Vec3::splat(0.8),
            specular_color: Vec3::ZERO,
            shininess: 1.0,
        }
    }
}

/// Tag-addressed material table with insertion-ordered entries.
#[derive(Default)]
pub struct MaterialRegistry {
    entries: Vec<Material>,
    index_by_tag: FxHashMap<String, usize>,
}

impl MaterialRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material definition; the tag must be unique.
    pub fn define(&mut self, material: Material) -> Result<()> {
        if self.index_by_tag.contains_key(&material.tag) {
            return Err(TableauError::DuplicateTag(material.tag.clone()));
        }
        self.index_by_tag
            .insert(material.tag.clone(), self.entries.len());
        log::debug!("defined material '{}'", material.tag);
        self.entries.push(material);
        Ok(())
    }

    /// Exact-tag lookup. A miss returns `None`, never a default entry.
    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.index_by_tag.get(tag).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

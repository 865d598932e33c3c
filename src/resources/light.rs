use glam::Vec3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::{Result, TableauError};

/// Fixed size of the shader's light-source array. The rig index maps
/// directly to `lightSources[i]`, so capacity is enforced at insertion.
pub const MAX_LIGHT_SOURCES: usize = 4;

/// One point light in the fixed rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    pub position: Vec3,
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    /// Exponent narrowing the specular lobe.
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl Default for LightSource {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ambient_color: Vec3::splat(0.05),
            diffuse_color: Vec3::splat(0.8),
            specular_color: Vec3::ONE,
            focal_strength: 32.0,
            specular_intensity: 1.0,
        }
    }
}

/// The scene's light set, at most [`MAX_LIGHT_SOURCES`] entries.
#[derive(Debug, Default, Clone)]
pub struct LightRig {
    lights: SmallVec<[LightSource; MAX_LIGHT_SOURCES]>,
}

impl LightRig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a light and returns its shader-array index.
    pub fn add(&mut self, light: LightSource) -> Result<usize> {
        if self.lights.len() >= MAX_LIGHT_SOURCES {
            return Err(TableauError::LightCapacityExceeded {
                capacity: MAX_LIGHT_SOURCES,
            });
        }
        self.lights.push(light);
        Ok(self.lights.len() - 1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LightSource> {
        self.lights.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LightSource> {
        self.lights.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }
}

//! Shader uniform surface
//!
//! The renderer talks to a shader program exclusively through the
//! string-keyed [`ShaderUniforms`] trait. On the renderer side every write
//! goes through the typed [`Uniform`] enum, which pairs each uniform name
//! with its value type at compile time, so the exact name strings live in
//! one place:
//!
//! - `model`, `view`, `projection`, `viewPosition`
//! - `objectColor`, `objectTexture`, `bUseTexture`, `bUseLighting`, `UVscale`
//! - `material.{ambientColor, ambientStrength, diffuseColor, specularColor,
//!   shininess}`
//! - `lightSources[i].{position, ambientColor, diffuseColor, specularColor,
//!   focalStrength, specularIntensity}`
//!
//! [`UniformStore`] is the crate's CPU-side implementation of the trait: a
//! name/value map a GPU backend can flush, and tests can inspect.

use std::borrow::Cow;

use glam::{Mat4, Vec2, Vec3, Vec4};
use rustc_hash::FxHashMap;

/// String-keyed uniform sink a shader backend implements.
pub trait ShaderUniforms {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vec2);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_vec4(&mut self, name: &str, value: Vec4);
    fn set_mat4(&mut self, name: &str, value: Mat4);
}

/// One field of the `material` uniform block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialField {
    AmbientColor(Vec3),
    AmbientStrength(f32),
    DiffuseColor(Vec3),
    SpecularColor(Vec3),
    Shininess(f32),
}

impl MaterialField {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MaterialField::AmbientColor(_) => "material.ambientColor",
            MaterialField::AmbientStrength(_) => "material.ambientStrength",
            MaterialField::DiffuseColor(_) => "material.diffuseColor",
            MaterialField::SpecularColor(_) => "material.specularColor",
            MaterialField::Shininess(_) => "material.shininess",
        }
    }

    fn write_as(&self, name: &str, shader: &mut dyn ShaderUniforms) {
        match self {
            MaterialField::AmbientColor(v)
            | MaterialField::DiffuseColor(v)
            | MaterialField::SpecularColor(v) => shader.set_vec3(name, *v),
            MaterialField::AmbientStrength(v) | MaterialField::Shininess(v) => {
                shader.set_float(name, *v);
            }
        }
    }
}

/// One field of a `lightSources[i]` array element. The element index comes
/// from [`Uniform::Light`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightField {
    Position(Vec3),
    AmbientColor(Vec3),
    DiffuseColor(Vec3),
    SpecularColor(Vec3),
    FocalStrength(f32),
    SpecularIntensity(f32),
}

impl LightField {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LightField::Position(_) => "position",
            LightField::AmbientColor(_) => "ambientColor",
            LightField::DiffuseColor(_) => "diffuseColor",
            LightField::SpecularColor(_) => "specularColor",
            LightField::FocalStrength(_) => "focalStrength",
            LightField::SpecularIntensity(_) => "specularIntensity",
        }
    }

    fn write_as(&self, name: &str, shader: &mut dyn ShaderUniforms) {
        match self {
            LightField::Position(v)
            | LightField::AmbientColor(v)
            | LightField::DiffuseColor(v)
            | LightField::SpecularColor(v) => shader.set_vec3(name, *v),
            LightField::FocalStrength(v) | LightField::SpecularIntensity(v) => {
                shader.set_float(name, *v);
            }
        }
    }
}

/// A typed uniform write. Constructing a variant fixes both the shader-side
/// name and the value type, so a name/type mismatch cannot compile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Model(Mat4),
    View(Mat4),
    Projection(Mat4),
    ViewPosition(Vec3),
    ObjectColor(Vec4),
    /// Texture-unit slot the sampler reads from.
    ObjectTexture(i32),
    UseTexture(bool),
    UseLighting(bool),
    UvScale(Vec2),
    Material(MaterialField),
    Light { index: usize, field: LightField },
}

impl Uniform {
    /// The exact shader-side uniform name.
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Uniform::Model(_) => Cow::Borrowed("model"),
            Uniform::View(_) => Cow::Borrowed("view"),
            Uniform::Projection(_) => Cow::Borrowed("projection"),
            Uniform::ViewPosition(_) => Cow::Borrowed("viewPosition"),
            Uniform::ObjectColor(_) => Cow::Borrowed("objectColor"),
            Uniform::ObjectTexture(_) => Cow::Borrowed("objectTexture"),
            Uniform::UseTexture(_) => Cow::Borrowed("bUseTexture"),
            Uniform::UseLighting(_) => Cow::Borrowed("bUseLighting"),
            Uniform::UvScale(_) => Cow::Borrowed("UVscale"),
            Uniform::Material(field) => Cow::Borrowed(field.name()),
            Uniform::Light { index, field } => {
                Cow::Owned(format!("lightSources[{index}].{}", field.name()))
            }
        }
    }

    /// Pushes the value through the matching typed setter.
    pub fn write_to(&self, shader: &mut dyn ShaderUniforms) {
        let name = self.name();
        match self {
            Uniform::Model(v) | Uniform::View(v) | Uniform::Projection(v) => {
                shader.set_mat4(&name, *v);
            }
            Uniform::ViewPosition(v) => shader.set_vec3(&name, *v),
            Uniform::ObjectColor(v) => shader.set_vec4(&name, *v),
            Uniform::ObjectTexture(v) => shader.set_int(&name, *v),
            Uniform::UseTexture(v) | Uniform::UseLighting(v) => shader.set_bool(&name, *v),
            Uniform::UvScale(v) => shader.set_vec2(&name, *v),
            Uniform::Material(field) => field.write_as(&name, shader),
            Uniform::Light { field, .. } => field.write_as(&name, shader),
        }
    }
}

// ============================================================================
// CPU-side uniform store
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

/// Name/value mirror of the shader's uniform state. Later writes to the
/// same name replace earlier ones, matching GPU uniform semantics.
#[derive(Debug, Default)]
pub struct UniformStore {
    values: FxHashMap<String, UniformValue>,
}

impl UniformStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(UniformValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(UniformValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_vec2(&self, name: &str) -> Option<Vec2> {
        match self.values.get(name) {
            Some(UniformValue::Vec2(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_vec3(&self, name: &str) -> Option<Vec3> {
        match self.values.get(name) {
            Some(UniformValue::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_vec4(&self, name: &str) -> Option<Vec4> {
        match self.values.get(name) {
            Some(UniformValue::Vec4(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn get_mat4(&self, name: &str) -> Option<Mat4> {
        match self.values.get(name) {
            Some(UniformValue::Mat4(v)) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl ShaderUniforms for UniformStore {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_string(), UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.values.insert(name.to_string(), UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_string(), UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.values.insert(name.to_string(), UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.values.insert(name.to_string(), UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.values.insert(name.to_string(), UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.values.insert(name.to_string(), UniformValue::Mat4(value));
    }
}

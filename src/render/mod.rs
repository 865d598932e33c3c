//! Renderer-facing service seams
//!
//! The scene core draws through two narrow interfaces: a string-keyed
//! shader-uniform sink and a mesh load/draw service. Both come with
//! CPU-side implementations ([`UniformStore`], [`MeshLibrary`]) that a GPU
//! backend can flush, and that tests inspect directly.

pub mod mesh;
pub mod uniforms;

pub use mesh::{MeshKind, MeshLibrary, MeshService};
pub use uniforms::{
    LightField, MaterialField, ShaderUniforms, Uniform, UniformStore, UniformValue,
};

//! Mesh service seam
//!
//! [`MeshService`] is the narrow interface the scene renderer draws
//! through: load a primitive kind once, regenerate the torus with a draw
//! step's tube thickness, issue a draw. [`MeshLibrary`] is the crate's
//! implementation: a procedural-geometry cache plus an ordered per-frame
//! draw list a GPU backend consumes after the scene walk.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::geometry::Geometry;
use crate::resources::primitives::{
    create_box, create_cylinder, create_half_sphere, create_plane, create_sphere, create_torus,
    CylinderOptions, PlaneOptions, SphereOptions, TorusOptions,
};

/// The primitive kinds the scene script can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshKind {
    Plane,
    Cylinder,
    Sphere,
    /// Upper dome of the sphere; provisioned by the sphere load.
    HalfSphere,
    Torus,
    Box,
}

impl MeshKind {
    /// The kind whose `load` provisions this one. Only the half-sphere
    /// rides along with another load; every other kind is its own base.
    #[must_use]
    pub fn base_kind(self) -> MeshKind {
        match self {
            MeshKind::HalfSphere => MeshKind::Sphere,
            other => other,
        }
    }
}

/// Mesh loading and drawing surface the renderer calls through.
pub trait MeshService {
    /// Generates (or re-generates) the geometry for `kind`.
    fn load(&mut self, kind: MeshKind);

    /// Replaces the torus geometry with one of the given tube thickness.
    /// The next torus draw uses it.
    fn load_torus(&mut self, thickness: f32);

    /// Issues one draw of `kind`.
    fn draw(&mut self, kind: MeshKind);
}

/// Geometry cache and frame draw list.
#[derive(Default)]
pub struct MeshLibrary {
    geometries: FxHashMap<MeshKind, Geometry>,
    draw_list: Vec<MeshKind>,
}

impl MeshLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the draw list for a new frame.
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
    }

    /// The draws recorded since `begin_frame`, in issue order.
    pub fn draws(&self) -> &[MeshKind] {
        &self.draw_list
    }

    #[must_use]
    pub fn geometry(&self, kind: MeshKind) -> Option<&Geometry> {
        self.geometries.get(&kind)
    }

    #[must_use]
    pub fn is_loaded(&self, kind: MeshKind) -> bool {
        self.geometries.contains_key(&kind)
    }
}

impl MeshService for MeshLibrary {
    fn load(&mut self, kind: MeshKind) {
        match kind.base_kind() {
            MeshKind::Plane => {
                self.geometries
                    .insert(MeshKind::Plane, create_plane(PlaneOptions::default()));
            }
            MeshKind::Cylinder => {
                self.geometries.insert(
                    MeshKind::Cylinder,
                    create_cylinder(CylinderOptions::default()),
                );
            }
            MeshKind::Sphere => {
                // One load serves both draw kinds, as the full sphere and
                // its dome share generation parameters.
                self.geometries
                    .insert(MeshKind::Sphere, create_sphere(SphereOptions::default()));
                self.geometries
                    .insert(MeshKind::HalfSphere, create_half_sphere(1.0));
            }
            MeshKind::Torus => {
                self.geometries
                    .insert(MeshKind::Torus, create_torus(TorusOptions::default()));
            }
            MeshKind::Box => {
                self.geometries
                    .insert(MeshKind::Box, create_box(1.0, 1.0, 1.0));
            }
            MeshKind::HalfSphere => unreachable!("base_kind maps HalfSphere to Sphere"),
        }
    }

    fn load_torus(&mut self, thickness: f32) {
        self.geometries.insert(
            MeshKind::Torus,
            create_torus(TorusOptions {
                thickness,
                ..Default::default()
            }),
        );
    }

    fn draw(&mut self, kind: MeshKind) {
        if !self.geometries.contains_key(&kind) {
            log::warn!("draw of unloaded mesh kind {kind:?} skipped");
            return;
        }
        log::trace!("draw {kind:?}");
        self.draw_list.push(kind);
    }
}

use crate::resources::geometry::{Attribute, Geometry};
use std::f32::consts::PI;
use wgpu::VertexFormat;

pub struct TorusOptions {
    /// Distance from the torus center to the tube center.
    pub ring_radius: f32,
    /// Tube radius. The scene script varies this per draw (tray rim vs
    /// butter-dish rim), so the mesh service regenerates tori on demand.
    pub thickness: f32,
    pub ring_segments: u32,
    pub tube_segments: u32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            ring_radius: 1.0,
            thickness: 0.2,
            ring_segments: 36,
            tube_segments: 18,
        }
    }
}

/// Torus lying in the XY plane (ring axis +Z). The script stands rims up on
/// the table with an X-axis rotation of 90 degrees.
#[must_use]
pub fn create_torus(options: TorusOptions) -> Geometry {
    let ring_radius = options.ring_radius;
    let thickness = options.thickness;
    let ring_segments = options.ring_segments.max(3);
    let tube_segments = options.tube_segments.max(3);

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    for j in 0..=tube_segments {
        let v_ratio = j as f32 / tube_segments as f32;
        let v = v_ratio * 2.0 * PI;
        let (sin_v, cos_v) = v.sin_cos();

        for i in 0..=ring_segments {
            let u_ratio = i as f32 / ring_segments as f32;
            let u = u_ratio * 2.0 * PI;
            let (sin_u, cos_u) = u.sin_cos();

            let px = (ring_radius + thickness * cos_v) * cos_u;
            let py = (ring_radius + thickness * cos_v) * sin_u;
            let pz = thickness * sin_v;

            positions.push([px, py, pz]);
            normals.push([cos_v * cos_u, cos_v * sin_u, sin_v]);
            uvs.push([u_ratio, v_ratio]);
        }
    }

    let stride = ring_segments + 1;
    for j in 0..tube_segments {
        for i in 0..ring_segments {
            let v0 = j * stride + i;
            let v1 = v0 + 1;
            let v2 = (j + 1) * stride + i;
            let v3 = v2 + 1;

            indices.push(v0 as u16);
            indices.push(v1 as u16);
            indices.push(v2 as u16);

            indices.push(v1 as u16);
            indices.push(v3 as u16);
            indices.push(v2 as u16);
        }
    }

    let mut geo = Geometry::new();
    geo.set_attribute(
        "position",
        Attribute::new_planar(&positions, VertexFormat::Float32x3),
    );
    geo.set_attribute(
        "normal",
        Attribute::new_planar(&normals, VertexFormat::Float32x3),
    );
    geo.set_attribute("uv", Attribute::new_planar(&uvs, VertexFormat::Float32x2));
    geo.set_indices(&indices);
    geo.compute_bounding_volume();

    geo
}

use crate::resources::geometry::{Attribute, Geometry};
use std::f32::consts::PI;
use wgpu::VertexFormat;

pub struct CylinderOptions {
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    /// Skip the two end caps when true.
    pub open_ended: bool,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 1.0,
            radial_segments: 32,
            height_segments: 1,
            open_ended: false,
        }
    }
}

/// Capped cylinder with its base on the XZ plane: `y` spans `0..height`.
/// Scene objects sit on surfaces by translating the base, so the origin is
/// at the bottom rather than the center.
#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> Geometry {
    let radius = options.radius;
    let height = options.height;
    let radial_segments = options.radial_segments.max(3);
    let height_segments = options.height_segments.max(1);

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    // Side wall
    for iy in 0..=height_segments {
        let v_ratio = iy as f32 / height_segments as f32;
        let py = v_ratio * height;

        for ix in 0..=radial_segments {
            let u_ratio = ix as f32 / radial_segments as f32;
            let phi = u_ratio * 2.0 * PI;
            let (sin_phi, cos_phi) = phi.sin_cos();

            positions.push([radius * sin_phi, py, radius * cos_phi]);
            normals.push([sin_phi, 0.0, cos_phi]);
            uvs.push([u_ratio, 1.0 - v_ratio]);
        }
    }

    let stride = radial_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..radial_segments {
            let v0 = iy * stride + ix;
            let v1 = v0 + 1;
            let v2 = (iy + 1) * stride + ix;
            let v3 = v2 + 1;

            indices.push(v0 as u16);
            indices.push(v1 as u16);
            indices.push(v2 as u16);

            indices.push(v1 as u16);
            indices.push(v3 as u16);
            indices.push(v2 as u16);
        }
    }

    if !options.open_ended {
        for (cap_y, normal_y) in [(height, 1.0f32), (0.0, -1.0)] {
            let center_index = positions.len() as u16;
            positions.push([0.0, cap_y, 0.0]);
            normals.push([0.0, normal_y, 0.0]);
            uvs.push([0.5, 0.5]);

            let ring_start = positions.len() as u16;
            for ix in 0..=radial_segments {
                let phi = ix as f32 / radial_segments as f32 * 2.0 * PI;
                let (sin_phi, cos_phi) = phi.sin_cos();

                positions.push([radius * sin_phi, cap_y, radius * cos_phi]);
                normals.push([0.0, normal_y, 0.0]);
                uvs.push([0.5 + 0.5 * sin_phi, 0.5 + 0.5 * cos_phi]);
            }

            for ix in 0..radial_segments {
                let ring_a = ring_start + ix as u16;
                let ring_b = ring_start + ix as u16 + 1;
                if normal_y > 0.0 {
                    // Top cap, CCW seen from +Y
                    indices.extend_from_slice(&[center_index, ring_a, ring_b]);
                } else {
                    indices.extend_from_slice(&[center_index, ring_b, ring_a]);
                }
            }
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

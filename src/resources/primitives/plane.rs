use crate::resources::geometry::{Attribute, Geometry};
use wgpu::VertexFormat;

pub struct PlaneOptions {
    pub width: f32,
    pub depth: f32,
    pub width_segments: u32,
    pub depth_segments: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 2.0,
            depth: 2.0,
            width_segments: 1,
            depth_segments: 1,
        }
    }
}

/// Flat grid in the XZ plane at `y = 0`, facing +Y. A unit scale spans
/// `±width/2` by `±depth/2`, so the default covers -1..1 on both axes.
#[must_use]
pub fn create_plane(options: PlaneOptions) -> Geometry {
    let width_half = options.width / 2.0;
    let depth_half = options.depth / 2.0;

    let grid_x = options.width_segments.max(1);
    let grid_z = options.depth_segments.max(1);

    let grid_x1 = grid_x + 1;
    let grid_z1 = grid_z + 1;

    let segment_width = options.width / grid_x as f32;
    let segment_depth = options.depth / grid_z as f32;

    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u16> = Vec::new();

    for iz in 0..grid_z1 {
        let z = iz as f32 * segment_depth - depth_half;
        for ix in 0..grid_x1 {
            let x = ix as f32 * segment_width - width_half;

            positions.push([x, 0.0, z]);
            normals.push([0.0, 1.0, 0.0]);
            uvs.push([ix as f32 / grid_x as f32, 1.0 - (iz as f32 / grid_z as f32)]);
        }
    }

    for iz in 0..grid_z {
        for ix in 0..grid_x {
            let a = ix + grid_x1 * iz;
            let b = ix + grid_x1 * (iz + 1);
            let c = (ix + 1) + grid_x1 * (iz + 1);
            let d = (ix + 1) + grid_x1 * iz;

            // CCW seen from +Y
            indices.push(a as u16);
            indices.push(b as u16);
            indices.push(d as u16);

            indices.push(b as u16);
            indices.push(c as u16);
            indices.push(d as u16);
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

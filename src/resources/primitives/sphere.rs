use crate::resources::geometry::{Attribute, Geometry};
use std::f32::consts::{FRAC_PI_2, PI};
use wgpu::VertexFormat;

pub struct SphereOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    /// Latitude arc start, measured from the south pole.
    pub theta_start: f32,
    /// Latitude arc sweep; `PI` closes the full sphere.
    pub theta_length: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
            theta_start: 0.0,
            theta_length: PI,
        }
    }
}

pub fn create_sphere(options: SphereOptions) -> Geometry {
    let radius = options.radius;
    let width_segments = options.width_segments.max(3);
    let height_segments = options.height_segments.max(2);

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for y in 0..=height_segments {
        let v_ratio = y as f32 / height_segments as f32;
        // Latitude angle across the configured arc (south pole upward)
        let theta = options.theta_start + v_ratio * options.theta_length;

        let py = -radius * theta.cos();
        let ring_radius = radius * theta.sin();

        for x in 0..=width_segments {
            let u_ratio = x as f32 / width_segments as f32;
            let phi = u_ratio * 2.0 * PI;

            let px = -ring_radius * phi.cos();
            let pz = ring_radius * phi.sin();

            positions.push([px, py, pz]);
            normals.push([px / radius, py / radius, pz / radius]);
            uvs.push([u_ratio, 1.0 - v_ratio]);
        }
    }

    let stride = width_segments + 1;
    for y in 0..height_segments {
        for x in 0..width_segments {
            let v0 = y * stride + x;
            let v1 = v0 + 1;
            let v2 = (y + 1) * stride + x;
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

/// Upper dome of a sphere: base circle on the XZ plane, apex at
/// `y = radius`. Shaker caps and the butter-dish cover draw this kind.
#[must_use]
pub fn create_half_sphere(radius: f32) -> Geometry {
    create_sphere(SphereOptions {
        radius,
        height_segments: 8,
        theta_start: FRAC_PI_2,
        theta_length: FRAC_PI_2,
        ..Default::default()
    })
}

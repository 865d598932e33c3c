use core::ops::Range;
use std::cell::RefCell;

use glam::Vec3;
use rustc_hash::FxHashMap;
use uuid::Uuid;
use wgpu::{PrimitiveTopology, VertexFormat};

/// Attribute holds planar CPU-side vertex data plus its layout metadata.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub data: Vec<u8>,
    pub format: VertexFormat,
    pub count: u32,
    pub stride: u64,
}

impl Attribute {
    /// Builds a planar (non-interleaved) attribute from a typed slice.
    pub fn new_planar<T: bytemuck::Pod>(data: &[T], format: VertexFormat) -> Self {
        Self {
            data: bytemuck::cast_slice(data).to_vec(),
            format,
            count: data.len() as u32,
            stride: std::mem::size_of::<T>() as u64,
        }
    }

    pub fn read_vec3(&self, i: u32) -> Option<Vec3> {
        if self.format != VertexFormat::Float32x3 {
            return None;
        }
        let offset = (i as usize) * self.stride as usize;
        if offset + 12 <= self.data.len() {
            let bytes: &[u8; 12] = self.data[offset..offset + 12].try_into().ok()?;
            let vals: &[f32; 3] = bytemuck::cast_ref(bytes);
            return Some(Vec3::from_array(*vals));
        }
        None
    }

    pub fn read<T>(&self, i: u32) -> Option<T>
    where
        T: bytemuck::Pod,
    {
        let offset = (i as usize) * self.stride as usize;
        let size = std::mem::size_of::<T>();
        if offset + size <= self.data.len() {
            let val: &T = bytemuck::from_bytes(&self.data[offset..offset + size]);
            return Some(*val);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// CPU-side mesh data: named planar vertex attributes plus an optional
/// u16 index list. Backends upload the byte slices as-is.
#[derive(Debug)]
pub struct Geometry {
    pub uuid: Uuid,

    attributes: FxHashMap<String, Attribute>,
    index_attribute: Option<Attribute>,

    pub topology: PrimitiveTopology,
    pub draw_range: Range<u32>,

    pub bounding_box: RefCell<Option<BoundingBox>>,
    pub bounding_sphere: RefCell<Option<BoundingSphere>>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry {
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            attributes: FxHashMap::default(),
            index_attribute: None,
            topology: PrimitiveTopology::TriangleList,
            draw_range: 0..u32::MAX,
            bounding_box: RefCell::new(None),
            bounding_sphere: RefCell::new(None),
        }
    }

    pub fn attributes(&self) -> &FxHashMap<String, Attribute> {
        &self.attributes
    }

    pub fn index_attribute(&self) -> Option<&Attribute> {
        self.index_attribute.as_ref()
    }

    pub fn set_attribute(&mut self, name: &str, attr: Attribute) {
        self.attributes.insert(name.to_string(), attr);
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn set_indices(&mut self, indices: &[u16]) {
        self.index_attribute = Some(Attribute {
            data: bytemuck::cast_slice(indices).to_vec(),
            format: VertexFormat::Uint16,
            count: indices.len() as u32,
            stride: 2,
        });
        self.draw_range = 0..indices.len() as u32;
    }

    /// Vertex count of the `position` attribute, 0 if absent.
    pub fn vertex_count(&self) -> u32 {
        self.get_attribute("position").map_or(0, |a| a.count)
    }

    /// Index count, 0 for non-indexed geometry.
    pub fn index_count(&self) -> u32 {
        self.index_attribute.as_ref().map_or(0, |a| a.count)
    }

    pub fn compute_bounding_volume(&self) {
        let Some(pos_attr) = self.attributes.get("position") else {
            return;
        };
        if pos_attr.format != VertexFormat::Float32x3 {
            return;
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut valid_points = 0;

        for i in 0..pos_attr.count {
            if let Some(point) = pos_attr.read_vec3(i) {
                min = min.min(point);
                max = max.max(point);
                valid_points += 1;
            }
        }

        if valid_points == 0 {
            return;
        }

        *self.bounding_box.borrow_mut() = Some(BoundingBox { min, max });

        // AABB center as sphere center, radius from the farthest vertex.
        let center = (min + max) * 0.5;
        let mut max_dist_sq: f32 = 0.0;
        for i in 0..pos_attr.count {
            if let Some(point) = pos_attr.read_vec3(i) {
                max_dist_sq = max_dist_sq.max(point.distance_squared(center));
            }
        }

        *self.bounding_sphere.borrow_mut() = Some(BoundingSphere {
            center,
            radius: max_dist_sq.sqrt(),
        });
    }
}

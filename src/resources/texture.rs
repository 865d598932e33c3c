use std::path::Path;

use image::{DynamicImage, GenericImageView};
use rustc_hash::FxHashMap;

use crate::errors::{Result, TableauError};

/// Fixed number of texture-unit slots. Slot index equals registration
/// order, so the registry refuses a 17th texture instead of overwriting.
pub const MAX_TEXTURE_SLOTS: usize = 16;

// ============================================================================
// Decoded image data
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    #[must_use]
    pub fn channels(self) -> u8 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// CPU-side decoded image, vertically flipped at load so that UV origin
/// matches the renderer's convention. Only 3- and 4-channel layouts pass
/// decoding; anything else is rejected before a device resource exists.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height) as usize * format.channels() as usize,
            "pixel buffer size must match dimensions"
        );
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// Reads and decodes an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, &path.display().to_string())
    }

    /// Decodes an in-memory encoded image (PNG/JPEG).
    pub fn from_bytes(bytes: &[u8], label: &str) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(|e| {
            TableauError::ImageDecodeError(format!("failed to decode {label}: {e}"))
        })?;
        Self::from_dynamic(img, label)
    }

    fn from_dynamic(img: DynamicImage, label: &str) -> Result<Self> {
        let img = img.flipv();
        let (width, height) = img.dimensions();
        match img {
            DynamicImage::ImageRgb8(buf) => Ok(Self::new(
                width,
                height,
                PixelFormat::Rgb8,
                buf.into_raw(),
            )),
            DynamicImage::ImageRgba8(buf) => Ok(Self::new(
                width,
                height,
                PixelFormat::Rgba8,
                buf.into_raw(),
            )),
            other => Err(TableauError::UnsupportedChannelCount {
                label: label.to_string(),
                channels: other.color().channel_count(),
            }),
        }
    }
}

// ============================================================================
// Sampling policy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSampler {
    pub address_mode_u: wgpu::AddressMode,
    pub address_mode_v: wgpu::AddressMode,
    pub address_mode_w: wgpu::AddressMode,
    pub mag_filter: wgpu::FilterMode,
    pub min_filter: wgpu::FilterMode,
    pub mipmap_filter: wgpu::MipmapFilterMode,
}

impl Default for TextureSampler {
    fn default() -> Self {
        Self {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
        }
    }
}

// ============================================================================
// Device seam and registry
// ============================================================================

/// Opaque device-side texture identifier. Distinct from the slot: the
/// handle names the resource, the slot names the texture unit it binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Upload/bind/release surface a GPU backend implements. Mipmap generation
/// happens behind `create`, driven by the sampler's mipmap filter.
pub trait TextureDevice {
    fn create(&mut self, image: &TextureImage, sampler: &TextureSampler) -> TextureHandle;
    fn bind(&mut self, slot: usize, handle: TextureHandle);
    fn release(&mut self, handle: TextureHandle);
}

#[derive(Debug, Clone)]
pub struct TextureEntry {
    pub tag: String,
    pub handle: TextureHandle,
}

/// Tag-addressed texture table. Entries keep their insertion order; the
/// entry's index is its texture-unit slot for the lifetime of the registry.
#[derive(Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    slots_by_tag: FxHashMap<String, usize>,
}

impl TextureRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `path` and registers it under `tag`. Returns the assigned
    /// slot. On any failure no entry is added and no device resource is
    /// created.
    pub fn register_file(
        &mut self,
        path: impl AsRef<Path>,
        tag: &str,
        device: &mut dyn TextureDevice,
    ) -> Result<usize> {
        let image = TextureImage::open(path)?;
        self.register_image(&image, tag, device)
    }

    /// Uploads an already-decoded image and registers it under `tag`.
    pub fn register_image(
        &mut self,
        image: &TextureImage,
        tag: &str,
        device: &mut dyn TextureDevice,
    ) -> Result<usize> {
        if self.slots_by_tag.contains_key(tag) {
            return Err(TableauError::DuplicateTag(tag.to_string()));
        }
        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            return Err(TableauError::TextureCapacityExceeded {
                capacity: MAX_TEXTURE_SLOTS,
            });
        }

        let handle = device.create(image, &TextureSampler::default());
        let slot = self.entries.len();
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        self.slots_by_tag.insert(tag.to_string(), slot);

        log::info!(
            "registered texture '{tag}' ({}x{}, {} channels) in slot {slot}",
            image.width,
            image.height,
            image.format.channels()
        );
        Ok(slot)
    }

    /// Binds every registered texture to the unit equal to its slot, in
    /// registration order.
    pub fn bind_all(&self, device: &mut dyn TextureDevice) {
        for (slot, entry) in self.entries.iter().enumerate() {
            device.bind(slot, entry.handle);
        }
        log::debug!("bound {} textures", self.entries.len());
    }

    /// Releases every device texture and clears the registry.
    pub fn release_all(&mut self, device: &mut dyn TextureDevice) {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            device.release(entry.handle);
        }
        self.slots_by_tag.clear();
        log::info!("released {count} textures");
    }

    #[must_use]
    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.find_slot(tag).map(|slot| self.entries[slot].handle)
    }

    #[must_use]
    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.slots_by_tag.get(tag).copied()
    }

    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
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

//! Texture registry and decode tests
//!
//! Tests for:
//! - Slot assignment in registration order and tag lookup
//! - RGB/RGBA decoding, vertical flip, channel-count rejection
//! - File registration and I/O failure surfacing
//! - Duplicate-tag and capacity enforcement (no device leak on refusal)
//! - bind_all / release_all device traffic

use image::{ImageBuffer, Luma, Rgb, Rgba};

use tableau::errors::TableauError;
use tableau::resources::texture::{
    PixelFormat, TextureDevice, TextureHandle, TextureImage, TextureRegistry, TextureSampler,
    MAX_TEXTURE_SLOTS,
};

// ============================================================================
// Helpers
// ============================================================================

/// Device double that mints sequential handles and records all traffic.
#[derive(Default)]
struct RecordingDevice {
    next_handle: u64,
    created: Vec<TextureHandle>,
    bound: Vec<(usize, TextureHandle)>,
    released: Vec<TextureHandle>,
}

impl TextureDevice for RecordingDevice {
    fn create(&mut self, _image: &TextureImage, _sampler: &TextureSampler) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.created.push(handle);
        handle
    }

    fn bind(&mut self, slot: usize, handle: TextureHandle) {
        self.bound.push((slot, handle));
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}

fn small_image() -> TextureImage {
    TextureImage::new(2, 2, PixelFormat::Rgb8, vec![128; 12])
}

fn encode_png(img: image::DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("png encode");
    bytes
}

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn rgb_and_rgba_bytes_both_decode() {
    let rgb = encode_png(image::DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
        4,
        3,
        Rgb([10u8, 20, 30]),
    )));
    let decoded = TextureImage::from_bytes(&rgb, "rgb test").expect("rgb decodes");
    assert_eq!(decoded.width, 4);
    assert_eq!(decoded.height, 3);
    assert_eq!(decoded.format, PixelFormat::Rgb8);
    assert_eq!(decoded.pixels.len(), 4 * 3 * 3);

    let rgba = encode_png(image::DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
        2,
        2,
        Rgba([1u8, 2, 3, 4]),
    )));
    let decoded = TextureImage::from_bytes(&rgba, "rgba test").expect("rgba decodes");
    assert_eq!(decoded.format, PixelFormat::Rgba8);
    assert_eq!(decoded.pixels.len(), 2 * 2 * 4);
}

#[test]
fn decode_flips_rows_vertically() {
    let img = ImageBuffer::from_fn(1, 2, |_x, y| {
        if y == 0 {
            Rgb([255u8, 0, 0])
        } else {
            Rgb([0u8, 0, 255])
        }
    });
    let bytes = encode_png(image::DynamicImage::ImageRgb8(img));
    let decoded = TextureImage::from_bytes(&bytes, "flip test").expect("decodes");
    // Bottom source row must come out first
    assert_eq!(&decoded.pixels[0..3], &[0, 0, 255]);
    assert_eq!(&decoded.pixels[3..6], &[255, 0, 0]);
}

#[test]
fn grayscale_bytes_are_rejected() {
    let gray = encode_png(image::DynamicImage::ImageLuma8(ImageBuffer::from_pixel(
        2,
        2,
        Luma([99u8]),
    )));
    let err = TextureImage::from_bytes(&gray, "gray test").unwrap_err();
    match err {
        TableauError::UnsupportedChannelCount { channels, .. } => assert_eq!(channels, 1),
        other => panic!("expected UnsupportedChannelCount, got {other:?}"),
    }
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = TextureImage::from_bytes(b"not an image", "garbage").unwrap_err();
    assert!(matches!(err, TableauError::ImageDecodeError(_)));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn register_assigns_slots_in_order() {
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let image = small_image();

    assert_eq!(
        registry.register_image(&image, "wood", &mut device).unwrap(),
        0
    );
    assert_eq!(
        registry.register_image(&image, "steel", &mut device).unwrap(),
        1
    );
    assert_eq!(
        registry.register_image(&image, "cloth", &mut device).unwrap(),
        2
    );

    assert_eq!(registry.find_slot("wood"), Some(0));
    assert_eq!(registry.find_slot("cloth"), Some(2));
    let tags: Vec<&str> = registry.entries().iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, ["wood", "steel", "cloth"]);
}

#[test]
fn find_slot_miss_returns_none() {
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    registry
        .register_image(&small_image(), "wood", &mut device)
        .unwrap();
    assert_eq!(registry.find_slot("marble"), None);
    assert!(registry.find_handle("marble").is_none());
}

#[test]
fn duplicate_tag_is_refused_without_device_leak() {
    init_test_logger();
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let image = small_image();

    registry.register_image(&image, "wood", &mut device).unwrap();
    let err = registry.register_image(&image, "wood", &mut device).unwrap_err();
    assert!(matches!(err, TableauError::DuplicateTag(tag) if tag == "wood"));
    // The refused registration must not have touched the device
    assert_eq!(device.created.len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn capacity_is_sixteen_slots() {
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let image = small_image();

    for i in 0..MAX_TEXTURE_SLOTS {
        let slot = registry
            .register_image(&image, &format!("tex{i}"), &mut device)
            .unwrap();
        assert_eq!(slot, i);
    }
    let err = registry
        .register_image(&image, "one too many", &mut device)
        .unwrap_err();
    assert!(matches!(
        err,
        TableauError::TextureCapacityExceeded {
            capacity: MAX_TEXTURE_SLOTS
        }
    ));
    assert_eq!(device.created.len(), MAX_TEXTURE_SLOTS);
}

#[test]
fn register_file_reads_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "tableau_registry_test_{}.png",
        std::process::id()
    ));
    let bytes = encode_png(image::DynamicImage::ImageRgb8(ImageBuffer::from_pixel(
        2,
        2,
        Rgb([7u8, 8, 9]),
    )));
    std::fs::write(&path, bytes).expect("write temp png");

    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let slot = registry
        .register_file(&path, "from disk", &mut device)
        .expect("file registers");
    assert_eq!(slot, 0);
    assert!(registry.find_handle("from disk").is_some());

    std::fs::remove_file(&path).ok();
}

#[test]
fn register_file_missing_path_is_io_error() {
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let err = registry
        .register_file("/nonexistent/path/missing.jpg", "ghost", &mut device)
        .unwrap_err();
    assert!(matches!(err, TableauError::IoError(_)));
    assert!(registry.is_empty());
    assert!(device.created.is_empty());
}

// ============================================================================
// Binding and release
// ============================================================================

#[test]
fn bind_all_binds_units_in_registration_order() {
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let image = small_image();

    let h0 = registry.register_image(&image, "a", &mut device).unwrap();
    let h1 = registry.register_image(&image, "b", &mut device).unwrap();
    assert_eq!((h0, h1), (0, 1));

    registry.bind_all(&mut device);
    assert_eq!(
        device.bound,
        vec![(0, TextureHandle(0)), (1, TextureHandle(1))]
    );
}

#[test]
fn release_all_frees_every_handle_and_resets_slots() {
    init_test_logger();
    let mut registry = TextureRegistry::new();
    let mut device = RecordingDevice::default();
    let image = small_image();

    registry.register_image(&image, "a", &mut device).unwrap();
    registry.register_image(&image, "b", &mut device).unwrap();

    registry.release_all(&mut device);
    assert_eq!(device.released, device.created);
    assert!(registry.is_empty());
    assert_eq!(registry.find_slot("a"), None);

    // Slot numbering restarts after a full release
    let slot = registry.register_image(&image, "c", &mut device).unwrap();
    assert_eq!(slot, 0);
}

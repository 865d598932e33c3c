//! Scene renderer tests
//!
//! Tests for:
//! - Model matrix composition order (translate · rotX · rotY · rotZ · scale)
//! - Color/texture surface switching and the untextured fallback
//! - Material block writes, including the default-material fallback
//! - prepare_scene registry population, texture skip resilience and
//!   fail-fast on description errors
//! - render_scene draw-list replay of the built-in still life

use glam::{vec2, vec3, vec4, Mat4, Vec3};
use image::{ImageBuffer, Rgb};

use tableau::errors::TableauError;
use tableau::render::mesh::{MeshKind, MeshLibrary, MeshService};
use tableau::render::uniforms::UniformStore;
use tableau::resources::texture::{
    PixelFormat, TextureDevice, TextureHandle, TextureImage, TextureSampler,
};
use tableau::scene::catalog;
use tableau::scene::renderer::{compose_model_matrix, SceneRenderer};
use tableau::scene::script::{DrawStep, SceneDescription, SceneScript, Surface, TextureSource};

// ============================================================================
// Helpers
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[derive(Default)]
struct RecordingDevice {
    next_handle: u64,
    created: Vec<TextureHandle>,
    bound: Vec<(usize, TextureHandle)>,
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

    fn release(&mut self, _handle: TextureHandle) {}
}

fn small_image() -> TextureImage {
    TextureImage::new(2, 2, PixelFormat::Rgb8, vec![200; 12])
}

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn colored_step(name: &str, mesh: MeshKind) -> DrawStep {
    DrawStep {
        name: name.to_string(),
        scale: Vec3::ONE,
        rotation_deg: Vec3::ZERO,
        position: Vec3::ZERO,
        surface: Surface::Color(vec4(0.3, 0.3, 0.3, 1.0)),
        uv_scale: vec2(1.0, 1.0),
        material: "default".to_string(),
        mesh,
        torus_thickness: None,
    }
}

fn textured_step(name: &str, mesh: MeshKind, tag: &str) -> DrawStep {
    DrawStep {
        surface: Surface::Texture {
            tag: tag.to_string(),
        },
        ..colored_step(name, mesh)
    }
}

/// Writes the catalog's five manifest textures as real JPEG files under a
/// fresh temp root, so prepare_scene can register them.
fn write_catalog_assets(label: &str) -> std::path::PathBuf {
    let root = std::env::temp_dir().join(format!(
        "tableau_renderer_test_{label}_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(root.join("textures")).expect("create temp asset dir");
    for source in catalog::textures() {
        let img =
            image::DynamicImage::ImageRgb8(ImageBuffer::from_pixel(4, 4, Rgb([90u8, 60, 40])));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Jpeg,
        )
        .expect("jpeg encode");
        std::fs::write(root.join(&source.path), bytes).expect("write temp jpeg");
    }
    root
}

// ============================================================================
// Model matrix composition
// ============================================================================

#[test]
fn model_matrix_scales_rotates_then_translates() {
    let m = compose_model_matrix(
        vec3(2.0, 1.0, 1.0),
        vec3(0.0, 90.0, 0.0),
        vec3(1.0, 0.0, 0.0),
    );
    // (1,0,0) scaled to (2,0,0), 90° Y-rotated to (0,0,-2), moved to (1,0,-2)
    let p = m.transform_point3(Vec3::X);
    assert!(vec3_approx(p, vec3(1.0, 0.0, -2.0)), "got {p:?}");
}

#[test]
fn model_matrix_order_is_not_commutative() {
    let scale = vec3(2.0, 1.0, 1.0);
    let rotation = vec3(0.0, 90.0, 0.0);
    let position = vec3(1.0, 0.0, 0.0);

    let composed = compose_model_matrix(scale, rotation, position);
    let reversed = Mat4::from_scale(scale)
        * Mat4::from_rotation_y(rotation.y.to_radians())
        * Mat4::from_translation(position);

    let a = composed.transform_point3(Vec3::X);
    let b = reversed.transform_point3(Vec3::X);
    assert!(!vec3_approx(a, b), "orders should disagree, both gave {a:?}");
}

#[test]
fn model_matrix_rotation_applies_x_then_y_then_z() {
    // A pure-Z then pure-X composition applied to +Y distinguishes the order
    let m = compose_model_matrix(Vec3::ONE, vec3(90.0, 0.0, 90.0), Vec3::ZERO);
    // Z first: +Y → -X; X second: -X stays -X
    let p = m.transform_point3(Vec3::Y);
    assert!(vec3_approx(p, vec3(-1.0, 0.0, 0.0)), "got {p:?}");
}

// ============================================================================
// Surface switching
// ============================================================================

#[test]
fn set_color_clears_the_texture_flag() {
    let mut renderer = SceneRenderer::new(SceneDescription::default());
    let mut device = RecordingDevice::default();
    renderer
        .registry
        .textures
        .register_image(&small_image(), "wood", &mut device)
        .unwrap();

    let mut store = UniformStore::new();
    renderer.set_texture(&mut store, "wood");
    assert_eq!(store.get_bool("bUseTexture"), Some(true));
    assert_eq!(store.get_int("objectTexture"), Some(0));

    renderer.set_color(&mut store, vec4(0.1, 0.2, 0.3, 1.0));
    assert_eq!(store.get_bool("bUseTexture"), Some(false));
    assert_eq!(store.get_vec4("objectColor"), Some(vec4(0.1, 0.2, 0.3, 1.0)));
}

#[test]
fn set_texture_unknown_tag_falls_back_untextured() {
    init_test_logger();
    let renderer = SceneRenderer::new(SceneDescription::default());
    let mut store = UniformStore::new();

    renderer.set_texture(&mut store, "nonexistent");
    assert_eq!(store.get_bool("bUseTexture"), Some(false));
    assert_eq!(store.get_int("objectTexture"), None);
}

#[test]
fn set_texture_resolves_slot_by_registration_order() {
    let mut renderer = SceneRenderer::new(SceneDescription::default());
    let mut device = RecordingDevice::default();
    for tag in ["first", "second", "third"] {
        renderer
            .registry
            .textures
            .register_image(&small_image(), tag, &mut device)
            .unwrap();
    }

    let mut store = UniformStore::new();
    renderer.set_texture(&mut store, "third");
    assert_eq!(store.get_int("objectTexture"), Some(2));
    assert_eq!(store.get_bool("bUseTexture"), Some(true));
}

// ============================================================================
// Material writes
// ============================================================================

#[test]
fn set_material_writes_all_five_fields() {
    let mut renderer = SceneRenderer::new(SceneDescription::default());
    renderer
        .registry
        .materials
        .define(tableau::resources::Material {
            tag: "glossy".to_string(),
            ambient_color: vec3(1.0, 1.0, 1.0),
            ambient_strength: 0.01,
            diffuse_color: vec3(0.0, 0.0, 0.0),
            specular_color: vec3(0.2, 0.2, 0.35),
            shininess: 20.0,
        })
        .unwrap();

    let mut store = UniformStore::new();
    renderer.set_material(&mut store, "glossy");

    assert_eq!(store.get_vec3("material.ambientColor"), Some(Vec3::ONE));
    assert_eq!(store.get_float("material.ambientStrength"), Some(0.01));
    assert_eq!(store.get_vec3("material.diffuseColor"), Some(Vec3::ZERO));
    assert_eq!(
        store.get_vec3("material.specularColor"),
        Some(vec3(0.2, 0.2, 0.35))
    );
    assert_eq!(store.get_float("material.shininess"), Some(20.0));
}

#[test]
fn set_material_unknown_tag_resets_to_default() {
    init_test_logger();
    let mut renderer = SceneRenderer::new(SceneDescription::default());
    renderer
        .registry
        .materials
        .define(tableau::resources::Material {
            tag: "shiny".to_string(),
            shininess: 64.0,
            ..tableau::resources::Material::default()
        })
        .unwrap();

    let mut store = UniformStore::new();
    renderer.set_material(&mut store, "shiny");
    assert_eq!(store.get_float("material.shininess"), Some(64.0));

    // The miss must overwrite every field with the default material, not
    // leave the previous step's values standing
    renderer.set_material(&mut store, "no such tag");
    assert_eq!(store.get_float("material.shininess"), Some(1.0));
    assert_eq!(store.get_vec3("material.diffuseColor"), Some(Vec3::splat(0.8)));
    assert_eq!(store.get_vec3("material.specularColor"), Some(Vec3::ZERO));
}

// ============================================================================
// prepare_scene
// ============================================================================

#[test]
fn prepare_scene_populates_registries_and_meshes() {
    let root = write_catalog_assets("populate");
    let mut renderer = SceneRenderer::new(catalog::still_life());
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();

    renderer
        .prepare_scene(&root, &mut store, &mut meshes, &mut device)
        .expect("prepare succeeds");

    assert_eq!(renderer.registry.textures.len(), 5);
    assert_eq!(renderer.registry.textures.find_slot("customTexture"), Some(0));
    assert_eq!(renderer.registry.textures.find_slot("napkin_holder"), Some(4));
    assert_eq!(device.bound.len(), 5);

    assert_eq!(renderer.registry.materials.len(), 4);
    assert!(renderer.registry.materials.find("napkin").is_some());
    assert_eq!(renderer.registry.lights.len(), 2);

    for kind in [
        MeshKind::Plane,
        MeshKind::Cylinder,
        MeshKind::Sphere,
        MeshKind::HalfSphere,
        MeshKind::Torus,
        MeshKind::Box,
    ] {
        assert!(meshes.is_loaded(kind), "{kind:?} should be loaded");
    }

    assert_eq!(store.get_bool("bUseLighting"), Some(true));
    assert_eq!(
        store.get_vec3("lightSources[0].position"),
        Some(vec3(-7.0, 8.0, -2.0))
    );
    assert_eq!(store.get_float("lightSources[1].focalStrength"), Some(7.0));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn prepare_scene_skips_unreadable_textures_and_continues() {
    init_test_logger();
    // No asset files exist under this root at all
    let root = std::path::Path::new("/nonexistent/asset/root");
    let mut renderer = SceneRenderer::new(catalog::still_life());
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();

    renderer
        .prepare_scene(root, &mut store, &mut meshes, &mut device)
        .expect("missing textures must not fail the scene");

    assert!(renderer.registry.textures.is_empty());
    assert!(device.created.is_empty());
    // Everything that does not need the files is still set up
    assert_eq!(renderer.registry.materials.len(), 4);
    assert_eq!(renderer.registry.lights.len(), 2);
    assert!(meshes.is_loaded(MeshKind::Plane));
}

#[test]
fn prepare_scene_duplicate_texture_tag_fails_fast() {
    let root = write_catalog_assets("duplicate");
    let path = "textures/customTexture.jpg".to_string();
    let desc = SceneDescription {
        textures: vec![
            TextureSource {
                path: path.clone(),
                tag: "twice".to_string(),
            },
            TextureSource {
                path,
                tag: "twice".to_string(),
            },
        ],
        ..Default::default()
    };

    let mut renderer = SceneRenderer::new(desc);
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();

    let err = renderer
        .prepare_scene(&root, &mut store, &mut meshes, &mut device)
        .unwrap_err();
    assert!(matches!(err, TableauError::DuplicateTag(tag) if tag == "twice"));

    std::fs::remove_dir_all(&root).ok();
}

// ============================================================================
// render_scene
// ============================================================================

#[test]
fn render_scene_replays_all_twenty_four_steps() {
    let mut renderer = SceneRenderer::new(catalog::still_life());
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();
    let root = std::path::Path::new("/nonexistent");
    renderer
        .prepare_scene(root, &mut store, &mut meshes, &mut device)
        .expect("prepare");

    meshes.begin_frame();
    renderer.render_scene(&mut store, &mut meshes);

    let draws = meshes.draws();
    assert_eq!(draws.len(), 24);

    let count = |kind: MeshKind| draws.iter().filter(|k| **k == kind).count();
    assert_eq!(count(MeshKind::Plane), 11, "table + ten napkins");
    assert_eq!(count(MeshKind::Cylinder), 4, "shaker bodies, sugar bowl, tray");
    assert_eq!(count(MeshKind::HalfSphere), 4, "caps, lid and butter dome");
    assert_eq!(count(MeshKind::Torus), 2, "tray and butter-dish rims");
    assert_eq!(count(MeshKind::Box), 3, "holder panels and base");
}

#[test]
fn render_scene_regenerates_torus_per_rim() {
    let mut renderer = SceneRenderer::new(catalog::still_life());
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();
    renderer
        .prepare_scene(std::path::Path::new("/nonexistent"), &mut store, &mut meshes, &mut device)
        .expect("prepare");

    meshes.begin_frame();
    renderer.render_scene(&mut store, &mut meshes);

    // The butter-dish rim draws last, so its tube thickness is the one left
    // in the library after the frame
    let torus = meshes.geometry(MeshKind::Torus).expect("torus loaded");
    let bb = torus.bounding_box.borrow().expect("bounding box");
    assert!((bb.max.z - 0.11).abs() < EPSILON, "got {}", bb.max.z);
}

#[test]
fn render_scene_ends_frames_in_identical_state() {
    let root = write_catalog_assets("frames");
    let mut renderer = SceneRenderer::new(catalog::still_life());
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();
    renderer
        .prepare_scene(&root, &mut store, &mut meshes, &mut device)
        .expect("prepare");

    meshes.begin_frame();
    renderer.render_scene(&mut store, &mut meshes);
    let first_frame_draws = meshes.draws().to_vec();
    let napkin_color = store.get_vec4("objectColor");
    let flag = store.get_bool("bUseTexture");

    meshes.begin_frame();
    renderer.render_scene(&mut store, &mut meshes);
    assert_eq!(meshes.draws(), first_frame_draws.as_slice());
    assert_eq!(store.get_vec4("objectColor"), napkin_color);
    assert_eq!(store.get_bool("bUseTexture"), flag);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn color_step_after_textured_step_draws_untextured() {
    let desc = SceneDescription {
        script: SceneScript {
            steps: vec![
                textured_step("textured", MeshKind::Box, "wood"),
                colored_step("flat", MeshKind::Box),
            ],
        },
        ..Default::default()
    };

    let mut renderer = SceneRenderer::new(desc);
    let mut device = RecordingDevice::default();
    renderer
        .registry
        .textures
        .register_image(&small_image(), "wood", &mut device)
        .unwrap();

    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    meshes.load(MeshKind::Box);

    renderer.render_scene(&mut store, &mut meshes);
    assert_eq!(store.get_bool("bUseTexture"), Some(false));

    // Reversed order ends the frame textured
    let desc = SceneDescription {
        script: SceneScript {
            steps: vec![
                colored_step("flat", MeshKind::Box),
                textured_step("textured", MeshKind::Box, "wood"),
            ],
        },
        ..Default::default()
    };
    let mut renderer = SceneRenderer::new(desc);
    renderer
        .registry
        .textures
        .register_image(&small_image(), "wood", &mut device)
        .unwrap();

    let mut store = UniformStore::new();
    renderer.render_scene(&mut store, &mut meshes);
    assert_eq!(store.get_bool("bUseTexture"), Some(true));
    assert_eq!(store.get_int("objectTexture"), Some(0));
}

#[test]
fn still_life_final_step_leaves_napkin_state() {
    let mut renderer = SceneRenderer::new(catalog::still_life());
    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    let mut device = RecordingDevice::default();
    renderer
        .prepare_scene(std::path::Path::new("/nonexistent"), &mut store, &mut meshes, &mut device)
        .expect("prepare");

    renderer.render_scene(&mut store, &mut meshes);

    // The tenth napkin draws last: flat light gray with the napkin material
    assert_eq!(store.get_bool("bUseTexture"), Some(false));
    assert_eq!(
        store.get_vec4("objectColor"),
        Some(vec4(0.85, 0.85, 0.85, 1.0))
    );
    assert_eq!(store.get_float("material.shininess"), Some(0.5));
    assert_eq!(
        store.get_vec3("material.ambientColor"),
        Some(Vec3::splat(0.5))
    );
}

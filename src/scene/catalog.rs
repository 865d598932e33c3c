//! Built-in still-life scene
//!
//! The authored tabletop arrangement as literal data: a wooden table
//! carrying a serving tray with salt and pepper shakers, a sugar bowl, a
//! covered butter dish, and a napkin holder with a leaning stack of ten
//! napkins. Frame-over-frame state is explicit here: every step carries
//! its full transform/surface/material record, so reordering or removing
//! steps cannot leak state between objects.

use glam::{vec2, vec3, vec4, Vec2, Vec3, Vec4};

use crate::render::MeshKind;
use crate::resources::{LightSource, Material};
use crate::scene::camera::Camera;
use crate::scene::script::{DrawStep, SceneDescription, SceneScript, Surface, TextureSource};
use crate::scene::view::ViewContext;

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 800;

/// Lean of the napkin stack, degrees around Z. The stacking formula
/// shifts each napkin along X by `tan(lean) * z` to keep the pile flush
/// against the tilted holder panels.
const NAPKIN_LEAN_DEG: f32 = -20.0;
const NAPKIN_COUNT: u32 = 10;

/// The complete built-in scene.
#[must_use]
pub fn still_life() -> SceneDescription {
    SceneDescription {
        textures: textures(),
        materials: materials(),
        lights: lights(),
        script: script(),
    }
}

/// Texture manifest; order fixes slot assignment.
#[must_use]
pub fn textures() -> Vec<TextureSource> {
    [
        ("textures/customTexture.jpg", "customTexture"),
        ("textures/customTexture2.jpg", "customTexture2"),
        ("textures/table_wood.jpg", "table_wood"),
        ("textures/butter_tray.jpg", "butter_tray"),
        ("textures/napkin_holder.jpg", "napkin_holder"),
    ]
    .into_iter()
    .map(|(path, tag)| TextureSource {
        path: path.to_string(),
        tag: tag.to_string(),
    })
    .collect()
}

#[must_use]
pub fn materials() -> Vec<Material> {
    vec![
        Material {
            tag: "design".to_string(),
            ambient_color: vec3(1.0, 1.0, 1.0),
            ambient_strength: 0.01,
            diffuse_color: vec3(0.0, 0.0, 0.0),
            specular_color: vec3(0.2, 0.2, 0.35),
            shininess: 20.0,
        },
        Material {
            tag: "brown".to_string(),
            ambient_color: vec3(1.0, 1.0, 1.0),
            ambient_strength: 0.01,
            diffuse_color: vec3(0.0, 0.0, 0.0),
            specular_color: vec3(0.05, 0.05, 0.05),
            shininess: 20.0,
        },
        Material {
            tag: "table".to_string(),
            ambient_color: vec3(1.0, 1.0, 1.0),
            ambient_strength: 0.01,
            diffuse_color: vec3(0.1, 0.1, 0.1),
            specular_color: vec3(0.2, 0.2, 0.2),
            shininess: 30.0,
        },
        Material {
            tag: "napkin".to_string(),
            ambient_color: vec3(0.5, 0.5, 0.5),
            ambient_strength: 0.005,
            diffuse_color: vec3(0.1, 0.1, 0.1),
            specular_color: vec3(0.2, 0.2, 0.2),
            shininess: 0.5,
        },
    ]
}

/// Two point lights: a warm kitchen light up left, a cool window light
/// behind the viewer.
#[must_use]
pub fn lights() -> Vec<LightSource> {
    vec![
        LightSource {
            position: vec3(-7.0, 8.0, -2.0),
            ambient_color: vec3(0.5, 0.5, 0.45),
            diffuse_color: vec3(0.1, 0.1, 0.01),
            specular_color: vec3(0.9, 0.9, 0.5),
            focal_strength: 64.0,
            specular_intensity: 0.9,
        },
        LightSource {
            position: vec3(0.0, 7.0, 15.0),
            ambient_color: vec3(0.5, 0.5, 0.6),
            diffuse_color: vec3(0.2, 0.2, 0.2),
            specular_color: vec3(0.5, 0.5, 0.8),
            focal_strength: 7.0,
            specular_intensity: 0.2,
        },
    ]
}

fn textured(
    name: &str,
    mesh: MeshKind,
    scale: Vec3,
    rotation_deg: Vec3,
    position: Vec3,
    tag: &str,
    uv_scale: Vec2,
    material: &str,
) -> DrawStep {
    DrawStep {
        name: name.to_string(),
        scale,
        rotation_deg,
        position,
        surface: Surface::Texture {
            tag: tag.to_string(),
        },
        uv_scale,
        material: material.to_string(),
        mesh,
        torus_thickness: None,
    }
}

fn colored(
    name: &str,
    mesh: MeshKind,
    scale: Vec3,
    rotation_deg: Vec3,
    position: Vec3,
    color: Vec4,
    material: &str,
) -> DrawStep {
    DrawStep {
        name: name.to_string(),
        scale,
        rotation_deg,
        position,
        surface: Surface::Color(color),
        uv_scale: Vec2::ONE,
        material: material.to_string(),
        mesh,
        torus_thickness: None,
    }
}

/// The 24-step draw script, back-to-front as authored: table, shakers,
/// sugar bowl, tray, butter dish, napkin holder, napkin stack.
#[must_use]
pub fn script() -> SceneScript {
    let mut steps = vec![
        colored(
            "table",
            MeshKind::Plane,
            vec3(25.0, 1.0, 25.0),
            Vec3::ZERO,
            vec3(0.0, 0.0, -10.0),
            vec4(0.1, 0.084, 0.052, 1.0),
            "table",
        ),
        textured(
            "salt shaker body",
            MeshKind::Cylinder,
            vec3(1.4, 2.5, 1.4),
            vec3(0.0, 55.0, 0.0),
            vec3(4.2, 1.2, 2.8),
            "customTexture",
            vec2(2.0, 1.0),
            "design",
        ),
        textured(
            "salt shaker cap",
            MeshKind::HalfSphere,
            vec3(1.5, 1.0, 1.5),
            vec3(0.0, 55.0, 0.0),
            vec3(4.2, 3.7, 2.8),
            "customTexture2",
            vec2(4.0, 3.0),
            "brown",
        ),
        textured(
            "pepper shaker body",
            MeshKind::Cylinder,
            vec3(1.4, 2.5, 1.4),
            vec3(0.0, 85.0, 0.0),
            vec3(-3.5, 1.2, 2.5),
            "customTexture",
            vec2(2.0, 1.0),
            "design",
        ),
        textured(
            "pepper shaker cap",
            MeshKind::HalfSphere,
            vec3(1.5, 1.0, 1.5),
            vec3(0.0, 85.0, 0.0),
            vec3(-3.5, 3.7, 2.5),
            "customTexture2",
            vec2(4.0, 3.0),
            "brown",
        ),
        textured(
            "sugar bowl body",
            MeshKind::Cylinder,
            vec3(1.6, 1.1, 1.6),
            vec3(0.0, 30.0, 0.0),
            vec3(2.0, 1.2, -1.5),
            "customTexture",
            vec2(2.0, 1.0),
            "design",
        ),
        textured(
            "sugar bowl lid",
            MeshKind::HalfSphere,
            vec3(1.7, 0.9, 1.7),
            vec3(0.0, 30.0, 0.0),
            vec3(2.0, 2.3, -1.5),
            "customTexture2",
            vec2(4.0, 3.0),
            "brown",
        ),
        textured(
            "tray base",
            MeshKind::Cylinder,
            vec3(7.0, 0.9, 7.0),
            Vec3::ZERO,
            vec3(0.0, 0.3, 0.0),
            "table_wood",
            vec2(4.0, 3.0),
            "table",
        ),
        DrawStep {
            torus_thickness: Some(0.03),
            ..textured(
                "tray ring",
                MeshKind::Torus,
                vec3(6.82, 6.82, 6.82),
                vec3(90.0, 0.0, 0.0),
                vec3(0.0, 1.1, 0.0),
                "table_wood",
                vec2(4.0, 3.0),
                "table",
            )
        },
        textured(
            "butter dish dome",
            MeshKind::HalfSphere,
            vec3(1.5, 2.0, 3.0),
            vec3(0.0, 140.0, 0.0),
            vec3(0.0, 1.3, 3.3),
            "butter_tray",
            vec2(2.0, 2.0),
            "design",
        ),
        DrawStep {
            torus_thickness: Some(0.11),
            ..textured(
                "butter dish ring",
                MeshKind::Torus,
                vec3(1.7, 3.2, 3.5),
                vec3(90.0, 0.0, 40.0),
                // Shares the dome's position so the rim hugs the dish.
                vec3(0.0, 1.3, 3.3),
                "customTexture2",
                vec2(4.0, 3.0),
                "brown",
            )
        },
        textured(
            "napkin holder panel A",
            MeshKind::Box,
            vec3(5.0, 5.0, 0.5),
            vec3(0.0, 20.0, 0.0),
            vec3(-1.727_940_5, 3.4, -2.0),
            "napkin_holder",
            vec2(1.0, 1.0),
            "design",
        ),
        textured(
            "napkin holder panel B",
            MeshKind::Box,
            vec3(5.0, 5.0, 0.5),
            vec3(0.0, 20.0, 0.0),
            vec3(-1.0, 3.4, 0.0),
            "napkin_holder",
            vec2(1.0, 1.0),
            "design",
        ),
        colored(
            "napkin holder base",
            MeshKind::Box,
            vec3(5.0, 0.5, 2.0),
            vec3(0.0, 20.0, 0.0),
            vec3(-1.363_970_2, 1.15, -1.0),
            vec4(0.596, 0.708, 0.780, 1.0),
            "design",
        ),
    ];

    for i in 1..=NAPKIN_COUNT {
        let z_pos = i as f32 / 6.0;
        let x_pos = -1.0 + NAPKIN_LEAN_DEG.to_radians().tan() * z_pos;
        steps.push(colored(
            &format!("napkin {i}"),
            MeshKind::Plane,
            vec3(3.0, 3.0, 2.5),
            vec3(90.0, 0.0, NAPKIN_LEAN_DEG),
            vec3(x_pos, 4.0, -z_pos),
            vec4(0.85, 0.85, 0.85, 1.0),
            "napkin",
        ));
    }

    SceneScript { steps }
}

/// Camera looking down at the tray from in front of the table.
#[must_use]
pub fn camera() -> Camera {
    Camera::new(
        vec3(0.0, 5.0, 10.0),
        vec3(0.0, -0.2, -0.5),
        Vec3::Y,
        80.0,
    )
}

/// View defaults: the catalog camera, perspective projection, and the
/// authored window size.
#[must_use]
pub fn view() -> ViewContext {
    ViewContext::new(camera(), WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
}

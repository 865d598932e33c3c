use std::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::vec3;

use tableau::render::mesh::MeshLibrary;
use tableau::render::uniforms::UniformStore;
use tableau::resources::primitives::{
    create_cylinder, create_sphere, create_torus, CylinderOptions, SphereOptions, TorusOptions,
};
use tableau::resources::texture::{
    PixelFormat, TextureDevice, TextureHandle, TextureImage, TextureSampler,
};
use tableau::scene::catalog;
use tableau::scene::renderer::{compose_model_matrix, SceneRenderer};

#[derive(Default)]
struct NullDevice {
    next_handle: u64,
}

impl TextureDevice for NullDevice {
    fn create(&mut self, _image: &TextureImage, _sampler: &TextureSampler) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn bind(&mut self, _slot: usize, _handle: TextureHandle) {}

    fn release(&mut self, _handle: TextureHandle) {}
}

/// Builds a fully prepared still-life renderer whose textures come from
/// in-memory images, so the bench never touches the filesystem.
fn prepared_still_life() -> (SceneRenderer, UniformStore, MeshLibrary) {
    let mut desc = catalog::still_life();
    let manifest = std::mem::take(&mut desc.textures);

    let mut renderer = SceneRenderer::new(desc);
    let mut device = NullDevice::default();
    let image = TextureImage::new(2, 2, PixelFormat::Rgb8, vec![128; 12]);
    for source in &manifest {
        renderer
            .registry
            .textures
            .register_image(&image, &source.tag, &mut device)
            .expect("register bench texture");
    }

    let mut store = UniformStore::new();
    let mut meshes = MeshLibrary::new();
    renderer
        .prepare_scene(Path::new("."), &mut store, &mut meshes, &mut device)
        .expect("prepare bench scene");

    (renderer, store, meshes)
}

fn bench_script_replay(c: &mut Criterion) {
    let (renderer, mut store, mut meshes) = prepared_still_life();

    c.bench_function("render_scene/still_life_24_steps", |b| {
        b.iter(|| {
            meshes.begin_frame();
            renderer.render_scene(&mut store, &mut meshes);
            black_box(meshes.draws().len())
        })
    });
}

fn bench_model_matrix(c: &mut Criterion) {
    c.bench_function("compose_model_matrix", |b| {
        b.iter(|| {
            black_box(compose_model_matrix(
                black_box(vec3(1.4, 2.5, 1.4)),
                black_box(vec3(0.0, 55.0, 0.0)),
                black_box(vec3(4.2, 1.2, 2.8)),
            ))
        })
    });
}

fn bench_primitive_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");
    group.bench_function("cylinder", |b| {
        b.iter(|| black_box(create_cylinder(CylinderOptions::default())));
    });
    group.bench_function("sphere", |b| {
        b.iter(|| black_box(create_sphere(SphereOptions::default())));
    });
    // Regenerated twice per frame by the rim draws
    group.bench_function("torus", |b| {
        b.iter(|| {
            black_box(create_torus(TorusOptions {
                thickness: 0.11,
                ..Default::default()
            }))
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_script_replay,
    bench_model_matrix,
    bench_primitive_generation
);
criterion_main!(benches);

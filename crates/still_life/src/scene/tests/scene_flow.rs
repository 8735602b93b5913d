//! Prepare, render and teardown through the scene manager

use std::path::Path;

use image::{Rgb, RgbImage};

use super::observed_pipeline;
use crate::core::ApplicationConfig;
use crate::foundation::math::Vec4;
use crate::render::headless::HeadlessTextures;
use crate::render::primitives::{MeshKind, ShapeFaces};
use crate::render::shader::uniforms;
use crate::render::transform::TransformParams;
use crate::scene::layout::{MaterialSource, SceneObject, Surface, SCENE_TEXTURES, STILL_LIFE};
use crate::scene::material_registry::ObjectMaterial;
use crate::scene::scene_manager::SceneManager;

fn write_textures(dir: &Path, skip: &[&str]) {
    for (i, source) in SCENE_TEXTURES.iter().enumerate() {
        if skip.contains(&source.tag) {
            continue;
        }
        let shade = 40 + 25 * i as u8;
        RgbImage::from_pixel(8, 8, Rgb([shade, shade / 2, 20]))
            .save(dir.join(source.file))
            .unwrap();
    }
}

fn config_for(dir: &Path) -> ApplicationConfig {
    let mut config = ApplicationConfig::default();
    config.assets.textures_dir = dir.to_string_lossy().into_owned();
    config
}

#[test]
fn test_full_scene_issues_thirteen_draws_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_textures(dir.path(), &[]);

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (_recorder, mut shader, mut meshes) = observed_pipeline();

    let report = manager.prepare_scene(&mut meshes, &mut textures);
    assert_eq!(report.meshes_loaded, 8);
    assert_eq!(report.textures_loaded, 7);
    assert_eq!(report.textures_bound, 7);
    assert!(report.is_complete());
    assert!(manager.materials().is_empty());

    let stats = manager.render_scene(&mut shader, &mut meshes);
    assert_eq!(stats.draws_issued, 13);
    assert_eq!(stats.draws_failed, 0);
    assert_eq!(stats.texture_fallbacks, 0);
    assert!(stats.triangles > 0);

    assert_eq!(meshes.draws.len(), STILL_LIFE.len());
    for (draw, object) in meshes.draws.iter().zip(STILL_LIFE.iter()) {
        assert_eq!(draw.kind, object.mesh, "{}", object.name);
        assert_eq!(draw.faces, object.faces, "{}", object.name);
        assert_eq!(draw.use_texture, Some(1), "{}", object.name);
        assert_eq!(draw.model, Some(object.transform.to_matrix()), "{}", object.name);

        let Surface::Texture(tag) = object.surface else { unreachable!() };
        let slot = manager.find_texture_slot(tag).unwrap() as u32;
        assert_eq!(draw.sampler, Some(slot), "{}", object.name);
        assert_eq!(textures.bound(slot as usize), manager.find_texture_id(tag));
    }
}

#[test]
fn test_inline_materials_are_inherited() {
    let dir = tempfile::tempdir().unwrap();
    write_textures(dir.path(), &[]);

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (_recorder, mut shader, mut meshes) = observed_pipeline();

    manager.prepare_scene(&mut meshes, &mut textures);
    manager.render_scene(&mut shader, &mut meshes);

    assert_eq!(meshes.draws[0].shininess, Some(64.0));
    assert!(meshes.draws[1..].iter().all(|draw| draw.shininess == Some(16.0)));
    assert!(meshes.draws.iter().all(|draw| draw.use_lighting == Some(1)));
}

#[test]
fn test_lighting_environment_is_pushed_each_frame() {
    let manager = SceneManager::default();
    let (recorder, mut shader, mut meshes) = observed_pipeline();

    manager.render_scene(&mut shader, &mut meshes);

    let recorder = recorder.borrow();
    assert_eq!(recorder.int(uniforms::USE_LIGHTING), Some(1));
    assert_eq!(recorder.int(&uniforms::directional_light("bActive")), Some(1));
    assert_eq!(recorder.int(&uniforms::point_light(0, "bActive")), Some(1));
    for index in 1..5 {
        assert_eq!(recorder.int(&uniforms::point_light(index, "bActive")), Some(0));
    }
    assert_eq!(recorder.int(&uniforms::spot_light("bActive")), Some(0));
}

#[test]
fn test_missing_textures_fall_back_to_color() {
    let dir = tempfile::tempdir().unwrap();

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (recorder, mut shader, mut meshes) = observed_pipeline();

    let report = manager.prepare_scene(&mut meshes, &mut textures);
    assert_eq!(report.textures_loaded, 0);
    assert_eq!(report.textures_failed, 7);
    assert!(manager.textures().is_empty());

    let stats = manager.render_scene(&mut shader, &mut meshes);
    assert_eq!(stats.draws_issued, 13);
    assert_eq!(stats.texture_fallbacks, 13);

    let fallback = Vec4::from(manager.fallback_color());
    for draw in &meshes.draws {
        assert_eq!(draw.use_texture, Some(0));
        assert_eq!(draw.color, Some(fallback));
    }
    assert_eq!(recorder.borrow().sampler(uniforms::OBJECT_TEXTURE), None);
}

#[test]
fn test_one_missing_texture_only_affects_its_objects() {
    let dir = tempfile::tempdir().unwrap();
    write_textures(dir.path(), &["stone"]);

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (_recorder, mut shader, mut meshes) = observed_pipeline();

    let report = manager.prepare_scene(&mut meshes, &mut textures);
    assert_eq!(report.textures_loaded, 6);
    assert_eq!(report.textures_failed, 1);

    let stats = manager.render_scene(&mut shader, &mut meshes);
    assert_eq!(stats.texture_fallbacks, 4);

    for (draw, object) in meshes.draws.iter().zip(STILL_LIFE.iter()) {
        let expected = if object.surface == Surface::Texture("stone") { 0 } else { 1 };
        assert_eq!(draw.use_texture, Some(expected), "{}", object.name);
    }

    // Plate base follows the jug; its sampler must point at wood, not a stale unit
    let wood = manager.find_texture_slot("wood").unwrap() as u32;
    assert_eq!(meshes.draws[5].sampler, Some(wood));
}

#[test]
fn test_render_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    write_textures(dir.path(), &[]);

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (_recorder, mut shader, mut meshes) = observed_pipeline();
    manager.prepare_scene(&mut meshes, &mut textures);

    let first = manager.render_scene(&mut shader, &mut meshes);
    let first_draws = std::mem::take(&mut meshes.draws);
    let second = manager.render_scene(&mut shader, &mut meshes);

    assert_eq!(first, second);
    assert_eq!(first_draws, meshes.draws);
}

#[test]
fn test_repeated_prepare_appends_until_full() {
    let dir = tempfile::tempdir().unwrap();
    write_textures(dir.path(), &[]);

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (_recorder, _shader, mut meshes) = observed_pipeline();

    let loaded: Vec<_> = (0..3)
        .map(|_| manager.prepare_scene(&mut meshes, &mut textures))
        .map(|report| (report.textures_loaded, report.textures_failed))
        .collect();

    assert_eq!(loaded, vec![(7, 0), (7, 0), (2, 5)]);
    assert_eq!(manager.textures().len(), 16);
    assert_eq!(manager.find_texture_slot("wood"), Some(0));
}

#[test]
fn test_teardown_releases_without_creating() {
    let dir = tempfile::tempdir().unwrap();
    write_textures(dir.path(), &[]);

    let mut manager = SceneManager::new(&config_for(dir.path()));
    let mut textures = HeadlessTextures::default();
    let (_recorder, _shader, mut meshes) = observed_pipeline();
    manager.prepare_scene(&mut meshes, &mut textures);

    let created = textures.created_count();
    assert_eq!(manager.destroy_textures(&mut textures), 7);
    assert_eq!(textures.created_count(), created);
    assert_eq!(textures.live_count(), 0);
    assert_eq!(manager.find_texture_id("wood"), None);
}

#[test]
fn test_tagged_materials_from_config() {
    let mut config = ApplicationConfig::default();
    config.scene.materials.push(ObjectMaterial::new("glazed", [0.9, 0.9, 0.85], [0.6, 0.6, 0.6], 48.0));

    let mut manager = SceneManager::new(&config);
    let mut textures = HeadlessTextures::default();
    let (_recorder, mut shader, mut meshes) = observed_pipeline();

    let report = manager.prepare_scene(&mut meshes, &mut textures);
    assert_eq!(report.materials_available, 1);
    assert!(manager.find_material("glazed").is_some());

    let shape = |name, material| SceneObject {
        name,
        mesh: MeshKind::Box,
        transform: TransformParams::IDENTITY,
        lighting: Some(true),
        material,
        surface: Surface::Color([0.5, 0.5, 0.5, 1.0]),
        uv_scale: [1.0, 1.0],
        faces: ShapeFaces::ALL,
    };
    let objects = [
        shape("glazed box", MaterialSource::Tagged("glazed")),
        shape("unknown box", MaterialSource::Tagged("lacquer")),
    ];

    let stats = manager.render_objects(&mut shader, &mut meshes, &objects);
    assert_eq!(stats.draws_issued, 2);
    assert_eq!(meshes.draws[0].shininess, Some(48.0));
    assert_eq!(meshes.draws[1].shininess, Some(48.0));
    assert_eq!(meshes.draws[1].use_texture, Some(0));
}

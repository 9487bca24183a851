//! Configuration Tests
//!
//! Tests for:
//! - SceneConfig JSON documents: defaults, aliases, file loading
//! - Parse and I/O failures surfacing as TableauError
//! - Type tags resolved by the factories at build time
//! - Colour values

use glam::Vec3;

use tableau::config::{CameraConfig, ColorValue, LightConfig, MaterialConfig, SceneConfig};
use tableau::errors::TableauError;
use tableau::resources::{Material, parse_color};
use tableau::scene::{Scene, SceneBuilder};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const DOCUMENT: &str = r##"{
    "camera": { "type": "PERSPECTIVE", "width": 1280, "height": 720,
                "position": { "x": 10, "y": 3, "z": 10 } },
    "items": [
        {
            "name": "box",
            "geometry": { "type": "BOX", "width": 2, "height": 2, "depth": 2 },
            "material": { "type": "STANDARD", "color": "#3366ff", "roughness": 0.4 },
            "position": { "x": 20, "y": 1, "z": 20 }
        },
        {
            "name": "sphere",
            "geometryConfig": { "type": "SPHERE", "radius": 1.5 },
            "materialConfig": { "color": 16711680 }
        }
    ],
    "lights": [
        { "type": "DIRECIONAL_LIGHT", "intensity": 0.8, "castShadow": true }
    ]
}"##;

// ============================================================================
// Documents
// ============================================================================

#[test]
fn parses_full_document() -> anyhow::Result<()> {
    init_logger();
    let config = SceneConfig::from_json_str(DOCUMENT)?;

    let camera = config.camera.as_ref().unwrap();
    assert_eq!(camera.kind, "PERSPECTIVE");
    assert!((camera.aspect() - 1280.0 / 720.0).abs() < 1e-6);
    // Unspecified fields keep their defaults
    assert_eq!(camera.fov, 45.0);
    assert_eq!(camera.far, 1000.0);

    assert_eq!(config.items.len(), 2);
    let sphere = &config.items[1];
    assert_eq!(sphere.geometry.as_ref().unwrap().radius, 1.5);
    assert_eq!(sphere.material.as_ref().unwrap().roughness, 1.0);

    let light = &config.lights[0];
    assert!(light.cast_shadow);
    assert_eq!(light.color, ColorValue::WHITE);
    Ok(())
}

#[test]
fn empty_document_is_valid() -> anyhow::Result<()> {
    let config = SceneConfig::from_json_str("{}")?;
    assert!(config.camera.is_none());
    assert!(config.items.is_empty());
    assert!(config.catalog().is_empty());
    Ok(())
}

#[test]
fn malformed_json_is_a_parse_error() {
    let result = SceneConfig::from_json_str(r#"{ "items": [ { "name": 3 } ] }"#);
    assert!(matches!(result, Err(TableauError::ConfigParse(_))));
}

#[test]
fn loads_from_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("tableau-scene-{}.json", std::process::id()));
    std::fs::write(&path, DOCUMENT)?;
    let config = SceneConfig::load(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(config?.items.len(), 2);
    Ok(())
}

#[test]
fn missing_file_is_io_error() {
    let result = SceneConfig::load("/definitely/not/here/scene.json");
    assert!(matches!(result, Err(TableauError::Io(_))));
}

#[test]
fn catalog_drives_scene_builder() -> anyhow::Result<()> {
    init_logger();
    let config = SceneConfig::from_json_str(DOCUMENT)?;
    let mut scene = Scene::new();
    SceneBuilder::new(config.catalog()).build_scene(&mut scene)?;

    let handle = scene.find_node_by_name("box").unwrap();
    let node = scene.get_node(handle).unwrap();
    assert_eq!(node.transform.position, Vec3::new(20.0, 1.0, 20.0));
    assert!(scene.find_node_by_name("sphere").is_some());
    assert!(scene.find_node_by_name("door").is_none());
    Ok(())
}

// ============================================================================
// Type Tags
// ============================================================================

#[test]
fn unknown_tags_fail_at_build_time() {
    let config = SceneConfig::from_json_str(
        r#"{ "lights": [ { "type": "LASER" } ], "camera": { "type": "FISHEYE" } }"#,
    )
    .unwrap();

    let mut scene = Scene::new();
    assert!(matches!(
        scene.add_light_from_config(&config.lights[0]),
        Err(TableauError::UnsupportedLightType(t)) if t == "LASER"
    ));
    assert!(matches!(
        tableau::scene::Camera::from_config(config.camera.as_ref().unwrap()),
        Err(TableauError::UnsupportedCameraType(_))
    ));
}

#[test]
fn unknown_material_tag_fails() {
    let config = MaterialConfig {
        kind: "TOON".to_string(),
        ..MaterialConfig::default()
    };
    assert!(matches!(
        Material::from_config(&config),
        Err(TableauError::UnsupportedMaterialType(_))
    ));
}

#[test]
fn textured_material_repeats_per_ten_units() {
    let config = MaterialConfig {
        texture_path: Some("textures/parquet.jpg".to_string()),
        texture_width: Some(40.0),
        texture_height: Some(25.0),
        ..MaterialConfig::default()
    };
    let material = Material::from_config(&config).unwrap();
    let map = material.as_standard().unwrap().map.as_ref().unwrap();
    assert!((map.transform.repeat.x - 4.0).abs() < 1e-6);
    assert!((map.transform.repeat.y - 2.5).abs() < 1e-6);
    assert_eq!(map.dimensions(), None);
}

#[test]
fn general_camera_preset() {
    let config = CameraConfig::general(640.0, 480.0);
    assert_eq!(config.name, "GENERAL");
    assert_eq!(Vec3::from(config.position), Vec3::new(10.0, 3.0, 10.0));
}

#[test]
fn light_defaults() {
    let config = LightConfig::default();
    assert_eq!(config.kind, "RECT_AREA_LIGHT");
    assert_eq!(config.intensity, 1.0);
    assert!(!config.cast_shadow);
}

// ============================================================================
// Colours
// ============================================================================

#[test]
fn colour_forms() {
    let full = parse_color(&ColorValue::Css("#ff8000".to_string())).unwrap();
    let short = parse_color(&ColorValue::Css("#f80".to_string())).unwrap();
    let hex = parse_color(&ColorValue::Hex(0xff8800)).unwrap();
    assert!((full - Vec3::new(1.0, 128.0 / 255.0, 0.0)).length() < 1e-6);
    assert!((short - hex).length() < 1e-6);
}

#[test]
fn invalid_colours_fail() {
    for bad in ["red", "#12", "#gggggg", "ff0000", "#+fffff", "#+f0"] {
        assert!(matches!(
            parse_color(&ColorValue::Css(bad.to_string())),
            Err(TableauError::InvalidColor(_))
        ));
    }
    assert!(parse_color(&ColorValue::Hex(0x1_000_000)).is_err());
}

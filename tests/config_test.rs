use std::fs;
use std::path::PathBuf;

use ar_placer::config::{load_settings_from, save_settings_to, ConfigError, PlacerSettings};
use ar_placer::scene::PrefabTemplate;

fn temp_settings_path() -> PathBuf {
    std::env::temp_dir().join(format!("ar-placer-test-{}.toml", uuid::Uuid::new_v4()))
}

#[test]
fn test_settings_round_trip() {
    let path = temp_settings_path();

    let original = PlacerSettings::new(vec![
        PrefabTemplate::new("Poster", "models/poster_frame.glb"),
        PrefabTemplate::new("Globe", "models/globe.glb").with_scale(0.5),
    ]);

    save_settings_to(&original, &path).unwrap();
    let loaded = load_settings_from(&path).unwrap();

    assert_eq!(loaded.templates.len(), 2);
    assert_eq!(loaded.templates[0].name, "Poster");
    assert_eq!(loaded.templates[0].scale, 1.0);
    assert_eq!(loaded.templates[1].asset, "models/globe.glb");
    assert_eq!(loaded.templates[1].scale, 0.5);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = temp_settings_path();

    match load_settings_from(&path) {
        Err(ConfigError::Io { .. }) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let path = temp_settings_path();
    fs::write(&path, "templates = not-a-list").unwrap();

    match load_settings_from(&path) {
        Err(ConfigError::Parse { .. }) => {}
        other => panic!("expected parse error, got {:?}", other),
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn test_empty_file_defaults_to_no_templates() {
    let path = temp_settings_path();
    fs::write(&path, "").unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert!(settings.templates.is_empty());
    assert!(settings.library().is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_scale_defaults_when_omitted() {
    let path = temp_settings_path();
    fs::write(
        &path,
        r#"
[[templates]]
name = "Poster"
asset = "models/poster_frame.glb"
"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.templates.len(), 1);
    assert_eq!(settings.templates[0].scale, 1.0);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_library_from_settings_keeps_first_duplicate() {
    let settings = PlacerSettings::new(vec![
        PrefabTemplate::new("Poster", "models/first.glb"),
        PrefabTemplate::new("Poster", "models/second.glb"),
    ]);

    let library = settings.library();
    assert_eq!(
        library.resolve("Poster").map(|t| t.asset.as_str()),
        Some("models/first.glb")
    );
}

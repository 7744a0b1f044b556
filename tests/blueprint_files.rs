//! Blueprint loading and document output through the filesystem.

use gamelab::{
    write_document, Assembler, Blueprint, ComponentSelection, GameLabError, GameLabResult,
    ParamValue, Registry, SceneConfig,
};
use std::fs;
use tempfile::tempdir;

const BLUEPRINT: &str = r##"{
    "scene": {
        "name": "Sky Hopper",
        "width": 640,
        "height": 480,
        "fps": 30,
        "backgroundColor": "#87ceeb"
    },
    "selections": [
        { "componentId": "walk", "variant": "B", "parameters": { "max_speed": 9 } },
        { "componentId": "jump", "variant": "B", "assets": { "jump_sound": "sounds/hop.wav" } },
        { "componentId": "gravity", "variant": "A" }
    ]
}"##;

#[test]
fn test_load_blueprint_and_write_script() -> GameLabResult<()> {
    let dir = tempdir()?;
    let blueprint_path = dir.path().join("hopper.json");
    fs::write(&blueprint_path, BLUEPRINT)?;

    let blueprint = Blueprint::load(&blueprint_path)?;
    assert_eq!(blueprint.scene.width, 640);
    assert_eq!(blueprint.selections.len(), 3);
    assert_eq!(
        blueprint.selections[0].parameters["max_speed"],
        ParamValue::Number(9.0)
    );

    let registry = Registry::builtin()?;
    let assembler = Assembler::new(&registry)?;
    let document = assembler.assemble_blueprint(&blueprint)?;

    let script_path = dir.path().join("hopper.py");
    write_document(&script_path, &document)?;
    let written = fs::read_to_string(&script_path)?;

    assert_eq!(written, document);
    assert!(written.contains("WIDTH, HEIGHT = 640, 480"));
    assert!(written.contains("BACKGROUND = (135, 206, 235)"));
    assert!(written.contains("self.max_speed = 9\n"));
    assert!(written.contains("load_sound(\"sounds/hop.wav\")"));
    Ok(())
}

#[test]
fn test_blueprint_save_round_trip() -> GameLabResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("saved.json");

    let blueprint = Blueprint {
        scene: SceneConfig::new("Saved"),
        selections: vec![ComponentSelection::new("score", 'B').with_parameter("prefix", "Left")],
    };
    blueprint.save(&path)?;

    assert_eq!(Blueprint::load(&path)?, blueprint);
    Ok(())
}

#[test]
fn test_missing_scene_uses_defaults() -> GameLabResult<()> {
    let blueprint = Blueprint::from_json(r#"{ "selections": [ { "componentId": "walk", "variant": "A" } ] }"#)?;
    assert_eq!(blueprint.scene, SceneConfig::default());
    Ok(())
}

#[test]
fn test_missing_blueprint_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Blueprint::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, GameLabError::Io(_)));
}

#[test]
fn test_malformed_blueprint_is_serde_error() {
    let err = Blueprint::from_json("{ selections: ").unwrap_err();
    assert!(matches!(err, GameLabError::Serde(_)));
}

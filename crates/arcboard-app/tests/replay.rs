use arcboard_app::{AppConfig, AppError, Session, parse_script, run, write_export};
use arcboard_core::{CanvasDocument, ExportDocument, FORMAT_VERSION};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::fs;

const SESSION: &str = r##"[
    {"action": "tool", "tool": "box"},
    {"action": "down", "x": 10, "y": 10},
    {"action": "move", "x": 90, "y": 50},
    {"action": "up", "x": 90, "y": 50},
    {"action": "label", "id": "el-1", "text": "Plan"},
    {"action": "key", "key": "Enter"},
    {"action": "color", "color": "#FF6B6B"},
    {"action": "tool", "tool": "box"},
    {"action": "down", "x": 300, "y": 10},
    {"action": "move", "x": 380, "y": 50},
    {"action": "up", "x": 380, "y": 50},
    {"action": "key", "key": "Escape"},
    {"action": "tool", "tool": "arrow"},
    {"action": "down", "x": 50, "y": 30},
    {"action": "up", "x": 340, "y": 30},
    {"action": "tool", "tool": "hexagon"}
]"##;

fn config_in(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        export_dir: dir.path().join("exports"),
        ..AppConfig::default()
    }
}

#[test]
fn run_writes_export_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("session.json");
    fs::write(&script, SESSION).unwrap();

    let report = run(&script, config_in(&dir)).unwrap();
    assert_eq!(report.skipped, 1);
    assert_eq!(report.summary, "2 elements · 1 connections");

    let name = report.export_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("arc-brainstorm-") && name.ends_with(".json"), "{name}");

    let json = fs::read_to_string(&report.export_path).unwrap();
    assert!(json.starts_with("{\n  \"version\": \"arc-brainstorm-v1\","));
    let export = ExportDocument::from_json(&json).unwrap();
    assert_eq!(export.version, FORMAT_VERSION);
    assert_eq!(export.elements[0].label, "Plan");
    // The first box was still selected when the color changed.
    assert_eq!(export.elements[0].color, "#FF6B6B");
    assert_eq!(export.elements[1].color, "#FF6B6B");
    assert_eq!(export.arrows[0].from, "el-1");
    assert_eq!(export.arrows[0].to, "el-2");
}

#[test]
fn compact_export_is_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        pretty: false,
        ..config_in(&dir)
    };
    let mut session = Session::new(config.clone());
    session.replay(&parse_script(SESSION).unwrap());

    let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
    let path = write_export(&session.canvas().document, &config, at).unwrap();
    assert_eq!(path, config.export_dir.join("arc-brainstorm-1792315800000.json"));

    let json = fs::read_to_string(&path).unwrap();
    assert!(!json.contains('\n'));
    assert!(json.contains("\"timestamp\":\"2026-10-18T09:30:00.000Z\""));
}

#[test]
fn empty_document_exports() {
    let dir = tempfile::tempdir().unwrap();
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let path = write_export(&CanvasDocument::new(), &config_in(&dir), at).unwrap();
    let export = ExportDocument::from_json(&fs::read_to_string(path).unwrap()).unwrap();
    assert!(export.elements.is_empty() && export.arrows.is_empty());
}

#[test]
fn missing_script_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(&dir.path().join("nope.json"), config_in(&dir));
    assert!(matches!(result, Err(AppError::Io { .. })));
}

#[test]
fn malformed_script_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("bad.json");
    fs::write(&script, "{\"action\": \"tool\"").unwrap();
    assert!(matches!(run(&script, config_in(&dir)), Err(AppError::Script(_))));
}

//! Renderer Settings Tests
//!
//! Tests for:
//! - JSON loading with defaults for missing fields
//! - Validation failures
//! - File loading and error mapping

use std::io::Write;

use frame_renderer::core::shader_tag::LEGACY_PASS_NAMES;
use frame_renderer::{ClearFlags, FrameError, RendererSettings};

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn empty_document_yields_defaults() {
    let settings = RendererSettings::from_json_str("{}").unwrap();
    assert_eq!(settings, RendererSettings::default());
}

#[test]
fn partial_document_overrides_named_fields() {
    let settings = RendererSettings::from_json_str(
        r#"{ "buffer_name": "Main", "clear_depth": false, "background": [0.2, 0.3, 0.4, 1.0] }"#,
    )
    .unwrap();

    assert_eq!(settings.buffer_name, "Main");
    assert_eq!(settings.clear_flags(), ClearFlags::COLOR);
    assert_eq!(settings.background, [0.2, 0.3, 0.4, 1.0]);
    assert_eq!(settings.unlit_pass, "SRPDefaultUnlit");
    assert_eq!(settings.legacy_passes, LEGACY_PASS_NAMES);
}

#[test]
fn settings_survive_serialization() {
    let settings = RendererSettings {
        buffer_name: "Capture".into(),
        legacy_passes: vec!["ForwardBase".into()],
        ..Default::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(RendererSettings::from_json_str(&json).unwrap(), settings);
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = RendererSettings::from_json_str("{ buffer_name: ").unwrap_err();
    assert!(matches!(err, FrameError::JsonError(_)), "got {err}");
}

// ============================================================================
// Validation Tests
// ============================================================================

fn assert_invalid(settings: &RendererSettings, fragment: &str) {
    match settings.validate() {
        Err(FrameError::InvalidSettings(msg)) => {
            assert!(msg.contains(fragment), "'{msg}' does not mention '{fragment}'");
        }
        other => panic!("expected InvalidSettings, got {other:?}"),
    }
}

#[test]
fn empty_names_are_rejected() {
    let blank_buffer = RendererSettings {
        buffer_name: "  ".into(),
        ..Default::default()
    };
    assert_invalid(&blank_buffer, "buffer_name");

    let blank_pass = RendererSettings {
        unlit_pass: String::new(),
        ..Default::default()
    };
    assert_invalid(&blank_pass, "unlit_pass");

    let blank_shader = RendererSettings {
        error_shader: String::new(),
        ..Default::default()
    };
    assert_invalid(&blank_shader, "error_shader");
}

#[test]
fn legacy_pass_list_is_bounded() {
    let none = RendererSettings {
        legacy_passes: Vec::new(),
        ..Default::default()
    };
    assert_invalid(&none, "legacy_passes");

    let too_many = RendererSettings {
        legacy_passes: (0..17).map(|i| format!("Pass{i}")).collect(),
        ..Default::default()
    };
    assert_invalid(&too_many, "17");

    let exactly_max = RendererSettings {
        legacy_passes: (0..16).map(|i| format!("Pass{i}")).collect(),
        ..Default::default()
    };
    assert!(exactly_max.validate().is_ok());

    let blank_entry = RendererSettings {
        legacy_passes: vec!["Always".into(), String::new()],
        ..Default::default()
    };
    assert_invalid(&blank_entry, "legacy_passes[1]");
}

#[test]
fn non_finite_background_is_rejected() {
    let settings = RendererSettings {
        background: [0.0, f32::NAN, 0.0, 1.0],
        ..Default::default()
    };
    assert_invalid(&settings, "background");
}

#[test]
fn invalid_json_values_fail_validation_on_load() {
    let err = RendererSettings::from_json_str(r#"{ "legacy_passes": [] }"#).unwrap_err();
    assert!(matches!(err, FrameError::InvalidSettings(_)));
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn load_reads_a_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "error_shader": "Debug/Magenta" }}"#).unwrap();

    let settings = RendererSettings::load(file.path()).unwrap();
    assert_eq!(settings.error_shader, "Debug/Magenta");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RendererSettings::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, FrameError::IoError(_)), "got {err}");
}

//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_defaults_apply_without_sources() {
    tracing::debug!("Testing configuration defaults");

    let settings = Settings::from_toml("").unwrap();

    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.translator.counter_mode, CounterMode::Independent);
    assert_eq!(settings.output.file_name, "contacts.contacts");
    assert_eq!(settings.output.directory, PathBuf::from("."));
    assert!(!settings.output.normalize);
}

#[test]
fn test_toml_overrides_defaults() {
    let settings = Settings::from_toml(
        r#"
[translator]
counter_mode = "shared"

[output]
directory = "/tmp/out"
normalize = true
"#,
    )
    .unwrap();

    assert!(settings.output.normalize);

    assert_eq!(settings.translator.counter_mode, CounterMode::Shared);
    assert_eq!(settings.output.directory, PathBuf::from("/tmp/out"));
    assert_eq!(settings.output.file_name, "contacts.contacts");
}

#[test]
fn test_invalid_counter_mode_rejected() {
    let result = Settings::from_toml(
        r#"
[translator]
counter_mode = "sometimes"
"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_output_default_path() {
    let config = OutputConfig {
        directory: PathBuf::from("exports"),
        file_name: "contacts.contacts".to_string(),
        normalize: false,
    };

    assert_eq!(
        config.default_path(),
        PathBuf::from("exports").join("contacts.contacts")
    );
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = std::env::temp_dir().join("cardshift-missing-config.toml");
    let settings = Settings::load_from(&dir).unwrap();

    assert!(!settings.output.file_name.is_empty());
}

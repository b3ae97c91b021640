use std::fs;

use blocktris::settings::{Settings, SettingsError};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn load_reads_both_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocktris.toml");
    fs::write(
        &path,
        "[session]\ngravity_ms = 250\nseed = 42\n\n[driver]\nspeedup = 4\n",
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.session.gravity_ms, 250);
    assert_eq!(settings.session.seed, Some(42));
    assert_eq!(settings.driver.speedup, 4);
    assert_eq!(settings.driver.input_interval_ms, 120);
}

#[test]
fn zero_speedup_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocktris.toml");
    fs::write(&path, "[driver]\nspeedup = 0\n").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
    assert!(err.to_string().contains("speedup"));
}

#[test]
fn directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(dir.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

use bagrenamer::config::{Config, ConfigError, VERSION};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("BagRenamer.toml");

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.version, VERSION);
    assert!(path.exists());

    // Loading the file it just wrote round-trips.
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn v1_0_config_gains_the_new_toggles() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("BagRenamer.toml");
    fs::write(
        &path,
        r#"version = "1.0.0"
rename_by_grid = false
rename_by_biome = true
bag_name_format = "camp {grid}"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.version, VERSION);
    // User settings survive the upgrade.
    assert!(!config.rename_by_grid);
    assert!(config.rename_by_biome);
    assert_eq!(config.bag_name_format, "camp {grid}");
    // The 1.1.0 fields appear with their defaults.
    assert!(!config.rename_by_landmark);
    assert!(!config.rename_by_player);

    // The old file was backed up before being rewritten.
    assert!(dir.path().join("BagRenamer.bak").exists());
}

#[test]
fn upgrade_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("BagRenamer.toml");
    fs::write(&path, "version = \"1.0.0\"\n").unwrap();

    let first = Config::load(&path).unwrap();
    let after_upgrade = fs::read_to_string(&path).unwrap();
    let second = Config::load(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(after_upgrade, fs::read_to_string(&path).unwrap());
}

#[test]
fn unversioned_file_is_reset_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("BagRenamer.toml");
    fs::write(&path, "rename_by_grid = false\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(dir.path().join("BagRenamer.bak").exists());
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("BagRenamer.toml");
    fs::write(&path, "version = \"9.0.0\"\n").unwrap();

    match Config::load(&path) {
        Err(ConfigError::TooNew(version)) => assert_eq!(version, "9.0.0"),
        other => panic!("expected TooNew, got {other:?}"),
    }
}

#[test]
fn repeated_upgrades_number_their_backups() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("BagRenamer.toml");

    fs::write(&path, "version = \"1.0.0\"\n").unwrap();
    Config::load(&path).unwrap();
    fs::write(&path, "version = \"1.0.0\"\n").unwrap();
    Config::load(&path).unwrap();

    assert!(dir.path().join("BagRenamer.bak").exists());
    assert!(dir.path().join("BagRenamer.bak.1").exists());
}

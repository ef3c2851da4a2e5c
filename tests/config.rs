use std::fs;

use projectile_motion::Body;
use projectile_motion::config::{ConfigError, load_config};

#[test]
fn loads_overrides_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("projectile.toml");
    fs::write(
        &path,
        "time_intervals = 20\n\
         gravity_table = [1.0, 2.0, 1.62, 4.0, 5.0, 6.0, 7.0, 8.0]\n\
         [plot]\n\
         output_dir = \"out\"\n",
    )
    .expect("write config");

    let config = load_config(&path).expect("config loads");
    assert_eq!(config.intervals().unwrap().get(), 20);
    assert_eq!(config.gravity().unwrap().gravity(Body::Earth), 1.62);
    assert_eq!(config.plot.output_dir, std::path::PathBuf::from("out"));
    assert_eq!(config.plot.width, 800);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_config(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

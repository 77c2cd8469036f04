//! Tests for configuration loading and validation.

use sliding_tiles::GameConfig;

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.grid_dim(), 4);
    assert_eq!(*config.canvas_width(), 500);
    assert_eq!(*config.shuffle_bound(), 200);
    assert_eq!(config.tile_width(), 125.0);
}

#[test]
fn test_new_rejects_degenerate_dimensions() {
    assert!(GameConfig::new(1, 500, 200).is_err());
    assert!(GameConfig::new(17, 500, 200).is_err());
    assert!(GameConfig::new(4, 0, 200).is_err());
}

#[test]
fn test_new_rejects_uneven_tile_widths() {
    // 501 does not divide evenly by 4, so tiles would not align on cell
    // boundaries.
    assert!(GameConfig::new(4, 501, 200).is_err());
    assert!(GameConfig::new(4, 500, 200).is_ok());
    assert!(GameConfig::new(5, 500, 200).is_ok());
}

#[test]
fn test_from_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzle.toml");
    std::fs::write(
        &path,
        "grid_dim = 3\ncanvas_width = 300\nshuffle_bound = 50\n",
    )
    .unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.grid_dim(), 3);
    assert_eq!(*config.canvas_width(), 300);
    assert_eq!(*config.shuffle_bound(), 50);
    assert_eq!(config.tile_width(), 100.0);
}

#[test]
fn test_from_file_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzle.toml");
    std::fs::write(&path, "shuffle_bound = 10\n").unwrap();

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.grid_dim(), 4);
    assert_eq!(*config.canvas_width(), 500);
    assert_eq!(*config.shuffle_bound(), 10);
}

#[test]
fn test_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzle.toml");
    std::fs::write(&path, "grid_dim = 4\ncanvas_width = 99\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("divisible"));
}

#[test]
fn test_from_file_reports_missing_file() {
    let err = GameConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(err.message.contains("read"));
}

#[test]
fn test_from_file_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzle.toml");
    std::fs::write(&path, "grid_dim = \"four\"\n").unwrap();

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("parse"));
}

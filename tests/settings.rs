use log_overlay::overlay::OverlayGeometry;
use log_overlay::settings::OverlaySettings;
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let settings = OverlaySettings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, OverlaySettings::default());
    assert_eq!(settings.check_duration_ms, 2000);
    assert_eq!(settings.geometry, OverlayGeometry::default());
    assert!(settings.enable_toasts);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "draggable": true, "geometry": { "top_inset": 80.0 } }"#,
    )
    .unwrap();

    let settings = OverlaySettings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.draggable);
    assert!(!settings.enable_device_shake);
    assert_eq!(settings.geometry.top_inset, 80.0);
    assert_eq!(settings.geometry.padding, 20.0);
    assert_eq!(settings.geometry.control_size, 58.0);
    assert_eq!(settings.toast_duration, 3.0);
}

#[test]
fn save_then_load_keeps_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let mut settings = OverlaySettings::default();
    settings.copy_to_clipboard = true;
    settings.check_duration_ms = 500;
    settings.log_file = Some("overlay.log".into());
    settings.save(path).unwrap();

    assert_eq!(OverlaySettings::load(path).unwrap(), settings);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(OverlaySettings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn invalid_toast_duration_falls_back() {
    let mut settings = OverlaySettings::default();
    settings.toast_duration = -1.0;
    assert_eq!(settings.toast_seconds(), 3.0);
}

use anyhow::Result;
use pastebind::bitmap::{dib_from_file, DIB_INFO_HEADER_LEN};
use pastebind::hotkey::parse_hotkey;
use pastebind::{BinderError, Settings, ShortcutBinding};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_canned_responses_config() {
    let json = r#"
    {
        "shortcuts": [
            {
                "shortcut": "ctrl+alt+1",
                "photo_path": "images/thanks.png"
            },
            {
                "shortcut": "ctrl+alt+2",
                "photo_path": "images/done.png"
            }
        ],
        "need_enter": true,
        "sleep_time": 1.5
    }
    "#;

    let settings: Settings = serde_json::from_str(json).unwrap();

    assert_eq!(settings.shortcuts.len(), 2);
    assert_eq!(settings.shortcuts[0].shortcut, "ctrl+alt+1");
    assert_eq!(
        settings.shortcuts[0].photo_path,
        PathBuf::from("images/thanks.png")
    );
    assert_eq!(settings.shortcuts[1].shortcut, "ctrl+alt+2");
    assert!(settings.need_enter);
    assert_eq!(settings.enter_delay(), Duration::from_millis(1500));

    assert!(settings.validate().is_ok());
}

#[test]
fn test_config_file_operations() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;

    let json_content = r#"
    {
        "shortcuts": [
            {
                "shortcut": "ctrl+shift+9",
                "photo_path": "reply.jpg"
            }
        ],
        "need_enter": false,
        "sleep_time": 2
    }
    "#;

    temp_file.write_all(json_content.as_bytes())?;

    let settings = Settings::from_file(temp_file.path())?;

    assert_eq!(settings.shortcuts.len(), 1);
    assert_eq!(settings.shortcuts[0].shortcut, "ctrl+shift+9");
    assert!(!settings.need_enter);
    assert_eq!(settings.enter_delay(), Duration::from_secs(2));

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = Settings::from_file("does_not_exist/settings.json").unwrap_err();
    assert!(matches!(err, BinderError::ConfigMissing { .. }));
}

#[test]
fn test_malformed_config_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"{ not json")?;

    let err = Settings::from_file(temp_file.path()).unwrap_err();
    assert!(matches!(err, BinderError::ConfigLoad { .. }));

    Ok(())
}

#[test]
fn test_default_values() {
    let json = r#"
    {
        "shortcuts": [
            {"shortcut": "f6", "photo_path": "a.png"}
        ]
    }
    "#;

    let settings: Settings = serde_json::from_str(json).unwrap();
    assert!(!settings.need_enter); // default
    assert_eq!(settings.sleep_time, 1.0); // default
    assert!(!settings.notify_missing_images); // default

    assert!(settings.validate().is_ok());
}

#[test]
fn test_config_validation_errors() {
    let mut settings = Settings {
        shortcuts: vec![ShortcutBinding {
            shortcut: "ctrl+alt+1".to_string(),
            photo_path: PathBuf::from("a.png"),
        }],
        need_enter: false,
        sleep_time: -0.5,
        notify_missing_images: false,
    };

    // Negative sleep_time
    assert!(settings.validate().is_err());

    // Empty shortcut string
    settings.sleep_time = 1.0;
    settings.shortcuts[0].shortcut = String::new();
    assert!(settings.validate().is_err());
}

#[test]
fn test_config_save_load_roundtrip() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let config_path = temp_dir.path().join("settings.json");

    let original = Settings {
        shortcuts: vec![
            ShortcutBinding {
                shortcut: "ctrl+alt+1".to_string(),
                photo_path: PathBuf::from("images/one.png"),
            },
            ShortcutBinding {
                shortcut: "ctrl+alt+2".to_string(),
                photo_path: PathBuf::from("images/two.png"),
            },
        ],
        need_enter: true,
        sleep_time: 0.25,
        notify_missing_images: true,
    };

    original.save_to_file(&config_path)?;
    let loaded = Settings::from_file(&config_path)?;

    assert_eq!(loaded.shortcuts, original.shortcuts);
    assert_eq!(loaded.need_enter, original.need_enter);
    assert_eq!(loaded.sleep_time, original.sleep_time);
    assert_eq!(loaded.notify_missing_images, original.notify_missing_images);

    Ok(())
}

// Bitmap payload tests

#[test]
fn test_dib_payload_from_image_file() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let image_path = temp_dir.path().join("sample.png");

    let img = image::RgbImage::from_fn(5, 4, |x, y| image::Rgb([x as u8, y as u8, 0]));
    img.save(&image_path)?;

    let payload = dib_from_file(&image_path)?;

    // The payload is the BMP encoding minus the 14-byte file header, so it
    // starts directly with the BITMAPINFOHEADER.
    let header_size = u32::from_le_bytes(payload[0..4].try_into().unwrap());
    assert_eq!(header_size as usize, DIB_INFO_HEADER_LEN);

    let width = u32::from_le_bytes(payload[4..8].try_into().unwrap());
    let height = u32::from_le_bytes(payload[8..12].try_into().unwrap());
    assert_eq!(width, 5);
    assert_eq!(height, 4);

    Ok(())
}

#[test]
fn test_dib_payload_rejects_non_image_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"this is not an image")?;

    let err = dib_from_file(temp_file.path()).unwrap_err();
    assert!(matches!(err, BinderError::ImageDecode { .. }));

    Ok(())
}

// Shortcut parsing tests

#[test]
fn test_shortcut_parsing_valid_specs() {
    assert!(parse_hotkey("ctrl+alt+1").is_ok());
    assert!(parse_hotkey("ctrl+shift+z").is_ok());
    assert!(parse_hotkey("cmd+space").is_ok());
    assert!(parse_hotkey("f9").is_ok());
    assert!(parse_hotkey(" Ctrl + Alt + 3 ").is_ok());
}

#[test]
fn test_shortcut_parsing_invalid_specs() {
    assert!(parse_hotkey("").is_err());
    assert!(parse_hotkey("ctrl+").is_err());
    assert!(parse_hotkey("ctrl+alt").is_err());
    assert!(parse_hotkey("a+b").is_err());
    assert!(parse_hotkey("ctrl+nosuchkey").is_err());
}

#[test]
fn test_equal_specs_share_hotkey_id() {
    let a = parse_hotkey("ctrl+alt+1").unwrap();
    let b = parse_hotkey("alt+ctrl+1").unwrap();
    assert_eq!(a.id(), b.id());
}

// Error type tests

#[test]
fn test_error_types() {
    let err = BinderError::invalid_shortcut("ctrl+xyz", "unsupported key 'xyz'");
    assert!(err.to_string().contains("ctrl+xyz"));

    let err = BinderError::image_decode("reply.png", "unsupported format");
    assert!(err.to_string().contains("reply.png"));

    let err = BinderError::NoUsableShortcuts;
    assert!(err.to_string().contains("no usable shortcuts"));
    assert!(err.is_fatal());
}

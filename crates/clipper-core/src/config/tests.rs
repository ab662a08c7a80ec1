use super::*;

#[test]
fn test_default_config_is_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.clipper.default_destination, "irc");
    assert_eq!(cfg.destinations.len(), 3);
}

#[test]
fn test_default_destination_limits() {
    let cfg = Config::default();
    let irc = cfg.limits_for(None).unwrap();
    assert_eq!(irc.mode, FragmentMode::Lines);
    assert_eq!(irc.max_line_length, 400);
    assert_eq!(irc.marker.as_str(), " <clipped message>");

    let discord = cfg.limits_for(Some("discord")).unwrap();
    assert_eq!(discord.mode, FragmentMode::Segment);
    assert_eq!(discord.max_message_length, 1950);
    assert_eq!(discord.max_parts, 3);
}

#[test]
fn test_destination_from_toml() {
    let toml_str = r#"
        mode = "segment"
        max_message_length = 500
        max_parts = 2
        clipping_message = " [...]"
    "#;
    let dest: DestinationConfig = toml::from_str(toml_str).unwrap();
    let limits = dest.limits().unwrap();
    assert_eq!(limits.mode, FragmentMode::Segment);
    assert_eq!(limits.max_message_length, 500);
    assert_eq!(limits.max_parts, 2);
    assert_eq!(limits.marker.as_str(), " [...]");
    assert!(!limits.collapse_newlines);
}

#[test]
fn test_destination_defaults_when_missing() {
    let dest: DestinationConfig = toml::from_str("").unwrap();
    assert_eq!(dest.mode, FragmentMode::Lines);
    assert_eq!(dest.max_line_length, 0);
    assert_eq!(dest.max_message_length, 4096);
    assert_eq!(dest.max_parts, 1);
    assert!(dest.clipping_message.is_empty());
}

#[test]
fn test_full_config_from_toml() {
    let toml_str = r#"
        [clipper]
        default_destination = "matrix"

        [destination.matrix]
        mode = "lines"
        max_line_length = 1000

        [destination.slack]
        mode = "segment"
        max_message_length = 3000
        max_parts = 4
        collapse_newlines = true
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.clipper.log_level, "info");
    assert_eq!(cfg.destinations.len(), 2);
    assert!(cfg.destination("irc").is_err());

    let slack = cfg.limits_for(Some("slack")).unwrap();
    assert!(slack.collapse_newlines);
    assert_eq!(slack.max_parts, 4);
}

#[test]
fn test_builtin_destinations_when_none_defined() {
    let cfg: Config = toml::from_str("[clipper]\nlog_level = \"debug\"\n").unwrap();
    assert_eq!(cfg.clipper.log_level, "debug");
    assert!(cfg.destination("telegram").is_ok());
}

#[test]
fn test_budget_not_larger_than_marker_rejected() {
    let dest = DestinationConfig {
        mode: FragmentMode::Segment,
        max_message_length: 5,
        clipping_message: "12345".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        dest.limits(),
        Err(ClipperError::Budget {
            budget: 5,
            marker_len: 5
        })
    ));
}

#[test]
fn test_validate_reports_destination_name() {
    let toml_str = r#"
        [clipper]
        default_destination = "tiny"

        [destination.tiny]
        max_line_length = 4
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    let err = cfg.validate().unwrap_err().to_string();
    assert!(err.contains("destination tiny"), "got: {err}");
}

#[test]
fn test_validate_rejects_missing_default_destination() {
    let toml_str = r#"
        [clipper]
        default_destination = "nowhere"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__clipper_test__/config.toml").unwrap();
    assert_eq!(cfg.destinations.len(), 3);
}

#[test]
fn test_load_from_file() {
    let tmp = std::env::temp_dir().join("__clipper_test_load_config__");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("config.toml");

    std::fs::write(
        &path,
        "[clipper]\ndefault_destination = \"x\"\n\n[destination.x]\nmax_line_length = 80\n",
    )
    .unwrap();
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.limits_for(None).unwrap().max_line_length, 80);

    std::fs::write(&path, "[destination.x\n").unwrap();
    let err = load(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn test_resolve_skips_validation() {
    let dest = DestinationConfig {
        max_line_length: 2,
        clipping_message: "~".to_string(),
        ..Default::default()
    };
    let limits = dest.resolve();
    assert_eq!(limits.max_line_length, 2);
    assert_eq!(limits.marker.as_str(), "~");
    assert!(dest.limits().is_ok());

    let dest = DestinationConfig {
        max_line_length: 1,
        clipping_message: "~".to_string(),
        ..Default::default()
    };
    assert_eq!(dest.resolve().max_line_length, 1);
    assert!(dest.limits().is_err());
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    let tmp = std::env::temp_dir().join("__clipper_test_load_dir__");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();

    // A directory exists but cannot be read as a file.
    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, ClipperError::Io(_)), "got: {err:?}");

    let _ = std::fs::remove_dir_all(&tmp);
}

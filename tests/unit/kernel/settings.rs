use super::*;
use tempfile::tempdir;

#[test]
fn partial_json_fills_defaults() {
    let settings = parse_settings(r#"{"filter_rule": "direct_children"}"#).unwrap();
    assert_eq!(settings.filter_rule, FilterRule::DirectChildren);
    assert!(settings.prune_content_on_delete);
    assert_eq!(settings.asset_root, "/");
    assert_eq!(settings.placeholder_prefix, "Sample content for ");
}

#[test]
fn unknown_rule_is_a_parse_error() {
    assert!(matches!(
        parse_settings(r#"{"filter_rule": "fuzzy"}"#),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"prune_content_on_delete": false, "asset_root": "/assets/"}"#,
    )
    .unwrap();

    let settings = load_settings(&path).unwrap();
    assert!(!settings.prune_content_on_delete);
    assert_eq!(settings.asset_root, "/assets/");
}

#[test]
fn missing_or_broken_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(load_settings(&missing), Err(SettingsError::Io(_))));
    assert_eq!(load_settings_or_default(Some(missing.as_path())), Settings::default());

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert_eq!(load_settings_or_default(Some(broken.as_path())), Settings::default());

    assert_eq!(load_settings_or_default(None), Settings::default());
}

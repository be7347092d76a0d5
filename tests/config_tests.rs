use toggle_mini::{Config, ToggleGroup};

#[test]
fn bundled_defaults_parse() {
    let config = Config::defaults();

    assert!(!config.groups().is_empty());
    assert!(config.groups().iter().all(|g| !g.is_empty()));
    assert!(
        config
            .groups()
            .iter()
            .flat_map(|g| g.words())
            .all(|w| !w.is_empty())
    );
}

#[test]
fn custom_groups_precede_defaults() {
    let custom = ToggleGroup::new(["true", "maybe"]);
    let config = Config::with_custom(vec![custom.clone()], true);

    assert_eq!(config.groups()[0], custom);
    assert!(config.groups().len() > 1);
}

#[test]
fn defaults_can_be_disabled() {
    let custom = ToggleGroup::new(["on", "off"]);
    let config = Config::with_custom(vec![custom.clone()], false);

    assert_eq!(config.groups(), &[custom]);
}

#[test]
fn parses_json_settings() {
    let config = Config::from_json(r#"[["true","false"],["'","\"","`"]]"#).unwrap();

    assert_eq!(config.groups().len(), 2);
    assert_eq!(config.groups()[1].words()[2], "`");
    assert_eq!(config.groups()[1].len(), 3);
}

#[test]
fn accepts_groups_with_empty_words() {
    // Malformed settings must not fail parsing; empty words are skipped
    // during resolution instead.
    let config = Config::from_json(r#"[["true",""]]"#).unwrap();

    assert_eq!(config.groups().len(), 1);
}

#[test]
fn rejects_malformed_json() {
    assert!(Config::from_json(r#"{"toggles": true}"#).is_err());
    assert!(Config::from_json("[[1,2]]").is_err());
}

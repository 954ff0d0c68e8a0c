use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.board_size, 7);
    assert!(config.time_limit().is_none());
    assert_eq!(config.solver_order(), MoveOrder::Natural);
}

#[test]
fn test_full_config() {
    let config = EngineConfig::from_toml_str(
        r#"
        board_size = 5
        time_limit_secs = 1.5
        seed = 42
        move_order = "shuffled"
        "#,
    )
    .unwrap();
    assert_eq!(config.board_size, 5);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
    assert_eq!(config.solver_order(), MoveOrder::Shuffled { seed: 42 });
}

#[test]
fn test_rejects_bad_board_size() {
    let err = EngineConfig::from_toml_str("board_size = 26").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    let err = EngineConfig::from_toml_str("board_size = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_negative_time() {
    let err = EngineConfig::from_toml_str("time_limit_secs = -1.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_rejects_unknown_keys_and_bad_syntax() {
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 3"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("move_order = \"best\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load(Path::new("/nonexistent/nogo.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read(_)));
}

#[test]
fn test_rejects_time_beyond_duration_range() {
    for text in ["time_limit_secs = 1e20", "time_limit_secs = inf", "time_limit_secs = nan"] {
        let err = EngineConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{text}");
    }
}

#[test]
fn test_time_limit_never_panics_on_unvalidated_values() {
    let config = EngineConfig {
        time_limit_secs: Some(1e20),
        ..EngineConfig::default()
    };
    assert!(config.validate().is_err());
    assert_eq!(config.time_limit(), None);
}

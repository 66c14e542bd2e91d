//! Tests for planner configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_expansions = 12000
        progress_interval = 500

        [balance]
        tolerance_percent = 5

        [reachability]
        enabled = false
        max_expansions = 80
        early_exit = false
    "#;

    let config = PlannerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_expansions, 12_000);
    assert_eq!(config.progress_interval, 500);
    assert_eq!(config.balance.tolerance_percent, 5);
    assert!(!config.reachability.enabled);
    assert_eq!(config.reachability.max_expansions, 80);
    assert!(!config.reachability.early_exit);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_expansions: 3000
        reachability:
          max_expansions: 50
    "#;

    let config = PlannerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_expansions, 3_000);
    assert_eq!(config.reachability.max_expansions, 50);
    assert!(config.reachability.early_exit);
    assert_eq!(config.balance.tolerance_percent, DEFAULT_TOLERANCE_PERCENT);
}

#[test]
fn test_empty_document_gives_defaults() {
    let config = PlannerConfig::from_toml_str("").unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.max_expansions, DEFAULT_MAX_EXPANSIONS);
    assert_eq!(
        config.reachability.max_expansions,
        DEFAULT_REACHABILITY_EXPANSIONS
    );
    assert!(config.reachability.enabled);
}

#[test]
fn test_builder() {
    let config = PlannerConfig::new()
        .with_max_expansions(1)
        .with_reachability_expansions(10)
        .with_tolerance_percent(15)
        .with_reachability_goal(false)
        .with_progress_interval(0);

    assert_eq!(config.max_expansions, 1);
    assert_eq!(config.reachability.max_expansions, 10);
    assert_eq!(config.balance.tolerance_percent, 15);
    assert!(!config.reachability.enabled);
    assert_eq!(config.progress_interval, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_bad_values() {
    let err = PlannerConfig::from_toml_str("max_expansions = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = PlannerConfig::from_toml_str("[balance]\ntolerance_percent = 0").unwrap_err();
    assert!(err.to_string().contains("tolerance_percent"));

    let err = PlannerConfig::from_toml_str("[reachability]\nmax_expansions = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        PlannerConfig::from_toml_str("max_expansions = \"many\""),
        Err(ConfigError::Toml(_))
    ));
    assert!(matches!(
        PlannerConfig::from_yaml_str("max_expansions: [1, 2]"),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        PlannerConfig::load("/nonexistent/planner.toml"),
        Err(ConfigError::Io(_))
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{conductor_input, create_conduit_request};
use crate::{ConfigError, EngineConfig, FillResponse, PolicyConfig, evaluate_conduit_fill};
use cablefill::{BendPolicy, SingleBendRule};
use std::path::PathBuf;

#[test]
fn test_empty_object_gives_defaults() {
    let config: PolicyConfig = PolicyConfig::from_json_str("{}").unwrap();
    assert_eq!(config, PolicyConfig::default());

    let engine: EngineConfig = config.into_engine().unwrap();
    assert_eq!(engine, EngineConfig::default());
    assert_eq!(engine.policy, BendPolicy::default());
}

#[test]
fn test_partial_config_overrides_named_settings() {
    let config: PolicyConfig = PolicyConfig::from_json_str(
        r#"{"single_bend":"interpolate","excess_bend_derating_factor":0.75}"#,
    )
    .unwrap();

    assert_eq!(config.single_bend, SingleBendRule::Interpolate);
    assert!((config.excess_bend_derating_factor - 0.75).abs() < f64::EPSILON);
    assert!((config.long_run_derating_factor - 0.85).abs() < f64::EPSILON);
    assert!((config.trunking_fill_limit - 0.45).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_setting_is_rejected() {
    let result: Result<PolicyConfig, ConfigError> =
        PolicyConfig::from_json_str(r#"{"bend_fudge":2}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_out_of_range_factor_is_invalid() {
    let config: PolicyConfig =
        PolicyConfig::from_json_str(r#"{"long_run_derating_factor":1.5}"#).unwrap();

    let err: ConfigError = config.into_engine().unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "long_run_derating_factor"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_out_of_range_fill_limit_is_invalid() {
    let config: PolicyConfig =
        PolicyConfig::from_json_str(r#"{"trunking_fill_limit":0.0}"#).unwrap();
    assert!(matches!(
        config.into_engine(),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn test_configured_policy_changes_results() {
    let engine: EngineConfig = PolicyConfig::from_json_str(
        r#"{"single_bend":"interpolate","trunking_fill_limit":0.4}"#,
    )
    .unwrap()
    .into_engine()
    .unwrap();

    // halfway between 460 and 320
    let response: FillResponse = evaluate_conduit_fill(
        &engine,
        &create_conduit_request(vec![conductor_input(1.5, 5)], 20, 1),
    )
    .unwrap();
    assert!((response.capacity - 390.0).abs() < 1e-9);
    assert_eq!(response.advisories.len(), 1);
    assert!((engine.tables.trunking_fill_limit() - 0.4).abs() < f64::EPSILON);
}

#[test]
fn test_load_reads_file() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("cablefill-policy-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"long_run_threshold_m":5.0}"#).unwrap();

    let config: PolicyConfig = PolicyConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!((config.long_run_threshold_m - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_load_missing_file() {
    let path: PathBuf = std::env::temp_dir().join("cablefill-policy-does-not-exist.json");

    let err: ConfigError = PolicyConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().starts_with("Failed to read policy file"));
}

use collsync_reconcile::{MultiMatchPolicy, ReconcileConfig, Reconciler};
use pretty_assertions::assert_eq;

#[test]
fn default_config_processes_all_matches() {
    let config = ReconcileConfig::default();
    assert_eq!(config.multi_match, MultiMatchPolicy::ProcessAll);
    assert_eq!(Reconciler::default().config(), &config);
}

#[test]
fn strict_config_rejects_multi_matches() {
    assert_eq!(ReconcileConfig::strict().multi_match, MultiMatchPolicy::Reject);
}

#[test]
fn config_deserializes_from_json() {
    let config: ReconcileConfig = serde_json::from_str(r#"{"multi_match": "reject"}"#).unwrap();
    assert_eq!(config, ReconcileConfig::strict());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ReconcileConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ReconcileConfig::default());
}

#[test]
fn config_serializes_snake_case() {
    let json = serde_json::to_value(ReconcileConfig::default()).unwrap();
    assert_eq!(json, serde_json::json!({"multi_match": "process_all"}));
}

#[test]
fn unknown_policy_is_rejected() {
    let result: Result<ReconcileConfig, _> = serde_json::from_str(r#"{"multi_match": "first"}"#);
    assert!(result.is_err());
}

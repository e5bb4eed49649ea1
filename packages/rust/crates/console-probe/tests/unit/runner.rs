use serde_json::json;

use super::overview_version;
use crate::error::ProbeError;

#[test]
fn overview_version_reads_rabbitmq_version() {
    let version = overview_version(&json!({"rabbitmq_version": "3.12.0"})).expect("version");
    assert_eq!(version, "3.12.0");
}

#[test]
fn overview_version_defaults_to_unknown_for_object_without_key() {
    let version = overview_version(&json!({})).expect("version");
    assert_eq!(version, "Unknown");
}

#[test]
fn overview_version_rejects_non_object_bodies() {
    for (body, kind) in [
        (json!(["3.12.0"]), "array"),
        (json!(null), "null"),
        (json!("3.12.0"), "string"),
    ] {
        let error = overview_version(&body).expect_err("non-object body must fail");
        assert!(matches!(error, ProbeError::NotAnObject(got) if got == kind), "{error}");
    }
}

#[test]
fn overview_version_spells_scalars_like_the_console_tooling() {
    let version = |value: serde_json::Value| {
        overview_version(&json!({ "rabbitmq_version": value })).expect("version")
    };
    assert_eq!(version(json!(4)), "4");
    assert_eq!(version(json!(null)), "None");
    assert_eq!(version(json!(true)), "True");
    assert_eq!(version(json!(false)), "False");
}

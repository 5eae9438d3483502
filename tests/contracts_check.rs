mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn danger_output_matches_contract() {
    let env = TestEnv::seeded();

    let unscanned = env.run_json(&["danger"]);
    validate("danger.schema.json", &unscanned);
    assert!(unscanned["data"]["state"].is_null());

    env.run_json(&["location", "set", "10.885", "106.781"]);
    let scanned = env.run_json(&["danger"]);
    validate("danger.schema.json", &scanned);
}

#[test]
fn active_output_matches_contract() {
    let env = TestEnv::seeded();
    for mode in ["urgent", "day", "history"] {
        let out = env.run_json(&["active", "--mode", mode]);
        validate("active.schema.json", &out);
    }
}

#[test]
fn safe_point_output_matches_contract() {
    let env = TestEnv::seeded();
    validate("safe_point.schema.json", &env.run_json(&["safe-point", "demo-3"]));
    validate("safe_point.schema.json", &env.run_json(&["safe-point", "demo-4"]));
}

#[test]
fn error_output_matches_contract() {
    let env = TestEnv::new();
    let missing = env.run_json_failure(&["report", "status", "ghost", "rescued"]);
    validate("error.schema.json", &missing);

    let zero_radius = env.run_json_failure(&["safe-point", "--lat", "10.8", "--lng", "106.7", "--radius", "0"]);
    validate("error.schema.json", &zero_radius);
    assert_eq!(zero_radius["error"]["code"], "INTERNAL");
}

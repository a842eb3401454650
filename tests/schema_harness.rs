use ask_youtube_transcript::schema::{validate_json, ArgumentValidator, SchemaValidationError};
use ask_youtube_transcript::tools::{analyze_youtube_descriptor, ToolCatalog, ANALYZE_YOUTUBE};
use serde_json::json;

#[test]
fn json_schema_harness_validates_instance() {
    let schema = json!({
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "type": "object",
      "required": ["content"],
      "properties": {
        "content": { "type": "array" }
      }
    });

    validate_json(&schema, &json!({"content": []})).expect("schema validation failed");
    assert!(matches!(
        validate_json(&schema, &json!({"content": "text"})),
        Err(SchemaValidationError::Invalid(_))
    ));
}

#[test]
fn argument_validator_reports_missing_in_schema_order() {
    let validator = ArgumentValidator::compile(&analyze_youtube_descriptor().input_schema).unwrap();

    match validator.validate(&json!({})) {
        Err(SchemaValidationError::MissingRequired(missing)) => {
            assert_eq!(missing, vec!["youtube_url", "prompt"]);
        }
        other => panic!("unexpected: {other:?}"),
    }

    validator
        .validate(&json!({"youtube_url": "https://youtu.be/abc", "prompt": "summarize"}))
        .expect("complete arguments must validate");
}

#[test]
fn argument_validator_checks_types() {
    let validator = ArgumentValidator::compile(&analyze_youtube_descriptor().input_schema).unwrap();

    let err = validator
        .validate(&json!({"youtube_url": ["a"], "prompt": "p"}))
        .unwrap_err();
    assert!(matches!(err, SchemaValidationError::Invalid(_)));
}

#[test]
fn argument_validator_rejects_bad_schema() {
    let result = ArgumentValidator::compile(&json!({"type": 12}));
    assert!(matches!(result, Err(SchemaValidationError::SchemaCompile(_))));
}

#[test]
fn baseline_catalog() {
    let catalog = ToolCatalog::baseline().unwrap();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(ANALYZE_YOUTUBE).is_some());
    assert!(catalog.get("Analyze_Youtube").is_none());

    let names: Vec<&str> = catalog.descriptors().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec![ANALYZE_YOUTUBE]);
}

use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("missing required arguments: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
    #[error("{0}")]
    Invalid(String),
}

/// Compiled validator for a tool's `inputSchema`.
///
/// A `required` property counts as missing when it is absent, `null`, or an
/// empty string. Everything else in the schema is checked by `jsonschema`
/// (draft 2020-12).
pub struct ArgumentValidator {
    required: Vec<String>,
    validator: Validator,
}

impl ArgumentValidator {
    pub fn compile(schema: &Value) -> Result<Self, SchemaValidationError> {
        let validator =
            validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { required, validator })
    }

    pub fn validate(&self, arguments: &Value) -> Result<(), SchemaValidationError> {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|name| is_blank(arguments.get(name.as_str())))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(SchemaValidationError::MissingRequired(missing));
        }

        let errors: Vec<String> = self
            .validator
            .iter_errors(arguments)
            .map(|e| e.to_string())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::Invalid(errors.join("; ")))
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator =
        validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    let errors: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::Invalid(errors.join("; ")))
    }
}

use crate::{Config, ConfigError, ValidationError, FIELD_LOCAL_PATH, FIELD_REPO_PATH, FIELD_WORLD_FILE_NAME, REQUIRED_FIELDS};
use serde_json::{Map, Value};

/// Parses raw config text and checks it against the strict field-set contract.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_document(value)
}

/// Checks run in order: missing fields, unexpected fields, empty values.
/// The first failing check is reported with every field it caught.
pub fn validate_document(value: Value) -> Result<Config, ConfigError> {
    let Value::Object(map) = value else {
        return Err(ConfigError::Parse(format!(
            "expected a JSON object at the top level, found {}",
            kind_of(&value)
        )));
    };

    let mut missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|f| !map.contains_key(**f))
        .map(|f| f.to_string())
        .collect();
    if !missing.is_empty() {
        missing.sort();
        return Err(ValidationError::MissingFields(missing).into());
    }

    let mut extra: Vec<String> = map
        .keys()
        .filter(|k| !REQUIRED_FIELDS.contains(&k.as_str()))
        .cloned()
        .collect();
    if !extra.is_empty() {
        extra.sort();
        return Err(ValidationError::UnexpectedFields(extra).into());
    }

    let mut empty: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|f| non_empty_str(&map, f).is_none())
        .map(|f| f.to_string())
        .collect();
    if !empty.is_empty() {
        empty.sort();
        return Err(ValidationError::EmptyFields(empty).into());
    }

    let field = |name: &str| non_empty_str(&map, name).unwrap_or_default().to_string();
    Ok(Config::new(
        field(FIELD_WORLD_FILE_NAME),
        field(FIELD_LOCAL_PATH),
        field(FIELD_REPO_PATH),
    ))
}

// null, "", and non-string values all count as empty
fn non_empty_str<'a>(map: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    match map.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

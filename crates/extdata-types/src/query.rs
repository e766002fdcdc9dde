use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One decoded query object from the calling process.
///
/// The calling tool hands each adapter a single flat JSON object on stdin.
/// Keys an adapter never declared are ignored, not rejected, so callers can
/// share one query map across several adapters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query(Map<String, Value>);

impl Query {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl From<Map<String, Value>> for Query {
    fn from(map: Map<String, Value>) -> Self {
        Query(map)
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::Input(
                "Failed to parse input: input is empty".to_string(),
            ));
        }
        let value: Value = serde_json::from_str(input)
            .map_err(|e| Error::Input(format!("Failed to parse input: {}", e)))?;
        match value {
            Value::Object(map) => Ok(Query(map)),
            other => Err(Error::Input(format!(
                "Failed to parse input: expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

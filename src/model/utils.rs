/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde_json::{Map, Value};

/// Checks whether a JSON value counts as empty
///
/// Null, `false`, numeric zero, empty strings, empty arrays and empty objects are
/// empty. Everything else is kept.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Removes the entries whose value is empty
///
/// # Arguments
/// * `map` - Parameters or body of a request
///
/// # Returns
/// A new map containing only the non-empty entries
#[must_use]
pub fn remove_empty(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter(|(_, v)| !is_empty_value(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Strips a request value: objects lose their empty entries, anything else is untouched
#[must_use]
pub fn strip_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(remove_empty(&map)),
        other => other,
    }
}

/// Converts query parameters into `(key, value)` pairs
///
/// Strings are sent as-is, numbers and booleans as their JSON text, arrays expand
/// to one pair per element and objects are sent as JSON text.
#[must_use]
pub fn to_query_pairs(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), query_text(item)));
                }
            }
            other => pairs.push((key.clone(), query_text(other))),
        }
    }
    pairs
}

fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

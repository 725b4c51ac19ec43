//! Query serialization.
//!
//! Request arguments are serialized to a JSON object first (absent fields are
//! skipped by their serde attributes, `null` survives), and the transport
//! flattens that object into query pairs.

use serde::Serialize;
use serde_json::Value;

use crate::error::SdkError;

/// Serialize an argument struct into the query value handed to a `Fetcher`.
pub fn to_query<T: Serialize + ?Sized>(args: &T) -> Result<Value, SdkError> {
    Ok(serde_json::to_value(args)?)
}

/// Same as [`to_query`] but keeps "no arguments" distinct from "empty arguments".
pub fn to_optional_query<T: Serialize>(args: Option<&T>) -> Result<Option<Value>, SdkError> {
    args.map(to_query).transpose()
}

/// Flatten a query value into `(key, value)` pairs.
///
/// - arrays repeat their key once per element
/// - strings are sent raw, numbers and booleans as their JSON text
/// - `null` is sent as the literal `null`
/// - nested objects are sent as compact JSON
///
/// A non-object top-level value yields no pairs.
pub fn to_pairs(query: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = query else {
        return Vec::new();
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), scalar(item)));
                }
            }
            other => pairs.push((key.clone(), scalar(other))),
        }
    }
    pairs
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

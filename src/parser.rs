//! Assembly of the data mapping handed to a render call.
//! Data may come from a JSON/YAML file, from stdin, and from `KEY=VALUE` overrides.

use crate::error::{Error, Result};
use log::debug;
use std::io::Read;
use std::path::Path;

/// Parses data content, trying JSON first and falling back to YAML.
///
/// # Errors
/// * `Error::DataError` if the content is neither, or is not a mapping
pub fn parse_data(content: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::DataError(format!("Invalid data format: {e}")))?,
    };

    match value {
        serde_json::Value::Object(_) => Ok(value),
        // An empty YAML document
        serde_json::Value::Null => Ok(serde_json::Value::Object(serde_json::Map::new())),
        other => Err(Error::DataError(format!(
            "expected a mapping of keys to values, got {other}"
        ))),
    }
}

/// Loads a data file (`.json`, `.yml`, `.yaml` or anything parseable as one of them).
pub fn load_data_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    debug!("Loading data from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_data(&content)
}

/// Reads a JSON object from stdin. Empty input yields an empty mapping.
pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let buffer = buffer.trim();
    if buffer.is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    parse_data(buffer)
}

/// Parses a `KEY=VALUE` pair. The value is read as a JSON scalar when possible,
/// so `size=1024` yields a number and `name=demo` a string.
pub fn parse_var(s: &str) -> std::result::Result<(String, serde_json::Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' in '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) if !value.is_object() && !value.is_array() => value,
        _ => serde_json::Value::String(raw.to_string()),
    };
    Ok((key.to_string(), value))
}

/// Overlays `vars` on top of `base`, later entries winning.
pub fn merge_data(
    base: serde_json::Value,
    vars: Vec<(String, serde_json::Value)>,
) -> serde_json::Value {
    let mut map = match base {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    for (key, value) in vars {
        map.insert(key, value);
    }
    serde_json::Value::Object(map)
}

//! JSON collaborator layer: default-record loading and display output.
//!
//! The resolution engine has no opinion on file formats; this module is
//! the conventional calling layer that loads JSON-formatted defaults
//! from a configurable path (falling back silently to built-in defaults
//! when the path is absent or a directory) and serializes the final
//! record for display.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConfigError;

/// Loads and parses a JSON configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(ConfigError::JsonParse)
}

/// Merges a JSON defaults file into `builtin`, degrading silently.
///
/// Fields present in the file replace the built-in values; fields the
/// file omits keep them. A missing path or a directory is logged at
/// info level and a malformed file at warning level; in every failure
/// case the built-in defaults are returned unchanged.
pub fn defaults_or<T>(path: &Path, mut builtin: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    match std::fs::metadata(path) {
        Err(_) => {
            tracing::info!("Config file {} does not exist", path.display());
            return builtin;
        }
        Ok(stat) if stat.is_dir() => {
            tracing::info!("Config file path {} is a directory", path.display());
            return builtin;
        }
        Ok(_) => {}
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {e}", path.display());
            return builtin;
        }
    };

    if let Err(e) = update_from_json(&mut builtin, &content) {
        tracing::warn!("Ignoring malformed config file {}: {e}", path.display());
    }
    builtin
}

/// Merges data from a JSON document into the current record.
///
/// Fields that are missing in the JSON data retain their previous
/// values; nested objects merge field-wise.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or the merged document no
/// longer matches the record's shape.
pub fn update_from_json<T>(record: &mut T, json: &str) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let mut base = serde_json::to_value(&*record).map_err(ConfigError::Serialize)?;
    let patch: Value = serde_json::from_str(json).map_err(ConfigError::JsonParse)?;

    merge_value(&mut base, patch);

    *record = serde_json::from_value(base).map_err(ConfigError::JsonParse)?;
    Ok(())
}

/// Serializes the final record for display.
///
/// # Errors
///
/// Returns an error if serialization fails; callers conventionally
/// treat this as fatal at startup.
pub fn to_json_string<T: Serialize>(record: &T) -> Result<String, ConfigError> {
    serde_json::to_string(record).map_err(ConfigError::Serialize)
}

/// Deep merge: objects merge field-wise, everything else is replaced.
fn merge_value(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

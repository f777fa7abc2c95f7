//! Theme mod files
//!
//! Only customized values are persisted, as one flat map of setting id to
//! value. A [`StorageBackend`] decides the file format; [`ThemeModStore`]
//! decides what goes into the map.
//!
//! [`ThemeModStore`]: crate::ThemeModStore

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Customized theme mods keyed by setting id
pub type ThemeMods = BTreeMap<String, Value>;

/// File format for persisted theme mods
pub trait StorageBackend {
    /// File extension without the dot ("json", "toml")
    fn extension(&self) -> &'static str;

    fn encode(&self, mods: &ThemeMods) -> Result<String>;

    fn decode(&self, content: &str) -> Result<ThemeMods>;

    /// Whether `value` can be written in this format.
    ///
    /// Values that cannot are left out of the file instead of failing the
    /// whole save.
    fn can_store(&self, _value: &Value) -> bool {
        true
    }

    /// Read every theme mod stored at `path`
    fn load(&self, path: &Path) -> Result<ThemeMods> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode(&content)
    }

    /// Replace the file at `path` with `mods`.
    ///
    /// The new content is written next to the target and renamed over it,
    /// so a failed save leaves the previous file intact.
    fn save(&self, path: &Path, mods: &ThemeMods) -> Result<()> {
        let content = self.encode(mods)?;
        replace_file(path, &content)
    }
}

fn replace_file(path: &Path, content: &str) -> Result<()> {
    let Some(file_name) = path.file_name() else {
        return Err(Error::Config(format!(
            "'{}' does not name a theme mods file",
            path.display()
        )));
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut staged_name = file_name.to_os_string();
    staged_name.push(".tmp");
    let staged = path.with_file_name(staged_name);

    std::fs::write(&staged, content)
        .and_then(|()| std::fs::rename(&staged, path))
        .map_err(|source| {
            let _ = std::fs::remove_file(&staged);
            Error::FileWrite {
                path: path.to_path_buf(),
                source,
            }
        })
}

// =============================================================================
// JSON
// =============================================================================

/// Pretty-printed JSON theme mods (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStorage;

impl JsonStorage {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for JsonStorage {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, mods: &ThemeMods) -> Result<String> {
        Ok(serde_json::to_string_pretty(mods)?)
    }

    fn decode(&self, content: &str) -> Result<ThemeMods> {
        Ok(serde_json::from_str(content)?)
    }
}

// =============================================================================
// TOML
// =============================================================================

/// TOML theme mods, one `setting_id = value` line per customization
#[cfg(feature = "toml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlStorage;

#[cfg(feature = "toml")]
impl TomlStorage {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "toml")]
impl StorageBackend for TomlStorage {
    fn extension(&self) -> &'static str {
        "toml"
    }

    fn encode(&self, mods: &ThemeMods) -> Result<String> {
        toml::to_string_pretty(mods).map_err(|e| Error::Parse(e.to_string()))
    }

    fn decode(&self, content: &str) -> Result<ThemeMods> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    fn can_store(&self, value: &Value) -> bool {
        toml_representable(value)
    }
}

/// TOML has no null and no integers above `i64::MAX`
#[cfg(feature = "toml")]
fn toml_representable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Number(n) => !n.is_u64() || n.as_i64().is_some(),
        Value::Array(items) => items.iter().all(toml_representable),
        Value::Object(map) => map.values().all(toml_representable),
        Value::Bool(_) | Value::String(_) => true,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn height_mods() -> ThemeMods {
        ThemeMods::from([
            ("post_css_dimension_height".to_string(), json!("10")),
            ("post_css_dimension_height_units".to_string(), json!("value3")),
        ])
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let json = JsonStorage::new().encode(&height_mods()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"post_css_dimension_height\": \"10\""));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let storage = JsonStorage::new();
        let dir = tempdir().unwrap();
        let path = dir.path().join("themes/default/mods.json");

        storage.save(&path, &height_mods()).unwrap();

        assert_eq!(storage.load(&path).unwrap(), height_mods());
        assert!(!path.with_file_name("mods.json.tmp").exists());
    }

    #[test]
    fn test_save_replaces_previous_file() {
        let storage = JsonStorage::new();
        let dir = tempdir().unwrap();
        let path = dir.path().join("mods.json");

        storage.save(&path, &height_mods()).unwrap();
        storage.save(&path, &ThemeMods::new()).unwrap();

        assert!(storage.load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = JsonStorage::new().load(Path::new("/nonexistent/mods.json"));
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_load_corrupted_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mods.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonStorage::new().load(&path);
        assert!(matches!(result, Err(Error::Serialize(_))));
    }

    #[test]
    fn test_json_stores_anything() {
        let storage = JsonStorage::new();
        assert!(storage.can_store(&Value::Null));
        assert!(storage.can_store(&json!({"a": [1, null]})));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_representable_values() {
        let storage = TomlStorage::new();
        assert!(storage.can_store(&json!("value1")));
        assert!(storage.can_store(&json!(-4)));
        assert!(storage.can_store(&json!(["a", 1])));
        assert!(!storage.can_store(&Value::Null));
        assert!(!storage.can_store(&json!([1, null])));
        assert!(!storage.can_store(&json!({"nested": null})));
        assert!(!storage.can_store(&json!(u64::MAX)));
    }
}

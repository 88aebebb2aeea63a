use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// Reads a JSON file, falling back to `T::default()` when the file is
/// missing or cannot be parsed.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "malformed file, starting fresh");
            T::default()
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable file, starting fresh");
            T::default()
        }
    }
}

/// Writes pretty JSON next to the target and renames it into place.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let value: Vec<u32> = load_or_default(&dir.path().join("nope.json"));
        assert!(value.is_empty());
    }

    #[test]
    fn test_malformed_file_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        let value: BTreeMap<String, String> = load_or_default(&path);
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_creates_parent_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data.json");
        save_json(&path, &vec![1, 2, 3]).unwrap();

        let loaded: Vec<u32> = load_or_default(&path);
        assert_eq!(loaded, vec![1, 2, 3]);
        assert!(!path.with_extension("json.tmp").exists());
    }
}

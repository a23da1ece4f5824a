//! Manifest file loading.
//!
//! Dispatches on the file extension: `.json` parses as JSON, everything else
//! as TOML.

use crate::manifest::Manifest;
use crate::ConfigResult;
use pinion_core::PinionError;
use std::path::Path;

/// Read and parse a manifest file
pub fn load_manifest(path: &Path) -> ConfigResult<Manifest> {
    let contents = std::fs::read_to_string(path).map_err(|err| {
        PinionError::io(format!("Failed to read manifest {}", path.display()), err)
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents).map_err(|err| PinionError::ManifestParse {
            message: err.to_string(),
        })
    } else {
        toml::from_str(&contents).map_err(|err| PinionError::ManifestParse {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TOML_MANIFEST: &str = r#"
[[dependency]]
from = "com.a:app:1.0.0"
to = "com.b:lib"
versions = "[1.0.0,2.0.0)"

[[resolved]]
artifact = "com.b:lib"
version = "1.5.0"
"#;

    const JSON_MANIFEST: &str = r#"{
  "dependency": [
    { "from": "com.a:app:1.0.0", "to": "com.b:lib", "versions": "[1.0.0,2.0.0)" }
  ],
  "resolved": [
    { "artifact": "com.b:lib", "version": "1.5.0" }
  ]
}"#;

    #[test]
    fn test_load_toml_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pinion.toml");
        fs::write(&path, TOML_MANIFEST).unwrap();

        let manifest = load_manifest(&path).unwrap();
        assert_eq!(manifest.dependencies.len(), 1);
        assert_eq!(manifest.resolved.len(), 1);
    }

    #[test]
    fn test_load_json_manifest() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("pinion.json");
        let toml_path = dir.path().join("pinion.toml");
        fs::write(&json_path, JSON_MANIFEST).unwrap();
        fs::write(&toml_path, TOML_MANIFEST).unwrap();

        // Both representations parse into the same manifest
        let from_json = load_manifest(&json_path).unwrap();
        let from_toml = load_manifest(&toml_path).unwrap();
        assert_eq!(from_json, from_toml);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_manifest(Path::new("/nonexistent/pinion.toml")).unwrap_err();
        assert!(matches!(err, PinionError::Io { .. }));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pinion.toml");
        fs::write(&path, "[[dependency]\nbroken").unwrap();

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, PinionError::ManifestParse { .. }));
    }
}

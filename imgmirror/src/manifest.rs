//! Manifest loading and entry types.
//!
//! The manifest is an ordered JSON array of objects:
//!
//! ```json
//! [
//!   { "path": "/media/cats", "url": "https://cdn.example.com/1.bin", "name": "whiskers" },
//!   { "path": "/media/dogs", "url": ["https://a/2", "https://b/2"], "name": "rex" }
//! ]
//! ```
//!
//! Manifest order defines processing order. An unreadable or malformed
//! manifest is the only fatal error class in the pipeline: the caller gets a
//! [`ManifestError`] before any download has been attempted.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that abort the run before any download starts.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest file is not valid JSON of the expected shape.
    #[error("failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An entry carries an empty URL list.
    #[error("manifest entry {name:?} has no source URLs")]
    EmptyUrls { name: String },
}

/// One image to mirror. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Directory the file is saved into (created if absent).
    pub target_dir: PathBuf,

    /// URL variants for this entry, in order. Always at least one.
    pub source_urls: Vec<String>,

    /// File name before the sniffed extension is appended.
    pub base_name: String,
}

/// Wire shape of one manifest entry.
#[derive(Deserialize)]
struct RawEntry {
    path: PathBuf,
    url: UrlField,
    name: String,
}

/// `url` is a single string in the common case, or a list of variants.
#[derive(Deserialize)]
#[serde(untagged)]
enum UrlField {
    One(String),
    Many(Vec<String>),
}

/// Load and decode the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError`] if the file cannot be read, is not valid JSON,
/// or an entry has an empty URL list. No partial manifest is ever returned.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: Vec<RawEntry> = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    raw.into_iter()
        .map(|entry| {
            let source_urls = match entry.url {
                UrlField::One(url) => vec![url],
                UrlField::Many(urls) => urls,
            };
            if source_urls.is_empty() {
                return Err(ManifestError::EmptyUrls { name: entry.name });
            }
            Ok(ManifestEntry {
                target_dir: entry.path,
                source_urls,
                base_name: entry.name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_manifest(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_manifest_single_url() {
        let file = write_manifest(
            r#"[{"path": "/tmp/a", "url": "http://x/1.bin", "name": "pic"}]"#,
        );

        let entries = load_manifest(file.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target_dir, PathBuf::from("/tmp/a"));
        assert_eq!(entries[0].source_urls, vec!["http://x/1.bin".to_string()]);
        assert_eq!(entries[0].base_name, "pic");
    }

    #[test]
    fn test_load_manifest_url_list() {
        let file = write_manifest(
            r#"[{"path": "/tmp/a", "url": ["http://x/1", "http://y/1"], "name": "pic"}]"#,
        );

        let entries = load_manifest(file.path()).unwrap();

        assert_eq!(entries[0].source_urls.len(), 2);
        assert_eq!(entries[0].source_urls[1], "http://y/1");
    }

    #[test]
    fn test_load_manifest_preserves_order() {
        let file = write_manifest(
            r#"[
                {"path": "/tmp", "url": "http://x/1", "name": "a"},
                {"path": "/tmp", "url": "http://x/2", "name": "b"},
                {"path": "/tmp", "url": "http://x/3", "name": "c"}
            ]"#,
        );

        let entries = load_manifest(file.path()).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.base_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let err = load_manifest(Path::new("/nonexistent/data.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }

    #[test]
    fn test_load_manifest_malformed_json() {
        let file = write_manifest("{not json");
        let err = load_manifest(file.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_load_manifest_wrong_shape() {
        let file = write_manifest(r#"{"images": []}"#);
        let err = load_manifest(file.path()).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_load_manifest_empty_url_list() {
        let file = write_manifest(r#"[{"path": "/tmp", "url": [], "name": "pic"}]"#);
        let err = load_manifest(file.path()).unwrap_err();
        assert!(matches!(err, ManifestError::EmptyUrls { .. }));
    }

    #[test]
    fn test_load_manifest_empty_array() {
        let file = write_manifest("[]");
        let entries = load_manifest(file.path()).unwrap();
        assert!(entries.is_empty());
    }
}

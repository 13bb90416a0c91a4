//! Closing and renaming downloaded files.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};

/// Close a written file and rename it to carry its resolved extension.
///
/// The handle is consumed and dropped before the rename: renaming a file
/// with an open handle is not guaranteed to succeed on all platforms, so
/// close-then-rename is a hard ordering requirement.
///
/// The extension is appended (`photo` → `photo.png`); base names that
/// already contain a dot keep their full name.
///
/// # Errors
///
/// Returns the underlying I/O error if the rename fails. The extensionless
/// file is left in place in that case.
pub async fn finalize(file: File, path: &Path, extension: &str) -> std::io::Result<PathBuf> {
    drop(file);

    let mut renamed = path.as_os_str().to_owned();
    renamed.push(".");
    renamed.push(extension);
    let renamed = PathBuf::from(renamed);

    fs::rename(path, &renamed).await?;
    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_finalize_renames_with_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo");

        let mut file = File::create(&path).await.unwrap();
        file.write_all(b"data").await.unwrap();
        file.flush().await.unwrap();

        let renamed = finalize(file, &path, "png").await.unwrap();

        assert_eq!(renamed, dir.path().join("photo.png"));
        assert!(renamed.exists());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_finalize_appends_to_dotted_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.v2");

        let file = File::create(&path).await.unwrap();
        let renamed = finalize(file, &path, "gif").await.unwrap();

        // The dot in the base name must survive.
        assert_eq!(renamed, dir.path().join("photo.v2.gif"));
    }

    #[tokio::test]
    async fn test_finalize_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost");

        let file = File::create(&path).await.unwrap();
        fs::remove_file(&path).await.unwrap();

        assert!(finalize(file, &path, "png").await.is_err());
    }
}

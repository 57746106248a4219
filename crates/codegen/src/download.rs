//! Saving exported files
//!
//! [`save_file`] writes exactly one file per call. Multi-file exports go
//! through [`save_all_staggered`], which spaces the writes out by a fixed
//! step so consumers watching the directory see one file at a time.

use crate::GeneratedFile;
use solar_core::{AdminError, AdminResult};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Write one file into `dir`, creating the directory if needed
///
/// An existing file is only replaced when `overwrite` is set.
pub fn save_file(dir: impl AsRef<Path>, file: &GeneratedFile, overwrite: bool) -> AdminResult<PathBuf> {
    let full_path = dir.as_ref().join(&file.path);

    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| dir_error(parent, e))?;
    }
    if full_path.exists() && !overwrite {
        return Err(AdminError::OutputExists(full_path));
    }
    std::fs::write(&full_path, &file.content).map_err(|e| write_error(&full_path, e))?;

    log_saved(&full_path, file);
    Ok(full_path)
}

/// Save `files` in order, waiting `stagger` between consecutive writes
///
/// Same rules as [`save_file`], on tokio's file API. Stops at the first
/// failed write; files saved before it stay on disk.
pub async fn save_all_staggered(
    dir: impl AsRef<Path>,
    files: &[GeneratedFile],
    stagger: Duration,
    overwrite: bool,
) -> AdminResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(files.len());

    for (i, file) in files.iter().enumerate() {
        if i > 0 && !stagger.is_zero() {
            tokio::time::sleep(stagger).await;
        }
        written.push(write_async(dir, file, overwrite).await?);
    }

    Ok(written)
}

async fn write_async(dir: &Path, file: &GeneratedFile, overwrite: bool) -> AdminResult<PathBuf> {
    let full_path = dir.join(&file.path);

    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| dir_error(parent, e))?;
    }
    let exists = fs::try_exists(&full_path)
        .await
        .map_err(|e| write_error(&full_path, e))?;
    if exists && !overwrite {
        return Err(AdminError::OutputExists(full_path));
    }
    fs::write(&full_path, file.content.as_bytes())
        .await
        .map_err(|e| write_error(&full_path, e))?;

    log_saved(&full_path, file);
    Ok(full_path)
}

fn dir_error(path: &Path, e: std::io::Error) -> AdminError {
    AdminError::DirectoryCreate {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn write_error(path: &Path, e: std::io::Error) -> AdminError {
    AdminError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn log_saved(path: &Path, file: &GeneratedFile) {
    tracing::info!(path = %path.display(), bytes = file.content.len(), "file saved");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_save_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("site");
        let path = save_file(&out, &GeneratedFile::typescript("panels.ts", "x"), false).unwrap();

        assert_eq!(path, out.join("panels.ts"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x");
    }

    #[test]
    fn test_save_file_refuses_existing_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let file = GeneratedFile::typescript("panels.ts", "first");
        save_file(dir.path(), &file, false).unwrap();

        let second = GeneratedFile::typescript("panels.ts", "second");
        let err = save_file(dir.path(), &second, false).unwrap_err();
        assert!(matches!(err, AdminError::OutputExists(_)));
        assert_eq!(std::fs::read_to_string(dir.path().join("panels.ts")).unwrap(), "first");

        save_file(dir.path(), &second, true).unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("panels.ts")).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_staggered_save_writes_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            GeneratedFile::typescript("a.ts", "a"),
            GeneratedFile::typescript("b.ts", "b"),
            GeneratedFile::typescript("c.ts", "c"),
        ];

        let started = Instant::now();
        let written = save_all_staggered(dir.path(), &files, Duration::from_millis(20), false)
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(40));
        assert_eq!(
            written,
            vec![dir.path().join("a.ts"), dir.path().join("b.ts"), dir.path().join("c.ts")]
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_staggered_save_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site").join("data");
        let files = vec![GeneratedFile::typescript("panels.ts", "v1")];

        let written = save_all_staggered(&out, &files, Duration::ZERO, false).await.unwrap();
        assert_eq!(written, vec![out.join("panels.ts")]);

        let files = vec![GeneratedFile::typescript("panels.ts", "v2")];
        save_all_staggered(&out, &files, Duration::ZERO, true).await.unwrap();
        assert_eq!(tokio::fs::read_to_string(out.join("panels.ts")).await.unwrap(), "v2");
    }

    #[tokio::test]
    async fn test_staggered_save_stops_on_conflict() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.ts"), "keep").unwrap();
        let files = vec![
            GeneratedFile::typescript("a.ts", "a"),
            GeneratedFile::typescript("b.ts", "b"),
            GeneratedFile::typescript("c.ts", "c"),
        ];

        let result = save_all_staggered(dir.path(), &files, Duration::ZERO, false).await;
        assert!(result.is_err());
        assert!(dir.path().join("a.ts").exists());
        assert!(!dir.path().join("c.ts").exists());
    }
}

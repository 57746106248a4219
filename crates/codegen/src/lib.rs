//! # Solar Codegen
//!
//! Export generators for the solar catalog site.
//!
//! This crate turns admin content back into the TypeScript data modules the
//! public site compiles against, and writes exported files to disk.
//!
//! ## Features
//!
//! - **Product Modules**: `batteries.ts`, `panels.ts`, `inverters.ts`
//! - **Project Module**: `projects.ts` with type maps and lookup helpers
//! - **Article Module**: `articles.ts` with icon imports and lookup helpers
//! - **Module Model**: typed description of a data module and its renderer
//! - **Saving**: one file per call, or a staggered multi-file save
//!

// ============================================================================
// Modules
// ============================================================================

pub mod articles;
pub mod download;
pub mod generator;
pub mod literal;
pub mod module;
pub mod products;
pub mod projects;

// ============================================================================
// Re-exports
// ============================================================================

pub use articles::{ICON_WHITELIST, generate_articles_ts, icon_imports};
pub use download::{save_all_staggered, save_file};
pub use generator::{ExportGenerator, ExportSummary, generate_all, generate_all_at, summarize};
pub use products::{generate_batteries_ts, generate_inverters_ts, generate_panels_ts};
pub use projects::{generate_projects_ts, generate_projects_ts_at};

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default delay between files in a multi-file save
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

// ============================================================================
// ExportConfig
// ============================================================================

/// Configuration for exports
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory exported files are written to
    pub output_dir: PathBuf,

    /// Delay step between files in a multi-file save
    pub stagger: Duration,

    /// Whether to overwrite existing files
    pub overwrite: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exported"),
            stagger: DEFAULT_STAGGER,
            overwrite: false,
        }
    }
}

impl ExportConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the delay between files
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Allow overwriting existing files
    pub fn allow_overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Represents a single exported file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// File name relative to the output directory
    pub path: PathBuf,

    /// File content
    pub content: String,

    /// File type for categorization
    pub file_type: FileType,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            file_type,
        }
    }

    /// Create a TypeScript data module
    pub fn typescript(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::TypeScript)
    }

    /// Create a JSON document
    pub fn json(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileType::Json)
    }

    /// Get the file extension
    pub fn extension(&self) -> &str {
        self.file_type.extension()
    }
}

/// Type of exported file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    TypeScript,
    Json,
}

impl FileType {
    /// Get the file extension for this type
    pub fn extension(&self) -> &str {
        match self {
            FileType::TypeScript => "ts",
            FileType::Json => "json",
        }
    }
}

// ============================================================================
// ExportBundle
// ============================================================================

/// The files produced by one export run
#[derive(Debug, Clone, Default)]
pub struct ExportBundle {
    /// All generated files, in write order
    pub files: Vec<GeneratedFile>,

    /// Things in the output that need a manual follow-up
    pub warnings: Vec<String>,
}

impl ExportBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the bundle
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Get the number of files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get a file by its relative path
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    /// Get files by type
    pub fn files_by_type(&self, file_type: FileType) -> Vec<&GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.file_type == file_type)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_default() {
        let config = ExportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("exported"));
        assert_eq!(config.stagger, Duration::from_millis(100));
        assert!(!config.overwrite);
    }

    #[test]
    fn test_export_config_builder() {
        let config = ExportConfig::new()
            .with_output_dir("/tmp/site-data")
            .with_stagger(Duration::ZERO)
            .allow_overwrite();

        assert_eq!(config.output_dir, PathBuf::from("/tmp/site-data"));
        assert_eq!(config.stagger, Duration::ZERO);
        assert!(config.overwrite);
    }

    #[test]
    fn test_generated_file() {
        let file = GeneratedFile::typescript("panels.ts", "export {};");
        assert_eq!(file.extension(), "ts");

        let backup = GeneratedFile::json("admin-backup-2024-05-01.json", "{}");
        assert_eq!(backup.file_type, FileType::Json);
    }

    #[test]
    fn test_bundle_lookup_and_write() {
        let mut bundle = ExportBundle::new();
        bundle.add_file(GeneratedFile::typescript("panels.ts", "a"));
        bundle.add_file(GeneratedFile::json("backup.json", "{}"));
        bundle.add_warning("check icons");

        assert_eq!(bundle.file_count(), 2);
        assert!(bundle.has_warnings());
        assert_eq!(bundle.files_by_type(FileType::TypeScript).len(), 1);
        assert_eq!(bundle.file("backup.json").map(|f| f.content.as_str()), Some("{}"));
        assert!(bundle.file("missing.ts").is_none());
    }
}

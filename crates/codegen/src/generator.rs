//! # Export Orchestrator
//!
//! The `ExportGenerator` is the top-level entry point for source exports. It
//! takes [`ContentData`] and an [`ExportConfig`], runs the five module
//! generators and collects everything that needs a manual follow-up into an
//! [`ExportBundle`].
//!
//! ## Pipeline
//!
//! ```text
//! ContentData + ExportConfig
//!         │
//!         ├──► products::generate_product_module() × 3 → batteries/panels/inverters.ts
//!         ├──► projects::generate_projects_ts_at()      → projects.ts
//!         ├──► articles::generate_articles_ts()         → articles.ts
//!         │
//!         ▼
//!   ExportBundle { files, warnings }
//!         │
//!         ▼
//!   download::save_all_staggered()
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use solar_codegen::{ExportConfig, ExportGenerator};
//!
//! let generator = ExportGenerator::new(ExportConfig::new().with_output_dir("site/src/data"));
//! let (bundle, paths) = generator.generate_and_write(&content).await?;
//! println!("{}", solar_codegen::summarize(&bundle));
//! ```

use chrono::Utc;
use solar_content::ContentData;
use solar_core::{AdminError, AdminResult, ProductCategory};
use std::path::PathBuf;

use crate::articles;
use crate::download;
use crate::products::{self, PRODUCT_MODULES};
use crate::projects;
use crate::{ExportBundle, ExportConfig, FileType, GeneratedFile};

// ============================================================================
// ExportGenerator
// ============================================================================

/// Runs all module generators with one configuration
#[derive(Debug, Clone, Default)]
pub struct ExportGenerator {
    config: ExportConfig,
}

impl ExportGenerator {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Generate the five source modules
    ///
    /// # Errors
    ///
    /// Refuses with [`AdminError::NothingToExport`] when every collection is
    /// empty. Individual findings never fail the export; they become bundle
    /// warnings.
    pub fn generate(&self, data: &ContentData) -> AdminResult<ExportBundle> {
        if data.is_empty() {
            tracing::warn!("export refused: no content loaded");
            return Err(AdminError::NothingToExport);
        }
        generate_all(data)
    }

    /// Generate and save the modules into the configured output directory
    pub async fn generate_and_write(&self, data: &ContentData) -> AdminResult<(ExportBundle, Vec<PathBuf>)> {
        let bundle = self.generate(data)?;
        let paths = download::save_all_staggered(
            &self.config.output_dir,
            &bundle.files,
            self.config.stagger,
            self.config.overwrite,
        )
        .await?;
        tracing::info!(
            output_dir = %self.config.output_dir.display(),
            files = paths.len(),
            "export written to disk",
        );
        Ok((bundle, paths))
    }
}

// ============================================================================
// Standalone convenience functions
// ============================================================================

/// Generate all five modules, with no check for empty content
pub fn generate_all(data: &ContentData) -> AdminResult<ExportBundle> {
    generate_all_at(data, Utc::now().timestamp_millis())
}

/// [`generate_all`] with a fixed timestamp for non-numeric project ids
pub fn generate_all_at(data: &ContentData, now_ms: i64) -> AdminResult<ExportBundle> {
    let mut bundle = ExportBundle::new();

    for module in &PRODUCT_MODULES {
        let text = products::generate_product_module(module, &data.products)?;
        bundle.add_file(GeneratedFile::typescript(module.file_name, text));
    }
    bundle.add_file(GeneratedFile::typescript(
        projects::FILE_NAME,
        projects::generate_projects_ts_at(&data.projects, now_ms)?,
    ));
    bundle.add_file(GeneratedFile::typescript(
        articles::FILE_NAME,
        articles::generate_articles_ts(&data.articles)?,
    ));

    for warning in collect_warnings(data) {
        bundle.add_warning(warning);
    }

    tracing::info!(
        files = bundle.file_count(),
        warnings = bundle.warnings.len(),
        "source export generated",
    );
    Ok(bundle)
}

fn collect_warnings(data: &ContentData) -> Vec<String> {
    let mut warnings = Vec::new();

    for module in &PRODUCT_MODULES {
        if data.products_in(module.category).next().is_none() {
            warnings.push(format!(
                "No products in category '{}'; {} exports an empty list.",
                module.category, module.file_name,
            ));
        }
    }

    let controllers = data.products_in(ProductCategory::Controllers).count();
    if controllers > 0 {
        warnings.push(format!(
            "{} charge controller product(s) have no generated module and were not exported.",
            controllers,
        ));
    }

    let fallback_ids: Vec<&str> = data
        .projects
        .iter()
        .filter(|p| projects::numeric_id(&p.id).is_none())
        .map(|p| p.slug.as_str())
        .collect();
    if !fallback_ids.is_empty() {
        warnings.push(format!(
            "Projects without a numeric id were given a timestamp id: {}",
            fallback_ids.join(", "),
        ));
    }

    let supporting = data.articles.iter().filter(|a| !a.is_pillar()).count();
    if supporting > 0 {
        warnings.push(format!(
            "{} supporting article(s) export empty pillarAr/pillarEn; fill them in {}.",
            supporting,
            articles::FILE_NAME,
        ));
    }

    let orphans: Vec<&str> = data
        .articles
        .iter()
        .filter(|a| !a.is_pillar() && a.pillar_slug.is_some() && data.pillar_of(a).is_none())
        .map(|a| a.slug.as_str())
        .collect();
    if !orphans.is_empty() {
        warnings.push(format!(
            "Supporting articles point at a missing pillar: {}",
            orphans.join(", "),
        ));
    }

    let dangling: Vec<&str> = data
        .products
        .iter()
        .filter(|p| data.related_products(p).len() < p.related_product_slugs.len())
        .map(|p| p.slug.as_str())
        .collect();
    if !dangling.is_empty() {
        warnings.push(format!(
            "Products list related slugs that do not resolve: {}",
            dangling.join(", "),
        ));
    }

    let unknown = articles::unknown_icons(&data.articles);
    if !unknown.is_empty() {
        warnings.push(format!(
            "Icons not imported by {}: {}",
            articles::FILE_NAME,
            unknown.join(", "),
        ));
    }

    warnings
}

// ============================================================================
// ExportSummary
// ============================================================================

/// A human-readable summary of a completed export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Total number of files generated.
    pub total_files: usize,
    /// Number of TypeScript modules.
    pub typescript_files: usize,
    /// Number of JSON documents.
    pub json_files: usize,
    /// Number of warnings.
    pub warning_count: usize,
    /// Total bytes of generated content.
    pub total_bytes: usize,
}

impl ExportSummary {
    pub fn from_bundle(bundle: &ExportBundle) -> Self {
        Self {
            total_files: bundle.file_count(),
            typescript_files: bundle.files_by_type(FileType::TypeScript).len(),
            json_files: bundle.files_by_type(FileType::Json).len(),
            warning_count: bundle.warnings.len(),
            total_bytes: bundle.files.iter().map(|f| f.content.len()).sum(),
        }
    }

    /// Format the summary as a boxed report
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(512);

        out.push_str("╔══════════════════════════════════════════════════╗\n");
        out.push_str("║         Export Complete                          ║\n");
        out.push_str("╠══════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Total Files: {:<35}║\n", self.total_files));
        out.push_str(&format!("║    TS:        {:<35}║\n", self.typescript_files));
        out.push_str(&format!("║    JSON:      {:<35}║\n", self.json_files));
        out.push_str(&format!("║  Warnings:    {:<35}║\n", self.warning_count));

        let size_str = if self.total_bytes < 1024 {
            format!("{} B", self.total_bytes)
        } else if self.total_bytes < 1024 * 1024 {
            format!("{:.1} KB", self.total_bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", self.total_bytes as f64 / (1024.0 * 1024.0))
        };
        out.push_str(&format!("║  Total Size:  {:<35}║\n", size_str));
        out.push_str("╚══════════════════════════════════════════════════╝\n");

        out
    }
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Produce an [`ExportSummary`] from an [`ExportBundle`]
pub fn summarize(bundle: &ExportBundle) -> ExportSummary {
    ExportSummary::from_bundle(bundle)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use solar_content::{Article, Product, Project};
    use solar_core::ProjectType;
    use std::time::Duration;

    fn content() -> ContentData {
        ContentData::new(
            vec![
                Product::new("b1", "us5000", ProductCategory::Pylontech, "Pylontech", "أ", "A"),
                Product::new("c1", "mppt", ProductCategory::Controllers, "Victron", "ب", "B"),
            ],
            vec![
                Article::pillar("guide", "دليل", "Guide").with_icon("Sun"),
                Article::supporting("sizing", "guide", "حجم", "Sizing").with_icon("Rocket"),
            ],
            vec![
                Project::new("3", "villa", ProjectType::Residential, "فيلا", "Villa"),
                Project::new("new-uuid", "farm", ProjectType::Agricultural, "مزرعة", "Farm"),
            ],
        )
    }

    #[test]
    fn test_generate_refuses_empty_content() {
        let err = ExportGenerator::with_defaults()
            .generate(&ContentData::default())
            .unwrap_err();
        assert!(matches!(err, AdminError::NothingToExport));
    }

    #[test]
    fn test_generate_all_file_order() {
        let bundle = generate_all_at(&content(), 1).unwrap();
        let names: Vec<String> = bundle
            .files
            .iter()
            .map(|f| f.path.display().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["batteries.ts", "panels.ts", "inverters.ts", "projects.ts", "articles.ts"]
        );
        assert!(bundle.files.iter().all(|f| f.file_type == FileType::TypeScript));
    }

    #[test]
    fn test_generate_all_even_when_empty() {
        let bundle = generate_all(&ContentData::default()).unwrap();
        assert_eq!(bundle.file_count(), 5);
        let panels = bundle.file("panels.ts").unwrap();
        assert!(panels.content.contains("export const panelProducts: Product[] = [];"));
    }

    #[test]
    fn test_warnings() {
        let bundle = generate_all_at(&content(), 1).unwrap();
        let all = bundle.warnings.join("\n");

        assert!(all.contains("No products in category 'panels'; panels.ts exports an empty list."));
        assert!(all.contains("No products in category 'inverters'; inverters.ts exports an empty list."));
        assert!(!all.contains("batteries.ts"));
        assert!(all.contains("1 charge controller product(s)"));
        assert!(all.contains("timestamp id: farm"));
        assert!(all.contains("1 supporting article(s) export empty pillarAr/pillarEn"));
        assert!(all.contains("Icons not imported by articles.ts: Rocket"));
        assert!(!all.contains("missing pillar"));
        assert!(!all.contains("do not resolve"));
    }

    #[test]
    fn test_dangling_reference_warnings() {
        let mut data = content();
        data.articles
            .push(Article::supporting("orphan", "no-such-guide", "يتيم", "Orphan"));
        data.products[0].related_product_slugs = vec!["mppt".into(), "gone".into()];

        let bundle = generate_all_at(&data, 1).unwrap();
        let all = bundle.warnings.join("\n");
        assert!(all.contains("Supporting articles point at a missing pillar: orphan"));
        assert!(all.contains("Products list related slugs that do not resolve: us5000"));
    }

    #[test]
    fn test_summary() {
        let bundle = generate_all_at(&content(), 1).unwrap();
        let summary = summarize(&bundle);
        assert_eq!(summary.total_files, 5);
        assert_eq!(summary.typescript_files, 5);
        assert_eq!(summary.json_files, 0);
        assert_eq!(summary.warning_count, bundle.warnings.len());

        let text = summary.to_string();
        assert!(text.contains("Export Complete"));
        assert!(text.contains("KB") || text.contains(" B"));
    }

    #[tokio::test]
    async fn test_generate_and_write() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::new()
            .with_output_dir(dir.path())
            .with_stagger(Duration::from_millis(1));
        let generator = ExportGenerator::new(config);

        let (bundle, paths) = generator.generate_and_write(&content()).await.unwrap();
        assert_eq!(paths.len(), bundle.file_count());
        assert!(dir.path().join("articles.ts").exists());

        let again = generator.generate_and_write(&content()).await;
        assert!(matches!(again, Err(AdminError::OutputExists(_))));
    }
}

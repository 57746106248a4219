//! Command handlers
//!
//! Handlers print user-facing output with `colored` and return an
//! [`Outcome`]; anything that stops a command early is an `anyhow` error
//! with context.

use anyhow::{Context as _, bail};
use colored::Colorize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use solar_codegen::{ExportGenerator, GeneratedFile, save_file, summarize};
use solar_content::serialization::todays_backup_file_name;
use solar_content::{
    AdminError, Article, Choice, ContentStore, FileStorage, Product, ProductCategory, Project,
    StoredEntity, ValidationError, ValidationWarning, parse_import, validate_content,
};
use solar_site::{SiteCatalog, load_all_site_data};
use std::path::{Path, PathBuf};

use crate::config::AdminConfig;
use crate::{Commands, Outcome, RecordCommand};

// ============================================================================
// Context
// ============================================================================

/// Settings every command runs with
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AdminConfig,
    store_dir: Option<PathBuf>,
}

impl Context {
    pub fn new(config: AdminConfig, store_dir: Option<PathBuf>) -> Self {
        Self { config, store_dir }
    }

    /// Store directory, `--store-dir` winning over the config file
    pub fn store_dir(&self) -> &Path {
        self.store_dir.as_deref().unwrap_or(self.config.store.dir.as_path())
    }

    pub fn open_store(&self) -> anyhow::Result<ContentStore> {
        let backend = FileStorage::new(self.store_dir());
        ContentStore::open(backend, self.config.store.key.clone())
            .with_context(|| format!("Failed to open store in {}", self.store_dir().display()))
    }
}

/// Run one parsed command
pub async fn dispatch(ctx: &Context, command: Commands) -> anyhow::Result<Outcome> {
    match command {
        Commands::Status => status(ctx),
        Commands::LoadSite { strict } => load_site(ctx, strict),
        Commands::Import { file } => import(ctx, &file),
        Commands::Validate { file } => validate(&file),
        Commands::ExportJson { out, force } => export_json(ctx, out.as_deref(), force),
        Commands::ExportTs { out, force } => export_ts(ctx, out.as_deref(), force).await,
        Commands::Products { action } => records::<Product>(ctx, action),
        Commands::Articles { action } => records::<Article>(ctx, action),
        Commands::Projects { action } => records::<Project>(ctx, action),
    }
}

// ============================================================================
// Whole-store commands
// ============================================================================

fn status(ctx: &Context) -> anyhow::Result<Outcome> {
    let store = ctx.open_store()?;
    println!(
        "{} {} (key {})",
        "Store:".bold(),
        ctx.store_dir().display(),
        store.key().cyan()
    );

    if !store.is_loaded() {
        println!("{}", "No content loaded".yellow());
        println!(
            "{}",
            "Use 'solar-admin load-site' or 'solar-admin import <file>' to load content".dimmed()
        );
        return Ok(Outcome::Success);
    }

    let stats = store.stats();
    println!();
    println!("{} {}", "Products:".bold(), stats.products.to_string().cyan());
    for (tag, count) in &stats.products_by_category {
        let label = ProductCategory::from_tag(tag).map_or(tag.as_str(), |c| c.label_en());
        println!("  {:<18} {}", label, count);
    }
    println!("  {:<18} {}", "featured", stats.featured_products);
    println!("{} {}", "Articles:".bold(), stats.articles.to_string().cyan());
    println!("  {:<18} {}", "pillar", stats.pillar_articles);
    println!("  {:<18} {}", "supporting", stats.supporting_articles);
    println!("  {:<18} {}", "draft", stats.draft_articles);
    println!("{} {}", "Projects:".bold(), stats.projects.to_string().cyan());
    println!("  {:<18} {}", "featured", stats.featured_projects);
    Ok(Outcome::Success)
}

fn load_site(ctx: &Context, strict: bool) -> anyhow::Result<Outcome> {
    let data = load_all_site_data(&SiteCatalog::builtin());

    if strict {
        let report = validate_content(&data);
        print_warnings(&report.warnings);
        if !report.valid {
            print_errors(&report.errors);
            println!("{}", "Site catalog failed validation; store unchanged".red());
            return Ok(Outcome::Refused);
        }
    }

    let mut store = ctx.open_store()?;
    if !store.load_site_data(&data) {
        bail!("Failed to load the site catalog into the store");
    }

    println!(
        "{} {} products, {} articles, {} projects",
        "✓ Site data loaded:".green(),
        data.products.len(),
        data.articles.len(),
        data.projects.len()
    );
    Ok(Outcome::Success)
}

fn import(ctx: &Context, file: &Path) -> anyhow::Result<Outcome> {
    let text = read_file(file)?;

    let import = match parse_import(&text) {
        Ok(import) => import,
        Err(rejection) => {
            print_errors(&rejection.errors);
            print_warnings(&rejection.warnings);
            println!(
                "{}",
                format!("Import refused: {} error(s); store unchanged", rejection.errors.len()).red()
            );
            return Ok(Outcome::Refused);
        }
    };

    print_warnings(&import.warnings);
    let mut store = ctx.open_store()?;
    let (products, articles, projects) = (
        import.data.products.len(),
        import.data.articles.len(),
        import.data.projects.len(),
    );
    store.replace(import.data).context("Failed to save imported content")?;

    println!(
        "{} {} products, {} articles, {} projects",
        "✓ Imported:".green(),
        products,
        articles,
        projects
    );
    Ok(Outcome::Success)
}

fn validate(file: &Path) -> anyhow::Result<Outcome> {
    let text = read_file(file)?;

    match parse_import(&text) {
        Ok(import) => {
            print_warnings(&import.warnings);
            println!(
                "{} ({} warning(s))",
                "✓ Valid content file".green(),
                import.warnings.len()
            );
            Ok(Outcome::Success)
        }
        Err(rejection) => {
            print_errors(&rejection.errors);
            print_warnings(&rejection.warnings);
            println!(
                "{}",
                format!("✗ Invalid content file: {} error(s)", rejection.errors.len()).red()
            );
            Ok(Outcome::Refused)
        }
    }
}

fn export_json(ctx: &Context, out: Option<&Path>, force: bool) -> anyhow::Result<Outcome> {
    let store = ctx.open_store()?;
    let json = store.export_data()?;
    let dir = out.unwrap_or(ctx.config.export.out_dir.as_path());

    let file = GeneratedFile::json(todays_backup_file_name(), json);
    let path = save_file(dir, &file, force).context("Failed to write backup")?;

    println!("{} {}", "✓ Backup written:".green(), path.display());
    Ok(Outcome::Success)
}

async fn export_ts(ctx: &Context, out: Option<&Path>, force: bool) -> anyhow::Result<Outcome> {
    let store = ctx.open_store()?;
    let generator = ExportGenerator::new(ctx.config.export_config(out, force));

    let (bundle, paths) = match generator.generate_and_write(&store.snapshot()).await {
        Ok(written) => written,
        Err(AdminError::NothingToExport) => {
            println!("{}", "No data to export".yellow());
            return Ok(Outcome::Refused);
        }
        Err(e) => return Err(e).context("Source export failed"),
    };

    for path in &paths {
        println!("  {} {}", "✓".green(), path.display());
    }
    for warning in &bundle.warnings {
        println!("  {} {}", "⚠".yellow(), warning.yellow());
    }
    print!("{}", summarize(&bundle));
    Ok(Outcome::Success)
}

// ============================================================================
// Record commands
// ============================================================================

/// One-line listing of a record
pub trait RecordRow {
    fn row(&self) -> String;
}

impl RecordRow for Product {
    fn row(&self) -> String {
        format!("{:<12} {}", self.category, self.name_en)
    }
}

impl RecordRow for Article {
    fn row(&self) -> String {
        format!("{:<11} {:<10} {}", self.article_type, self.status, self.title_en)
    }
}

impl RecordRow for Project {
    fn row(&self) -> String {
        format!("{:<14} {} ({})", self.project_type, self.title_en, self.location.en)
    }
}

fn records<T>(ctx: &Context, action: RecordCommand) -> anyhow::Result<Outcome>
where
    T: StoredEntity + RecordRow + Serialize + DeserializeOwned,
{
    let mut store = ctx.open_store()?;
    let kind = T::KIND;

    match action {
        RecordCommand::List => {
            let items = store.list::<T>();
            if items.is_empty() {
                println!("{}", format!("No {}s found", kind).yellow());
                return Ok(Outcome::Success);
            }
            for item in items {
                println!("{:<28} {:<32} {}", item.id().cyan(), item.slug(), item.row());
            }
            println!("Total: {} {}s", items.len().to_string().cyan(), kind);
        }
        RecordCommand::Show { id } => {
            let item = store
                .get::<T>(&id)
                .or_else(|| store.get_by_slug::<T>(&id))
                .ok_or_else(|| T::not_found(&id))?;
            println!("{}", serde_json::to_string_pretty(item)?);
        }
        RecordCommand::Add { file } => {
            let item: T = read_record(&file)?;
            let id = store.add(item)?;
            println!("{} {} {}", "✓ Added".green(), kind, id.cyan());
        }
        RecordCommand::Update { id, file } => {
            let replacement: T = read_record(&file)?;
            store.update::<T, _>(&id, |item| *item = replacement)?;
            println!("{} {} {}", "✓ Updated".green(), kind, id.cyan());
        }
        RecordCommand::Remove { id } => {
            let removed = store.remove::<T>(&id)?;
            println!(
                "{} {} {} ({})",
                "✓ Removed".green(),
                kind,
                id.cyan(),
                removed.slug()
            );
        }
    }
    Ok(Outcome::Success)
}

// ============================================================================
// Helpers
// ============================================================================

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_record<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = read_file(path)?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a valid record", path.display()))
}

fn print_errors(errors: &[ValidationError]) {
    for error in errors {
        eprintln!("  {} {}", "✗".red(), error.message.red());
    }
}

fn print_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        eprintln!("  {} {}", "⚠".yellow(), warning.message.yellow());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn context(dir: &Path) -> Context {
        let mut config = AdminConfig::default();
        config.export.out_dir = dir.join("exported");
        config.export.stagger_ms = 0;
        Context::new(config, Some(dir.join("store")))
    }

    #[tokio::test]
    async fn test_load_site_then_export() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        assert_eq!(load_site(&ctx, true).unwrap(), Outcome::Success);
        let store = ctx.open_store().unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.list::<Article>().len(), 8);

        assert_eq!(export_ts(&ctx, None, false).await.unwrap(), Outcome::Success);
        for name in ["batteries.ts", "panels.ts", "inverters.ts", "projects.ts", "articles.ts"] {
            assert!(dir.path().join("exported").join(name).exists(), "{} missing", name);
        }

        assert_eq!(export_json(&ctx, None, false).unwrap(), Outcome::Success);
        let backup = dir.path().join("exported").join(todays_backup_file_name());
        let text = std::fs::read_to_string(backup).unwrap();
        assert!(text.contains("\"products\""));
    }

    #[tokio::test]
    async fn test_export_ts_refuses_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        assert_eq!(export_ts(&ctx, None, false).await.unwrap(), Outcome::Refused);
        assert!(!dir.path().join("exported").join("panels.ts").exists());
    }

    #[test]
    fn test_rejected_import_keeps_store() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        load_site(&ctx, false).unwrap();
        let before = ctx.open_store().unwrap().snapshot();

        let file = dir.path().join("bad.json");
        std::fs::write(&file, r#"{"products":[{"id":"1","slug":"a"},{"id":"2","slug":"a"}]}"#).unwrap();
        assert_eq!(import(&ctx, &file).unwrap(), Outcome::Refused);
        assert_eq!(validate(&file).unwrap(), Outcome::Refused);
        assert_eq!(ctx.open_store().unwrap().snapshot(), before);

        std::fs::write(&file, "{not json").unwrap();
        assert_eq!(import(&ctx, &file).unwrap(), Outcome::Refused);
    }

    #[test]
    fn test_record_crud() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        let product = Product::new("", "mppt-100", ProductCategory::Controllers, "Victron", "منظم", "MPPT");
        let file = dir.path().join("product.json");
        std::fs::write(&file, serde_json::to_string(&product).unwrap()).unwrap();

        records::<Product>(&ctx, RecordCommand::Add { file: file.clone() }).unwrap();
        let id = ctx.open_store().unwrap().list::<Product>()[0].id.clone();
        assert!(!id.is_empty());

        let mut edited = product.clone();
        edited.name_en = "SmartSolar MPPT".into();
        std::fs::write(&file, serde_json::to_string(&edited).unwrap()).unwrap();
        records::<Product>(&ctx, RecordCommand::Update { id: id.clone(), file }).unwrap();

        let store = ctx.open_store().unwrap();
        let stored = store.get::<Product>(&id).unwrap();
        assert_eq!(stored.name_en, "SmartSolar MPPT");
        assert_eq!(stored.id, id);

        let by_slug = records::<Product>(&ctx, RecordCommand::Show { id: "mppt-100".into() });
        assert_eq!(by_slug.unwrap(), Outcome::Success);

        records::<Product>(&ctx, RecordCommand::Remove { id: id.clone() }).unwrap();
        assert!(ctx.open_store().unwrap().list::<Product>().is_empty());

        let err = records::<Product>(&ctx, RecordCommand::Show { id }).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

//! # Solar Site
//!
//! The public site's catalog as compiled-in typed data, plus the loader
//! that converts it into the admin content model ("load site data").

pub mod catalog;
pub mod loader;
pub mod types;

pub use catalog::SiteCatalog;
pub use loader::{load_all_site_data, load_site_articles, load_site_products, load_site_projects};
pub use types::{PillarPage, SiteProduct, SiteProject, SupportingArticle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

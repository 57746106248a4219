//! # Solar Core
//!
//! Core types, traits, and error handling for the solar catalog admin.
//!
//! This crate provides the foundational building blocks shared by the
//! content store, the site catalog and the export generators:
//!
//! - **Types**: closed category/type sets and bilingual value pairs
//! - **Traits**: `Entity` (id + slug addressed records) and `Timestamped`
//! - **Errors**: unified error handling with `AdminError` and `AdminResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{AdminError, AdminResult};
pub use traits::{Entity, Timestamped};
pub use types::{
    ArticleStatus, ArticleType, Choice, EntityKind, LocalizedList, LocalizedPair, ProductCategory,
    ProjectType,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

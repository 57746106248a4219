//! # Solar Content
//!
//! The admin-side content model for the solar catalog: products, articles
//! and projects as they are edited, the schema validator that guards
//! imports, and the persisted content store.
//!
//! ## Core Concepts
//!
//! - **ContentData**: the three collections edited in the admin
//! - **Validator**: checks raw import JSON and reports errors and warnings
//! - **ContentStore**: the working copy, persisted after every change
//! - **StorageBackend**: where the store keeps its document (file or memory)
//!

// Module declarations
pub mod article;
pub mod content;
pub mod product;
pub mod project;
pub mod serialization;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types at crate root
pub use article::{Article, DEFAULT_ARTICLE_ICON};
pub use content::{ContentData, ContentStats};
pub use product::{
    Comparison, Faq, Product, RegionalSuitability, Specification, SuitabilityRatings, UseCase,
};
pub use project::Project;
pub use serialization::{ContentFile, content_from_str, content_to_string};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{ContentStore, DEFAULT_STORAGE_KEY, StoreState, StoredEntity};
pub use validation::{
    DuplicateSlugs, ImportRejection, ValidatedImport, ValidationError, ValidationErrorCode,
    ValidationResult, ValidationWarning, ValidationWarningCode, check_duplicate_slugs,
    parse_import, validate_all_data, validate_articles, validate_content, validate_products,
    validate_projects,
};

// Re-export core types that are commonly used with content
pub use solar_core::{
    AdminError, AdminResult, ArticleStatus, ArticleType, Choice, Entity, EntityKind,
    LocalizedList, LocalizedPair, ProductCategory, ProjectType,
};

/// Current schema version for content documents
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        AdminError, AdminResult, Article, ArticleStatus, ArticleType, ContentData, ContentStore,
        Entity, LocalizedList, LocalizedPair, Product, ProductCategory, Project, ProjectType,
        ValidationResult,
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, 1);
    }

    #[test]
    fn test_prelude_builds_content() {
        use crate::prelude::*;
        let data = ContentData::new(
            vec![Product::new("p1", "a", ProductCategory::Panels, "X", "أ", "A")],
            Vec::new(),
            Vec::new(),
        );
        assert!(!data.is_empty());
    }
}

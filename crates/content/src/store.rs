//! The admin's working copy of the catalog
//!
//! [`ContentStore`] holds the edited collections, persists the whole
//! document under a single key after every change and restores it on
//! open. All mutations build the next document first, persist it, and only
//! then swap it in, so a failed write leaves the in-memory state untouched.

use crate::serialization::{content_from_str, content_to_string};
use crate::storage::StorageBackend;
use crate::validation::{parse_import, ValidationWarning};
use crate::{Article, ContentData, ContentStats, Product, Project};
use solar_core::{AdminError, AdminResult, Entity, Timestamped};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "solar-admin-content";

// ============================================================================
// StoreState
// ============================================================================

/// Whether the store has content yet
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StoreState {
    /// Nothing loaded or imported
    #[default]
    Empty,
    Loaded(ContentData),
}

impl StoreState {
    pub fn data(&self) -> Option<&ContentData> {
        match self {
            StoreState::Empty => None,
            StoreState::Loaded(data) => Some(data),
        }
    }
}

// ============================================================================
// StoredEntity
// ============================================================================

/// A record type the store can add, update and remove generically
pub trait StoredEntity: Entity + Clone {
    fn collection(data: &ContentData) -> &Vec<Self>;

    fn collection_mut(data: &mut ContentData) -> &mut Vec<Self>;

    fn set_id(&mut self, id: String);

    fn not_found(id: &str) -> AdminError;

    /// Hook run on the record after an update is applied
    fn after_update(&mut self) {}
}

impl StoredEntity for Product {
    fn collection(data: &ContentData) -> &Vec<Self> {
        &data.products
    }

    fn collection_mut(data: &mut ContentData) -> &mut Vec<Self> {
        &mut data.products
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn not_found(id: &str) -> AdminError {
        AdminError::ProductNotFound(id.to_string())
    }
}

impl StoredEntity for Article {
    fn collection(data: &ContentData) -> &Vec<Self> {
        &data.articles
    }

    fn collection_mut(data: &mut ContentData) -> &mut Vec<Self> {
        &mut data.articles
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn not_found(id: &str) -> AdminError {
        AdminError::ArticleNotFound(id.to_string())
    }

    fn after_update(&mut self) {
        self.touch();
    }
}

impl StoredEntity for Project {
    fn collection(data: &ContentData) -> &Vec<Self> {
        &data.projects
    }

    fn collection_mut(data: &mut ContentData) -> &mut Vec<Self> {
        &mut data.projects
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn not_found(id: &str) -> AdminError {
        AdminError::ProjectNotFound(id.to_string())
    }
}

// ============================================================================
// ContentStore
// ============================================================================

/// Persisted, editable collections
pub struct ContentStore {
    backend: Box<dyn StorageBackend>,
    key: String,
    state: StoreState,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Open a store, restoring whatever was persisted under `key`
    ///
    /// A persisted document that no longer parses is logged and ignored;
    /// the store then starts empty and the next save overwrites it.
    pub fn open(backend: impl StorageBackend + 'static, key: impl Into<String>) -> AdminResult<Self> {
        let key = key.into();
        let state = match backend.get(&key)? {
            None => StoreState::Empty,
            Some(text) => match content_from_str(&text) {
                Ok(data) => {
                    tracing::debug!(
                        key = %key,
                        products = data.products.len(),
                        articles = data.articles.len(),
                        projects = data.projects.len(),
                        "restored persisted content",
                    );
                    StoreState::Loaded(data)
                }
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "persisted content unreadable; starting empty");
                    StoreState::Empty
                }
            },
        };

        Ok(Self {
            backend: Box::new(backend),
            key,
            state,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn data(&self) -> Option<&ContentData> {
        self.state.data()
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, StoreState::Loaded(_))
    }

    /// Collections, or empty ones when nothing is loaded
    pub fn snapshot(&self) -> ContentData {
        self.data().cloned().unwrap_or_default()
    }

    pub fn stats(&self) -> ContentStats {
        self.data().map(ContentData::stats).unwrap_or_default()
    }

    // ========================================================================
    // Whole-document operations
    // ========================================================================

    /// Replace everything with the given collections
    pub fn replace(&mut self, data: ContentData) -> AdminResult<()> {
        self.persist(&data)?;
        tracing::info!(
            products = data.products.len(),
            articles = data.articles.len(),
            projects = data.projects.len(),
            "content replaced",
        );
        self.state = StoreState::Loaded(data);
        Ok(())
    }

    /// Parse JSON text and make it the current content, without schema checks
    ///
    /// Returns `false` (state untouched) when the text does not parse or
    /// cannot be persisted.
    pub fn import_data(&mut self, json: &str) -> bool {
        let data = match content_from_str(json) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "import failed to parse");
                return false;
            }
        };

        match self.replace(data) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "import failed to persist");
                false
            }
        }
    }

    /// Validate, parse and import JSON text; nothing changes on rejection
    pub fn import_validated(&mut self, json: &str) -> AdminResult<Vec<ValidationWarning>> {
        let import = parse_import(json)?;
        for warning in &import.warnings {
            tracing::warn!(path = ?warning.path, "{}", warning.message);
        }
        self.replace(import.data)?;
        Ok(import.warnings)
    }

    /// Seed the store from the published catalog
    ///
    /// The catalog is trusted: it goes through the same text import as a
    /// file but skips schema validation.
    pub fn load_site_data(&mut self, catalog: &ContentData) -> bool {
        match content_to_string(catalog) {
            Ok(json) => self.import_data(&json),
            Err(e) => {
                tracing::error!(error = %e, "site catalog failed to serialize");
                false
            }
        }
    }

    /// Pretty-printed JSON document of the current content
    pub fn export_data(&self) -> AdminResult<String> {
        content_to_string(&self.snapshot())
    }

    // ========================================================================
    // Record operations
    // ========================================================================

    /// All records of one type
    pub fn list<T: StoredEntity>(&self) -> &[T] {
        match self.data() {
            Some(data) => T::collection(data),
            None => &[],
        }
    }

    pub fn get<T: StoredEntity>(&self, id: &str) -> Option<&T> {
        self.list::<T>().iter().find(|item| item.matches_id(id))
    }

    pub fn get_by_slug<T: StoredEntity>(&self, slug: &str) -> Option<&T> {
        self.list::<T>().iter().find(|item| item.slug() == slug)
    }

    /// Append a record; an empty id is replaced by a fresh UUID
    ///
    /// Returns the id the record was stored under.
    pub fn add<T: StoredEntity>(&mut self, mut item: T) -> AdminResult<String> {
        if item.id().is_empty() {
            item.set_id(uuid::Uuid::new_v4().to_string());
        }
        let id = item.id().to_string();

        let mut next = self.snapshot();
        let items = T::collection_mut(&mut next);
        if items.iter().any(|existing| existing.matches_id(&id)) {
            return Err(AdminError::DuplicateId {
                kind: T::KIND.to_string(),
                id,
            });
        }
        items.push(item);

        self.commit(next)?;
        tracing::info!(kind = %T::KIND, id = %id, "record added");
        Ok(id)
    }

    /// Apply an edit to one record
    pub fn update<T, F>(&mut self, id: &str, edit: F) -> AdminResult<()>
    where
        T: StoredEntity,
        F: FnOnce(&mut T),
    {
        let mut next = self.snapshot();
        let item = T::collection_mut(&mut next)
            .iter_mut()
            .find(|item| item.matches_id(id))
            .ok_or_else(|| T::not_found(id))?;

        edit(item);
        // The id is the record's identity; an edit cannot move it
        item.set_id(id.to_string());
        item.after_update();

        self.commit(next)?;
        tracing::info!(kind = %T::KIND, id, "record updated");
        Ok(())
    }

    /// Delete one record
    pub fn remove<T: StoredEntity>(&mut self, id: &str) -> AdminResult<T> {
        let mut next = self.snapshot();
        let items = T::collection_mut(&mut next);
        let index = items
            .iter()
            .position(|item| item.matches_id(id))
            .ok_or_else(|| T::not_found(id))?;
        let removed = items.remove(index);

        self.commit(next)?;
        tracing::info!(kind = %T::KIND, id, "record removed");
        Ok(removed)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn persist(&self, data: &ContentData) -> AdminResult<()> {
        let json = content_to_string(data)?;
        self.backend.set(&self.key, &json)
    }

    fn commit(&mut self, next: ContentData) -> AdminResult<()> {
        self.persist(&next)?;
        self.state = StoreState::Loaded(next);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use chrono::{DateTime, Utc};
    use solar_core::{ProductCategory, ProjectType};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn panel(id: &str, slug: &str) -> Product {
        Product::new(id, slug, ProductCategory::Panels, "Trina", "لوح", "Panel")
            .with_image("/images/panel.webp")
    }

    fn memory_store() -> (Arc<MemoryStorage>, ContentStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = ContentStore::open(storage.clone(), DEFAULT_STORAGE_KEY).unwrap();
        (storage, store)
    }

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn get(&self, _key: &str) -> AdminResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> AdminResult<()> {
            Err(AdminError::FileWrite {
                path: format!("{}.json", key).into(),
                message: "disk full".to_string(),
            })
        }
    }

    #[test]
    fn test_starts_empty() {
        let (_, store) = memory_store();
        assert_eq!(store.state(), &StoreState::Empty);
        assert!(store.list::<Product>().is_empty());
        assert_eq!(store.stats(), ContentStats::default());
    }

    #[test]
    fn test_import_export_round_trip() {
        let (storage, mut store) = memory_store();
        let data = ContentData::new(
            vec![panel("p1", "vertex")],
            vec![Article::pillar("guide", "دليل", "Guide")],
            vec![Project::new("1", "villa", ProjectType::Residential, "فيلا", "Villa")],
        );
        let json = content_to_string(&data).unwrap();

        assert!(store.import_data(&json));
        let exported = store.export_data().unwrap();
        assert_eq!(content_from_str(&exported).unwrap(), data);
        assert!(storage.get(DEFAULT_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_failed_import_keeps_state() {
        let (_, mut store) = memory_store();
        assert!(store.import_data(r#"{"products": []}"#));
        store.add(panel("p1", "vertex")).unwrap();

        assert!(!store.import_data("not json"));
        assert!(!store.import_data("[]"));
        assert_eq!(store.list::<Product>().len(), 1);
    }

    #[test]
    fn test_import_data_with_null_collection() {
        let (_, mut store) = memory_store();
        assert!(store.import_data(r#"{"products": null, "articles": [], "projects": [{"id": 3, "slug": "farm"}]}"#));
        assert!(store.is_loaded());
        assert!(store.list::<Product>().is_empty());
        assert_eq!(store.get::<Project>("3").map(|p| p.slug.as_str()), Some("farm"));
    }

    #[test]
    fn test_failed_persist_keeps_state() {
        let mut store = ContentStore::open(FailingStorage, "k").unwrap();
        assert!(!store.import_data(r#"{"products": []}"#));
        assert_eq!(store.state(), &StoreState::Empty);
        assert!(store.add(panel("p1", "a")).is_err());
        assert!(store.list::<Product>().is_empty());
    }

    #[test]
    fn test_import_validated_rejects_whole_payload() {
        let (_, mut store) = memory_store();
        let bad = r#"{"products": [
            {"id": "1", "slug": "a", "category": "panels", "nameAr": "أ", "nameEn": "A", "brand": "X"},
            {"id": "2", "slug": "a", "category": "panels", "nameAr": "ب", "nameEn": "B", "brand": "X"}
        ]}"#;
        let err = store.import_validated(bad).unwrap_err();
        assert!(err.is_validation());
        assert!(!store.is_loaded());

        let good = r#"{"products": [
            {"id": "1", "slug": "a", "category": "panels", "nameAr": "أ", "nameEn": "A", "brand": "X"}
        ]}"#;
        let warnings = store.import_validated(good).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(store.list::<Product>().len(), 1);
    }

    #[test]
    fn test_load_site_data_skips_validation() {
        let (_, mut store) = memory_store();
        // Duplicate slugs would fail validation but the catalog is trusted
        let catalog = ContentData::new(vec![panel("p1", "a"), panel("p2", "a")], Vec::new(), Vec::new());
        assert!(store.load_site_data(&catalog));
        assert_eq!(store.list::<Product>().len(), 2);
    }

    #[test]
    fn test_add_assigns_uuid_and_rejects_duplicates() {
        let (_, mut store) = memory_store();
        let id = store.add(panel("", "a")).unwrap();
        assert!(uuid::Uuid::parse_str(&id).is_ok());

        store.add(panel("p1", "b")).unwrap();
        let err = store.add(panel("p1", "c")).unwrap_err();
        assert!(matches!(err, AdminError::DuplicateId { .. }));
        assert_eq!(store.list::<Product>().len(), 2);
    }

    #[test]
    fn test_update_and_remove() {
        let (_, mut store) = memory_store();
        store.add(panel("p1", "a")).unwrap();

        store
            .update::<Product, _>("p1", |p| {
                p.name_en = "Vertex".to_string();
                p.id = "hijacked".to_string();
            })
            .unwrap();
        let product = store.get::<Product>("p1").unwrap();
        assert_eq!(product.name_en, "Vertex");

        let err = store.update::<Product, _>("missing", |_| {}).unwrap_err();
        assert!(err.is_not_found());

        let removed = store.remove::<Product>("p1").unwrap();
        assert_eq!(removed.slug, "a");
        assert!(store.remove::<Product>("p1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_article_update_touches_timestamp() {
        let (_, mut store) = memory_store();
        let mut article = Article::pillar("guide", "دليل", "Guide");
        article.updated_at = DateTime::<Utc>::UNIX_EPOCH;
        store.add(article).unwrap();

        store
            .update::<Article, _>("pillar-guide", |a| a.desc_en = "All about it".to_string())
            .unwrap();
        let stored = store.get_by_slug::<Article>("guide").unwrap();
        assert!(stored.updated_at > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_reopen_restores_content() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut store = ContentStore::open(FileStorage::new(temp_dir.path()), "content").unwrap();
            store.add(panel("p1", "a")).unwrap();
        }

        let store = ContentStore::open(FileStorage::new(temp_dir.path()), "content").unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.get::<Product>("p1").unwrap().slug, "a");
    }

    #[test]
    fn test_corrupt_persisted_content_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("k", "{broken").unwrap();
        let store = ContentStore::open(storage, "k").unwrap();
        assert!(!store.is_loaded());
    }
}

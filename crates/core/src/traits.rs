//! Core traits for the admin tooling
//!
//! This module defines the traits the content store relies on to manage
//! the three collections uniformly.

use crate::types::EntityKind;

// ============================================================================
// Entity Trait
// ============================================================================

/// Trait for records addressed by a string id and a URL slug
///
/// The content store implements add/update/remove once, generically over
/// this trait, for products, articles and projects.
///
/// # Example
///
/// ```rust,ignore
/// use solar_core::{Entity, EntityKind};
///
/// struct Page {
///     id: String,
///     slug: String,
/// }
///
/// impl Entity for Page {
///     const KIND: EntityKind = EntityKind::Article;
///
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn slug(&self) -> &str {
///         &self.slug
///     }
/// }
/// ```
pub trait Entity {
    /// Which collection the record lives in
    const KIND: EntityKind;

    /// Stable identifier, unique inside the collection
    fn id(&self) -> &str;

    /// URL-safe identifier
    fn slug(&self) -> &str;

    /// Check if this record has the given id
    fn matches_id(&self, id: &str) -> bool {
        self.id() == id
    }
}

// ============================================================================
// Timestamped Trait
// ============================================================================

/// Trait for types that track creation and modification times
pub trait Timestamped {
    /// Get the creation timestamp
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Get the last modification timestamp
    fn modified_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Update the modification timestamp to now
    fn touch(&mut self);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    struct Note {
        id: String,
        slug: String,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    }

    impl Entity for Note {
        const KIND: EntityKind = EntityKind::Article;

        fn id(&self) -> &str {
            &self.id
        }

        fn slug(&self) -> &str {
            &self.slug
        }
    }

    impl Timestamped for Note {
        fn created_at(&self) -> DateTime<Utc> {
            self.created
        }

        fn modified_at(&self) -> DateTime<Utc> {
            self.modified
        }

        fn touch(&mut self) {
            self.modified = Utc::now();
        }
    }

    #[test]
    fn test_entity_matches_id() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        let note = Note {
            id: "pillar-inverter-guide".to_string(),
            slug: "inverter-guide".to_string(),
            created: epoch,
            modified: epoch,
        };
        assert!(note.matches_id("pillar-inverter-guide"));
        assert!(!note.matches_id("inverter-guide"));
        assert_eq!(Note::KIND, EntityKind::Article);
        assert_eq!(note.slug(), "inverter-guide");
    }

    #[test]
    fn test_touch_moves_modified_forward() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        let mut note = Note {
            id: "a".to_string(),
            slug: "a".to_string(),
            created: epoch,
            modified: epoch,
        };
        note.touch();
        assert!(note.modified_at() > note.created_at());
    }
}

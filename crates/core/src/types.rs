//! Core types used throughout the admin tooling
//!
//! This module contains the closed value sets (product categories, article
//! and project types, publication status) and the bilingual value shapes
//! shared by the site catalog, the admin content model and the exporters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdminError;

// ============================================================================
// Choice Trait
// ============================================================================

/// A closed set of string-tagged values
///
/// Implemented by every enum whose wire form is a fixed lowercase tag.
/// The validator uses [`Choice::is_allowed`] to check membership on raw
/// JSON before anything is deserialized.
pub trait Choice: Copy + Sized + 'static {
    /// Field name used in messages (e.g. `category`)
    const FIELD: &'static str;

    /// Every member, in declaration order
    fn all() -> &'static [Self];

    /// Wire tag of this member
    fn as_str(&self) -> &'static str;

    /// Look up a member by its wire tag
    fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == tag)
    }

    /// Check whether a tag belongs to the set
    fn is_allowed(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }
}

macro_rules! choice_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AdminError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::from_tag(s)
                    .ok_or_else(|| AdminError::invalid_choice(<$ty as Choice>::FIELD, s))
            }
        }
    };
}

// ============================================================================
// ProductCategory
// ============================================================================

/// Catalog category of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Pylontech lithium storage batteries
    #[default]
    Pylontech,
    /// Photovoltaic panels
    Panels,
    /// Hybrid and grid inverters
    Inverters,
    /// Charge controllers
    Controllers,
}

impl Choice for ProductCategory {
    const FIELD: &'static str = "category";

    fn all() -> &'static [Self] {
        &[
            ProductCategory::Pylontech,
            ProductCategory::Panels,
            ProductCategory::Inverters,
            ProductCategory::Controllers,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Pylontech => "pylontech",
            ProductCategory::Panels => "panels",
            ProductCategory::Inverters => "inverters",
            ProductCategory::Controllers => "controllers",
        }
    }
}

impl ProductCategory {
    /// Arabic display label
    pub fn label_ar(&self) -> &'static str {
        match self {
            ProductCategory::Pylontech => "البطاريات",
            ProductCategory::Panels => "الألواح الشمسية",
            ProductCategory::Inverters => "الانفرترات",
            ProductCategory::Controllers => "منظمات الشحن",
        }
    }

    /// English display label
    pub fn label_en(&self) -> &'static str {
        match self {
            ProductCategory::Pylontech => "Batteries",
            ProductCategory::Panels => "Solar Panels",
            ProductCategory::Inverters => "Inverters",
            ProductCategory::Controllers => "Charge Controllers",
        }
    }
}

choice_impls!(ProductCategory);

// ============================================================================
// ArticleType / ArticleStatus
// ============================================================================

/// Role of an article in the knowledge hub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    /// Top-level guide grouping supporting articles
    #[default]
    Pillar,
    /// Article attached to a pillar through `pillarSlug`
    Supporting,
}

impl Choice for ArticleType {
    const FIELD: &'static str = "type";

    fn all() -> &'static [Self] {
        &[ArticleType::Pillar, ArticleType::Supporting]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ArticleType::Pillar => "pillar",
            ArticleType::Supporting => "supporting",
        }
    }
}

choice_impls!(ArticleType);

/// Publication status of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Published,
    Draft,
}

impl Choice for ArticleStatus {
    const FIELD: &'static str = "status";

    fn all() -> &'static [Self] {
        &[ArticleStatus::Published, ArticleStatus::Draft]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Published => "published",
            ArticleStatus::Draft => "draft",
        }
    }
}

choice_impls!(ArticleStatus);

// ============================================================================
// ProjectType
// ============================================================================

/// Kind of installation a project showcases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Residential,
    Commercial,
    Institutional,
    Agricultural,
}

impl Choice for ProjectType {
    const FIELD: &'static str = "type";

    fn all() -> &'static [Self] {
        &[
            ProjectType::Residential,
            ProjectType::Commercial,
            ProjectType::Institutional,
            ProjectType::Agricultural,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
            ProjectType::Institutional => "institutional",
            ProjectType::Agricultural => "agricultural",
        }
    }
}

impl ProjectType {
    /// Arabic display label
    pub fn label_ar(&self) -> &'static str {
        match self {
            ProjectType::Residential => "سكني",
            ProjectType::Commercial => "تجاري",
            ProjectType::Institutional => "مؤسسي",
            ProjectType::Agricultural => "زراعي",
        }
    }

    /// English display label
    pub fn label_en(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Institutional => "Institutional",
            ProjectType::Agricultural => "Agricultural",
        }
    }

    /// Lucide icon component shown next to the type
    pub fn icon(&self) -> &'static str {
        match self {
            ProjectType::Residential => "Home",
            ProjectType::Commercial | ProjectType::Institutional => "Building2",
            ProjectType::Agricultural => "Factory",
        }
    }

    /// Tailwind background class for type badges
    pub fn color_class(&self) -> &'static str {
        match self {
            ProjectType::Residential => "bg-blue-500",
            ProjectType::Commercial => "bg-purple-500",
            ProjectType::Institutional => "bg-emerald-500",
            ProjectType::Agricultural => "bg-amber-500",
        }
    }
}

choice_impls!(ProjectType);

// ============================================================================
// EntityKind
// ============================================================================

/// The three editable collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
    Article,
    Project,
}

impl EntityKind {
    /// Key of the collection in the content envelope
    pub fn collection_key(&self) -> &'static str {
        match self {
            EntityKind::Product => "products",
            EntityKind::Article => "articles",
            EntityKind::Project => "projects",
        }
    }

    /// Singular Arabic noun used to prefix per-item messages
    pub fn item_label_ar(&self) -> &'static str {
        match self {
            EntityKind::Product => "المنتج",
            EntityKind::Article => "المقال",
            EntityKind::Project => "المشروع",
        }
    }

    /// Plural Arabic noun used in collection-level messages
    pub fn collection_label_ar(&self) -> &'static str {
        match self {
            EntityKind::Product => "المنتجات",
            EntityKind::Article => "المقالات",
            EntityKind::Project => "المشاريع",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Product => "product",
            EntityKind::Article => "article",
            EntityKind::Project => "project",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Bilingual Values
// ============================================================================

/// An Arabic/English text pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedPair {
    pub ar: String,
    pub en: String,
}

impl LocalizedPair {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Pick the text for a language code (`ar` or anything else for English)
    pub fn get(&self, lang: &str) -> &str {
        if lang == "ar" { &self.ar } else { &self.en }
    }
}

/// Parallel Arabic/English string lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedList {
    #[serde(default)]
    pub ar: Vec<String>,
    #[serde(default)]
    pub en: Vec<String>,
}

impl LocalizedList {
    pub fn new<A, E>(ar: A, en: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            ar: ar.into_iter().map(Into::into).collect(),
            en: en.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ar.is_empty() && self.en.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

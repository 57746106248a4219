//! Knowledge-hub articles
//!
//! Pillar articles are the top-level guides; supporting articles point at
//! their pillar through `pillar_slug`. The reference is informal: a
//! supporting article whose pillar no longer exists is still a valid
//! article, lookups for its pillar just come back empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solar_core::{ArticleStatus, ArticleType, Entity, EntityKind, LocalizedPair, Timestamped};

use crate::product::Faq;

/// Icon shown for articles that do not name one
pub const DEFAULT_ARTICLE_ICON: &str = "FileText";

/// Admin-editable article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(deserialize_with = "crate::serialization::text_or_number")]
    pub id: String,
    #[serde(deserialize_with = "crate::serialization::text_or_number")]
    pub slug: String,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub icon: String,

    pub title_ar: String,
    pub title_en: String,
    pub desc_ar: String,
    pub desc_en: String,
    pub content_ar: String,
    pub content_en: String,
    pub content_markdown_ar: String,
    pub content_markdown_en: String,

    pub key_takeaways: Vec<LocalizedPair>,
    pub faqs: Vec<Faq>,
    pub related_product_slugs: Vec<String>,
    pub related_article_slugs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pillar_slug: Option<String>,

    pub seo_title_ar: String,
    pub seo_title_en: String,
    pub seo_description_ar: String,
    pub seo_description_en: String,

    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Article {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            slug: String::new(),
            article_type: ArticleType::default(),
            icon: String::new(),
            title_ar: String::new(),
            title_en: String::new(),
            desc_ar: String::new(),
            desc_en: String::new(),
            content_ar: String::new(),
            content_en: String::new(),
            content_markdown_ar: String::new(),
            content_markdown_en: String::new(),
            key_takeaways: Vec::new(),
            faqs: Vec::new(),
            related_product_slugs: Vec::new(),
            related_article_slugs: Vec::new(),
            pillar_slug: None,
            seo_title_ar: String::new(),
            seo_title_en: String::new(),
            seo_description_ar: String::new(),
            seo_description_en: String::new(),
            status: ArticleStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Article {
    /// Create a pillar article
    pub fn pillar(
        slug: impl Into<String>,
        title_ar: impl Into<String>,
        title_en: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: format!("pillar-{slug}"),
            slug,
            article_type: ArticleType::Pillar,
            title_ar: title_ar.into(),
            title_en: title_en.into(),
            ..Self::default()
        }
    }

    /// Create a supporting article attached to a pillar
    pub fn supporting(
        slug: impl Into<String>,
        pillar_slug: impl Into<String>,
        title_ar: impl Into<String>,
        title_en: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: format!("supporting-{slug}"),
            slug,
            article_type: ArticleType::Supporting,
            pillar_slug: Some(pillar_slug.into()),
            title_ar: title_ar.into(),
            title_en: title_en.into(),
            ..Self::default()
        }
    }

    /// Builder: set the icon name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Icon name, falling back to the generic document icon
    pub fn icon_or_default(&self) -> &str {
        if self.icon.is_empty() {
            DEFAULT_ARTICLE_ICON
        } else {
            &self.icon
        }
    }

    pub fn is_pillar(&self) -> bool {
        self.article_type == ArticleType::Pillar
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}

impl Entity for Article {
    const KIND: EntityKind = EntityKind::Article;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Timestamped for Article {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

//! Record shapes as the public site publishes them
//!
//! These differ from the admin model: most descriptive lists are optional,
//! projects carry a numeric id and may lack a slug, and articles are split
//! into pillar pages and supporting articles with an icon reference.

use serde::{Deserialize, Serialize};
use solar_content::{Comparison, Faq, RegionalSuitability, Specification, UseCase};
use solar_core::{ArticleStatus, LocalizedList, LocalizedPair, ProductCategory, ProjectType};

/// Product as listed on the site
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProduct {
    pub id: String,
    pub slug: String,
    pub category: ProductCategory,
    pub brand: String,
    pub model: String,
    pub name_ar: String,
    pub name_en: String,
    pub short_desc_ar: String,
    pub short_desc_en: String,
    pub full_desc_ar: String,
    pub full_desc_en: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_takeaways: Option<Vec<LocalizedPair>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Vec<Specification>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yemen_suitability: Option<RegionalSuitability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<UseCase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_for_ar: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_for_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_recommended_for_ar: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_recommended_for_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Vec<Comparison>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_product_slugs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_service_keys: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_location_slugs: Option<Vec<String>>,

    pub seo_title_ar: String,
    pub seo_title_en: String,
    pub seo_description_ar: String,
    pub seo_description_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords_ar: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keywords_en: Option<Vec<String>>,

    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<String>,

    pub is_available: bool,
    pub is_featured: bool,
}

/// Portfolio project as listed on the site
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProject {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub title_ar: String,
    pub title_en: String,
    pub desc_ar: String,
    pub desc_en: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub location: LocalizedPair,
    pub system_size: String,
    pub battery_capacity: String,
    pub panels: u32,
    pub date: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: LocalizedList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_en: Option<String>,
}

/// Top-level knowledge-hub guide
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarPage {
    pub slug: String,
    /// Icon component name; empty when the icon has no name
    pub icon: String,
    pub title_ar: String,
    pub title_en: String,
    pub desc_ar: String,
    pub desc_en: String,
    pub status: ArticleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_markdown_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_markdown_en: Option<String>,
}

/// Article filed under a pillar
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingArticle {
    pub slug: String,
    pub icon: String,
    pub title_ar: String,
    pub title_en: String,
    /// Pillar display label, not a reference
    pub pillar_ar: String,
    pub pillar_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_markdown_ar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_markdown_en: Option<String>,
}

//! Product definitions for the admin content model
//!
//! A [`Product`] is the admin-editable shape of a catalog item. Every
//! optional part of the published product is materialized here (empty
//! lists, empty strings, a neutral suitability block) so editing code never
//! has to deal with missing values.

use serde::{Deserialize, Serialize};
use solar_core::{Entity, EntityKind, LocalizedList, LocalizedPair, ProductCategory};

// ============================================================================
// Product
// ============================================================================

/// Admin-editable product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(deserialize_with = "crate::serialization::text_or_number")]
    pub id: String,
    #[serde(deserialize_with = "crate::serialization::text_or_number")]
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

    pub key_takeaways: Vec<LocalizedPair>,
    pub specifications: Vec<Specification>,
    pub yemen_suitability: RegionalSuitability,
    pub use_cases: Vec<UseCase>,
    pub recommended_for_ar: Vec<String>,
    pub recommended_for_en: Vec<String>,
    pub not_recommended_for_ar: Vec<String>,
    pub not_recommended_for_en: Vec<String>,
    pub faqs: Vec<Faq>,
    pub comparisons: Vec<Comparison>,
    pub related_product_slugs: Vec<String>,

    pub seo_title_ar: String,
    pub seo_title_en: String,
    pub seo_description_ar: String,
    pub seo_description_en: String,
    pub seo_keywords_ar: Vec<String>,
    pub seo_keywords_en: Vec<String>,

    pub image: String,
    pub gallery: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasheet_url: Option<String>,

    pub is_available: bool,
    pub is_featured: bool,
}

impl Product {
    /// Create a product with its identity and required names filled in
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        category: ProductCategory,
        brand: impl Into<String>,
        name_ar: impl Into<String>,
        name_en: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            category,
            brand: brand.into(),
            name_ar: name_ar.into(),
            name_en: name_en.into(),
            is_available: true,
            ..Self::default()
        }
    }

    /// Builder: set the main image
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builder: mark as featured
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Builder: add a related product slug
    pub fn with_related(mut self, slug: impl Into<String>) -> Self {
        self.related_product_slugs.push(slug.into());
        self
    }

    /// Non-empty datasheet URL, if any
    pub fn datasheet(&self) -> Option<&str> {
        self.datasheet_url.as_deref().filter(|url| !url.is_empty())
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

// ============================================================================
// Sub-records
// ============================================================================

/// One row of the specification table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub key_ar: String,
    pub key_en: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Specification {
    pub fn new(key_ar: &str, key_en: &str, value: &str, unit: Option<&str>) -> Self {
        Self {
            key_ar: key_ar.to_string(),
            key_en: key_en.to_string(),
            value: value.to_string(),
            unit: unit.map(str::to_string),
        }
    }
}

/// The four climate ratings, each on a 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityRatings {
    pub heat_resistance: u8,
    pub coastal_suitability: u8,
    pub power_outage_support: u8,
    pub dust_resistance: u8,
}

impl SuitabilityRatings {
    /// Midpoint rating used when a product has no assessment yet
    pub const NEUTRAL: u8 = 3;

    pub fn new(heat: u8, coastal: u8, outage: u8, dust: u8) -> Self {
        Self {
            heat_resistance: heat,
            coastal_suitability: coastal,
            power_outage_support: outage,
            dust_resistance: dust,
        }
    }
}

impl Default for SuitabilityRatings {
    fn default() -> Self {
        Self::new(
            Self::NEUTRAL,
            Self::NEUTRAL,
            Self::NEUTRAL,
            Self::NEUTRAL,
        )
    }
}

/// How well a product fits the local climate and grid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionalSuitability {
    pub ratings: SuitabilityRatings,
    pub explanation_ar: String,
    pub explanation_en: String,
    pub best_regions_ar: Vec<String>,
    pub best_regions_en: Vec<String>,
    pub climate_notes_ar: String,
    pub climate_notes_en: String,
}

/// A typical deployment scenario
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UseCase {
    pub title_ar: String,
    pub title_en: String,
    pub desc_ar: String,
    pub desc_en: String,
    pub icon: String,
}

/// Question/answer pair in both languages
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Faq {
    pub question_ar: String,
    pub question_en: String,
    pub answer_ar: String,
    pub answer_en: String,
}

/// Pros and cons against another product
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comparison {
    pub product_slug: String,
    pub pros: LocalizedList,
    pub cons: LocalizedList,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new(
            "pylontech-us5000",
            "us5000",
            ProductCategory::Pylontech,
            "Pylontech",
            "بطارية US5000",
            "US5000 Battery",
        );
        assert_eq!(product.id(), "pylontech-us5000");
        assert_eq!(product.slug(), "us5000");
        assert!(product.is_available);
        assert!(!product.is_featured);
        assert_eq!(product.yemen_suitability.ratings, SuitabilityRatings::default());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let product = Product::new("p1", "a", ProductCategory::Panels, "X", "لوح", "Panel");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["nameAr"], "لوح");
        assert_eq!(json["yemenSuitability"]["ratings"]["heatResistance"], 3);
        assert!(json.get("datasheetUrl").is_none());
    }

    #[test]
    fn test_missing_fields_default_on_parse() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p1", "slug": "a", "category": "panels", "nameAr": "..", "nameEn": ".."}"#,
        )
        .unwrap();
        assert_eq!(product.category, ProductCategory::Panels);
        assert!(product.faqs.is_empty());
        assert_eq!(product.yemen_suitability.ratings.dust_resistance, 3);
    }

    #[test]
    fn test_datasheet_ignores_empty_url() {
        let mut product = Product::default();
        product.datasheet_url = Some(String::new());
        assert_eq!(product.datasheet(), None);
        product.datasheet_url = Some("/datasheets/us.pdf".to_string());
        assert_eq!(product.datasheet(), Some("/datasheets/us.pdf"));
    }
}

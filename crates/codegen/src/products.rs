//! Per-category product modules (`batteries.ts`, `panels.ts`, `inverters.ts`)

use crate::literal::{LiteralStyle, to_literal};
use crate::module::{TsItem, TsModule};
use heck::ToLowerCamelCase;
use serde::Serialize;
use solar_content::{
    Comparison, Faq, Product, RegionalSuitability, Specification, UseCase,
};
use solar_core::{AdminResult, LocalizedPair, ProductCategory};

/// A product category that has a generated module
#[derive(Debug, Clone, Copy)]
pub struct ProductModule {
    pub category: ProductCategory,
    pub file_name: &'static str,
    /// Singular noun used for the exported constant (`battery` → `batteryProducts`)
    pub noun: &'static str,
    pub header: &'static [&'static str],
}

impl ProductModule {
    /// Exported constant name
    pub fn const_name(&self) -> String {
        format!("{}_products", self.noun).to_lower_camel_case()
    }
}

pub const BATTERIES: ProductModule = ProductModule {
    category: ProductCategory::Pylontech,
    file_name: "batteries.ts",
    noun: "battery",
    header: &[
        "Battery Products Data",
        "Real products from alqatta.com",
        "Auto-generated from Admin Panel",
    ],
};

pub const PANELS: ProductModule = ProductModule {
    category: ProductCategory::Panels,
    file_name: "panels.ts",
    noun: "panel",
    header: &["Solar Panel Products Data", "Auto-generated from Admin Panel"],
};

pub const INVERTERS: ProductModule = ProductModule {
    category: ProductCategory::Inverters,
    file_name: "inverters.ts",
    noun: "inverter",
    header: &["Inverter Products Data", "Auto-generated from Admin Panel"],
};

/// Every category with a generated module, in export order
pub const PRODUCT_MODULES: [ProductModule; 3] = [BATTERIES, PANELS, INVERTERS];

/// A product in the shape the site's `Product` type expects
///
/// Comparisons and the related service/location lists are not edited in
/// the admin and always export empty.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductExport<'a> {
    id: &'a str,
    slug: &'a str,
    category: ProductCategory,
    brand: &'a str,
    model: &'a str,
    name_ar: &'a str,
    name_en: &'a str,
    short_desc_ar: &'a str,
    short_desc_en: &'a str,
    full_desc_ar: &'a str,
    full_desc_en: &'a str,
    key_takeaways: &'a [LocalizedPair],
    specifications: &'a [Specification],
    yemen_suitability: &'a RegionalSuitability,
    use_cases: &'a [UseCase],
    recommended_for_ar: &'a [String],
    recommended_for_en: &'a [String],
    not_recommended_for_ar: &'a [String],
    not_recommended_for_en: &'a [String],
    faqs: &'a [Faq],
    comparisons: &'a [Comparison],
    related_product_slugs: &'a [String],
    related_service_keys: &'a [String],
    related_location_slugs: &'a [String],
    seo_title_ar: &'a str,
    seo_title_en: &'a str,
    seo_description_ar: &'a str,
    seo_description_en: &'a str,
    seo_keywords_ar: &'a [String],
    seo_keywords_en: &'a [String],
    image: &'a str,
    gallery: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    datasheet_url: Option<&'a str>,
    is_available: bool,
    is_featured: bool,
}

impl<'a> From<&'a Product> for ProductExport<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: &product.id,
            slug: &product.slug,
            category: product.category,
            brand: &product.brand,
            model: &product.model,
            name_ar: &product.name_ar,
            name_en: &product.name_en,
            short_desc_ar: &product.short_desc_ar,
            short_desc_en: &product.short_desc_en,
            full_desc_ar: &product.full_desc_ar,
            full_desc_en: &product.full_desc_en,
            key_takeaways: &product.key_takeaways,
            specifications: &product.specifications,
            yemen_suitability: &product.yemen_suitability,
            use_cases: &product.use_cases,
            recommended_for_ar: &product.recommended_for_ar,
            recommended_for_en: &product.recommended_for_en,
            not_recommended_for_ar: &product.not_recommended_for_ar,
            not_recommended_for_en: &product.not_recommended_for_en,
            faqs: &product.faqs,
            comparisons: &[],
            related_product_slugs: &product.related_product_slugs,
            related_service_keys: &[],
            related_location_slugs: &[],
            seo_title_ar: &product.seo_title_ar,
            seo_title_en: &product.seo_title_en,
            seo_description_ar: &product.seo_description_ar,
            seo_description_en: &product.seo_description_en,
            seo_keywords_ar: &product.seo_keywords_ar,
            seo_keywords_en: &product.seo_keywords_en,
            image: &product.image,
            gallery: &product.gallery,
            datasheet_url: product.datasheet(),
            is_available: product.is_available,
            is_featured: product.is_featured,
        }
    }
}

/// Render the module for one category
pub fn generate_product_module(module: &ProductModule, products: &[Product]) -> AdminResult<String> {
    let selected: Vec<ProductExport<'_>> = products
        .iter()
        .filter(|p| p.category == module.category)
        .map(ProductExport::from)
        .collect();

    tracing::debug!(
        file = module.file_name,
        products = selected.len(),
        "rendering product module",
    );

    let literal = to_literal(&selected, LiteralStyle::PLAIN)?;
    Ok(TsModule::new(module.header.iter().copied())
        .import(["Product"], "./types")
        .item(TsItem::Const {
            name: module.const_name(),
            ty: "Product[]".to_string(),
            literal,
        })
        .render())
}

pub fn generate_batteries_ts(products: &[Product]) -> AdminResult<String> {
    generate_product_module(&BATTERIES, products)
}

pub fn generate_panels_ts(products: &[Product]) -> AdminResult<String> {
    generate_product_module(&PANELS, products)
}

pub fn generate_inverters_ts(products: &[Product]) -> AdminResult<String> {
    generate_product_module(&INVERTERS, products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use solar_core::LocalizedList;

    fn battery() -> Product {
        let mut product = Product::new(
            "pylontech-us5000",
            "us5000",
            ProductCategory::Pylontech,
            "Pylontech",
            "بطارية",
            "Battery",
        )
        .with_image("/placeholder.svg")
        .with_related("pelio-l");
        product.comparisons.push(Comparison {
            product_slug: "pelio-l".into(),
            pros: LocalizedList::new(["أكبر"], ["Bigger"]),
            cons: LocalizedList::default(),
        });
        product
    }

    #[test]
    fn test_const_names() {
        assert_eq!(BATTERIES.const_name(), "batteryProducts");
        assert_eq!(PANELS.const_name(), "panelProducts");
        assert_eq!(INVERTERS.const_name(), "inverterProducts");
    }

    #[test]
    fn test_empty_selection_keeps_boilerplate() {
        let text = generate_batteries_ts(&[]).unwrap();
        assert_eq!(
            text,
            "// Battery Products Data\n// Real products from alqatta.com\n// Auto-generated from Admin Panel\n\n\
             import { Product } from './types';\n\n\
             export const batteryProducts: Product[] = [];\n"
        );
    }

    #[test]
    fn test_filters_by_category() {
        let panel = Product::new("p", "vertex", ProductCategory::Panels, "Trina", "لوح", "Panel");
        let text = generate_panels_ts(&[battery(), panel]).unwrap();
        assert!(text.starts_with("// Solar Panel Products Data\n// Auto-generated from Admin Panel\n"));
        assert!(text.contains("\"slug\": \"vertex\""));
        assert!(!text.contains("us5000"));
    }

    #[test]
    fn test_dropped_fields_export_empty() {
        let text = generate_batteries_ts(&[battery()]).unwrap();
        assert!(text.contains("    \"comparisons\": [],\n"));
        assert!(text.contains("    \"relatedServiceKeys\": [],\n"));
        assert!(text.contains("    \"relatedLocationSlugs\": [],\n"));
        assert!(text.contains("\"relatedProductSlugs\": [\n      \"pelio-l\"\n    ]"));
        assert!(!text.contains("datasheetUrl"));
        assert!(text.contains("\"heatResistance\": 3"));
    }

    #[test]
    fn test_datasheet_kept_when_set() {
        let mut product = battery();
        product.datasheet_url = Some("/datasheets/us.pdf".into());
        let text = generate_batteries_ts(&[product]).unwrap();
        assert!(text.contains("    \"datasheetUrl\": \"/datasheets/us.pdf\",\n    \"isAvailable\": true,"));

        let mut blank = battery();
        blank.datasheet_url = Some(String::new());
        assert!(!generate_batteries_ts(&[blank]).unwrap().contains("datasheetUrl"));
    }
}

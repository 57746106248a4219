//! The compiled-in site catalog
//!
//! Everything the public site ships with, typed at compile time. The admin
//! seeds its store from this catalog through the loader.

mod articles;
mod batteries;
mod inverters;
mod panels;
mod projects;

pub use articles::{pillar_pages, supporting_articles};
pub use batteries::battery_products;
pub use inverters::inverter_products;
pub use panels::panel_products;
pub use projects::site_projects;

use crate::types::{PillarPage, SiteProduct, SiteProject, SupportingArticle};
use serde::{Deserialize, Serialize};
use solar_content::Specification;
use solar_core::{LocalizedPair, ProductCategory, ProjectType};

/// All published records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteCatalog {
    pub products: Vec<SiteProduct>,
    pub projects: Vec<SiteProject>,
    pub pillar_pages: Vec<PillarPage>,
    pub supporting_articles: Vec<SupportingArticle>,
}

impl SiteCatalog {
    /// The catalog the site is built with
    pub fn builtin() -> Self {
        let mut products = battery_products();
        products.extend(panel_products());
        products.extend(inverter_products());

        Self {
            products,
            projects: site_projects(),
            pillar_pages: pillar_pages(),
            supporting_articles: supporting_articles(),
        }
    }

    pub fn product_by_slug(&self, slug: &str) -> Option<&SiteProduct> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn products_by_category(&self, category: ProductCategory) -> Vec<&SiteProduct> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&SiteProject> {
        self.projects
            .iter()
            .find(|p| p.slug.as_deref() == Some(slug))
    }

    pub fn projects_by_type(&self, project_type: ProjectType) -> Vec<&SiteProject> {
        self.projects
            .iter()
            .filter(|p| p.project_type == project_type)
            .collect()
    }

    pub fn pillar_by_slug(&self, slug: &str) -> Option<&PillarPage> {
        self.pillar_pages.iter().find(|p| p.slug == slug)
    }

    pub fn supporting_by_slug(&self, slug: &str) -> Option<&SupportingArticle> {
        self.supporting_articles.iter().find(|a| a.slug == slug)
    }

    /// Supporting articles filed under a pillar, in catalog order
    pub fn supporting_by_pillar(&self, pillar_slug: &str) -> Vec<&SupportingArticle> {
        self.supporting_articles
            .iter()
            .filter(|a| a.pillar_slug.as_deref() == Some(pillar_slug))
            .collect()
    }
}

// ============================================================================
// Data helpers
// ============================================================================

fn pair(ar: &str, en: &str) -> LocalizedPair {
    LocalizedPair::new(ar, en)
}

fn spec(key_ar: &str, key_en: &str, value: &str, unit: Option<&str>) -> Specification {
    Specification::new(key_ar, key_en, value, unit)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

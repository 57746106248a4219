//! The three editable collections and read-side helpers over them

use serde::{Deserialize, Serialize};
use solar_core::{ArticleType, Entity, ProductCategory};
use std::collections::BTreeMap;

use crate::{Article, Product, Project};

// ============================================================================
// ContentData
// ============================================================================

/// Products, articles and projects as edited in the admin
///
/// Relations between records (`relatedProductSlugs`, `pillarSlug`) are
/// resolved on demand. Dangling references resolve to nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentData {
    #[serde(deserialize_with = "crate::serialization::collection")]
    pub products: Vec<Product>,
    #[serde(deserialize_with = "crate::serialization::collection")]
    pub articles: Vec<Article>,
    #[serde(deserialize_with = "crate::serialization::collection")]
    pub projects: Vec<Project>,
}

impl ContentData {
    pub fn new(products: Vec<Product>, articles: Vec<Article>, projects: Vec<Project>) -> Self {
        Self {
            products,
            articles,
            projects,
        }
    }

    /// True when all three collections are empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.articles.is_empty() && self.projects.is_empty()
    }

    // ========================================================================
    // Products
    // ========================================================================

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_id(id))
    }

    /// First product with the slug (slugs are only unique per category)
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    pub fn products_in(&self, category: ProductCategory) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Related products that still exist, in the order they are listed
    pub fn related_products(&self, product: &Product) -> Vec<&Product> {
        product
            .related_product_slugs
            .iter()
            .filter_map(|slug| self.product_by_slug(slug))
            .collect()
    }

    // ========================================================================
    // Articles
    // ========================================================================

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.matches_id(id))
    }

    /// The pillar a supporting article points at, if it resolves
    pub fn pillar_of(&self, article: &Article) -> Option<&Article> {
        let slug = article.pillar_slug.as_deref()?;
        self.articles
            .iter()
            .find(|a| a.is_pillar() && a.slug == slug)
    }

    pub fn supporting_of<'a>(&'a self, pillar_slug: &'a str) -> impl Iterator<Item = &'a Article> {
        self.articles.iter().filter(move |a| {
            a.article_type == ArticleType::Supporting && a.pillar_slug.as_deref() == Some(pillar_slug)
        })
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.matches_id(id))
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Dashboard counters
    pub fn stats(&self) -> ContentStats {
        let mut products_by_category = BTreeMap::new();
        for category in <ProductCategory as solar_core::Choice>::all() {
            products_by_category.insert(category.to_string(), self.products_in(*category).count());
        }

        let pillars = self.articles.iter().filter(|a| a.is_pillar()).count();

        ContentStats {
            products: self.products.len(),
            articles: self.articles.len(),
            projects: self.projects.len(),
            products_by_category,
            pillar_articles: pillars,
            supporting_articles: self.articles.len() - pillars,
            draft_articles: self.articles.iter().filter(|a| !a.is_published()).count(),
            featured_products: self.products.iter().filter(|p| p.is_featured).count(),
            featured_projects: self.projects.iter().filter(|p| p.is_featured).count(),
        }
    }
}

// ============================================================================
// ContentStats
// ============================================================================

/// Counts shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub products: usize,
    pub articles: usize,
    pub projects: usize,
    pub products_by_category: BTreeMap<String, usize>,
    pub pillar_articles: usize,
    pub supporting_articles: usize,
    pub draft_articles: usize,
    pub featured_products: usize,
    pub featured_projects: usize,
}

// ============================================================================
// Tests
// ============================================================================

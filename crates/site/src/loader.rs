//! Conversion from published site records to admin content
//!
//! Pure and total: every optional site field lands as an empty list, empty
//! string or neutral rating block, so the admin never sees a missing value.

use crate::catalog::SiteCatalog;
use crate::types::{PillarPage, SiteProduct, SiteProject, SupportingArticle};
use chrono::{DateTime, Utc};
use solar_content::{Article, ContentData, DEFAULT_ARTICLE_ICON, Product, Project};
use solar_core::{ArticleStatus, ArticleType};

/// Admin products for every site product, in catalog order
pub fn load_site_products(products: &[SiteProduct]) -> Vec<Product> {
    products.iter().map(product_to_admin).collect()
}

/// Admin projects for every site project, in catalog order
pub fn load_site_projects(projects: &[SiteProject]) -> Vec<Project> {
    projects.iter().map(project_to_admin).collect()
}

/// Admin articles: all pillars first, then all supporting articles
pub fn load_site_articles(pillars: &[PillarPage], supporting: &[SupportingArticle]) -> Vec<Article> {
    let now = Utc::now();
    pillars
        .iter()
        .map(|p| pillar_to_admin(p, now))
        .chain(supporting.iter().map(|a| supporting_to_admin(a, now)))
        .collect()
}

/// The whole catalog as admin content
pub fn load_all_site_data(catalog: &SiteCatalog) -> ContentData {
    let data = ContentData::new(
        load_site_products(&catalog.products),
        load_site_articles(&catalog.pillar_pages, &catalog.supporting_articles),
        load_site_projects(&catalog.projects),
    );
    tracing::debug!(
        products = data.products.len(),
        articles = data.articles.len(),
        projects = data.projects.len(),
        "site catalog converted",
    );
    data
}

fn product_to_admin(product: &SiteProduct) -> Product {
    Product {
        id: product.id.clone(),
        slug: product.slug.clone(),
        category: product.category,
        brand: product.brand.clone(),
        model: product.model.clone(),
        name_ar: product.name_ar.clone(),
        name_en: product.name_en.clone(),
        short_desc_ar: product.short_desc_ar.clone(),
        short_desc_en: product.short_desc_en.clone(),
        full_desc_ar: product.full_desc_ar.clone(),
        full_desc_en: product.full_desc_en.clone(),
        key_takeaways: product.key_takeaways.clone().unwrap_or_default(),
        specifications: product.specifications.clone().unwrap_or_default(),
        yemen_suitability: product.yemen_suitability.clone().unwrap_or_default(),
        use_cases: product.use_cases.clone().unwrap_or_default(),
        recommended_for_ar: product.recommended_for_ar.clone().unwrap_or_default(),
        recommended_for_en: product.recommended_for_en.clone().unwrap_or_default(),
        not_recommended_for_ar: product.not_recommended_for_ar.clone().unwrap_or_default(),
        not_recommended_for_en: product.not_recommended_for_en.clone().unwrap_or_default(),
        faqs: product.faqs.clone().unwrap_or_default(),
        comparisons: product.comparisons.clone().unwrap_or_default(),
        related_product_slugs: product.related_product_slugs.clone().unwrap_or_default(),
        seo_title_ar: product.seo_title_ar.clone(),
        seo_title_en: product.seo_title_en.clone(),
        seo_description_ar: product.seo_description_ar.clone(),
        seo_description_en: product.seo_description_en.clone(),
        seo_keywords_ar: product.seo_keywords_ar.clone().unwrap_or_default(),
        seo_keywords_en: product.seo_keywords_en.clone().unwrap_or_default(),
        image: product.image.clone(),
        gallery: product.gallery.clone().unwrap_or_default(),
        datasheet_url: product.datasheet_url.clone().filter(|url| !url.is_empty()),
        is_available: product.is_available,
        is_featured: product.is_featured,
    }
}

fn project_to_admin(project: &SiteProject) -> Project {
    Project {
        id: project.id.to_string(),
        slug: project
            .slug
            .clone()
            .unwrap_or_else(|| format!("project-{}", project.id)),
        title_ar: project.title_ar.clone(),
        title_en: project.title_en.clone(),
        desc_ar: project.desc_ar.clone(),
        desc_en: project.desc_en.clone(),
        project_type: project.project_type,
        location: project.location.clone(),
        system_size: project.system_size.clone(),
        battery_capacity: project.battery_capacity.clone(),
        panels: project.panels,
        date: project.date.clone(),
        client_ar: project.client_ar.clone(),
        client_en: project.client_en.clone(),
        images: project.images.clone(),
        features: project.features.clone(),
        products_used: Vec::new(),
        is_featured: false,
    }
}

fn icon_name(icon: &str) -> String {
    if icon.is_empty() {
        DEFAULT_ARTICLE_ICON.to_string()
    } else {
        icon.to_string()
    }
}

fn pillar_to_admin(pillar: &PillarPage, now: DateTime<Utc>) -> Article {
    Article {
        id: format!("pillar-{}", pillar.slug),
        slug: pillar.slug.clone(),
        article_type: ArticleType::Pillar,
        icon: icon_name(&pillar.icon),
        title_ar: pillar.title_ar.clone(),
        title_en: pillar.title_en.clone(),
        desc_ar: pillar.desc_ar.clone(),
        desc_en: pillar.desc_en.clone(),
        content_markdown_ar: pillar.content_markdown_ar.clone().unwrap_or_default(),
        content_markdown_en: pillar.content_markdown_en.clone().unwrap_or_default(),
        seo_title_ar: pillar.title_ar.clone(),
        seo_title_en: pillar.title_en.clone(),
        seo_description_ar: pillar.desc_ar.clone(),
        seo_description_en: pillar.desc_en.clone(),
        status: pillar.status,
        created_at: now,
        updated_at: now,
        ..Article::default()
    }
}

fn supporting_to_admin(article: &SupportingArticle, now: DateTime<Utc>) -> Article {
    Article {
        id: format!("supporting-{}", article.slug),
        slug: article.slug.clone(),
        article_type: ArticleType::Supporting,
        icon: icon_name(&article.icon),
        title_ar: article.title_ar.clone(),
        title_en: article.title_en.clone(),
        content_markdown_ar: article.content_markdown_ar.clone().unwrap_or_default(),
        content_markdown_en: article.content_markdown_en.clone().unwrap_or_default(),
        pillar_slug: article.pillar_slug.clone(),
        seo_title_ar: article.title_ar.clone(),
        seo_title_en: article.title_en.clone(),
        status: ArticleStatus::Published,
        created_at: now,
        updated_at: now,
        ..Article::default()
    }
}

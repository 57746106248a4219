//! The knowledge-hub module (`articles.ts`)
//!
//! Icons are emitted as bare identifiers so they reference the imported
//! lucide components. Only whitelisted icons are imported; anything else
//! still renders as an identifier and has to be fixed by hand, which the
//! generator reports as a warning.

use crate::literal::{LiteralStyle, to_literal};
use crate::module::{Accessor, TsField, TsItem, TsModule};
use serde::Serialize;
use solar_content::{Article, DEFAULT_ARTICLE_ICON};
use solar_core::{AdminResult, ArticleStatus};

pub const FILE_NAME: &str = "articles.ts";

/// Icons the site imports from `lucide-react`
pub const ICON_WHITELIST: [&str; 8] = [
    "Zap",
    "Battery",
    "Sun",
    "Calculator",
    "Wrench",
    "RefreshCw",
    "ArrowUpDown",
    "FileText",
];

const HEADER: [&str; 3] = [
    "Articles Data",
    "Centralized knowledge hub articles data",
    "Auto-generated from Admin Panel",
];

const ICON_STYLE: LiteralStyle = LiteralStyle::with_bare_keys(&["icon"]);

const PILLAR_FIELDS: &[TsField] = &[
    TsField::required("slug", "string"),
    TsField::required("icon", "LucideIcon"),
    TsField::required("titleAr", "string"),
    TsField::required("titleEn", "string"),
    TsField::required("descAr", "string"),
    TsField::required("descEn", "string"),
    TsField::required("status", "'published' | 'draft'"),
    TsField::optional("contentMarkdownAr", "string"),
    TsField::optional("contentMarkdownEn", "string"),
];

const SUPPORTING_FIELDS: &[TsField] = &[
    TsField::required("slug", "string"),
    TsField::required("icon", "LucideIcon"),
    TsField::required("titleAr", "string"),
    TsField::required("titleEn", "string"),
    TsField::required("pillarAr", "string"),
    TsField::required("pillarEn", "string"),
    TsField::optional("pillarSlug", "string"),
    TsField::optional("contentMarkdownAr", "string"),
    TsField::optional("contentMarkdownEn", "string"),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PillarExport<'a> {
    slug: &'a str,
    icon: &'a str,
    title_ar: &'a str,
    title_en: &'a str,
    desc_ar: &'a str,
    desc_en: &'a str,
    status: ArticleStatus,
    content_markdown_ar: &'a str,
    content_markdown_en: &'a str,
}

impl<'a> From<&'a Article> for PillarExport<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            slug: &article.slug,
            icon: article.icon_or_default(),
            title_ar: &article.title_ar,
            title_en: &article.title_en,
            desc_ar: &article.desc_ar,
            desc_en: &article.desc_en,
            status: article.status,
            content_markdown_ar: &article.content_markdown_ar,
            content_markdown_en: &article.content_markdown_en,
        }
    }
}

/// Pillar labels are left blank; the site fills them from the pillar page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportingExport<'a> {
    slug: &'a str,
    icon: &'a str,
    title_ar: &'a str,
    title_en: &'a str,
    pillar_ar: &'a str,
    pillar_en: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pillar_slug: Option<&'a str>,
    content_markdown_ar: &'a str,
    content_markdown_en: &'a str,
}

impl<'a> From<&'a Article> for SupportingExport<'a> {
    fn from(article: &'a Article) -> Self {
        Self {
            slug: &article.slug,
            icon: article.icon_or_default(),
            title_ar: &article.title_ar,
            title_en: &article.title_en,
            pillar_ar: "",
            pillar_en: "",
            pillar_slug: article.pillar_slug.as_deref(),
            content_markdown_ar: &article.content_markdown_ar,
            content_markdown_en: &article.content_markdown_en,
        }
    }
}

pub fn is_whitelisted_icon(icon: &str) -> bool {
    ICON_WHITELIST.contains(&icon)
}

/// Whitelisted icons used by `articles`, in order of first use
///
/// Falls back to the default document icon when nothing qualifies so the
/// import line is never empty.
pub fn icon_imports(articles: &[Article]) -> Vec<&str> {
    let mut icons: Vec<&str> = Vec::new();
    for icon in articles.iter().map(Article::icon_or_default) {
        if is_whitelisted_icon(icon) && !icons.contains(&icon) {
            icons.push(icon);
        }
    }
    if icons.is_empty() {
        icons.push(DEFAULT_ARTICLE_ICON);
    }
    icons
}

/// Icons used by `articles` that the import line cannot cover
pub fn unknown_icons(articles: &[Article]) -> Vec<&str> {
    let mut icons: Vec<&str> = Vec::new();
    for icon in articles.iter().map(Article::icon_or_default) {
        if !is_whitelisted_icon(icon) && !icons.contains(&icon) {
            icons.push(icon);
        }
    }
    icons
}

/// Render `articles.ts`
pub fn generate_articles_ts(articles: &[Article]) -> AdminResult<String> {
    let (pillars, supporting): (Vec<&Article>, Vec<&Article>) =
        articles.iter().partition(|a| a.is_pillar());

    tracing::debug!(
        pillars = pillars.len(),
        supporting = supporting.len(),
        "rendering articles module",
    );

    let pillar_literal = to_literal(
        &pillars.iter().map(|a| PillarExport::from(*a)).collect::<Vec<_>>(),
        ICON_STYLE,
    )?;
    let supporting_literal = to_literal(
        &supporting
            .iter()
            .map(|a| SupportingExport::from(*a))
            .collect::<Vec<_>>(),
        ICON_STYLE,
    )?;

    Ok(TsModule::new(HEADER)
        .import(icon_imports(articles), "lucide-react")
        .import(["LucideIcon"], "lucide-react")
        .item(TsItem::Interface {
            name: "PillarPage",
            fields: PILLAR_FIELDS,
        })
        .item(TsItem::Interface {
            name: "SupportingArticle",
            fields: SUPPORTING_FIELDS,
        })
        .item(TsItem::Comment(vec![
            "NOTE: Icon references need to be manually updated after import".to_string(),
            "Replace string icon names with actual icon components".to_string(),
        ]))
        .item(TsItem::Const {
            name: "pillarPages".to_string(),
            ty: "PillarPage[]".to_string(),
            literal: pillar_literal,
        })
        .item(TsItem::Const {
            name: "supportingArticles".to_string(),
            ty: "SupportingArticle[]".to_string(),
            literal: supporting_literal,
        })
        .item(TsItem::FindBy(Accessor {
            fn_name: "getPillarBySlug",
            param: "slug",
            param_ty: "string",
            record_ty: "PillarPage",
            collection: "pillarPages",
            var: "p",
            field: "slug",
        }))
        .item(TsItem::FindBy(Accessor {
            fn_name: "getSupportingBySlug",
            param: "slug",
            param_ty: "string",
            record_ty: "SupportingArticle",
            collection: "supportingArticles",
            var: "a",
            field: "slug",
        }))
        .item(TsItem::FilterBy(Accessor {
            fn_name: "getSupportingByPillar",
            param: "pillarSlug",
            param_ty: "string",
            record_ty: "SupportingArticle",
            collection: "supportingArticles",
            var: "a",
            field: "pillarSlug",
        }))
        .item(TsItem::Raw(
            "export const getAllArticles = () => ({\n  pillarPages,\n  supportingArticles,\n});"
                .to_string(),
        ))
        .render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hub() -> Vec<Article> {
        vec![
            Article::supporting("sizing", "guide", "الحجم", "Sizing").with_icon("Calculator"),
            Article::pillar("guide", "دليل", "Guide").with_icon("Sun"),
            Article::pillar("custom", "مخصص", "Custom").with_icon("Rocket"),
            Article::supporting("orphan", "gone", "يتيم", "Orphan"),
            Article::supporting("again", "guide", "مرة", "Again").with_icon("Sun"),
        ]
    }

    #[test]
    fn test_import_line_only_whitelisted_icons() {
        assert_eq!(icon_imports(&hub()), vec!["Calculator", "Sun", "FileText"]);
        assert_eq!(unknown_icons(&hub()), vec!["Rocket"]);

        let text = generate_articles_ts(&hub()).unwrap();
        let import = text
            .lines()
            .find(|l| l.starts_with("import {") && !l.contains("LucideIcon"))
            .unwrap();
        assert_eq!(import, "import { Calculator, Sun, FileText } from 'lucide-react';");
        assert!(!import.contains("Rocket"));
    }

    #[test]
    fn test_import_defaults_to_file_text() {
        let articles = vec![Article::pillar("p", "أ", "A").with_icon("Rocket")];
        assert_eq!(icon_imports(&articles), vec!["FileText"]);
        assert_eq!(icon_imports(&[]), vec!["FileText"]);
    }

    #[test]
    fn test_partition_and_bare_icons() {
        let text = generate_articles_ts(&hub()).unwrap();
        let pillars = text
            .split("export const pillarPages: PillarPage[] = ")
            .nth(1)
            .unwrap();
        let (pillars, supporting) = pillars.split_once("export const supportingArticles").unwrap();

        assert!(pillars.contains("\"slug\": \"guide\""));
        assert!(pillars.contains("    icon: Sun,\n"));
        assert!(pillars.contains("    icon: Rocket,\n"));
        assert!(!pillars.contains("sizing"));

        assert!(supporting.contains("    icon: FileText,\n"));
        assert!(supporting.contains("\"pillarAr\": \"\",\n    \"pillarEn\": \"\",\n    \"pillarSlug\": \"gone\","));
        assert!(!supporting.contains("\"status\""));
    }

    #[test]
    fn test_module_layout() {
        let text = generate_articles_ts(&[]).unwrap();
        assert_eq!(
            text,
            "// Articles Data\n// Centralized knowledge hub articles data\n// Auto-generated from Admin Panel\n\n\
             import { FileText } from 'lucide-react';\n\
             import { LucideIcon } from 'lucide-react';\n\n\
             export interface PillarPage {\n  slug: string;\n  icon: LucideIcon;\n  titleAr: string;\n  titleEn: string;\n  descAr: string;\n  descEn: string;\n  status: 'published' | 'draft';\n  contentMarkdownAr?: string;\n  contentMarkdownEn?: string;\n}\n\n\
             export interface SupportingArticle {\n  slug: string;\n  icon: LucideIcon;\n  titleAr: string;\n  titleEn: string;\n  pillarAr: string;\n  pillarEn: string;\n  pillarSlug?: string;\n  contentMarkdownAr?: string;\n  contentMarkdownEn?: string;\n}\n\n\
             // NOTE: Icon references need to be manually updated after import\n\
             // Replace string icon names with actual icon components\n\n\
             export const pillarPages: PillarPage[] = [];\n\n\
             export const supportingArticles: SupportingArticle[] = [];\n\n\
             export const getPillarBySlug = (slug: string): PillarPage | undefined => {\n  return pillarPages.find(p => p.slug === slug);\n};\n\n\
             export const getSupportingBySlug = (slug: string): SupportingArticle | undefined => {\n  return supportingArticles.find(a => a.slug === slug);\n};\n\n\
             export const getSupportingByPillar = (pillarSlug: string): SupportingArticle[] => {\n  return supportingArticles.filter(a => a.pillarSlug === pillarSlug);\n};\n\n\
             export const getAllArticles = () => ({\n  pillarPages,\n  supportingArticles,\n});\n"
        );
    }
}

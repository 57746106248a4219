//! The portfolio module (`projects.ts`)

use crate::literal::{LiteralStyle, to_literal};
use crate::module::{Accessor, TsField, TsItem, TsModule};
use chrono::Utc;
use serde::Serialize;
use solar_content::{LocalizedList, LocalizedPair, Project};
use solar_core::{AdminResult, Choice, ProjectType};

pub const FILE_NAME: &str = "projects.ts";

const HEADER: [&str; 3] = [
    "Projects Data",
    "Centralized project data for the site",
    "Auto-generated from Admin Panel",
];

const PROJECT_FIELDS: &[TsField] = &[
    TsField::required("id", "number"),
    TsField::optional("slug", "string"),
    TsField::required("titleAr", "string"),
    TsField::required("titleEn", "string"),
    TsField::required("descAr", "string"),
    TsField::required("descEn", "string"),
    TsField::required(
        "type",
        "'residential' | 'commercial' | 'institutional' | 'agricultural'",
    ),
    TsField::required("location", "{ ar: string; en: string }"),
    TsField::required("systemSize", "string"),
    TsField::required("batteryCapacity", "string"),
    TsField::required("panels", "number"),
    TsField::required("date", "string"),
    TsField::required("images", "string[]"),
    TsField::required("features", "{ ar: string[]; en: string[] }"),
    TsField::optional("clientAr", "string"),
    TsField::optional("clientEn", "string"),
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectExport<'a> {
    id: i64,
    slug: &'a str,
    title_ar: &'a str,
    title_en: &'a str,
    desc_ar: &'a str,
    desc_en: &'a str,
    #[serde(rename = "type")]
    project_type: ProjectType,
    location: &'a LocalizedPair,
    system_size: &'a str,
    battery_capacity: &'a str,
    panels: u32,
    date: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_ar: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_en: Option<&'a str>,
    images: &'a [String],
    features: &'a LocalizedList,
}

impl<'a> ProjectExport<'a> {
    fn new(project: &'a Project, fallback_id: i64) -> Self {
        Self {
            id: numeric_id(&project.id).unwrap_or(fallback_id),
            slug: &project.slug,
            title_ar: &project.title_ar,
            title_en: &project.title_en,
            desc_ar: &project.desc_ar,
            desc_en: &project.desc_en,
            project_type: project.project_type,
            location: &project.location,
            system_size: &project.system_size,
            battery_capacity: &project.battery_capacity,
            panels: project.panels,
            date: &project.date,
            client_ar: project.client_ar.as_deref(),
            client_en: project.client_en.as_deref(),
            images: &project.images,
            features: &project.features,
        }
    }
}

/// Leading integer of `text`, the way the site's runtime reads numbers
///
/// Leading whitespace and one sign are accepted, a `0x` prefix switches to
/// hex, and parsing stops at the first non-digit. `None` when no digit is
/// found or the value does not fit in an `i64`.
pub fn js_parse_int(text: &str) -> Option<i64> {
    let mut rest = text.trim_start();
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let radix = match rest.get(..2) {
        Some("0x") | Some("0X") => {
            rest = &rest[2..];
            16
        }
        _ => 10,
    };

    let digits: &str = match rest.find(|c: char| !c.is_digit(radix)) {
        Some(end) => &rest[..end],
        None => rest,
    };
    if digits.is_empty() {
        return None;
    }

    let value = i64::from_str_radix(digits, radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Id a project exports with, or `None` when it needs the timestamp fallback
pub fn numeric_id(id: &str) -> Option<i64> {
    js_parse_int(id).filter(|n| *n != 0)
}

/// Render `projects.ts`
pub fn generate_projects_ts(projects: &[Project]) -> AdminResult<String> {
    generate_projects_ts_at(projects, Utc::now().timestamp_millis())
}

/// Render `projects.ts`, using `now_ms` for ids that are not numeric
pub fn generate_projects_ts_at(projects: &[Project], now_ms: i64) -> AdminResult<String> {
    let exported: Vec<ProjectExport<'_>> = projects
        .iter()
        .map(|p| ProjectExport::new(p, now_ms))
        .collect();
    tracing::debug!(projects = exported.len(), "rendering projects module");

    let literal = to_literal(&exported, LiteralStyle::PLAIN)?;
    let types = ProjectType::all();

    Ok(TsModule::new(HEADER)
        .import(["Home", "Building2", "Factory"], "lucide-react")
        .item(TsItem::Interface {
            name: "Project",
            fields: PROJECT_FIELDS,
        })
        .item(TsItem::Const {
            name: "projects".to_string(),
            ty: "Project[]".to_string(),
            literal,
        })
        .item(TsItem::RecordMap {
            name: "typeIcons",
            key_ty: "Project['type']",
            value_ty: "typeof Home",
            entries: types
                .iter()
                .map(|t| (t.as_str().to_string(), t.icon().to_string()))
                .collect(),
        })
        .item(TsItem::RecordMap {
            name: "typeLabels",
            key_ty: "Project['type']",
            value_ty: "{ ar: string; en: string }",
            entries: types
                .iter()
                .map(|t| {
                    let label = format!("{{ ar: '{}', en: '{}' }}", t.label_ar(), t.label_en());
                    (t.as_str().to_string(), label)
                })
                .collect(),
        })
        .item(TsItem::RecordMap {
            name: "typeColors",
            key_ty: "Project['type']",
            value_ty: "string",
            entries: types
                .iter()
                .map(|t| (t.as_str().to_string(), format!("'{}'", t.color_class())))
                .collect(),
        })
        .item(TsItem::FindBy(Accessor {
            fn_name: "getProjectBySlug",
            param: "slug",
            param_ty: "string",
            record_ty: "Project",
            collection: "projects",
            var: "p",
            field: "slug",
        }))
        .item(TsItem::FilterBy(Accessor {
            fn_name: "getProjectsByType",
            param: "type",
            param_ty: "Project['type']",
            record_ty: "Project",
            collection: "projects",
            var: "p",
            field: "type",
        }))
        .render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(id: &str) -> Project {
        Project::new(id, "villa-sanaa", ProjectType::Residential, "فيلا", "Villa")
            .at("صنعاء", "Sanaa")
            .with_image("/projects/villa.jpg")
    }

    #[test]
    fn test_js_parse_int() {
        assert_eq!(js_parse_int("42"), Some(42));
        assert_eq!(js_parse_int("  7abc"), Some(7));
        assert_eq!(js_parse_int("-3"), Some(-3));
        assert_eq!(js_parse_int("+12"), Some(12));
        assert_eq!(js_parse_int("0x1A"), Some(26));
        assert_eq!(js_parse_int("1e3"), Some(1));
        assert_eq!(js_parse_int("abc"), None);
        assert_eq!(js_parse_int(""), None);
        assert_eq!(js_parse_int("-"), None);
    }

    #[test]
    fn test_uuid_and_zero_ids_use_timestamp() {
        assert_eq!(numeric_id("0"), None);
        assert_eq!(numeric_id("3f2a-uuid"), Some(3));
        assert_eq!(numeric_id("e7c1b2d4-uuid"), None);

        let text = generate_projects_ts_at(&[project("e7c1"), project("0")], 1_700_000_000_000).unwrap();
        assert_eq!(text.matches("\"id\": 1700000000000,").count(), 2);
    }

    #[test]
    fn test_numeric_ids_and_optional_client() {
        let mut with_client = project("5");
        with_client.client_ar = Some("مدرسة".into());
        with_client.client_en = Some("School".into());
        let text = generate_projects_ts_at(&[with_client, project("6")], 1).unwrap();

        assert!(text.contains("    \"id\": 5,\n"));
        assert!(text.contains("    \"id\": 6,\n"));
        assert_eq!(text.matches("\"clientAr\"").count(), 1);
        assert!(text.contains("\"date\": \"\",\n    \"clientAr\": \"مدرسة\",\n    \"clientEn\": \"School\",\n    \"images\""));
        assert!(!text.contains("productsUsed"));
        assert!(!text.contains("isFeatured"));
    }

    #[test]
    fn test_maps_and_accessors() {
        let text = generate_projects_ts_at(&[], 1).unwrap();
        assert!(text.starts_with(
            "// Projects Data\n// Centralized project data for the site\n// Auto-generated from Admin Panel\n\n\
             import { Home, Building2, Factory } from 'lucide-react';\n\n\
             export interface Project {\n  id: number;\n  slug?: string;\n"
        ));
        assert!(text.contains("export const projects: Project[] = [];\n\n"));
        assert!(text.contains(
            "export const typeIcons: Record<Project['type'], typeof Home> = {\n  residential: Home,\n  commercial: Building2,\n  institutional: Building2,\n  agricultural: Factory,\n};"
        ));
        assert!(text.contains("  residential: { ar: 'سكني', en: 'Residential' },\n"));
        assert!(text.contains("  agricultural: 'bg-amber-500',\n};"));
        assert!(text.ends_with(
            "export const getProjectsByType = (type: Project['type']): Project[] => {\n  return projects.filter(p => p.type === type);\n};\n"
        ));
    }
}

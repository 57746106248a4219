//! Installation projects shown in the portfolio

use serde::{Deserialize, Serialize};
use solar_core::{Entity, EntityKind, LocalizedList, LocalizedPair, ProjectType};

/// Admin-editable project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// String form of the site's numeric id
    #[serde(deserialize_with = "crate::serialization::text_or_number")]
    pub id: String,
    #[serde(deserialize_with = "crate::serialization::text_or_number")]
    pub slug: String,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_en: Option<String>,
    pub images: Vec<String>,
    pub features: LocalizedList,
    pub products_used: Vec<String>,
    pub is_featured: bool,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        project_type: ProjectType,
        title_ar: impl Into<String>,
        title_en: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            project_type,
            title_ar: title_ar.into(),
            title_en: title_en.into(),
            ..Self::default()
        }
    }

    /// Builder: set the location pair
    pub fn at(mut self, ar: impl Into<String>, en: impl Into<String>) -> Self {
        self.location = LocalizedPair::new(ar, en);
        self
    }

    /// Builder: append an image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let project = Project::new("1", "villa-sanaa", ProjectType::Residential, "فيلا", "Villa")
            .at("صنعاء", "Sana'a")
            .with_image("https://example.com/1.jpg");
        assert_eq!(project.location.en, "Sana'a");
        assert_eq!(project.images.len(), 1);
    }

    #[test]
    fn test_wire_shape() {
        let mut project = Project::new("2", "factory-aden", ProjectType::Commercial, "مصنع", "Factory");
        project.client_ar = Some("مصنع".to_string());
        project.client_en = Some("Factory".to_string());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["type"], "commercial");
        assert_eq!(json["location"], serde_json::json!({"ar": "", "en": ""}));
        assert_eq!(json["features"], serde_json::json!({"ar": [], "en": []}));
        assert_eq!(json["clientEn"], "Factory");
    }
}

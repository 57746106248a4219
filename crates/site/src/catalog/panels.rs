//! Solar panels

use super::{pair, spec, strings};
use crate::types::SiteProduct;
use solar_content::{RegionalSuitability, SuitabilityRatings};
use solar_core::ProductCategory;

pub fn panel_products() -> Vec<SiteProduct> {
    vec![vertex_s_plus(), jinko_tiger_neo()]
}

fn vertex_s_plus() -> SiteProduct {
    SiteProduct {
        id: "trina-vertex-s-plus".into(),
        slug: "vertex-s-plus".into(),
        category: ProductCategory::Panels,
        brand: "Trina Solar".into(),
        model: "Vertex S+ 445W".into(),
        name_ar: "لوح شمسي Trina Vertex S+ بقدرة 445 واط".into(),
        name_en: "Trina Vertex S+ 445W Solar Panel".into(),
        short_desc_ar: "لوح أحادي البلورة عالي الكفاءة للأسطح السكنية".into(),
        short_desc_en: "High-efficiency monocrystalline panel for residential roofs".into(),
        full_desc_ar: "لوح Vertex S+ بتقنية N-type وزجاج مزدوج لتحمل الحرارة والغبار.".into(),
        full_desc_en: "Vertex S+ uses N-type cells and dual glass to withstand heat and dust.".into(),
        key_takeaways: Some(vec![pair(
            "كفاءة تصل إلى 22.3%",
            "Up to 22.3% efficiency",
        )]),
        specifications: Some(vec![
            spec("القدرة القصوى", "Max Power", "445", Some("W")),
            spec("الكفاءة", "Efficiency", "22.3", Some("%")),
            spec("نوع الخلايا", "Cell Type", "N-type i-TOPCon", None),
        ]),
        yemen_suitability: Some(RegionalSuitability {
            ratings: SuitabilityRatings::new(5, 4, 3, 5),
            explanation_ar: "معامل حرارة منخفض يحافظ على الإنتاج في الصيف".into(),
            explanation_en: "Low temperature coefficient keeps output up in summer".into(),
            ..RegionalSuitability::default()
        }),
        related_product_slugs: Some(strings(&["us5000", "sp5000"])),
        related_service_keys: Some(strings(&["installation"])),
        related_location_slugs: Some(strings(&["sanaa", "marib"])),
        seo_title_ar: "لوح Trina Vertex S+ 445W في اليمن".into(),
        seo_title_en: "Trina Vertex S+ 445W in Yemen".into(),
        seo_description_ar: "لوح شمسي عالي الكفاءة مناسب لمناخ اليمن".into(),
        seo_description_en: "High-efficiency solar panel suited to Yemen's climate".into(),
        image: "/images/products/vertex-s-plus.webp".into(),
        datasheet_url: Some(String::new()),
        is_available: true,
        is_featured: true,
        ..SiteProduct::default()
    }
}

fn jinko_tiger_neo() -> SiteProduct {
    SiteProduct {
        id: "jinko-tiger-neo-575".into(),
        slug: "tiger-neo-575".into(),
        category: ProductCategory::Panels,
        brand: "Jinko Solar".into(),
        model: "Tiger Neo 575W".into(),
        name_ar: "لوح شمسي Jinko Tiger Neo بقدرة 575 واط".into(),
        name_en: "Jinko Tiger Neo 575W Solar Panel".into(),
        short_desc_ar: "لوح كبير للمشاريع التجارية والزراعية".into(),
        short_desc_en: "Large-format panel for commercial and agricultural projects".into(),
        full_desc_ar: "لوح Tiger Neo ثنائي الوجه بقدرة 575 واط.".into(),
        full_desc_en: "Bifacial Tiger Neo panel rated at 575W.".into(),
        seo_title_ar: "لوح Jinko Tiger Neo 575W".into(),
        seo_title_en: "Jinko Tiger Neo 575W".into(),
        seo_description_ar: "لوح شمسي ثنائي الوجه للمشاريع الكبيرة".into(),
        seo_description_en: "Bifacial solar panel for large projects".into(),
        image: "/images/products/tiger-neo-575.webp".into(),
        is_available: true,
        is_featured: false,
        ..SiteProduct::default()
    }
}

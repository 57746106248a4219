//! Hybrid inverters

use super::{spec, strings};
use crate::types::SiteProduct;
use solar_content::Faq;
use solar_core::ProductCategory;

pub fn inverter_products() -> Vec<SiteProduct> {
    vec![sp5000(), sp8000()]
}

fn sp5000() -> SiteProduct {
    SiteProduct {
        id: "sako-sp5000".into(),
        slug: "sp5000".into(),
        category: ProductCategory::Inverters,
        brand: "SAKO".into(),
        model: "SUNON Pro 5kW".into(),
        name_ar: "انفرتر هجين SAKO بقدرة 5 كيلوواط".into(),
        name_en: "SAKO 5kW Hybrid Inverter".into(),
        short_desc_ar: "انفرتر هجين 48 فولت مع منظم MPPT مدمج".into(),
        short_desc_en: "48V hybrid inverter with built-in MPPT controller".into(),
        full_desc_ar: "انفرتر هجين يدعم بطاريات الليثيوم ويعمل مع الشبكة أو بدونها.".into(),
        full_desc_en: "Hybrid inverter that supports lithium batteries and works on or off grid.".into(),
        specifications: Some(vec![
            spec("القدرة الاسمية", "Rated Power", "5000", Some("W")),
            spec("جهد البطارية", "Battery Voltage", "48", Some("V")),
            spec("منظم الشحن", "Charge Controller", "MPPT 100A", None),
        ]),
        faqs: Some(vec![Faq {
            question_ar: "هل يعمل مع بطاريات Pylontech؟".into(),
            question_en: "Does it work with Pylontech batteries?".into(),
            answer_ar: "نعم، يدعم الاتصال مع نظام إدارة البطارية.".into(),
            answer_en: "Yes, it communicates with the battery management system.".into(),
        }]),
        related_product_slugs: Some(strings(&["us5000", "sp8000"])),
        seo_title_ar: "انفرتر SAKO 5kW هجين".into(),
        seo_title_en: "SAKO 5kW Hybrid Inverter".into(),
        seo_description_ar: "انفرتر هجين 5 كيلوواط للمنازل".into(),
        seo_description_en: "5kW hybrid inverter for homes".into(),
        image: "/images/products/sp5000.webp".into(),
        datasheet_url: Some("/datasheets/sako-sp5000.pdf".into()),
        is_available: true,
        is_featured: true,
        ..SiteProduct::default()
    }
}

fn sp8000() -> SiteProduct {
    SiteProduct {
        id: "sako-sp8000".into(),
        slug: "sp8000".into(),
        category: ProductCategory::Inverters,
        brand: "SAKO".into(),
        model: "SUNON Pro 8kW".into(),
        name_ar: "انفرتر هجين SAKO بقدرة 8 كيلوواط".into(),
        name_en: "SAKO 8kW Hybrid Inverter".into(),
        short_desc_ar: "انفرتر للمنازل الكبيرة والمكاتب".into(),
        short_desc_en: "Inverter for large homes and offices".into(),
        full_desc_ar: "انفرتر هجين بقدرة 8 كيلوواط مع منظمين MPPT.".into(),
        full_desc_en: "8kW hybrid inverter with dual MPPT.".into(),
        seo_title_ar: "انفرتر SAKO 8kW".into(),
        seo_title_en: "SAKO 8kW Inverter".into(),
        seo_description_ar: "انفرتر هجين 8 كيلوواط".into(),
        seo_description_en: "8kW hybrid inverter".into(),
        image: "/images/products/sp8000.webp".into(),
        is_available: false,
        is_featured: false,
        ..SiteProduct::default()
    }
}

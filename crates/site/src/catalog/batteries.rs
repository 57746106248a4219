//! Battery products (Pylontech range)

use super::{pair, spec, strings};
use crate::types::SiteProduct;
use solar_content::{Comparison, Faq, RegionalSuitability, SuitabilityRatings, UseCase};
use solar_core::{LocalizedList, ProductCategory};

pub fn battery_products() -> Vec<SiteProduct> {
    vec![us5000(), pelio_l(), us3000c()]
}

fn us5000() -> SiteProduct {
    SiteProduct {
        id: "pylontech-us5000".into(),
        slug: "us5000".into(),
        category: ProductCategory::Pylontech,
        brand: "Pylontech".into(),
        model: "US5000".into(),
        name_ar: "بطارية ليثيوم Pylontech US5000 (4.8kWh)".into(),
        name_en: "Pylontech US5000 Lithium Battery (4.8kWh)".into(),
        short_desc_ar: "الجيل الجديد من بطاريات تخزين الطاقة الشمسية - 48 فولت بسعة 4.8 كيلوواط ساعة".into(),
        short_desc_en: "Next-generation solar energy storage battery - 48V with 4.8kWh capacity".into(),
        full_desc_ar: "بطارية Pylontech US5000 هي الحل الأقوى لتخزين الطاقة الشمسية في اليمن. تتميز بتقنية ليثيوم فوسفات الحديد (LiFePO4) الآمنة والموثوقة، مع عمر افتراضي يتجاوز 6000 دورة شحن وتفريغ.\n\n**المنتج الأصلي بضمان الوكيل المعتمد: مؤسسة القطاع**".into(),
        full_desc_en: "Pylontech US5000 is the ultimate solution for solar energy storage in Yemen. It features safe and reliable Lithium Iron Phosphate (LiFePO4) technology, with a lifespan exceeding 6000 charge/discharge cycles.\n\n**Original product with authorized dealer warranty: Al-Qatta Establishment**".into(),
        key_takeaways: Some(vec![
            pair(
                "سعة 4.8 كيلوواط ساعة - تكفي لتشغيل منزل صغير ليلة كاملة",
                "4.8kWh capacity - enough to power a small home overnight",
            ),
            pair(
                "عمر افتراضي +6000 دورة - استثمار يدوم أكثر من 15 سنة",
                "6000+ cycle lifespan - investment lasting over 15 years",
            ),
            pair(
                "تقنية LiFePO4 الآمنة - لا خطر حريق أو انفجار",
                "Safe LiFePO4 technology - no fire or explosion risk",
            ),
        ]),
        specifications: Some(vec![
            spec("السعة الكلية", "Total Capacity", "4.8", Some("kWh")),
            spec("الجهد الاسمي", "Nominal Voltage", "48", Some("V")),
            spec("دورات الشحن", "Cycle Life", "6000+", Some("cycles")),
            spec("عمق التفريغ", "Depth of Discharge", "95", Some("%")),
            spec("نوع الخلايا", "Cell Type", "LiFePO4", None),
            spec("الضمان", "Warranty", "10 سنوات / 10 Years", None),
        ]),
        yemen_suitability: Some(RegionalSuitability {
            ratings: SuitabilityRatings::new(5, 4, 5, 4),
            explanation_ar: "بطارية US5000 مصممة للعمل في درجات حرارة تصل إلى 50 درجة مئوية، مما يجعلها مثالية لمناخ اليمن الحار.".into(),
            explanation_en: "The US5000 is designed to operate at temperatures up to 50°C, making it ideal for Yemen's hot climate.".into(),
            best_regions_ar: strings(&["صنعاء", "عدن", "تعز", "الحديدة", "مأرب"]),
            best_regions_en: strings(&["Sanaa", "Aden", "Taiz", "Hudaydah", "Marib"]),
            climate_notes_ar: "تعمل بكفاءة في جميع مناطق اليمن".into(),
            climate_notes_en: "Works efficiently in all regions of Yemen".into(),
        }),
        use_cases: Some(vec![
            UseCase {
                title_ar: "المنازل السكنية".into(),
                title_en: "Residential Homes".into(),
                desc_ar: "تخزين الطاقة الشمسية لتشغيل المنزل ليلاً أو أثناء انقطاع الكهرباء".into(),
                desc_en: "Store solar energy to power home at night or during outages".into(),
                icon: "Home".into(),
            },
            UseCase {
                title_ar: "العيادات الطبية".into(),
                title_en: "Medical Clinics".into(),
                desc_ar: "طاقة مستمرة للأجهزة الطبية والتبريد".into(),
                desc_en: "Continuous power for medical equipment and refrigeration".into(),
                icon: "Heart".into(),
            },
        ]),
        recommended_for_ar: Some(strings(&[
            "المنازل التي تحتاج طاقة احتياطية 4-8 ساعات",
            "الأنظمة الشمسية بقدرة 3-5 كيلوواط",
        ])),
        recommended_for_en: Some(strings(&[
            "Homes needing 4-8 hours backup power",
            "Solar systems with 3-5kW capacity",
        ])),
        not_recommended_for_ar: Some(strings(&["الأنظمة الصغيرة جداً (أقل من 2 كيلوواط)"])),
        not_recommended_for_en: Some(strings(&["Very small systems (less than 2kW)"])),
        faqs: Some(vec![Faq {
            question_ar: "كم تدوم بطارية US5000؟".into(),
            question_en: "How long does the US5000 battery last?".into(),
            answer_ar: "بطارية US5000 مصممة لأكثر من 6000 دورة شحن وتفريغ.".into(),
            answer_en: "The US5000 is designed for over 6000 charge/discharge cycles.".into(),
        }]),
        comparisons: Some(vec![Comparison {
            product_slug: "pelio-l".into(),
            pros: LocalizedList::new(["سعة أكبر", "توافق أوسع"], ["Larger capacity", "Wider compatibility"]),
            cons: LocalizedList::new(["يحتاج حامل"], ["Needs rack"]),
        }]),
        related_product_slugs: Some(strings(&["pelio-l", "sp5000", "vertex-s-plus"])),
        related_service_keys: Some(strings(&["installation", "maintenance", "consultation"])),
        related_location_slugs: Some(strings(&["sanaa", "aden", "taiz", "hudaydah"])),
        seo_title_ar: "بطارية Pylontech US5000 (4.8kWh) - أفضل بطارية ليثيوم في اليمن".into(),
        seo_title_en: "Pylontech US5000 (4.8kWh) - Best Lithium Battery in Yemen".into(),
        seo_description_ar: "بطارية ليثيوم Pylontech US5000 بسعة 4.8 كيلوواط ساعة. الحل الأمثل لتخزين الطاقة الشمسية في اليمن.".into(),
        seo_description_en: "Pylontech US5000 lithium battery with 4.8kWh capacity. The optimal solution for solar energy storage in Yemen.".into(),
        seo_keywords_ar: Some(strings(&["بطارية ليثيوم", "Pylontech US5000"])),
        seo_keywords_en: Some(strings(&["lithium battery", "Pylontech US5000"])),
        image: "/placeholder.svg".into(),
        gallery: Some(Vec::new()),
        datasheet_url: Some("/datasheets/pylontech-us-series.pdf".into()),
        is_available: true,
        is_featured: true,
    }
}

fn pelio_l() -> SiteProduct {
    SiteProduct {
        id: "pylontech-pelio-l".into(),
        slug: "pelio-l".into(),
        category: ProductCategory::Pylontech,
        brand: "Pylontech".into(),
        model: "Pelio L-5.12kWh".into(),
        name_ar: "بطارية Pylontech Pelio (L-5.12kWh)".into(),
        name_en: "Pylontech Pelio (L-5.12kWh)".into(),
        short_desc_ar: "بطارية الحائط الذكية - تصميم عصري مع قوة الليثيوم".into(),
        short_desc_en: "Smart wall battery - Modern design with lithium power".into(),
        full_desc_ar: "بطارية Pylontech Pelio هي الجيل الجديد من بطاريات الحائط السكنية.".into(),
        full_desc_en: "Pylontech Pelio is the new generation of residential wall batteries.".into(),
        specifications: Some(vec![
            spec("السعة الكلية", "Total Capacity", "5.12", Some("kWh")),
            spec("الجهد الاسمي", "Nominal Voltage", "51.2", Some("V")),
        ]),
        related_product_slugs: Some(strings(&["us5000"])),
        related_service_keys: Some(strings(&["installation", "maintenance"])),
        related_location_slugs: Some(strings(&["sanaa", "aden", "taiz"])),
        seo_title_ar: "بطارية Pylontech Pelio الجدارية".into(),
        seo_title_en: "Pylontech Pelio Wall Battery".into(),
        seo_description_ar: "بطارية حائط ذكية بسعة 5.12 كيلوواط ساعة".into(),
        seo_description_en: "Smart 5.12kWh wall battery".into(),
        image: "/placeholder.svg".into(),
        datasheet_url: Some("/datasheets/pylontech-us-series.pdf".into()),
        is_available: true,
        is_featured: true,
        ..SiteProduct::default()
    }
}

fn us3000c() -> SiteProduct {
    SiteProduct {
        id: "pylontech-us3000c".into(),
        slug: "us3000c".into(),
        category: ProductCategory::Pylontech,
        brand: "Pylontech".into(),
        model: "US3000C".into(),
        name_ar: "بطارية ليثيوم Pylontech US3000C (3.5kWh)".into(),
        name_en: "Pylontech US3000C Lithium Battery (3.5kWh)".into(),
        short_desc_ar: "البطارية الأكثر انتشاراً لأنظمة الطاقة الشمسية المنزلية".into(),
        short_desc_en: "The most widely used battery for home solar systems".into(),
        full_desc_ar: "بطارية US3000C بسعة 3.5 كيلوواط ساعة وجهد 48 فولت.".into(),
        full_desc_en: "The US3000C offers 3.5kWh at 48V.".into(),
        yemen_suitability: Some(RegionalSuitability {
            ratings: SuitabilityRatings::new(4, 4, 4, 4),
            ..RegionalSuitability::default()
        }),
        seo_title_ar: "بطارية Pylontech US3000C".into(),
        seo_title_en: "Pylontech US3000C Battery".into(),
        seo_description_ar: "بطارية ليثيوم 3.5 كيلوواط ساعة".into(),
        seo_description_en: "3.5kWh lithium battery".into(),
        image: "/placeholder.svg".into(),
        is_available: true,
        is_featured: false,
        ..SiteProduct::default()
    }
}

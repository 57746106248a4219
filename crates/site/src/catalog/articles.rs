//! Knowledge-hub pillar pages and supporting articles

use crate::types::{PillarPage, SupportingArticle};
use solar_core::ArticleStatus;

pub fn pillar_pages() -> Vec<PillarPage> {
    vec![
        PillarPage {
            slug: "inverter-guide".into(),
            icon: "Zap".into(),
            title_ar: "دليل اختيار الانفرتر المناسب".into(),
            title_en: "Inverter Selection Guide".into(),
            desc_ar: "كيف تختار الانفرتر الأنسب لمنزلك أو مشروعك؟ جداول توصيات ومقارنات شاملة.".into(),
            desc_en: "How to choose the right inverter for your home or project? Recommendation tables and comprehensive comparisons.".into(),
            status: ArticleStatus::Published,
            content_markdown_ar: None,
            content_markdown_en: None,
        },
        PillarPage {
            slug: "lithium-vs-lead-acid".into(),
            icon: "Battery".into(),
            title_ar: "بطاريات الليثيوم vs الرصاص".into(),
            title_en: "Lithium vs Lead-Acid Batteries".into(),
            desc_ar: "مقارنة تعليمية شاملة بين تقنيات البطاريات. أيهما يناسبك؟".into(),
            desc_en: "Comprehensive educational comparison between battery technologies. Which suits you?".into(),
            status: ArticleStatus::Published,
            content_markdown_ar: None,
            content_markdown_en: None,
        },
        PillarPage {
            slug: "solar-yemen-guide".into(),
            icon: "Sun".into(),
            title_ar: "الطاقة الشمسية في اليمن - الدليل الشامل".into(),
            title_en: "Solar Energy in Yemen - Complete Guide".into(),
            desc_ar: "كل ما تحتاج معرفته عن الطاقة الشمسية في اليمن: المناخ، التحديات، الحلول.".into(),
            desc_en: "Everything you need to know about solar energy in Yemen: climate, challenges, solutions.".into(),
            status: ArticleStatus::Published,
            content_markdown_ar: Some("## المناخ\n\nاليمن من أغنى دول المنطقة بالإشعاع الشمسي.".into()),
            content_markdown_en: Some("## Climate\n\nYemen has some of the strongest solar irradiance in the region.".into()),
        },
    ]
}

pub fn supporting_articles() -> Vec<SupportingArticle> {
    let article = |slug: &str, icon: &str, title: (&str, &str), pillar: (&str, &str), pillar_slug: &str| {
        SupportingArticle {
            slug: slug.into(),
            icon: icon.into(),
            title_ar: title.0.into(),
            title_en: title.1.into(),
            pillar_ar: pillar.0.into(),
            pillar_en: pillar.1.into(),
            pillar_slug: Some(pillar_slug.into()),
            content_markdown_ar: None,
            content_markdown_en: None,
        }
    };

    vec![
        article(
            "inverter-sizing",
            "Calculator",
            ("كيف تحسب حجم الانفرتر المناسب", "How to Calculate Inverter Size"),
            ("الانفرترات", "Inverters"),
            "inverter-guide",
        ),
        article(
            "inverter-common-faults",
            "Wrench",
            ("أعطال الانفرتر الشائعة وحلولها", "Common Inverter Faults & Solutions"),
            ("الانفرترات", "Inverters"),
            "inverter-guide",
        ),
        article(
            "lithium-battery-lifespan",
            "RefreshCw",
            ("كم تدوم بطارية الليثيوم؟", "How Long Do Lithium Batteries Last?"),
            ("البطاريات", "Batteries"),
            "lithium-vs-lead-acid",
        ),
        article(
            "series-vs-parallel-batteries",
            "ArrowUpDown",
            ("توصيل البطاريات: توالي vs توازي", "Battery Wiring: Series vs Parallel"),
            ("البطاريات", "Batteries"),
            "lithium-vs-lead-acid",
        ),
        article(
            "solar-system-cost-yemen",
            "Calculator",
            ("تكلفة نظام الطاقة الشمسية في اليمن", "Solar System Cost in Yemen"),
            ("الطاقة الشمسية", "Solar Energy"),
            "solar-yemen-guide",
        ),
    ]
}

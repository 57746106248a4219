//! Portfolio projects

use crate::types::SiteProject;
use solar_core::{LocalizedList, LocalizedPair, ProjectType};

const UNSPLASH: &str = "https://images.unsplash.com";

fn photo(id: &str) -> String {
    format!("{}/photo-{}?w=800&h=600&fit=crop", UNSPLASH, id)
}

pub fn site_projects() -> Vec<SiteProject> {
    vec![
        SiteProject {
            id: 1,
            slug: Some("villa-sanaa-residential".into()),
            title_ar: "نظام طاقة شمسية لفيلا سكنية - صنعاء".into(),
            title_en: "Solar System for Residential Villa - Sana'a".into(),
            desc_ar: "تركيب نظام طاقة شمسية متكامل لفيلا سكنية مع بطاريات Pylontech لتخزين الطاقة وتوفير الطاقة على مدار الساعة".into(),
            desc_en: "Complete solar system installation for residential villa with Pylontech batteries for 24/7 energy storage".into(),
            project_type: ProjectType::Residential,
            location: LocalizedPair::new("صنعاء", "Sana'a"),
            system_size: "10 kW".into(),
            battery_capacity: "14.4 kWh".into(),
            panels: 20,
            date: "2024".into(),
            images: vec![
                photo("1509391366360-2e959784a276"),
                photo("1508514177221-188b1cf16e9d"),
            ],
            features: LocalizedList::new(
                ["20 لوح شمسي 550W", "بطاريات Pylontech US3000C × 4", "انفرتر هجين 10kW"],
                ["20 × 550W Solar Panels", "Pylontech US3000C × 4 Batteries", "10kW Hybrid Inverter"],
            ),
            client_ar: Some("فيلا خاصة".into()),
            client_en: Some("Private Villa".into()),
        },
        SiteProject {
            id: 2,
            slug: Some("factory-aden-commercial".into()),
            title_ar: "نظام طاقة شمسية لمصنع - عدن".into(),
            title_en: "Solar System for Factory - Aden".into(),
            desc_ar: "تركيب نظام طاقة شمسية تجاري كبير لمصنع صناعي مع تخزين طاقة متقدم لضمان استمرارية الإنتاج".into(),
            desc_en: "Large commercial solar system installation for industrial factory with advanced energy storage".into(),
            project_type: ProjectType::Commercial,
            location: LocalizedPair::new("عدن", "Aden"),
            system_size: "50 kW".into(),
            battery_capacity: "48 kWh".into(),
            panels: 90,
            date: "2024".into(),
            images: vec![photo("1497440001374-f26997328c1b")],
            features: LocalizedList::new(
                ["90 لوح شمسي 550W", "بطاريات Pylontech Force H1 × 6", "انفرتر صناعي 50kW"],
                ["90 × 550W Solar Panels", "Pylontech Force H1 × 6 Batteries", "50kW Industrial Inverter"],
            ),
            client_ar: Some("مصنع صناعي".into()),
            client_en: Some("Industrial Factory".into()),
        },
        SiteProject {
            id: 4,
            slug: None,
            title_ar: "نظام طاقة شمسية منزلي - الحديدة".into(),
            title_en: "Home Solar System - Hudaydah".into(),
            desc_ar: "نظام طاقة شمسية منزلي مصمم خصيصاً لمناخ الحديدة الحار مع حماية متقدمة".into(),
            desc_en: "Home solar system specially designed for Hudaydah's hot climate with advanced protection".into(),
            project_type: ProjectType::Residential,
            location: LocalizedPair::new("الحديدة", "Hudaydah"),
            system_size: "5 kW".into(),
            battery_capacity: "7.2 kWh".into(),
            panels: 10,
            date: "2023".into(),
            images: vec![photo("1558449028-b53a39d100fc")],
            features: LocalizedList::new(
                ["10 ألواح شمسية مقاومة للحرارة", "حماية ضد الملوحة"],
                ["10 × Heat-Resistant Solar Panels", "Salinity Protection"],
            ),
            client_ar: None,
            client_en: None,
        },
        SiteProject {
            id: 5,
            slug: Some("hospital-sanaa-institutional".into()),
            title_ar: "نظام طاقة شمسية لمستشفى - صنعاء".into(),
            title_en: "Solar System for Hospital - Sana'a".into(),
            desc_ar: "نظام طاقة شمسية ضخم لمستشفى مع تخزين طاقة يضمن استمرارية الخدمة الطبية".into(),
            desc_en: "Large solar system for hospital with energy storage ensuring medical service continuity".into(),
            project_type: ProjectType::Institutional,
            location: LocalizedPair::new("صنعاء", "Sana'a"),
            system_size: "100 kW".into(),
            battery_capacity: "200 kWh".into(),
            panels: 180,
            date: "2023".into(),
            images: vec![photo("1497440001374-f26997328c1b")],
            features: LocalizedList::new(
                ["180 لوح شمسي 550W", "نظام طوارئ احتياطي"],
                ["180 × 550W Solar Panels", "Emergency Backup System"],
            ),
            client_ar: Some("مستشفى خاص".into()),
            client_en: Some("Private Hospital".into()),
        },
        SiteProject {
            id: 6,
            slug: Some("farm-aden-agricultural".into()),
            title_ar: "نظام طاقة شمسية لمزرعة - عدن".into(),
            title_en: "Solar System for Farm - Aden".into(),
            desc_ar: "نظام طاقة شمسية لتشغيل مضخات الري والمعدات الزراعية بكفاءة عالية".into(),
            desc_en: "Solar system to power irrigation pumps and agricultural equipment efficiently".into(),
            project_type: ProjectType::Agricultural,
            location: LocalizedPair::new("عدن", "Aden"),
            system_size: "15 kW".into(),
            battery_capacity: "21.6 kWh".into(),
            panels: 27,
            date: "2023".into(),
            images: Vec::new(),
            features: LocalizedList::default(),
            client_ar: Some("مزرعة خاصة".into()),
            client_en: Some("Private Farm".into()),
        },
    ]
}

//! Static copy and asset tables for the landing page.

use crate::render::animator::Decoration;
use crate::render::animator::HorizontalAnchor::{Left, Right};

pub const BRAND: &str = "One";
pub const SITE_NAME: &str = "มหาiDea";

pub const HERO_COPY: [&str; 4] = [
    "ONE is a close circle of established studios making unconventional work at scale.",
    "Our holistic approach brings together strategy, creative and production, combining focused research and bespoke tools to build hybrid worlds in physical and digital space.",
    "ONE is mutually owned and horizontally structured: a working model intended for range and transparency.",
    "We think in multiple languages and time zones, harnessing an evolving roster of disciplines to conceive and generate immersive experiences beyond what is possible alone.",
];

pub const HERO_POSTER: &str = "hero-poster.jpg";
pub const EVENT_MAP: &str = "event-map.webp";

pub const FACEBOOK_URL: &str = "https://www.facebook.com/share/1C56T8ZFcm/?mibextid=wwXIfr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Studio {
    pub name: &'static str,
    pub url: &'static str,
}

pub const STUDIOS: [Studio; 6] = [
    Studio { name: "Nic Hamilton", url: "https://nichamilton.com" },
    Studio { name: "Traum Inc", url: "https://trauminc.com" },
    Studio { name: "Valtteri Laihanen", url: "https://valtterilaihanen.com" },
    Studio { name: "International Magic", url: "https://internationalmagic.com" },
    Studio { name: "The Experience Machine", url: "https://theexperiencemachine.com" },
    Studio { name: "Novembre Global", url: "https://novembreglobal.com" },
];

pub const PARTNERS_HEADING: &str = "เครือข่ายความร่วมมือ (Partners)";
pub const PARTNERS: [&[&str]; 2] = [
    &["เทศบาลนครตรัง", "มหาวิทยาลัยสงขลานครินทร์ (PSU)", "PLAN TOYS", "โรงแรมพาริมา"],
    &["กลุ่มเด็กตรังอาสา", "ซน space", "ครอบครัวยิ้ม", "ห้องสรรพของเก่า RATCHATANEE"],
];
pub const PARTNERS_CTA: &str = "ติดต่อสอบถาม";

/// The upcoming event advertised over the map banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCard {
    pub badge: &'static str,
    pub name: &'static str,
    pub dates: &'static str,
    pub venue: &'static str,
}

pub const UPCOMING_EVENT: EventCard = EventCard {
    badge: "UPCOMING EVENT",
    name: "งานมหาไอเดีย",
    dates: "12-14 กุมภาพันธ์ นี้",
    venue: "สวนสาธารณะกะพังสุรินทร์ จ.ตรัง",
};

pub const WORDS: [&str; 59] = [
    "fluid", "terrain", "listening", "a platform", "protein", "universal",
    "branching", "generative", "rendering", "animation", "structure", "building",
    "R&D", "applications", "here today gone tomorrow", "decentralised", "yes and no",
    "BIPP", "a moment", "doing better", "capturing", "a window", "bits",
    "narrative spaces", "coming together", "not there", "art", "famous", "global",
    "virtual", "generalist", "engaged", "exhibitions", "unexpected", "yottabytes",
    "an edge", "form", "not an angel", "points", "meshed reality", "platforms",
    "iterating", "what you don't need yet", "learning", "speculative", "at home anywhere",
    "in fashion", "in sync", "learning by making", "culture", "open", "realtime",
    "physical", "cells", "high resolution", "dots", "future audiences", "all of the above", "light",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Work {
    pub title: &'static str,
    pub studio: &'static str,
    pub image: &'static str,
}

pub const WORKS: [Work; 4] = [
    Work {
        title: "ทักษะใหม่",
        studio: "Digital Skills (พี่หมู)",
        image: "https://images.unsplash.com/photo-1531482615713-2afd69097998?w=800&q=80",
    },
    Work {
        title: "แม่ปลูกผัก",
        studio: "Health & Learning",
        image: "https://images.unsplash.com/photo-1592419044706-39796d40f98c?w=800&q=80",
    },
    Work {
        title: "Graphic Design",
        studio: "Canva Course (น้องเจน)",
        image: "https://images.unsplash.com/photo-1626785774573-4b799314346d?w=800&q=80",
    },
    Work {
        title: "Community Events",
        studio: "คนคอเดียวกัน",
        image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=800&q=80",
    },
];

pub const FOOTER_HEADING: &str = "ติดตามข่าวสาร มหาiDea";
pub const FOOTER_TAGLINE: &str = "ย่านชุมชนในตลาด และพื้นที่ตำบลห้วยยอด จังหวัดตรัง";
pub const FOOTER_CTA: &str = "ติดตาม";

pub const HUMAN_BOOKS_HEADING: &str = "หนังสือคน (Human Books)";
pub const HUMAN_BOOKS_BLURB: &str = "ทำความรู้จักผู้คนที่พร้อมให้คุณ \"อ่าน\" เรื่องราว ประสบการณ์ และความหลงใหลของพวกเขา";
pub const HUMAN_BOOKS_CTA: &str = "เปิดดูหนังสือคน";

/// Scattered artwork behind the sections below the hero.
///
/// Widths mirror Tailwind's `w-N` scale (4px per step).
pub const DECORATIONS: [Decoration; 13] = [
    // Introduction
    Decoration { id: "1", asset: "Artboard1.png", top_pct: 5.0, anchor: Right(5.0), width: 192.0, width_md: 256.0, speed: 0.2 },
    Decoration { id: "2", asset: "Artboard2.png", top_pct: 12.0, anchor: Left(5.0), width: 128.0, width_md: 192.0, speed: -0.1 },
    // Studios
    Decoration { id: "3", asset: "Artboard3.png", top_pct: 25.0, anchor: Right(10.0), width: 48.0, width_md: 80.0, speed: 0.15 },
    Decoration { id: "4", asset: "Artboard4.png", top_pct: 35.0, anchor: Left(8.0), width: 192.0, width_md: 256.0, speed: -0.15 },
    // Collaboration
    Decoration { id: "5", asset: "Artboard5.png", top_pct: 45.0, anchor: Right(2.0), width: 144.0, width_md: 208.0, speed: 0.1 },
    Decoration { id: "6", asset: "Artboard6.png", top_pct: 55.0, anchor: Left(12.0), width: 224.0, width_md: 288.0, speed: -0.2 },
    // Word cloud
    Decoration { id: "7", asset: "Artboard7.png", top_pct: 65.0, anchor: Right(15.0), width: 128.0, width_md: 192.0, speed: 0.25 },
    Decoration { id: "8", asset: "Artboard8.png", top_pct: 72.0, anchor: Left(5.0), width: 160.0, width_md: 224.0, speed: -0.1 },
    // Works and footer
    Decoration { id: "9", asset: "Artboard9.png", top_pct: 80.0, anchor: Right(8.0), width: 176.0, width_md: 240.0, speed: 0.15 },
    Decoration { id: "10", asset: "Artboard10.png", top_pct: 88.0, anchor: Left(10.0), width: 144.0, width_md: 208.0, speed: -0.15 },
    // Extra scatter
    Decoration { id: "11", asset: "Artboard11.png", top_pct: 18.0, anchor: Right(25.0), width: 96.0, width_md: 128.0, speed: 0.3 },
    Decoration { id: "12", asset: "Artboard12.png", top_pct: 40.0, anchor: Left(20.0), width: 112.0, width_md: 160.0, speed: -0.25 },
    Decoration { id: "17", asset: "Page 1.png", top_pct: 92.0, anchor: Right(5.0), width: 160.0, width_md: 256.0, speed: 0.1 },
];

/// Relative asset path of a decoration.
pub fn decoration_asset(decoration: &Decoration) -> String {
    format!("png/{}", decoration.asset)
}

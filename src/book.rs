//! Human book presentation: alias tables, card/detail views and the
//! dialog's list/detail selection.

use std::time::{Duration, Instant};

use crate::net::image::normalize_image_url;
use crate::record::Record;

/// Alias lists for each display field, primary Thai header first.
pub mod fields {
    pub const TITLE: &[&str] = &["ชื่อหนังสือ", "Title", "ชื่อเรื่อง"];
    /// Narrower list used by route lookup and detail headings.
    pub const TITLE_STRICT: &[&str] = &["ชื่อหนังสือ", "Title"];
    /// The sheet has used both an en dash and a hyphen in this header.
    pub const NAME: &[&str] = &[
        "ชื่อ–นามสกุล (โปรดระบุคำนำหน้านาม)",
        "ชื่อ-นามสกุล (โปรดระบุคำนำหน้านาม)",
        "Name",
    ];
    pub const SUMMARY: &[&str] = &["ประวัติโดยย่อ", "Description", "สิ่งที่อยากแบ่งปัน"];
    pub const BIO: &[&str] = &["ประวัติโดยย่อ", "Description"];
    pub const CATEGORY: &[&str] = &["หมวดหมู่", "Category"];
    pub const CARD_IMAGE: &[&str] = &["รูปภาพตัวเองรูปที่ 1", "Image", "image", "รูปภาพ"];
    pub const PORTRAIT: &[&str] = &["รูปภาพตัวเองรูปที่ 1", "Image", "image"];
    pub const PORTRAIT_FALLBACK: &[&str] = &["รูปภาพตัวเองรูปที่ 2"];
    pub const AGE: &[&str] = &["อายุ"];
    pub const OCCUPATION: &[&str] = &["อาชีพ", "ปัจจุบันกำลังทำอะไรอยู่"];
    pub const ROLE: &[&str] = &["บทบาทในสังคม"];
    pub const MOTTO: &[&str] = &["คติประจำใจ/เป้าหมายของชีวิต"];
    pub const PASSION: &[&str] = &["อะไรทำให้คุณหลงไหลในสิ่งที่อยากแบ่งปัน"];
    pub const SHARING: &[&str] = &["สิ่งที่อยากแบ่งปัน"];
    pub const PROUD_WORK: &[&str] = &["ผลงาน/ประสบการณ์ที่ภูมิใจอยากเล่า"];
    pub const TECHNIQUE: &[&str] = &["เทคนิคลับ/ประสบการณ์เฉพาะตัว"];
    pub const TALENTS: &[&str] = &["ความสามารถ"];
    pub const ADDRESS: &[&str] = &["ที่อยู่"];
    pub const PHONE: &[&str] = &["เบอร์โทรศัพท์"];
    pub const CONTACT: &[&str] = &["ช่องทางการติดต่อ/ติดตาม"];
}

pub const PLACEHOLDER: &str = "-";
pub const UNTITLED: &str = "ไม่มีชื่อเรื่อง";
pub const DEFAULT_CATEGORY: &str = "Human Book";

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// The title a record answers to in `/human-book/<title>` links.
pub fn lookup_title(record: &Record) -> &str {
    record.resolve(fields::TITLE_STRICT)
}

/// What a grid card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub category: Option<String>,
    /// Direct image URL, `None` draws the book glyph.
    pub image_url: Option<String>,
}

impl BookCard {
    pub fn from_record(record: &Record) -> Self {
        let title = record.resolve(fields::TITLE);
        Self {
            title: if title.is_empty() {
                UNTITLED.to_string()
            } else {
                title.to_string()
            },
            author: record.resolve(fields::NAME).to_string(),
            summary: or_placeholder(record.resolve(fields::SUMMARY)),
            category: optional(record.resolve(fields::CATEGORY)),
            image_url: optional(&normalize_image_url(record.resolve(fields::CARD_IMAGE))),
        }
    }
}

/// Everything the detail view (dialog or full page) renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub title: String,
    pub author: String,
    pub category: String,
    pub portrait_url: Option<String>,
    pub age: Option<String>,
    pub occupation: Option<String>,
    pub role: Option<String>,
    pub motto: Option<String>,
    pub bio: String,
    pub passion: String,
    pub sharing: String,
    pub proud_work: String,
    pub technique: String,
    pub talents: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub contact: String,
}

impl BookDetail {
    pub fn from_record(record: &Record) -> Self {
        let category = record.resolve(fields::CATEGORY);
        let primary = normalize_image_url(record.resolve(fields::PORTRAIT));
        let portrait = if primary.is_empty() {
            normalize_image_url(record.resolve(fields::PORTRAIT_FALLBACK))
        } else {
            primary
        };
        Self {
            title: record.resolve(fields::TITLE_STRICT).to_string(),
            author: record.resolve(fields::NAME).to_string(),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            portrait_url: optional(&portrait),
            age: optional(record.resolve(fields::AGE)),
            occupation: optional(record.resolve(fields::OCCUPATION)),
            role: optional(record.resolve(fields::ROLE)),
            motto: optional(record.resolve(fields::MOTTO)),
            bio: or_placeholder(record.resolve(fields::BIO)),
            passion: or_placeholder(record.resolve(fields::PASSION)),
            sharing: or_placeholder(record.resolve(fields::SHARING)),
            proud_work: or_placeholder(record.resolve(fields::PROUD_WORK)),
            technique: or_placeholder(record.resolve(fields::TECHNIQUE)),
            talents: or_placeholder(record.resolve(fields::TALENTS)),
            address: optional(record.resolve(fields::ADDRESS)),
            phone: optional(record.resolve(fields::PHONE)),
            contact: or_placeholder(record.resolve(fields::CONTACT)),
        }
    }
}

/// A record picked from the grid, kept as a copy so a refresh of the list
/// does not change what is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Position in the list at the time of the click.
    pub index: usize,
    pub record: Record,
}

/// Selection is cleared this long after the dialog closes, once the close
/// animation would have finished.
pub const CLEAR_DELAY: Duration = Duration::from_millis(300);

/// Open/close and list/detail state of the human book dialog.
#[derive(Debug, Clone, Default)]
pub struct BookBrowser {
    open: bool,
    selected: Option<Selection>,
    clear_at: Option<Instant>,
}

impl BookBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog. Returns true when the caller should (re)fetch.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        true
    }

    /// Close the dialog; the selection is dropped after [`CLEAR_DELAY`].
    pub fn close(&mut self, now: Instant) {
        if !self.open {
            return;
        }
        self.open = false;
        self.clear_at = Some(now + CLEAR_DELAY);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn select(&mut self, index: usize, record: &Record) {
        self.selected = Some(Selection {
            index,
            record: record.clone(),
        });
    }

    /// Back from the detail view to the card grid.
    pub fn back_to_list(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// Run the delayed clear. A clear scheduled by an earlier close still
    /// fires if the dialog was reopened in between.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.clear_at {
            if now >= at {
                self.selected = None;
                self.clear_at = None;
            }
        }
    }

    /// When the next delayed clear is due, for repaint scheduling.
    pub fn pending_clear(&self) -> Option<Instant> {
        self.clear_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        [
            ("ชื่อหนังสือ", "ทดสอบ"),
            ("ชื่อ-นามสกุล (โปรดระบุคำนำหน้านาม)", "นายสมชาย ใจดี"),
            ("หมวดหมู่ ", "อาชีพ"),
            ("อายุ", "45"),
            ("รูปภาพตัวเองรูปที่ 1", "https://drive.google.com/open?id=PIC1"),
            ("ประวัติโดยย่อ", ""),
            ("สิ่งที่อยากแบ่งปัน", "การทำขนม"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn card_view_resolves_aliases() {
        let card = BookCard::from_record(&sample());
        assert_eq!(card.title, "ทดสอบ");
        assert_eq!(card.author, "นายสมชาย ใจดี");
        // empty bio falls through to the sharing alias
        assert_eq!(card.summary, "การทำขนม");
        assert_eq!(card.category.as_deref(), Some("อาชีพ"));
        assert_eq!(
            card.image_url.as_deref(),
            Some("https://lh3.googleusercontent.com/d/PIC1")
        );
    }

    #[test]
    fn card_view_placeholders() {
        let card = BookCard::from_record(&Record::new());
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.author, "");
        assert_eq!(card.summary, PLACEHOLDER);
        assert_eq!(card.category, None);
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn detail_view_placeholders_and_optionals() {
        let detail = BookDetail::from_record(&sample());
        assert_eq!(detail.title, "ทดสอบ");
        assert_eq!(detail.category, "อาชีพ");
        assert_eq!(detail.age.as_deref(), Some("45"));
        assert_eq!(detail.occupation, None);
        assert_eq!(detail.bio, PLACEHOLDER);
        assert_eq!(detail.sharing, "การทำขนม");
        assert_eq!(detail.contact, PLACEHOLDER);

        let empty = BookDetail::from_record(&Record::new());
        assert_eq!(empty.category, DEFAULT_CATEGORY);
        assert_eq!(empty.portrait_url, None);
    }

    #[test]
    fn portrait_falls_back_to_second_picture() {
        let record: Record = [("รูปภาพตัวเองรูปที่ 2", "https://example.com/b.jpg")]
            .into_iter()
            .collect();
        let detail = BookDetail::from_record(&record);
        assert_eq!(detail.portrait_url.as_deref(), Some("https://example.com/b.jpg"));
    }

    #[test]
    fn en_dash_name_header_wins() {
        let record: Record = [
            ("ชื่อ–นามสกุล (โปรดระบุคำนำหน้านาม)", "En Dash"),
            ("ชื่อ-นามสกุล (โปรดระบุคำนำหน้านาม)", "Hyphen"),
        ]
        .into_iter()
        .collect();
        assert_eq!(BookDetail::from_record(&record).author, "En Dash");
    }

    #[test]
    fn selection_survives_until_delayed_clear() {
        let now = Instant::now();
        let mut browser = BookBrowser::new();
        assert!(browser.open());
        assert!(!browser.open());
        browser.select(2, &sample());
        assert_eq!(browser.selected().map(|s| s.index), Some(2));

        browser.close(now);
        assert!(!browser.is_open());
        browser.tick(now + Duration::from_millis(100));
        assert!(browser.selected().is_some());
        browser.tick(now + CLEAR_DELAY);
        assert!(browser.selected().is_none());
        assert!(browser.pending_clear().is_none());
    }

    #[test]
    fn back_to_list_clears_selection() {
        let mut browser = BookBrowser::new();
        browser.open();
        browser.select(0, &sample());
        browser.back_to_list();
        assert!(browser.selected().is_none());
        assert!(browser.is_open());
    }
}

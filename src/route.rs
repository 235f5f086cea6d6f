//! In-app routes and human book detail addressing.
//!
//! `/human-book/:id` addresses a record by its position in the freshly
//! fetched list, falling back to its percent-decoded title. Positions
//! shift whenever the upstream sheet is reordered; that is accepted.

use percent_encoding::percent_decode_str;
use thiserror::Error;

use crate::book::lookup_title;
use crate::record::Record;

pub const BOOK_PREFIX: &str = "/human-book/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page at '{0}'")]
    UnknownPath(String),
    #[error("missing human book id in '{0}'")]
    MissingId(String),
}

/// Where the landing page should scroll after navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    HumanBooks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing { anchor: Option<Anchor> },
    /// Raw (still percent-encoded) id segment.
    HumanBook { id: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Landing { anchor: None }
    }
}

impl Route {
    /// Parse an app path. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim();
        let without_fragment = trimmed.split('#').next().unwrap_or_default();
        let bare = without_fragment.split('?').next().unwrap_or_default();
        let bare = if bare.len() > 1 {
            bare.strip_suffix('/').unwrap_or(bare)
        } else {
            bare
        };

        if bare.is_empty() || bare == "/" {
            return Ok(Route::default());
        }
        if let Some(id) = bare.strip_prefix(BOOK_PREFIX) {
            if id.is_empty() || id.contains('/') {
                return Err(RouteError::MissingId(path.to_string()));
            }
            return Ok(Route::HumanBook { id: id.to_string() });
        }
        if bare == BOOK_PREFIX.trim_end_matches('/') {
            return Err(RouteError::MissingId(path.to_string()));
        }
        Err(RouteError::UnknownPath(path.to_string()))
    }

    /// Link for the record at `index` in the current list.
    pub fn human_book(index: usize) -> Route {
        Route::HumanBook {
            id: index.to_string(),
        }
    }

    pub fn landing_at(anchor: Anchor) -> Route {
        Route::Landing {
            anchor: Some(anchor),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing { .. } => "/".to_string(),
            Route::HumanBook { id } => format!("{BOOK_PREFIX}{id}"),
        }
    }
}

/// Parse a leading decimal integer: optional whitespace and sign, then as
/// many digits as follow. Trailing characters are ignored, and so are radix
/// prefixes: `"0x2"` reads as `0`. `None` when no digit is found.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Strict percent decoding: a stray `%` or invalid UTF-8 is an error.
pub fn decode_component(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() >= i + 3
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Pick the record a `/human-book/:id` page shows.
///
/// A parsed index inside the list wins; otherwise the decoded id is matched
/// against each record's title and the first equal one is returned.
pub fn select_detail<'a>(records: &'a [Record], id: &str) -> Option<(usize, &'a Record)> {
    if let Some(index) = parse_leading_int(id) {
        if let Ok(index) = usize::try_from(index) {
            if let Some(record) = records.get(index) {
                return Some((index, record));
            }
        }
    }

    let title = decode_component(id)?;
    records
        .iter()
        .enumerate()
        .find(|(_, record)| lookup_title(record) == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(titles: &[&str]) -> Vec<Record> {
        titles
            .iter()
            .map(|t| [("ชื่อหนังสือ", *t)].into_iter().collect())
            .collect()
    }

    #[test]
    fn parses_paths() {
        assert_eq!(Route::parse("/"), Ok(Route::default()));
        assert_eq!(Route::parse(""), Ok(Route::default()));
        assert_eq!(
            Route::parse("/human-book/3"),
            Ok(Route::HumanBook { id: "3".into() })
        );
        assert_eq!(
            Route::parse("/human-book/%E0%B8%97/?x=1#top"),
            Ok(Route::HumanBook {
                id: "%E0%B8%97".into()
            })
        );
        assert!(matches!(
            Route::parse("/human-book/"),
            Err(RouteError::MissingId(_))
        ));
        assert!(matches!(
            Route::parse("/human-book/a/b"),
            Err(RouteError::MissingId(_))
        ));
        assert!(matches!(
            Route::parse("/about"),
            Err(RouteError::UnknownPath(_))
        ));
    }

    #[test]
    fn paths_round_trip() {
        assert_eq!(Route::human_book(4).path(), "/human-book/4");
        assert_eq!(Route::landing_at(Anchor::HumanBooks).path(), "/");
    }

    #[test]
    fn leading_int_matches_parse_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7abc"), Some(7));
        assert_eq!(parse_leading_int("-1"), Some(-1));
        assert_eq!(parse_leading_int("+2"), Some(2));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn leading_int_is_always_decimal() {
        assert_eq!(parse_leading_int("0x2"), Some(0));
        assert_eq!(parse_leading_int("010"), Some(10));
        let list = books(&["a", "b", "c"]);
        assert_eq!(select_detail(&list, "0x2").map(|(i, _)| i), Some(0));
    }

    #[test]
    fn index_selects_record() {
        let list = books(&["a", "b", "c"]);
        let (index, record) = select_detail(&list, "1").unwrap();
        assert_eq!(index, 1);
        assert_eq!(lookup_title(record), "b");
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let list = books(&["a", "b"]);
        assert!(select_detail(&list, "2").is_none());
        assert!(select_detail(&list, "-1").is_none());
        assert!(select_detail(&list, "99999999999999999999").is_none());
        assert!(select_detail(&[], "0").is_none());
    }

    #[test]
    fn title_fallback_decodes_id() {
        let list = books(&["สวนผัก", "Hello World"]);
        let (index, _) = select_detail(&list, "Hello%20World").unwrap();
        assert_eq!(index, 1);
        let encoded = "%E0%B8%AA%E0%B8%A7%E0%B8%99%E0%B8%9C%E0%B8%B1%E0%B8%81";
        assert_eq!(select_detail(&list, encoded).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn numeric_title_reached_when_index_misses() {
        let list = books(&["first", "2024"]);
        assert_eq!(select_detail(&list, "2024").map(|(i, _)| i), Some(1));
    }

    #[test]
    fn malformed_encoding_is_not_found() {
        let list = books(&["100%"]);
        assert!(select_detail(&list, "100%").is_none());
        assert!(select_detail(&list, "%zz").is_none());
        assert_eq!(select_detail(&list, "100%25").map(|(i, _)| i), Some(0));
        assert_eq!(decode_component("100%25").as_deref(), Some("100%"));
    }
}

//! Loosely-structured remote records and alias-tolerant field lookup.
//!
//! The sheet bridge returns flat objects whose keys drift between rows:
//! Thai or English names, stray spaces around a header, numbers where a
//! string was expected. `Record` keeps every field as text in payload order
//! and `resolve_field` reads a display value through a list of aliases.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One row from the remote sheet.
///
/// Empty and absent fields are indistinguishable to readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field. A repeated key overwrites the value but keeps its slot.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in payload order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Shorthand for [`resolve_field`].
    pub fn resolve(&self, keys: &[&str]) -> &str {
        resolve_field(self, keys)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(map
            .into_iter()
            .map(|(k, v)| (k, value_to_text(v)))
            .collect())
    }
}

/// Sheet cells come back as JSON scalars; everything is shown as text.
fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Read the first non-empty value among `keys`.
///
/// Exact key matches are tried for every alias before any whitespace-
/// tolerant match. The tolerant pass compares trimmed keys and only looks
/// at the first key (in payload order) that trims to the alias. Returns
/// `""` when nothing yields a value.
pub fn resolve_field<'a>(record: &'a Record, keys: &[&str]) -> &'a str {
    for key in keys {
        if let Some(value) = record.get(key) {
            if !value.is_empty() {
                return value;
            }
        }
    }

    for key in keys {
        let wanted = key.trim();
        let found = record.fields.iter().find(|(k, _)| k.trim() == wanted);
        if let Some((_, value)) = found {
            if !value.is_empty() {
                return value;
            }
        }
    }

    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn primary_alias_wins_over_empty_fallback() {
        let r = record(&[("ชื่อหนังสือ", "ทดสอบ"), ("Title", "")]);
        assert_eq!(resolve_field(&r, &["ชื่อหนังสือ", "Title"]), "ทดสอบ");
    }

    #[test]
    fn empty_primary_falls_through_to_next_alias() {
        let r = record(&[("ชื่อหนังสือ", ""), ("Title", "English")]);
        assert_eq!(resolve_field(&r, &["ชื่อหนังสือ", "Title"]), "English");
    }

    #[test]
    fn trimmed_key_fallback() {
        let r = record(&[(" Title ", "Hello")]);
        assert_eq!(resolve_field(&r, &["Title"]), "Hello");
    }

    #[test]
    fn exact_match_on_later_alias_beats_trimmed_match_on_earlier() {
        let r = record(&[(" ชื่อหนังสือ", "padded"), ("Title", "exact")]);
        assert_eq!(resolve_field(&r, &["ชื่อหนังสือ", "Title"]), "exact");
    }

    #[test]
    fn trimmed_candidate_matches_clean_key() {
        let r = record(&[("อายุ", "42")]);
        assert_eq!(resolve_field(&r, &[" อายุ "]), "42");
    }

    #[test]
    fn nothing_found_is_empty() {
        let r = record(&[("Other", "x"), ("Title", "")]);
        assert_eq!(resolve_field(&r, &["Title", "Name"]), "");
        assert_eq!(resolve_field(&Record::new(), &["Title"]), "");
        assert_eq!(resolve_field(&r, &[]), "");
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut r = record(&[("a", "1"), ("b", "2")]);
        r.insert("a", "3");
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.get("a"), Some("3"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn deserializes_scalars_as_text() {
        let json = r#"{"Title":"Book","อายุ":42,"flag":true,"gone":null}"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.get("Title"), Some("Book"));
        assert_eq!(r.get("อายุ"), Some("42"));
        assert_eq!(r.get("flag"), Some("true"));
        assert_eq!(r.get("gone"), Some(""));
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["Title", "อายุ", "flag", "gone"]);
    }

    #[test]
    fn rejects_non_object_rows() {
        assert!(serde_json::from_str::<Record>("[1,2]").is_err());
    }
}

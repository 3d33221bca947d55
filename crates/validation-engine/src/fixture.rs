//! Fixture records of expected field values.
//!
//! Upstream test data names its columns inconsistently (`firstName`,
//! `firstname`, `first_name`), so keys are normalized once at construction
//! instead of falling back per lookup.

use std::collections::HashMap;

/// One record of expected field values driving a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct Fixture {
    values: HashMap<String, String>,
}

/// Lowercases a key and drops underscores, collapsing the camelCase and
/// snake_lowercase naming variants onto one canonical form.
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .to_lowercase()
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(normalize_key(key), value.into());
    }

    /// Looks up an expected value under any naming variant of `key`.
    /// A missing key reads as empty; the field is still validated and
    /// reported rather than skipped.
    pub fn get(&self, key: &str) -> &str {
        self.values
            .get(&normalize_key(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(&normalize_key(key))
    }
}

impl From<HashMap<String, String>> for Fixture {
    fn from(raw: HashMap<String, String>) -> Self {
        let mut fixture = Fixture::new();
        for (key, value) in raw {
            fixture.insert(&key, value);
        }
        fixture
    }
}

impl From<Fixture> for HashMap<String, String> {
    fn from(fixture: Fixture) -> Self {
        fixture.values
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Fixture {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fixture = Fixture::new();
        for (key, value) in iter {
            fixture.insert(key.as_ref(), value);
        }
        fixture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_and_snake_case_collapse() {
        let mut fixture = Fixture::new();
        fixture.insert("firstName", "symonds");
        assert_eq!(fixture.get("firstname"), "symonds");
        assert_eq!(fixture.get("first_name"), "symonds");
        assert_eq!(fixture.get("FirstName"), "symonds");
    }

    #[test]
    fn test_missing_key_reads_empty() {
        let fixture = Fixture::new();
        assert_eq!(fixture.get("city"), "");
        assert!(!fixture.contains("city"));
    }

    #[test]
    fn test_deserializes_from_plain_map() {
        let fixture: Fixture =
            serde_json::from_str(r#"{"first_name": "symonds", "city": "jay"}"#).unwrap();
        assert_eq!(fixture.get("firstname"), "symonds");
        assert_eq!(fixture.get("city"), "jay");
    }
}

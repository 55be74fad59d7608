//! Location descriptor: the query parameters of a shareable URL.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Ordered query parameters of a location.
///
/// Keys keep their insertion order so that serializing the same state always
/// yields the same query string. When a key appears more than once, lookups see
/// the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationDescriptor {
    params: Vec<(String, String)>,
}

impl LocationDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query, with or without the leading `?`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes()).into_owned().collect()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key`, overwriting the first existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocationDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<&str> for LocationDescriptor {
    fn from(query: &str) -> Self {
        Self::from_query_string(query)
    }
}

impl FromStr for LocationDescriptor {
    type Err = Infallible;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_query_string(query))
    }
}

impl Display for LocationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        let a = LocationDescriptor::from_query_string("?category=c1&page=3");
        let b = LocationDescriptor::from_query_string("category=c1&page=3");
        assert_eq!(a, b);
        assert_eq!(a.get("category"), Some("c1"));
        assert_eq!(a.get("page"), Some("3"));
    }

    #[test]
    fn first_duplicate_wins() {
        let loc = LocationDescriptor::from_query_string("brand=b1&brand=b2");
        assert_eq!(loc.get("brand"), Some("b1"));
    }

    #[test]
    fn encodes_spaces_and_reserved_characters() {
        let loc: LocationDescriptor = [("query", "red shoes & socks")].into_iter().collect();
        let qs = loc.to_query_string();
        assert_eq!(qs, "query=red+shoes+%26+socks");
        assert_eq!(LocationDescriptor::from_query_string(&qs), loc);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut loc: LocationDescriptor = [("query", "a"), ("page", "2")].into_iter().collect();
        loc.insert("query", "b");
        assert_eq!(loc.to_query_string(), "query=b&page=2");
        loc.insert("brand", "x");
        assert_eq!(loc.len(), 3);
    }

    #[test]
    fn empty_query_is_empty_descriptor() {
        assert!(LocationDescriptor::from_query_string("").is_empty());
        assert!(LocationDescriptor::from_query_string("?").is_empty());
        assert_eq!(LocationDescriptor::new().to_string(), "");
    }
}

// src/domain/raw.rs

use serde_json::{Map, Value};

// RawListing
//  ├── price | listPrice
//  ├── address.full | unparsedAddress
//  ├── photos | images | media[.photos]
//  ├── bedrooms | beds, bathrooms | baths, livingArea | sqft | squareFeet
//  ├── latitude, longitude
//  ├── virtualTourUrl, videoTourUrl
//  └── property
//       └── (any of the above, one level down)

/// A listing payload exactly as received from the search API, a parent frame
/// or a fixture. Nothing about its shape is trusted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawListing(Value);

/// An ordered list of dotted accessor paths, tried first to last.
pub type Paths<'a> = &'a [&'a str];

impl RawListing {
    /// Wraps any JSON value. Non-objects behave like an empty mapping.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(_) => Self(value),
            _ => Self(Value::Object(Map::new())),
        }
    }

    /// Looks up a dotted path like `property.address.full`.
    /// `null` counts as absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;
        for key in path.split('.') {
            current = current.as_object()?.get(key)?;
        }
        (!current.is_null()).then_some(current)
    }

    /// Tries every path in order and returns the first value the mapper accepts.
    pub fn first<T>(&self, paths: Paths<'_>, mut map: impl FnMut(&Value) -> Option<T>) -> Option<T> {
        paths.iter().find_map(|path| self.get(path).and_then(&mut map))
    }

    /// First non-empty string among the paths.
    pub fn first_text(&self, paths: Paths<'_>) -> Option<String> {
        self.first(paths, |v| v.as_str().filter(|s| !s.trim().is_empty()).map(str::to_string))
    }

    /// Top-level keys, used for debug logging of unfamiliar payloads.
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for RawListing {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

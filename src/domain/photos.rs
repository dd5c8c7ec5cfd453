// src/domain/photos.rs

use serde_json::Value;

use super::raw::{Paths, RawListing};

/// Where listing feeds usually keep their photo arrays, most specific first.
const PRIMARY_PATHS: Paths<'static> = &[
    "photos",
    "property.photos",
    "media.photos",
    "property.media.photos",
    "images",
    "property.images",
    "media",
    "property.media",
];

/// Rarer nesting seen in wrapped or re-exported payloads.
const SECONDARY_PATHS: Paths<'static> = &[
    "listing.photos",
    "data.photos",
    "property.listing.photos",
    "media.images",
    "property.media.images",
    "gallery",
    "property.gallery",
];

/// Keys that may hold the URL when a photo is an object.
const URL_KEYS: &[&str] = &[
    "url", "full", "lg", "large", "src", "href", "original", "image", "permalink",
];

/// Extracts an ordered, de-duplicated list of photo URLs.
/// Returns an empty list when nothing usable is found.
pub fn extract_photos(raw: &RawListing) -> Vec<String> {
    let primary = scan(raw, PRIMARY_PATHS);
    if !primary.is_empty() {
        return primary;
    }

    let secondary = scan(raw, SECONDARY_PATHS);
    if !secondary.is_empty() {
        tracing::debug!(count = secondary.len(), "photos found in secondary locations");
    }
    secondary
}

// First candidate array that yields at least one URL.
fn scan(raw: &RawListing, paths: Paths<'_>) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| raw.get(path).and_then(Value::as_array))
        .filter(|items| !items.is_empty())
        .map(|items| collect_urls(items))
        .find(|urls| !urls.is_empty())
        .unwrap_or_default()
}

fn collect_urls(items: &[Value]) -> Vec<String> {
    let mut urls: Vec<String> = Vec::with_capacity(items.len());
    for url in items.iter().filter_map(photo_url) {
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

/// A photo is either a bare URL string or an object with one of [`URL_KEYS`].
pub fn photo_url(item: &Value) -> Option<String> {
    let text = match item {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => URL_KEYS
            .iter()
            .find_map(|k| obj.get(*k).and_then(Value::as_str).filter(|s| !s.is_empty())),
        _ => None,
    }?;

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

// src/domain/frame.rs

use serde_json::Value;
use url::Url;

use super::raw::RawListing;

/// Message type a parent page uses to hand over its listing.
pub const LISTING_MESSAGE_TYPE: &str = "OFG_LISTING";

/// Checks a cross-frame message and returns its listing when it can be trusted.
///
/// The sender origin must be a URL whose hostname ends with `trusted_suffix`,
/// and the message must look like `{ "type": "OFG_LISTING", "listing": {..} }`.
pub fn accept_frame_message(
    origin: &str,
    message: &Value,
    trusted_suffix: &str,
) -> Option<RawListing> {
    if !origin_is_trusted(origin, trusted_suffix) {
        tracing::warn!(origin, "ignoring frame message from untrusted origin");
        return None;
    }

    if message.get("type").and_then(Value::as_str) != Some(LISTING_MESSAGE_TYPE) {
        tracing::debug!(origin, "ignoring frame message of another type");
        return None;
    }

    match message.get("listing") {
        Some(listing) if !listing.is_null() => Some(RawListing::new(listing.clone())),
        _ => None,
    }
}

pub fn origin_is_trusted(origin: &str, trusted_suffix: &str) -> bool {
    if trusted_suffix.is_empty() {
        return false;
    }

    Url::parse(origin)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| host.ends_with(&trusted_suffix.to_ascii_lowercase()))
}

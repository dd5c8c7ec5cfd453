// handlers/listing.rs
use crate::domain::{accept_frame_message, demo_listing, normalize, NormalizedListing};
use crate::errors::ServerError;
use crate::responses::{html_response, no_content, ResultResp};
use crate::router::{parse_query, read_body};
use crate::state::AppState;
use crate::templates::pages::{listing_content, listing_page, ListingView};
use astra::Request;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

const EMBED_BODY_LIMIT: usize = 512 * 1024;

/// What the page script forwards for every cross-frame message.
#[derive(Debug, Deserialize)]
struct FrameHandoff {
    #[serde(default)]
    origin: String,
    #[serde(default)]
    data: Value,
}

/// `GET /`: the listing page.
///
/// Without an id, or inside a frame (the parent will post the real listing),
/// the demo listing is shown and no search call is made.
pub fn show(req: &Request, state: &AppState) -> ResultResp {
    let query = parse_query(req);
    let id = query.get("id").map(|s| s.trim()).filter(|s| !s.is_empty());
    let embedded = is_embedded(req, &query);

    let raw = match id {
        None => demo_listing(),
        Some(id) if embedded => {
            tracing::debug!(id, "embedded page, showing demo until the parent posts");
            demo_listing()
        }
        Some(id) => state.listings.find_by_id(id)?,
    };

    let listing = normalize(&raw);
    let page_url = req.uri().to_string();
    let view = view_for(&listing, state, page_url);

    html_response(listing_page(&view))
}

/// `POST /embed`: a listing handed over by the parent frame.
/// Untrusted or unrelated messages get `204` and change nothing.
pub fn embed(req: &mut Request, state: &AppState) -> ResultResp {
    let body = read_body(req, EMBED_BODY_LIMIT)?;
    let handoff: FrameHandoff = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid handoff: {e}")))?;

    let Some(raw) = accept_frame_message(
        &handoff.origin,
        &handoff.data,
        &state.config.trusted_parent_domain,
    ) else {
        return no_content();
    };

    let listing = normalize(&raw);
    tracing::info!(id = %listing.id, origin = %handoff.origin, "listing received from parent frame");

    let view = view_for(&listing, state, "/?embed=1".to_string());
    html_response(listing_content(&view))
}

fn is_embedded(req: &Request, query: &HashMap<String, String>) -> bool {
    let flagged = query
        .get("embed")
        .is_some_and(|v| matches!(v.as_str(), "1" | "true"));
    let framed = req
        .headers()
        .get("sec-fetch-dest")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("iframe"));

    flagged || framed
}

fn view_for<'a>(
    listing: &'a NormalizedListing,
    state: &'a AppState,
    page_url: String,
) -> ListingView<'a> {
    let mut view = ListingView::new(listing, &state.config.agent, page_url);

    if view.location.is_none()
        && state.config.geocode_missing_coordinates
        && !listing.address.is_empty()
    {
        view.location = Some(state.geocoder.locate(&listing.address));
    }

    view
}

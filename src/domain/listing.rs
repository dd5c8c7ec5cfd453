// src/domain/listing.rs

use serde::Serialize;
use serde_json::Value;

use super::coerce::{normalize_baths, to_number};
use super::photos::extract_photos;
use super::raw::{Paths, RawListing};

const ID_PATHS: Paths<'static> = &["id", "listingId", "mlsId", "property.id", "property.listingId"];
const PRICE_PATHS: Paths<'static> = &["price", "listPrice", "property.price", "property.listPrice"];
const ADDRESS_PATHS: Paths<'static> = &[
    "address.full",
    "unparsedAddress",
    "property.address.full",
    "property.unparsedAddress",
];
const BED_PATHS: Paths<'static> = &["bedrooms", "beds", "property.bedrooms", "property.beds"];
const BATH_PATHS: Paths<'static> = &["bathrooms", "baths", "property.bathrooms", "property.baths"];
const AREA_PATHS: Paths<'static> = &[
    "livingArea",
    "sqft",
    "squareFeet",
    "property.livingArea",
    "property.sqft",
];
const LAT_PATHS: Paths<'static> = &["latitude", "property.latitude"];
const LNG_PATHS: Paths<'static> = &["longitude", "property.longitude"];
const VIRTUAL_TOUR_PATHS: Paths<'static> = &["virtualTourUrl", "property.virtualTourUrl"];
const VIDEO_TOUR_PATHS: Paths<'static> = &["videoTourUrl", "property.videoTourUrl"];
const DESCRIPTION_PATHS: Paths<'static> = &[
    "description",
    "remarks",
    "publicRemarks",
    "property.description",
    "property.remarks",
    "property.publicRemarks",
];

/// A listing flattened into primitives the templates can render without
/// further checks. Built once per payload and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedListing {
    pub id: String,
    pub price: Option<f64>,
    pub address: String,
    pub photos: Vec<String>,
    pub bedroom_count: Option<f64>,
    pub bathroom_count: Option<f64>,
    pub living_area_sq_ft: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub virtual_tour_url: Option<String>,
    pub video_tour_url: Option<String>,
    pub description: String,
}

impl NormalizedListing {
    /// Both coordinates, or nothing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    pub fn has_tours(&self) -> bool {
        self.virtual_tour_url.is_some() || self.video_tour_url.is_some()
    }
}

/// Converts an untrusted payload into a [`NormalizedListing`].
///
/// Every field is extracted independently; a field that cannot be read
/// becomes `None` or empty without affecting the others.
pub fn normalize(raw: &RawListing) -> NormalizedListing {
    let (latitude, longitude) = match (
        raw.first(LAT_PATHS, to_number),
        raw.first(LNG_PATHS, to_number),
    ) {
        (Some(lat), Some(lng)) => (Some(lat), Some(lng)),
        _ => (None, None),
    };

    let listing = NormalizedListing {
        id: raw.first(ID_PATHS, id_text).unwrap_or_default(),
        price: raw.first(PRICE_PATHS, to_number),
        address: raw.first_text(ADDRESS_PATHS).unwrap_or_default(),
        photos: extract_photos(raw),
        bedroom_count: raw.first(BED_PATHS, to_number),
        bathroom_count: raw.first(BATH_PATHS, normalize_baths),
        living_area_sq_ft: raw.first(AREA_PATHS, to_number),
        latitude,
        longitude,
        virtual_tour_url: raw.first_text(VIRTUAL_TOUR_PATHS),
        video_tour_url: raw.first_text(VIDEO_TOUR_PATHS),
        description: raw.first_text(DESCRIPTION_PATHS).unwrap_or_default(),
    };

    tracing::debug!(
        id = %listing.id,
        keys = ?raw.keys(),
        photos = listing.photos.len(),
        has_price = listing.price.is_some(),
        has_coordinates = listing.has_coordinates(),
        "listing normalized"
    );

    listing
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

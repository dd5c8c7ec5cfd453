// src/domain/demo.rs

use serde_json::{json, Value};

use super::raw::RawListing;

pub const DEMO_ADDRESS: &str = "1234 Ocean Boulevard, Miami Beach, FL 33139";

/// Shown whenever a listing comes without any usable photo.
pub const PLACEHOLDER_PHOTOS: [&str; 4] = [
    "https://images.unsplash.com/photo-1613490493576-7fde63acd811?w=1920&q=80",
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=1920&q=80",
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?w=1920&q=80",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=1920&q=80",
];

/// The fixture rendered when no listing id was requested, and while an
/// embedded page waits for its parent frame.
pub fn demo_listing() -> RawListing {
    RawListing::new(demo_payload())
}

fn demo_payload() -> Value {
    json!({
        "id": "DEMO",
        "price": 2_850_000,
        "address": { "full": DEMO_ADDRESS },
        "bedrooms": 4,
        "bathrooms": 3.5,
        "livingArea": 3200,
        "virtualTourUrl": "https://my.matterport.com/show/?m=example",
        "videoTourUrl": "https://www.youtube.com/watch?v=example",
        "latitude": 25.7907,
        "longitude": -80.13,
        "description": "Discover unparalleled luxury in this stunning oceanfront residence located in the heart of Miami Beach. This architectural masterpiece features floor-to-ceiling windows with breathtaking ocean views, a gourmet chef's kitchen with top-of-the-line appliances, and an expansive open-concept living space perfect for entertaining.",
        "photos": PLACEHOLDER_PHOTOS,
    })
}

/// The listing's own photos, or the placeholders when it has none.
pub fn photos_or_placeholder(photos: &[String]) -> Vec<String> {
    if photos.is_empty() {
        PLACEHOLDER_PHOTOS.iter().map(|p| p.to_string()).collect()
    } else {
        photos.to_vec()
    }
}

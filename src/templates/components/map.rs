// templates/components/map.rs
use crate::templates::components::section::{RenderError, SectionResult};
use maud::html;

// Half-width of the embedded map's bounding box, in degrees.
const SPAN: f64 = 0.01;

/// OpenStreetMap embed centred on the listing.
pub fn property_map(address: &str, latitude: f64, longitude: f64) -> SectionResult {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(RenderError(format!(
            "coordinates out of range: {latitude}, {longitude}"
        )));
    }

    let embed = format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={latitude},{longitude}",
        longitude - SPAN,
        latitude - SPAN,
        longitude + SPAN,
        latitude + SPAN,
    );
    let larger = format!(
        "https://www.openstreetmap.org/?mlat={latitude}&mlon={longitude}#map=16/{latitude}/{longitude}"
    );

    Ok(html! {
        section id="location" class="bg-gradient-to-br from-slate-900 to-slate-800 rounded-3xl p-6 md:p-8 border border-white/10" {
            h2 class="text-2xl font-bold text-white mb-2" { "Location" }
            @if !address.is_empty() {
                p class="text-white/60 mb-4" { (address) }
            }
            iframe class="w-full h-96 rounded-2xl border-0" src=(embed) title="Property location" loading="lazy" {}
            a href=(larger) target="_blank" rel="noopener" class="inline-block mt-3 text-teal-400 text-sm" { "View larger map" }
        }
    })
}

/// The map section, or nothing when no location is known.
pub fn map_or_nothing(address: &str, location: Option<(f64, f64)>) -> SectionResult {
    match location {
        Some((lat, lng)) => property_map(address, lat, lng),
        None => Ok(html! {}),
    }
}

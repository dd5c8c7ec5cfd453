use crate::domain::NormalizedListing;
use crate::templates::format;
use maud::{html, Markup};

const MISSING: &str = "—";

/// Beds / baths / square feet. Only primitives reach this point.
pub fn listing_stats(listing: &NormalizedListing) -> Markup {
    let stats = [
        ("Beds", listing.bedroom_count),
        ("Baths", listing.bathroom_count),
        ("Sq Ft", listing.living_area_sq_ft),
    ];

    html! {
        dl class="listing-stats flex flex-wrap gap-8" {
            @for (label, value) in stats {
                div class="flex flex-col" {
                    dd class="text-3xl font-bold text-white" {
                        @match value {
                            Some(v) => { (format::count(v)) }
                            None => { (MISSING) }
                        }
                    }
                    dt class="text-white/60 text-sm uppercase tracking-wide" { (label) }
                }
            }
        }
    }
}

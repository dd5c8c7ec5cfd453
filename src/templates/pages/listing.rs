// templates/pages/listing.rs
use crate::config::AgentContact;
use crate::domain::tour::TourFormErrors;
use crate::domain::{photos_or_placeholder, MortgageInputs, NormalizedListing, TourForm};
use crate::templates::components::{
    agent::agent_card,
    contact::{contact_bar, floating_contact_buttons},
    description::property_description,
    gallery::{fullscreen_gallery, hero_gallery, thumbnail_strip},
    map::map_or_nothing,
    mortgage::mortgage_calculator,
    schedule::tour_form,
    section,
    stats::listing_stats,
    tours::virtual_tours,
};
use crate::templates::{format, premium_layout};
use maud::{html, Markup};

/// Everything the listing page shows, already resolved.
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    pub listing: &'a NormalizedListing,
    pub agent: &'a AgentContact,
    /// Where to put the map pin, if anywhere.
    pub location: Option<(f64, f64)>,
    /// Used by the tour form so leads point back at this page.
    pub page_url: String,
}

impl<'a> ListingView<'a> {
    /// A view that maps the listing's own coordinates.
    pub fn new(listing: &'a NormalizedListing, agent: &'a AgentContact, page_url: String) -> Self {
        Self {
            listing,
            agent,
            location: listing.coordinates(),
            page_url,
        }
    }
}

pub fn listing_page(view: &ListingView<'_>) -> Markup {
    let title = if view.listing.address.is_empty() {
        "Premium Listing".to_string()
    } else {
        view.listing.address.clone()
    };

    premium_layout(&title, listing_content(view))
}

/// The swappable part of the page: what `/embed` returns on its own.
pub fn listing_content(view: &ListingView<'_>) -> Markup {
    let listing = view.listing;
    let photos = photos_or_placeholder(&listing.photos);

    let tour = TourForm {
        listing_id: listing.id.clone(),
        listing_address: listing.address.clone(),
        listing_price: listing.price.map(|p| p.to_string()).unwrap_or_default(),
        page_url: view.page_url.clone(),
        ..TourForm::default()
    };

    let overlay = html! {
        div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-8 space-y-6" {
            h1 class="listing-price text-4xl sm:text-5xl lg:text-6xl font-bold text-white tracking-tight" {
                @if let Some(price) = listing.price.filter(|p| *p > 0.0) {
                    (format::currency(price))
                }
            }
            p class="listing-address text-xl sm:text-2xl text-white/90 font-light" { (listing.address) }
            (section("stats", || Ok(listing_stats(listing))))
            (floating_contact_buttons(view.agent))
            (section("thumbnails", || Ok(thumbnail_strip(&photos))))
        }
    };

    html! {
        div id="listing-root" data-listing-id=(listing.id) {
            (contact_bar(view.agent))

            (section("gallery", || hero_gallery(&photos, overlay)))

            main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 space-y-8" {
                (section("description", || Ok(property_description(&listing.description))))
                (section("tours", || virtual_tours(
                    listing.virtual_tour_url.as_deref(),
                    listing.video_tour_url.as_deref(),
                )))
                (section("mortgage", || Ok(mortgage_calculator(MortgageInputs::for_price(listing.price)))))
                (section("agent", || Ok(agent_card(view.agent))))
                (section("map", || map_or_nothing(&listing.address, view.location)))
                (section("schedule", || Ok(tour_form(&tour, &TourFormErrors::default()))))
                (section("fullscreen", || Ok(fullscreen_gallery(&photos))))
            }
        }
    }
}

pub mod coerce;
pub mod demo;
pub mod frame;
pub mod listing;
pub mod mortgage;
pub mod photos;
pub mod raw;
pub mod tour;

pub use demo::{demo_listing, photos_or_placeholder, PLACEHOLDER_PHOTOS};
pub use frame::accept_frame_message;
pub use listing::{normalize, NormalizedListing};
pub use mortgage::{compute_mortgage, MortgageInputs, MortgageResult};
pub use raw::RawListing;
pub use tour::{TourForm, TourRequest};

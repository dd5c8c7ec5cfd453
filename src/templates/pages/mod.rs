pub mod error;
pub mod listing;

pub use error::{crash_page, error_page, unable_to_load_page};
pub use listing::{listing_content, listing_page, ListingView};

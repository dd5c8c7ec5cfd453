mod client_error;
mod geocode;
mod listings;
mod records;
mod webhook;

pub use client_error::ClientError;
pub use geocode::{Geocode, NominatimGeocoder, DEFAULT_COORDINATES};
pub use listings::{ListingSearch, ListingsClient};
pub use records::{AirtableClient, AirtableCredentials, RecordLookup};
pub use webhook::{TourSink, TourWebhook};

use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("premium-listing/", env!("CARGO_PKG_VERSION"));

/// One blocking client per upstream. No retries anywhere: a failed call is
/// reported to the caller as-is.
pub(crate) fn http_client() -> Result<Client, ClientError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|e| ClientError::Network(e.to_string()))
}

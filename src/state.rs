// state.rs
use crate::clients::{
    AirtableClient, ClientError, Geocode, ListingSearch, ListingsClient, NominatimGeocoder,
    RecordLookup, TourSink, TourWebhook,
};
use crate::config::Config;

/// Everything a request handler needs. Built once at startup and shared
/// read-only across worker threads.
pub struct AppState {
    pub config: Config,
    pub listings: Box<dyn ListingSearch>,
    pub records: Box<dyn RecordLookup>,
    pub geocoder: Box<dyn Geocode>,
    pub tours: Box<dyn TourSink>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, ClientError> {
        let listings = ListingsClient::new(
            config.listings_search_url.clone(),
            config.listings_market_id.clone(),
        )?;
        let records = AirtableClient::new(
            config.airtable_api_url.clone(),
            config.airtable.clone(),
            config.airtable_table_name.clone(),
        )?;
        let geocoder = NominatimGeocoder::new(config.geocoder_url.clone())?;
        let tours = TourWebhook::new(config.tour_webhook_url.clone())?;

        Ok(Self {
            config,
            listings: Box::new(listings),
            records: Box::new(records),
            geocoder: Box::new(geocoder),
            tours: Box::new(tours),
        })
    }
}

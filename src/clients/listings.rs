// clients/listings.rs
use crate::clients::{http_client, ClientError};
use crate::domain::RawListing;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

/// Looks a single listing up by its id.
pub trait ListingSearch: Send + Sync {
    fn find_by_id(&self, id: &str) -> Result<RawListing, ClientError>;
}

pub struct ListingsClient {
    client: Client,
    search_url: String,
    market_id: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SearchLocation<'a> {
    id: &'a str,
    geo_type: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
struct SearchFilters<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SearchOptions {
    page_size: u32,
    page_number: u32,
}

#[derive(Debug, Serialize, PartialEq)]
struct SearchBody<'a> {
    locations: Vec<SearchLocation<'a>>,
    filters: SearchFilters<'a>,
    options: SearchOptions,
}

/// The search API has shipped its results under all of these.
const RESULT_PATHS: &[&[&str]] = &[&["listings"], &["data", "listings"], &["data", "results"]];

impl ListingsClient {
    pub fn new(search_url: String, market_id: String) -> Result<Self, ClientError> {
        Ok(Self {
            client: http_client()?,
            search_url,
            market_id,
        })
    }

    fn search_body<'a>(&'a self, id: &'a str) -> SearchBody<'a> {
        SearchBody {
            locations: vec![SearchLocation {
                id: &self.market_id,
                geo_type: "market",
            }],
            filters: SearchFilters { id },
            options: SearchOptions {
                page_size: 1,
                page_number: 1,
            },
        }
    }
}

impl ListingSearch for ListingsClient {
    fn find_by_id(&self, id: &str) -> Result<RawListing, ClientError> {
        tracing::info!(id, url = %self.search_url, "fetching listing");

        let resp = self
            .client
            .post(&self.search_url)
            .json(&self.search_body(id))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(id, %status, "listing search failed");
            return Err(ClientError::Status("Failed to fetch listing".into()));
        }

        let data: Value = resp.json()?;
        first_result(&data)
    }
}

/// Picks the first listing out of a search response, whatever its nesting.
pub(crate) fn first_result(data: &Value) -> Result<RawListing, ClientError> {
    let results = RESULT_PATHS
        .iter()
        .find_map(|path| {
            path.iter()
                .try_fold(data, |v, key| v.get(*key))
                .filter(|v| !v.is_null())
        });

    let Some(results) = results else {
        return Err(ClientError::NotFound("Listing not found".into()));
    };

    let first = results
        .as_array()
        .and_then(|arr| arr.first())
        .ok_or_else(|| ClientError::NotFound("Listing not found".into()))?;

    Ok(RawListing::new(first.clone()))
}

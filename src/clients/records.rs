// clients/records.rs
use crate::clients::{http_client, ClientError};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

/// Premium-listing records keyed by MLS id.
pub trait RecordLookup: Send + Sync {
    /// `Ok(None)` when no record matches.
    fn find_by_mls_id(&self, mls_id: &str) -> Result<Option<Map<String, Value>>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct AirtableCredentials {
    pub token: String,
    pub base_id: String,
}

pub struct AirtableClient {
    client: Client,
    api_url: String,
    credentials: Option<AirtableCredentials>,
    table_name: String,
}

#[derive(Debug, Deserialize)]
struct RecordList {
    #[serde(default)]
    records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(default)]
    fields: Map<String, Value>,
}

impl AirtableClient {
    /// Credentials may be missing; every lookup then fails with a config error.
    pub fn new(
        api_url: String,
        credentials: Option<AirtableCredentials>,
        table_name: String,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: http_client()?,
            api_url,
            credentials,
            table_name,
        })
    }
}

impl RecordLookup for AirtableClient {
    fn find_by_mls_id(&self, mls_id: &str) -> Result<Option<Map<String, Value>>, ClientError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or_else(|| ClientError::Config("Missing Airtable env vars".into()))?;

        let url = lookup_url(&self.api_url, &creds.base_id, &self.table_name, mls_id)?;
        tracing::info!(mls_id, table = %self.table_name, "looking up premium record");

        let resp = self.client.get(url).bearer_auth(&creds.token).send()?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            tracing::warn!(mls_id, %status, "records lookup failed");
            return Err(ClientError::Status(text));
        }

        let list: RecordList = resp.json()?;
        Ok(list.records.into_iter().next().map(|r| r.fields))
    }
}

/// Matches either spelling of the MLS id column. Single quotes in the id are
/// escaped so it cannot close the string literal.
pub(crate) fn filter_formula(mls_id: &str) -> String {
    let safe = mls_id.replace('\'', "\\'");
    format!("OR({{MLS ID}}='{safe}', {{mls_id}}='{safe}')")
}

pub(crate) fn lookup_url(
    api_url: &str,
    base_id: &str,
    table_name: &str,
    mls_id: &str,
) -> Result<Url, ClientError> {
    let mut url = Url::parse(api_url)
        .map_err(|e| ClientError::Config(format!("Invalid AIRTABLE_API_URL: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| ClientError::Config("AIRTABLE_API_URL cannot be a base URL".into()))?
        .pop_if_empty()
        .push(base_id)
        .push(table_name);

    url.query_pairs_mut()
        .append_pair("maxRecords", "1")
        .append_pair("filterByFormula", &filter_formula(mls_id));

    Ok(url)
}

// config.rs
use crate::clients::AirtableCredentials;
use crate::errors::ServerError;
use std::net::SocketAddr;

pub const DEFAULT_SEARCH_URL: &str =
    "https://onefloridagroup.com/wp-json/agentfire/v1/afx/listings/search";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TABLE_NAME: &str = "Premium Listings Backend";

/// Contact details shown in the contact bar and the agent card.
#[derive(Debug, Clone)]
pub struct AgentContact {
    pub name: String,
    pub phone: String,
    pub display_phone: String,
    pub email: String,
}

impl Default for AgentContact {
    fn default() -> Self {
        Self {
            name: "One Florida Group".to_string(),
            phone: "+18082581945".to_string(),
            display_phone: "(808) 258-1945".to_string(),
            email: "contact@onefloridagroup.com".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub listings_search_url: String,
    pub listings_market_id: String,
    /// Parent frames whose hostname ends with this may hand over listings.
    pub trusted_parent_domain: String,
    pub geocoder_url: String,
    pub geocode_missing_coordinates: bool,
    pub airtable_api_url: String,
    pub airtable: Option<AirtableCredentials>,
    pub airtable_table_name: String,
    pub tour_webhook_url: Option<String>,
    pub agent: AgentContact,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            listings_search_url: DEFAULT_SEARCH_URL.to_string(),
            listings_market_id: "nefmls".to_string(),
            trusted_parent_domain: "onefloridagroup.com".to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocode_missing_coordinates: false,
            airtable_api_url: DEFAULT_AIRTABLE_API_URL.to_string(),
            airtable: None,
            airtable_table_name: DEFAULT_TABLE_NAME.to_string(),
            tour_webhook_url: None,
            agent: AgentContact::default(),
        }
    }
}

impl Config {
    /// Reads the process environment. Every variable is optional.
    pub fn init() -> Result<Config, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Config::default();

        let bind_addr = match var("BIND_ADDR") {
            Some(v) => v
                .parse()
                .map_err(|e| ServerError::Config(format!("BIND_ADDR {v:?}: {e}")))?,
            None => defaults.bind_addr,
        };

        let max_workers = match var("MAX_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ServerError::Config(format!("MAX_WORKERS {v:?} is not a positive number")))?,
            None => defaults.max_workers,
        };

        let airtable = match (var("AIRTABLE_TOKEN"), var("AIRTABLE_BASE_ID")) {
            (Some(token), Some(base_id)) => Some(AirtableCredentials { token, base_id }),
            _ => None,
        };

        let geocode_missing_coordinates = var("GEOCODE_MISSING_COORDINATES")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(defaults.geocode_missing_coordinates);

        let agent = AgentContact {
            name: var("AGENT_NAME").unwrap_or(defaults.agent.name),
            phone: var("AGENT_PHONE").unwrap_or(defaults.agent.phone),
            display_phone: var("AGENT_DISPLAY_PHONE").unwrap_or(defaults.agent.display_phone),
            email: var("AGENT_EMAIL").unwrap_or(defaults.agent.email),
        };

        Ok(Config {
            bind_addr,
            max_workers,
            listings_search_url: var("LISTINGS_SEARCH_URL").unwrap_or(defaults.listings_search_url),
            listings_market_id: var("LISTINGS_MARKET_ID").unwrap_or(defaults.listings_market_id),
            trusted_parent_domain: var("TRUSTED_PARENT_DOMAIN")
                .unwrap_or(defaults.trusted_parent_domain),
            geocoder_url: var("GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            geocode_missing_coordinates,
            airtable_api_url: var("AIRTABLE_API_URL").unwrap_or(defaults.airtable_api_url),
            airtable,
            airtable_table_name: var("AIRTABLE_TABLE_NAME").unwrap_or(defaults.airtable_table_name),
            tour_webhook_url: var("TOUR_WEBHOOK_URL"),
            agent,
        })
    }
}

use crate::config::Config;
use crate::router::respond;
use crate::state::AppState;
use astra::Server;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod clients;
mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration from the environment
    let config = match Config::init() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    if config.airtable.is_none() {
        tracing::warn!("AIRTABLE_TOKEN / AIRTABLE_BASE_ID not set; /api/premium will answer 500");
    }

    // 2️⃣ Upstream clients
    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("❌ HTTP client setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = state.config.bind_addr;
    let server = Server::bind(addr).max_workers(state.config.max_workers);
    tracing::info!("Starting server at http://{addr}");

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}

use std::sync::Arc;

use erangel_common::config::CONFIG;
use erangel_database::DatabaseHandler;
use twilight_http::Client as HttpClient;

use crate::replies::Replies;
use crate::rest::fetch_cache::FetchCache;
use crate::rest::pubg_fetcher::PubgFetcher;

pub type ThreadSafeErangel = Arc<Erangel>;

/// Main Erangel structure, storing the current bot state.
///
/// Stores stateful information and connections.
pub struct Erangel {
    /// Handler for the Erangel database.
    pub database_handler: DatabaseHandler,
    /// HTTP client for Discord. Handles all HTTP requests to Discord, storing stateful information
    /// about current ratelimits.
    pub http_client: HttpClient,
    /// The process-wide read-through cache wrapped around upstream fetches.
    pub fetch_cache: Arc<FetchCache>,
    /// Cache-aside access to the PUBG API.
    pub pubg: PubgFetcher,
    /// In-flight reply and interactive-session tracking.
    pub replies: Replies,
}
impl Erangel {
    pub async fn new() -> anyhow::Result<Erangel> {
        let fetch_cache = Arc::new(FetchCache::new());

        Ok(Erangel {
            database_handler: DatabaseHandler::new(CONFIG.database.to_url(), CONFIG.database.to_url_safe()).await?,
            http_client: HttpClient::new(CONFIG.authentication.discord_token.clone()),
            fetch_cache: fetch_cache.clone(),
            pubg: PubgFetcher::new(CONFIG.authentication.pubg_api_key.clone(), fetch_cache),
            replies: Replies::new(),
        })
    }
}

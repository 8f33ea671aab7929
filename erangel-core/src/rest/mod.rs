pub mod discord;
pub mod fetch_cache;
pub mod pubg;
pub mod pubg_fetcher;

pub static PUBG_API_BASE: &str = "https://api.pubg.com";
pub static REPLAY_URL_BASE: &str = "https://pubg-replay.com";

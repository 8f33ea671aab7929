use cache::DatabaseCache;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

mod cache;
pub mod model;

pub static MAX_CONNECTIONS: u32 = 8;

/// Database handler providing a connection to the database and helper methods for inserting,
/// fetching, deleting and modifying Erangel database data.
pub struct DatabaseHandler {
    pool: PgPool,
    cache: DatabaseCache,
}
impl DatabaseHandler {
    pub async fn new(url: String, safe_url: String) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database on {safe_url}");

        let pool = PgPoolOptions::new().max_connections(MAX_CONNECTIONS).connect(&url).await?;

        Ok(DatabaseHandler {
            pool,
            cache: DatabaseCache::new(),
        })
    }
}

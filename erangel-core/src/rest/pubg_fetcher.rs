//! Cache-aside access to the PUBG API.
//!
//! Command logic never talks to [`PubgApi`] directly: every operation here
//! goes through the [`FetchCache`] first, and upstream failures are folded
//! into empty sentinels so downstream logic treats "not found" uniformly.

use std::sync::Arc;
use std::time::Duration;

use erangel_database::model::player::Player as StoredPlayer;
use erangel_database::DatabaseHandler;
use tracing::warn;

use super::fetch_cache::FetchCache;
use super::pubg::{MatchInfo, Player, PlayerSeason, PubgApi, Region, Season};

/// Identifier lookups can be invalidated by freshly created accounts.
pub static IDENTITY_TTL: Duration = Duration::from_secs(60);
/// Bulk player and season data is stable and expensive to fetch.
pub static BULK_TTL: Duration = Duration::from_secs(60 * 15);

pub struct PubgFetcher {
    api: PubgApi,
    cache: Arc<FetchCache>,
}
impl PubgFetcher {
    pub fn new(api_key: String, cache: Arc<FetchCache>) -> Self {
        PubgFetcher {
            api: PubgApi::new(api_key),
            cache,
        }
    }

    /// All players matching `name` on this shard. Empty on upstream failure.
    pub async fn players_by_name(&self, region: Region, name: &str) -> Vec<Player> {
        let key = format!("pubg.players_by_name:{}:{name}", region.shard());

        self.cache
            .get(&key, BULK_TTL, || async {
                self.api.players_by_name(region, &[name]).await.unwrap_or_else(|e| {
                    warn!("player lookup for {name} failed: {e}");
                    Vec::new()
                })
            })
            .await
    }

    /// Resolves a username to its PUBG account ID, consulting the stored
    /// players table before the API. Returns an empty string when the player
    /// cannot be found; the sentinel is cached like any other result.
    pub async fn player_id(&self, handler: &DatabaseHandler, region: Region, name: &str) -> String {
        let platform = region.platform();

        match StoredPlayer::get(handler, name, platform).await {
            Ok(Some(player)) if !player.pubg_id.is_empty() => return player.pubg_id,
            Ok(_) => {},
            Err(e) => warn!("stored player lookup for {name} failed: {e}"),
        }

        let key = format!("pubg.player_id_by_name:{name}:{}", region.shard());

        self.cache
            .get(&key, IDENTITY_TTL, || async {
                let players = self.players_by_name(region, name).await;

                let Some(player) = players.first() else {
                    return String::new();
                };

                let stored = StoredPlayer {
                    name: player.attributes.name.clone(),
                    platform: platform.to_owned(),
                    pubg_id: player.id.clone(),
                };
                if let Err(e) = stored.add(handler).await {
                    warn!("failed to store player {name}: {e}");
                }

                player.id.clone()
            })
            .await
    }

    /// The seasons currently offered for a region. Empty on upstream failure.
    pub async fn seasons(&self, region: Region) -> Vec<Season> {
        let key = format!("pubg.seasons:{}", region.shard());

        self.cache
            .get(&key, BULK_TTL, || async {
                self.api.seasons(region).await.unwrap_or_else(|e| {
                    warn!("season list for {region} failed: {e}");
                    Vec::new()
                })
            })
            .await
    }

    pub async fn current_season_display(&self, region: Region) -> Option<String> {
        self.seasons(region)
            .await
            .iter()
            .find(|s| s.attributes.is_current_season)
            .map(|s| s.display_id().to_owned())
    }

    /// A player's stats for one season, identified by its display form.
    pub async fn season_stats(
        &self,
        region: Region,
        player_id: &str,
        season_display: &str,
    ) -> Option<PlayerSeason> {
        let key = format!("pubg.season_stats:{player_id}:{season_display}:{}", region.shard());

        self.cache
            .get(&key, BULK_TTL, || async {
                let season_id = self
                    .seasons(region)
                    .await
                    .iter()
                    .find(|s| s.display_id() == season_display)
                    .map(|s| s.id.clone())?;

                match self.api.player_season(region, player_id, &season_id).await {
                    Ok(season) => Some(season),
                    Err(e) => {
                        warn!("season stats for {player_id} failed: {e}");
                        None
                    },
                }
            })
            .await
    }

    pub async fn match_info(&self, region: Region, match_id: &str) -> Option<MatchInfo> {
        let key = format!("pubg.match_info:{match_id}:{}", region.shard());

        self.cache
            .get(&key, BULK_TTL, || async {
                match self.api.match_info(region, match_id).await {
                    Ok(info) => Some(info),
                    Err(e) => {
                        warn!("match lookup for {match_id} failed: {e}");
                        None
                    },
                }
            })
            .await
    }
}

use std::time::Duration;

use moka::sync::Cache;

use crate::model::guild_settings::GuildSettings;
use crate::model::user_settings::UserSettings;

/// In-memory cache collection for frequently accessed areas of the database.
pub struct DatabaseCache {
    guild_settings: Cache<u64, GuildSettings>,
    user_settings: Cache<u64, UserSettings>,
}
impl DatabaseCache {
    pub fn new() -> Self {
        // 10,000 entries max, if a row is not accessed in 5 mins then remove it from the cache
        DatabaseCache {
            guild_settings: Cache::builder()
                .max_capacity(10000)
                .time_to_idle(Duration::from_secs(60 * 5))
                .build(),
            user_settings: Cache::builder()
                .max_capacity(10000)
                .time_to_idle(Duration::from_secs(60 * 5))
                .build(),
        }
    }

    pub fn get_guild_settings(&self, guild_id: u64) -> Option<GuildSettings> {
        self.guild_settings.get(&guild_id)
    }

    pub fn set_guild_settings(&self, guild_id: u64, settings: GuildSettings) {
        self.guild_settings.insert(guild_id, settings);
    }

    pub fn invalidate_guild_settings(&self, guild_id: u64) {
        self.guild_settings.invalidate(&guild_id);
    }

    pub fn get_user_settings(&self, user_id: u64) -> Option<UserSettings> {
        self.user_settings.get(&user_id)
    }

    pub fn set_user_settings(&self, user_id: u64, settings: UserSettings) {
        self.user_settings.insert(user_id, settings);
    }

    pub fn invalidate_user_settings(&self, user_id: u64) {
        self.user_settings.invalidate(&user_id);
    }
}

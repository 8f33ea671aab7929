use erangel_database::model::guild_settings::GuildSettings;
use tracing::info;
use twilight_model::gateway::payload::incoming::GuildDelete;

use crate::erangel::ThreadSafeErangel;

pub async fn handle(erangel: ThreadSafeErangel, event: GuildDelete) {
    // unavailable means a guild outage, not a removal
    if event.unavailable {
        return;
    }

    match GuildSettings::unregister(&erangel.database_handler, event.id.get()).await {
        Ok(()) => info!("Removed from guild {}", event.id.get()),
        Err(error) => info!("Failed to unregister guild {}: {error}", event.id.get()),
    }
}

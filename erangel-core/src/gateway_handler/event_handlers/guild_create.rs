use erangel_common::config::CONFIG;
use erangel_database::model::guild_settings::GuildSettings;
use tracing::info;
use twilight_model::gateway::payload::incoming::GuildCreate;

use crate::erangel::ThreadSafeErangel;

pub async fn handle(erangel: ThreadSafeErangel, event: GuildCreate) {
    match GuildSettings::register(&erangel.database_handler, event.id.get(), &CONFIG.prefix.default).await {
        Ok(()) => {
            info!(
                "Joined guild {}: {} ({} members)",
                event.id.get(),
                event.name,
                event.member_count.unwrap_or(0)
            );
        },
        Err(error) => {
            info!("Failed to register guild {}: {error}", event.id.get());
        },
    }
}

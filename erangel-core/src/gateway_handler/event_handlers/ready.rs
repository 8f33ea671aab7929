use tracing::info;
use twilight_model::gateway::payload::incoming::Ready;

use crate::erangel::ThreadSafeErangel;

pub async fn handle(_erangel: ThreadSafeErangel, event: Ready) {
    info!(
        "Shard ready: logged in as {} in {} guilds",
        event.user.name,
        event.guilds.len()
    );
}

//! Cached Discord guild lookups used for permission elevation.

use std::time::Duration;

use erangel_common::config::CONFIG;
use tracing::warn;
use twilight_model::guild::Permissions;
use twilight_model::id::marker::RoleMarker;
use twilight_model::id::Id;

use crate::command::{PERM_ADMIN, PERM_DEFAULT};
use crate::erangel::Erangel;

static GUILD_TTL: Duration = Duration::from_secs(60);

/// The subset of guild state permission checks need; the full guild model is
/// too large to keep around per entry.
#[derive(Clone)]
pub struct CachedGuild {
    pub owner_id: u64,
    pub roles: Vec<(u64, Permissions)>,
}

async fn fetch_guild(erangel: &Erangel, guild_id: u64) -> Option<CachedGuild> {
    let key = format!("discord.guild:{guild_id}");

    erangel
        .fetch_cache
        .get(&key, GUILD_TTL, || async {
            let guild = match erangel.http_client.guild(Id::new(guild_id)).await {
                Ok(response) => match response.model().await {
                    Ok(guild) => guild,
                    Err(e) => {
                        warn!("failed to deserialize guild {guild_id}: {e}");
                        return None;
                    },
                },
                Err(e) => {
                    warn!("failed to fetch guild {guild_id}: {e}");
                    return None;
                },
            };

            Some(CachedGuild {
                owner_id: guild.owner_id.get(),
                roles: guild.roles.iter().map(|r| (r.id.get(), r.permissions)).collect(),
            })
        })
        .await
}

/// Resolves the elevation level of a guild member: 0 by default, raised for
/// the guild owner, members holding a role with ADMINISTRATOR, and configured
/// bot admins.
pub async fn permission_level(
    erangel: &Erangel,
    guild_id: u64,
    user_id: u64,
    member_roles: &[Id<RoleMarker>],
) -> u8 {
    if CONFIG.dev.admin_users.contains(&user_id) {
        return PERM_ADMIN;
    }

    let Some(guild) = fetch_guild(erangel, guild_id).await else {
        return PERM_DEFAULT;
    };

    if guild.owner_id == user_id {
        return PERM_ADMIN;
    }

    let is_administrator = guild.roles.iter().any(|(role_id, permissions)| {
        member_roles.iter().any(|r| r.get() == *role_id) && permissions.contains(Permissions::ADMINISTRATOR)
    });

    if is_administrator { PERM_ADMIN } else { PERM_DEFAULT }
}

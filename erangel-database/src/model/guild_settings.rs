use crate::DatabaseHandler;

/// Per-guild bot settings: the command prefix and the default PUBG lookup
/// parameters applied when a command omits them.
#[derive(Clone, Debug, PartialEq)]
pub struct GuildSettings {
    pub prefix: String,
    pub region: Option<String>,
    pub season: Option<String>,
    pub mode: Option<String>,
}
impl GuildSettings {
    pub fn with_prefix(prefix: String) -> Self {
        GuildSettings {
            prefix,
            region: None,
            season: None,
            mode: None,
        }
    }

    pub async fn get(handler: &DatabaseHandler, guild_id: u64) -> anyhow::Result<Option<Self>> {
        if let Some(settings) = handler.cache.get_guild_settings(guild_id) {
            return Ok(Some(settings));
        }

        let query = "SELECT prefix, region, season, mode FROM guild_settings WHERE guild = $1";

        match sqlx::query_as::<_, (String, Option<String>, Option<String>, Option<String>)>(query)
            .bind(guild_id as i64)
            .fetch_one(&handler.pool)
            .await
        {
            Ok(res) => {
                let settings = GuildSettings {
                    prefix: res.0,
                    region: res.1,
                    season: res.2,
                    mode: res.3,
                };
                handler.cache.set_guild_settings(guild_id, settings.clone());
                Ok(Some(settings))
            },
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes this settings row for a guild, replacing any existing one.
    pub async fn set(&self, handler: &DatabaseHandler, guild_id: u64) -> anyhow::Result<()> {
        let query = r#"INSERT INTO guild_settings(guild, prefix, region, season, mode) VALUES($1, $2, $3, $4, $5)
            ON CONFLICT (guild) DO UPDATE SET prefix = $2, region = $3, season = $4, mode = $5 WHERE guild_settings.guild = $1"#;

        sqlx::query(query)
            .bind(guild_id as i64)
            .bind(&self.prefix)
            .bind(&self.region)
            .bind(&self.season)
            .bind(&self.mode)
            .execute(&handler.pool)
            .await?;

        handler.cache.set_guild_settings(guild_id, self.clone());

        Ok(())
    }

    /// Inserts a default row for a newly joined guild. Existing rows are left alone
    /// so rejoining a guild keeps its old settings.
    pub async fn register(handler: &DatabaseHandler, guild_id: u64, default_prefix: &str) -> anyhow::Result<()> {
        let query =
            "INSERT INTO guild_settings(guild, prefix) VALUES($1, $2) ON CONFLICT (guild) DO NOTHING";

        sqlx::query(query)
            .bind(guild_id as i64)
            .bind(default_prefix)
            .execute(&handler.pool)
            .await?;

        Ok(())
    }

    pub async fn unregister(handler: &DatabaseHandler, guild_id: u64) -> anyhow::Result<()> {
        let query = "DELETE FROM guild_settings WHERE guild = $1";

        sqlx::query(query).bind(guild_id as i64).execute(&handler.pool).await?;

        handler.cache.invalidate_guild_settings(guild_id);

        Ok(())
    }
}

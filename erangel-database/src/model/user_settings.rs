use crate::DatabaseHandler;

/// Per-user registration: the PUBG username the user plays as, plus optional
/// default lookup parameters, keyed by Discord user ID.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSettings {
    pub username: Option<String>,
    pub region: Option<String>,
    pub season: Option<String>,
    pub mode: Option<String>,
}
impl UserSettings {
    pub async fn get(handler: &DatabaseHandler, user_id: u64) -> anyhow::Result<Option<Self>> {
        if let Some(settings) = handler.cache.get_user_settings(user_id) {
            return Ok(Some(settings));
        }

        let query = "SELECT username, region, season, mode FROM user_settings WHERE discord_id = $1";

        match sqlx::query_as::<_, (Option<String>, Option<String>, Option<String>, Option<String>)>(query)
            .bind(user_id as i64)
            .fetch_one(&handler.pool)
            .await
        {
            Ok(res) => {
                let settings = UserSettings {
                    username: res.0,
                    region: res.1,
                    season: res.2,
                    mode: res.3,
                };
                handler.cache.set_user_settings(user_id, settings.clone());
                Ok(Some(settings))
            },
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn set(&self, handler: &DatabaseHandler, user_id: u64) -> anyhow::Result<()> {
        let query = r#"INSERT INTO user_settings(discord_id, username, region, season, mode) VALUES($1, $2, $3, $4, $5)
            ON CONFLICT (discord_id) DO UPDATE SET username = $2, region = $3, season = $4, mode = $5 WHERE user_settings.discord_id = $1"#;

        sqlx::query(query)
            .bind(user_id as i64)
            .bind(&self.username)
            .bind(&self.region)
            .bind(&self.season)
            .bind(&self.mode)
            .execute(&handler.pool)
            .await?;

        handler.cache.set_user_settings(user_id, self.clone());

        Ok(())
    }

    pub async fn clear(handler: &DatabaseHandler, user_id: u64) -> anyhow::Result<()> {
        let query = "DELETE FROM user_settings WHERE discord_id = $1";

        sqlx::query(query).bind(user_id as i64).execute(&handler.pool).await?;

        handler.cache.invalidate_user_settings(user_id);

        Ok(())
    }
}

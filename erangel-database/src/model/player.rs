use crate::DatabaseHandler;

/// A resolved PUBG account ID for a username on one platform. Written the first
/// time a name lookup succeeds so later lookups can skip the API entirely.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub platform: String,
    pub pubg_id: String,
}
impl Player {
    pub async fn get(handler: &DatabaseHandler, name: &str, platform: &str) -> anyhow::Result<Option<Self>> {
        let query = "SELECT name, platform, pubg_id FROM players WHERE name = $1 AND platform = $2";

        match sqlx::query_as::<_, (String, String, String)>(query)
            .bind(name)
            .bind(platform)
            .fetch_one(&handler.pool)
            .await
        {
            Ok(res) => Ok(Some(Player {
                name: res.0,
                platform: res.1,
                pubg_id: res.2,
            })),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn add(&self, handler: &DatabaseHandler) -> anyhow::Result<()> {
        let query = r#"INSERT INTO players(name, platform, pubg_id) VALUES($1, $2, $3)
            ON CONFLICT (name, platform) DO UPDATE SET pubg_id = $3"#;

        sqlx::query(query)
            .bind(&self.name)
            .bind(&self.platform)
            .bind(&self.pubg_id)
            .execute(&handler.pool)
            .await?;

        Ok(())
    }
}

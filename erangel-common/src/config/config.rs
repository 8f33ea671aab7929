// See config.toml for information on the variables here.

use serde::Deserialize;

#[derive(Deserialize)]
pub struct ErangelConfig {
    pub authentication: Authentication,
    pub database: Database,
    pub prefix: Prefixes,
    pub logging_webhooks: LoggingWebhooks,
    pub dev: DevAttributes,
}

#[derive(Deserialize)]
pub struct Authentication {
    pub discord_token: String,
    pub pubg_api_key: String,
}

#[derive(Deserialize)]
pub struct Database {
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}
impl Database {
    pub fn to_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }

    /// Connection URL with the password redacted, for logging.
    pub fn to_url_safe(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}

#[derive(Deserialize)]
pub struct Prefixes {
    pub default: String,
}

#[derive(Clone, Deserialize)]
pub struct LoggingWebhook {
    pub id: u64,
    pub token: String,
}

#[derive(Deserialize)]
pub struct LoggingWebhooks {
    pub enable_webhooks: bool,
    pub error: LoggingWebhook,
}

#[derive(Deserialize)]
pub struct DevAttributes {
    pub admin_users: Vec<u64>,
    pub prefix_override: Option<String>,
}

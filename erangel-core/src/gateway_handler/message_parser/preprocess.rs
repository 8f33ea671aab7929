use erangel_common::config::CONFIG;
use erangel_common::BOT_ID;
use erangel_database::model::guild_settings::GuildSettings;
use tracing::debug;
use twilight_model::channel::Message;

use crate::erangel::ThreadSafeErangel;
use crate::gateway_handler::message_parser::error::PreParseError;

pub struct PreprocessResult {
    pub prefix: String,
    /// Stored settings for the invoking guild, passed along so parameter
    /// resolution does not have to re-query the row.
    pub guild_settings: Option<GuildSettings>,
}

/// Returns `Some(prefix)` if the prefix is the mention of the bot, otherwise `None`
pub fn message_mention_prefix(content: &str) -> Option<String> {
    let mention_no_nickname = format!("<@{BOT_ID}>");
    let mention_nickname = format!("<@!{BOT_ID}>");

    if content.starts_with(&mention_no_nickname) {
        Some(mention_no_nickname)
    } else if content.starts_with(&mention_nickname) {
        Some(mention_nickname)
    } else {
        None
    }
}

/// Loads the invoking guild's settings row, registering one with the default
/// prefix on first contact.
async fn guild_settings_or_default(
    erangel: &ThreadSafeErangel,
    guild_id: u64,
) -> Result<GuildSettings, PreParseError> {
    match GuildSettings::get(&erangel.database_handler, guild_id).await {
        Ok(Some(settings)) => Ok(settings),
        Ok(None) => {
            GuildSettings::register(&erangel.database_handler, guild_id, &CONFIG.prefix.default)
                .await
                .map_err(|e| PreParseError::Failure(format!("failed to register guild settings: {e}")))?;

            Ok(GuildSettings::with_prefix(CONFIG.prefix.default.clone()))
        },
        Err(error) => Err(PreParseError::Failure(format!("failed to fetch guild settings: {error}"))),
    }
}

/// Initial Discord message processing.
/// Checks the validity of the message before performing any kind of parsing.
///
/// This includes:
/// - Checking that the message is not sent by a bot or a webhook,
/// - Loading the guild's stored settings when the message was sent in one,
/// - Checking that the message starts with the correct prefix for the context, and returning any
///   identified prefix.
///
/// Prefix precedence:
/// 1. prefix override from config (disabling other prefixes)
/// 2. mention prefix
/// 3. no prefix/guild prefix (depending on context)
pub async fn preprocess(erangel: ThreadSafeErangel, message: &Message) -> Result<PreprocessResult, PreParseError> {
    if message.author.bot || message.webhook_id.is_some() {
        return Err(PreParseError::UserIsBotOrWebhook);
    }

    // loaded for every guild message: even when another prefix form wins, the
    // row carries the default lookup parameters resolution falls back on
    let guild_settings = match message.guild_id {
        Some(guild_id) => Some(guild_settings_or_default(&erangel, guild_id.get()).await?),
        None => None,
    };

    let parsed_prefix = if let Some(ref r#override) = CONFIG.dev.prefix_override {
        r#override.clone()
    } else if let Some(mention_prefix) = message_mention_prefix(&message.content) {
        mention_prefix
    } else {
        match &guild_settings {
            Some(settings) => settings.prefix.clone(),
            // DMs need no prefix at all
            None => "".to_owned(),
        }
    };

    debug!("parser: parsed prefix: {parsed_prefix:?}");

    if !message.content.starts_with(&parsed_prefix) {
        return Err(PreParseError::MessageNotPrefixed(parsed_prefix));
    }

    Ok(PreprocessResult {
        prefix: parsed_prefix,
        guild_settings,
    })
}

use std::time::Instant;

use erangel_database::model::guild_settings::GuildSettings;
use twilight_model::channel::Message;

use super::error::ParseError;
use super::preprocess::preprocess;
use crate::command::registry::find_command_by_name;
use crate::command::{ExecutionTimings, TCommand};
use crate::erangel::ThreadSafeErangel;

pub struct ParseResult {
    pub command: TCommand,
    /// Raw argument text following the command name, still untokenized.
    pub args: String,
    pub calling_prefix: String,
    pub guild_settings: Option<GuildSettings>,
    pub execution_timings: ExecutionTimings,
}

/// Parse any generic Message object into a Command.
///
/// This function takes all steps necessary to split a message into critical
/// command components, and if at any point the parse fails, then return with
/// no action.
///
/// **Step 1**: Check that the message starts with the correct prefix.
///         The prefix can be one of four things:
///              1. The guild-specific prefix, stored in the database,
///              2. No prefix, if the command is ran in DMs,
///              3. The bot's mention,
///              4. The prefix override, if specified, in config.toml.
/// The prefix override takes precedence over all others, followed by the
/// mention prefix, followed by the guild prefix (or no prefix in DMs).
///
/// **Step 2**: Identify the command name in the text following the prefix and
/// resolve it through the registry, following one alias indirection. Unknown
/// commands resolve to `Ok(None)` and are silently ignored.
///
/// Note that metadata is checked *after* parsing, during execution (see
/// [`crate::command::check_metadata`]).
pub async fn parse_message_into_command(
    erangel: ThreadSafeErangel,
    message: &Message,
    processing_time_start: Instant,
) -> Result<Option<ParseResult>, ParseError> {
    let parse_start = Instant::now();
    let preprocess_start = Instant::now();

    let preprocess = preprocess(erangel, message).await?;

    let preprocess_time = preprocess_start.elapsed();

    let command_text = message.content[preprocess.prefix.len()..].trim_start();

    let (command, args) = command_text.split_once(' ').unwrap_or((command_text, ""));
    if command.is_empty() {
        return Ok(None);
    }

    let Some(command) = find_command_by_name(&command.to_ascii_lowercase()) else {
        return Ok(None);
    };

    Ok(Some(ParseResult {
        command,
        args: args.to_owned(),
        calling_prefix: preprocess.prefix,
        guild_settings: preprocess.guild_settings,
        execution_timings: ExecutionTimings {
            processing_time_start,
            parse_total: parse_start.elapsed(),
            preprocess_total: preprocess_time,
        },
    }))
}

use std::time::Instant;

use erangel_common::err;
use erangel_common::markdown::Markdown;
use tracing::debug;
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::command::errors::MetadataCheckError;
use crate::command::tokenizer::tokenize;
use crate::command::{check_metadata, Command, CommandCtxt, CommandData, PERM_DEFAULT};
use crate::erangel::ThreadSafeErangel;
use crate::gateway_handler::message_parser::error::{ErrorSeverity, GetErrorSeverity};
use crate::gateway_handler::message_parser::parser::parse_message_into_command;
use crate::rest::discord::permission_level;

/// Handle a [MessageCreate] event received from the Discord gateway.
///
/// This function passes the message to the command parser, which then attempts to convert the
/// message to a command for further processing.
pub async fn handle(erangel: ThreadSafeErangel, MessageCreate(message): MessageCreate) {
    let processing_time_start = Instant::now();

    match parse_message_into_command(erangel.clone(), &message, processing_time_start).await {
        Ok(Some(result)) => {
            let permission_level = match message.guild_id {
                Some(guild_id) => {
                    let member_roles = message.member.as_ref().map(|m| m.roles.as_slice()).unwrap_or(&[]);
                    permission_level(&erangel, guild_id.get(), message.author.id.get(), member_roles).await
                },
                None => PERM_DEFAULT,
            };

            let data = CommandData {
                erangel: &erangel,
                message_id: message.id.get(),
                channel_id: message.channel_id.get(),
                guild_id: message.guild_id.map(|x| x.get()),
                author: &message.author,
                calling_prefix: result.calling_prefix,
                permission_level,
                guild_settings: result.guild_settings,
                execution_timings: result.execution_timings,
            };
            let ctxt = CommandCtxt::new(&data);

            match check_metadata(result.command.metadata(), data.guild_id.is_some(), permission_level) {
                Err(MetadataCheckError::CommandDisabled) => {
                    debug!("ignoring disabled command {}", result.command.metadata().name);
                    return;
                },
                Err(error) => {
                    let _ = ctxt.reply(error.to_string()).await;
                    return;
                },
                Ok(()) => {},
            }

            // tokenization failures abort before any network call is made
            let tokens = match tokenize(&result.args) {
                Ok(tokens) => tokens,
                Err(error) => {
                    let _ = ctxt.reply(error.to_string().codeblock("asciidoc")).await;
                    return;
                },
            };

            if let Err(error) = result.command.run(ctxt, tokens).await {
                let _ = ctxt.reply(format!(":warning: `{error}`")).await;
            }
        },
        Ok(None) => { /* command not found */ },
        Err(error) => {
            if error.get_severity() == ErrorSeverity::High {
                err!("{error}");
            } else {
                debug!("{error}");
            }
        },
    };
}

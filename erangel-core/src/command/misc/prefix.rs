use anyhow::{bail, ensure, Context};
use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_database::model::guild_settings::GuildSettings;

use crate::command::{Command, CommandCtxt, CommandMetadata, Group, PERM_ADMIN};

static METADATA: CommandMetadata = CommandMetadata {
    name: "prefix",
    aliases: &[],
    description: "Gets or sets this server's command prefix.",
    group: Group::Server,
    usage: "[new prefix]",
    examples: &["", "-", "%"],
    enabled: true,
    guild_only: true,
    permission_level: 0,
};

pub struct PrefixCommand;

#[async_trait]
impl Command for PrefixCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()> {
        let guild_id = ctxt.data.guild_id.context("prefix getting and setting can only be used in guilds")?;

        let settings = GuildSettings::get(&ctxt.erangel().database_handler, guild_id)
            .await
            .context("Failed to get guild settings")?
            .context("This guild has no settings row?")?;

        let Some(new) = args.first() else {
            ctxt.reply(format!("This server's prefix is: {}", settings.prefix.codestring()))
                .await?;
            return Ok(());
        };

        // viewing is open to everyone, changing is not
        if ctxt.data.permission_level < PERM_ADMIN {
            bail!("Invalid permissions");
        }

        ensure!(new.len() < 14, "Prefixes cannot be longer than 14 characters.");

        let new_settings = GuildSettings {
            prefix: new.clone(),
            ..settings
        };
        new_settings
            .set(&ctxt.erangel().database_handler, guild_id)
            .await
            .context("Failed to set new prefix")?;

        ctxt.reply(format!(
            "This server's prefix is now: {}",
            new_settings.prefix.codestring()
        ))
        .await?;

        Ok(())
    }
}

use anyhow::bail;
use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;
use erangel_database::model::user_settings::UserSettings;

use crate::command::parameters::partition_tokens;
use crate::command::validation::{is_valid_mode, is_valid_region};
use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::rest::pubg::{GameMode, Region};

static REGISTER_METADATA: CommandMetadata = CommandMetadata {
    name: "register",
    aliases: &[],
    description: "Registers your PUBG username (and optional defaults) so commands can omit it.",
    group: Group::User,
    usage: "<username> [region=] [season=] [mode=]",
    examples: &["Jane", "\"Player A\" region=pc-eu", "Jane mode=squad-fpp"],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct RegisterCommand;

#[async_trait]
impl Command for RegisterCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &REGISTER_METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()> {
        let (positional, named) = partition_tokens(&args);

        let Some(username) = positional.first() else {
            bail!("Error:: Must specify a username to register.");
        };

        let region = named.get("region").map(|r| r.to_ascii_uppercase().replace('-', "_"));
        if let Some(ref region) = region {
            if !is_valid_region(region) {
                bail!(
                    "Error:: Invalid region parameter - \"{region}\". Valid regions: {}",
                    join_list(&Region::names())
                );
            }
        }

        let mode = named.get("mode").map(|m| m.to_ascii_uppercase().replace('-', "_"));
        if let Some(ref mode) = mode {
            if !is_valid_mode(mode) {
                bail!(
                    "Error:: Invalid mode parameter - \"{mode}\". Valid modes: {}",
                    join_list(&GameMode::names())
                );
            }
        }

        let settings = UserSettings {
            username: Some((*username).to_owned()),
            region,
            season: named.get("season").cloned(),
            mode,
        };
        settings
            .set(&ctxt.erangel().database_handler, ctxt.data.author.id.get())
            .await?;

        ctxt.reply(format!(
            "Registered {} as your PUBG username. Commands now work without specifying it.",
            username.codestring()
        ))
        .await?;

        Ok(())
    }
}

static UNREGISTER_METADATA: CommandMetadata = CommandMetadata {
    name: "unregister",
    aliases: &[],
    description: "Clears your registered PUBG username and defaults.",
    group: Group::User,
    usage: "",
    examples: &[""],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct UnregisterCommand;

#[async_trait]
impl Command for UnregisterCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &UNREGISTER_METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, _args: Vec<String>) -> anyhow::Result<()> {
        UserSettings::clear(&ctxt.erangel().database_handler, ctxt.data.author.id.get()).await?;

        ctxt.reply("Your registration has been removed.").await?;

        Ok(())
    }
}

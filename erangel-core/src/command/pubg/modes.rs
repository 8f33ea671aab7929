use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;

use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::rest::pubg::GameMode;

static METADATA: CommandMetadata = CommandMetadata {
    name: "modes",
    aliases: &[],
    description: "Lists every game mode a lookup can run against.",
    group: Group::Pubg,
    usage: "",
    examples: &[""],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct ModesCommand;

#[async_trait]
impl Command for ModesCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, _args: Vec<String>) -> anyhow::Result<()> {
        ctxt.reply(
            format!("== Available Modes ==\n{}", join_list(&GameMode::names())).codeblock("asciidoc"),
        )
        .await?;

        Ok(())
    }
}

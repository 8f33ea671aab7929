use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;

use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::rest::pubg::Region;

static METADATA: CommandMetadata = CommandMetadata {
    name: "regions",
    aliases: &[],
    description: "Lists every region a lookup can run against.",
    group: Group::Pubg,
    usage: "",
    examples: &[""],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct RegionsCommand;

#[async_trait]
impl Command for RegionsCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, _args: Vec<String>) -> anyhow::Result<()> {
        ctxt.reply(
            format!("== Available Regions ==\n{}", join_list(&Region::names())).codeblock("asciidoc"),
        )
        .await?;

        Ok(())
    }
}

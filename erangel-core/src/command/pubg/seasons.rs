use anyhow::Context;
use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;

use crate::command::parameters::resolve_parameters;
use crate::command::validation::validate_parameters;
use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::rest::pubg::Region;

static METADATA: CommandMetadata = CommandMetadata {
    name: "seasons",
    aliases: &[],
    description: "Lists the seasons currently available for a region.",
    group: Group::Pubg,
    usage: "[region=]",
    examples: &["", "region=pc-eu"],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct SeasonsCommand;

#[async_trait]
impl Command for SeasonsCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()> {
        let params = resolve_parameters(&ctxt, &args).await?;

        if !validate_parameters(&ctxt, &params, false).await? {
            return Ok(());
        }

        let region = Region::parse(&params.region).context("validated region failed to parse")?;
        let seasons = ctxt.fetcher().seasons(region).await;

        if seasons.is_empty() {
            ctxt.reply(format!(
                "Could not fetch the season list for {} right now.",
                params.region.codestring()
            ))
            .await?;
            return Ok(());
        }

        let listing: Vec<String> = seasons
            .iter()
            .map(|s| {
                if s.attributes.is_current_season {
                    format!("{} (current)", s.display_id())
                } else {
                    s.display_id().to_owned()
                }
            })
            .collect();

        ctxt.reply(
            format!("== Available {} Seasons ==\n{}", params.region, join_list(&listing)).codeblock("asciidoc"),
        )
        .await?;

        Ok(())
    }
}

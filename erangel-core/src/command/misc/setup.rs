use anyhow::{bail, ensure, Context};
use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;
use erangel_database::model::guild_settings::GuildSettings;

use crate::command::parameters::{partition_tokens, DEFAULT_MODE, DEFAULT_REGION};
use crate::command::validation::{is_valid_mode, is_valid_region, is_valid_season};
use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::rest::pubg::{GameMode, Region};

static METADATA: CommandMetadata = CommandMetadata {
    name: "setup",
    aliases: &[],
    description: "Shows or changes this server's stored defaults (prefix, region, season, mode).",
    group: Group::Server,
    usage: "[prefix=] [region=] [season=] [mode=]",
    examples: &["", "prefix=!pubg-", "region=pc-eu mode=squad", "season=2018-09"],
    enabled: true,
    guild_only: true,
    permission_level: 4,
};

fn render_settings(settings: &GuildSettings) -> String {
    format!(
        "= Server Defaults =\nPrefix:: {}\nRegion:: {}\nSeason:: {}\nMode:: {}",
        settings.prefix,
        settings.region.as_deref().unwrap_or(DEFAULT_REGION),
        settings.season.as_deref().unwrap_or("(current)"),
        settings.mode.as_deref().unwrap_or(DEFAULT_MODE),
    )
}

pub struct SetupCommand;

#[async_trait]
impl Command for SetupCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()> {
        let guild_id = ctxt.data.guild_id.context("setup can only be used in guilds")?;

        let settings = GuildSettings::get(&ctxt.erangel().database_handler, guild_id)
            .await
            .context("Failed to get guild settings")?
            .context("This guild has no settings row?")?;

        let (_, named) = partition_tokens(&args);
        if named.is_empty() {
            ctxt.reply(render_settings(&settings).codeblock("asciidoc")).await?;
            return Ok(());
        }

        let mut updated = settings;

        if let Some(prefix) = named.get("prefix") {
            ensure!(prefix.len() < 14, "Prefixes cannot be longer than 14 characters.");
            updated.prefix = prefix.clone();
        }

        if let Some(region) = named.get("region") {
            let region = region.to_ascii_uppercase().replace('-', "_");
            if !is_valid_region(&region) {
                bail!(
                    "Error:: Invalid region parameter - \"{region}\". Valid regions: {}",
                    join_list(&Region::names())
                );
            }
            updated.region = Some(region);
        }

        if let Some(mode) = named.get("mode") {
            let mode = mode.to_ascii_uppercase().replace('-', "_");
            if !is_valid_mode(&mode) {
                bail!(
                    "Error:: Invalid mode parameter - \"{mode}\". Valid modes: {}",
                    join_list(&GameMode::names())
                );
            }
            updated.mode = Some(mode);
        }

        if let Some(season) = named.get("season") {
            // check against the live list when the effective region is known
            let effective_region = updated.region.as_deref().unwrap_or(DEFAULT_REGION);
            if let Some(region) = Region::parse(effective_region) {
                let seasons = ctxt.fetcher().seasons(region).await;
                if !seasons.is_empty() && !is_valid_season(&seasons, season) {
                    bail!(
                        "Error:: Invalid season parameter - \"{season}\". Valid seasons: {}",
                        join_list(&seasons.iter().map(|s| s.display_id()).collect::<Vec<_>>())
                    );
                }
            }
            updated.season = Some(season.clone());
        }

        updated
            .set(&ctxt.erangel().database_handler, guild_id)
            .await
            .context("Failed to store server defaults")?;

        ctxt.reply(render_settings(&updated).codeblock("asciidoc")).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_settings_show_fallbacks() {
        let settings = GuildSettings::with_prefix("!".to_owned());
        let rendered = render_settings(&settings);
        assert!(rendered.contains("Prefix:: !"));
        assert!(rendered.contains("Region:: PC_NA"));
        assert!(rendered.contains("Season:: (current)"));
        assert!(rendered.contains("Mode:: SOLO_FPP"));
    }

    #[test]
    fn rendered_settings_show_stored_values() {
        let settings = GuildSettings {
            prefix: "%".to_owned(),
            region: Some("PC_EU".to_owned()),
            season: Some("2018-09".to_owned()),
            mode: Some("SQUAD".to_owned()),
        };
        let rendered = render_settings(&settings);
        assert!(rendered.contains("Region:: PC_EU"));
        assert!(rendered.contains("Season:: 2018-09"));
        assert!(rendered.contains("Mode:: SQUAD"));
    }
}

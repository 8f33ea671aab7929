use anyhow::Context;
use async_trait::async_trait;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

use super::matches::{MatchesView, EMBED_COLOUR};
use super::not_found_message;
use crate::command::parameters::resolve_parameters;
use crate::command::validation::validate_parameters;
use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::rest::pubg::{GameMode, GameModeStats, Region};

fn kd_ratio(stats: &GameModeStats) -> f64 {
    let deaths = stats.rounds_played.saturating_sub(stats.wins).max(1);
    stats.kills as f64 / deaths as f64
}

fn win_rate(stats: &GameModeStats) -> f64 {
    if stats.rounds_played == 0 {
        return 0.0;
    }
    stats.wins as f64 * 100.0 / stats.rounds_played as f64
}

fn top10_rate(stats: &GameModeStats) -> f64 {
    if stats.rounds_played == 0 {
        return 0.0;
    }
    stats.top10s as f64 * 100.0 / stats.rounds_played as f64
}

fn average_damage(stats: &GameModeStats) -> f64 {
    if stats.rounds_played == 0 {
        return 0.0;
    }
    stats.damage_dealt / stats.rounds_played as f64
}

fn format_stats(stats: &GameModeStats) -> String {
    format!(
        "KD: {:.2}\nWin %: {:.1}%\nTop 10 %: {:.1}%\nAvg Damage: {:.0}\nKills: {}\nAssists: {}\nRounds: {}",
        kd_ratio(stats),
        win_rate(stats),
        top10_rate(stats),
        average_damage(stats),
        stats.kills,
        stats.assists,
        stats.rounds_played
    )
}

static METADATA: CommandMetadata = CommandMetadata {
    name: "stats",
    aliases: &["rank"],
    description: "Returns a player's season stats for the resolved game mode. Name is case sensitive.",
    group: Group::Pubg,
    usage: "[username] [season=] [region=] [mode=]",
    examples: &[
        "",
        "Jane",
        "\"Player A\" season=2018-03",
        "Jane region=pc-eu mode=squad",
    ],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct StatsCommand;

#[async_trait]
impl Command for StatsCommand {
    fn metadata(&self) -> &'static CommandMetadata {
        &METADATA
    }

    async fn run(&self, ctxt: CommandCtxt<'_>, args: Vec<String>) -> anyhow::Result<()> {
        let params = resolve_parameters(&ctxt, &args).await?;
        let username = params.require_username()?.to_owned();

        ctxt.reply("Checking for valid parameters ...").await?;
        if !validate_parameters(&ctxt, &params, true).await? {
            return Ok(());
        }

        ctxt.reply("Getting season stats ...").await?;

        let region = Region::parse(&params.region).context("validated region failed to parse")?;
        let mode = GameMode::parse(&params.mode).context("validated mode failed to parse")?;

        let player_id = ctxt
            .fetcher()
            .player_id(&ctxt.erangel().database_handler, region, &username)
            .await;
        if player_id.is_empty() {
            ctxt.reply(not_found_message(&username, &params.region, &params.season)).await?;
            return Ok(());
        }

        let Some(season_data) = ctxt.fetcher().season_stats(region, &player_id, &params.season).await else {
            ctxt.reply(not_found_message(&username, &params.region, &params.season)).await?;
            return Ok(());
        };

        let mut embed = EmbedBuilder::new()
            .title(format!("Stats for {username}"))
            .description(format!(
                "Season:\t{}\nRegion:\t{}",
                params.season,
                params.region.replace('_', "-")
            ))
            .color(EMBED_COLOUR)
            .footer(EmbedFooterBuilder::new("Data from the official PUBG API"));

        for bucket in MatchesView::Initial.buckets(mode) {
            match season_data.stats_for(*bucket) {
                Some(stats) if stats.rounds_played > 0 => {
                    embed = embed.field(
                        EmbedFieldBuilder::new(bucket.display_name(), format_stats(stats)).inline(),
                    );
                },
                _ => {
                    embed = embed.field(EmbedFieldBuilder::new(
                        format!("{} Status", bucket.display_name()),
                        format!("Player hasn't played {} games this season", bucket.display_name()),
                    ));
                },
            }
        }

        ctxt.reply(embed.build()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(kills: u64, wins: u64, top10s: u64, rounds: u64, damage: f64) -> GameModeStats {
        GameModeStats {
            kills,
            assists: 0,
            wins,
            losses: rounds - wins,
            top10s,
            rounds_played: rounds,
            damage_dealt: damage,
        }
    }

    #[test]
    fn kd_excludes_won_rounds() {
        // 10 kills over 20 rounds with 5 wins: 10 / 15
        let s = stats(10, 5, 10, 20, 0.0);
        assert!((kd_ratio(&s) - 10.0 / 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn kd_with_no_deaths_does_not_divide_by_zero() {
        let s = stats(3, 1, 1, 1, 0.0);
        assert!((kd_ratio(&s) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rates_with_no_rounds_are_zero() {
        let s = stats(0, 0, 0, 0, 0.0);
        assert_eq!(win_rate(&s), 0.0);
        assert_eq!(top10_rate(&s), 0.0);
        assert_eq!(average_damage(&s), 0.0);
    }

    #[test]
    fn formatted_stats_include_every_line() {
        let formatted = format_stats(&stats(10, 5, 10, 20, 3000.0));
        for label in ["KD:", "Win %:", "Top 10 %:", "Avg Damage:", "Kills:", "Assists:", "Rounds:"] {
            assert!(formatted.contains(label), "missing {label}");
        }
    }
}

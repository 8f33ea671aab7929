use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use erangel_common::markdown::Markdown;
use tracing::debug;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::channel::message::Embed;
use twilight_model::id::Id;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

use super::not_found_message;
use crate::command::parameters::resolve_parameters;
use crate::command::validation::validate_parameters;
use crate::command::{Command, CommandCtxt, CommandMetadata, Group};
use crate::erangel::Erangel;
use crate::rest::pubg::{map_display_name, GameMode, PlayerSeason, Region};
use crate::rest::REPLAY_URL_BASE;

pub static MAX_MATCHES: usize = 5;

pub static EMBED_COLOUR: u32 = 0xF2A900;

pub static REACTION_SOLO: &str = "1\u{fe0f}\u{20e3}";
pub static REACTION_DUO: &str = "2\u{fe0f}\u{20e3}";
pub static REACTION_SQUAD: &str = "4\u{fe0f}\u{20e3}";

/// The views an interactive matches reply can show. The initial view renders
/// the family of the resolved mode; each recognized reaction transitions to
/// its own view. Every transition re-renders from the same immutable season
/// snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchesView {
    Initial,
    Solo,
    Duo,
    Squad,
}
impl MatchesView {
    pub fn from_reaction(emoji: &str) -> Option<MatchesView> {
        if emoji == REACTION_SOLO {
            Some(MatchesView::Solo)
        } else if emoji == REACTION_DUO {
            Some(MatchesView::Duo)
        } else if emoji == REACTION_SQUAD {
            Some(MatchesView::Squad)
        } else {
            None
        }
    }

    fn for_mode(mode: GameMode) -> MatchesView {
        match mode {
            GameMode::Solo | GameMode::SoloFpp => MatchesView::Solo,
            GameMode::Duo | GameMode::DuoFpp => MatchesView::Duo,
            GameMode::Squad | GameMode::SquadFpp => MatchesView::Squad,
        }
    }

    /// The FPP and TPP buckets this view renders, most played first.
    pub fn buckets(self, default_mode: GameMode) -> &'static [GameMode] {
        match self {
            MatchesView::Initial => MatchesView::for_mode(default_mode).buckets(default_mode),
            MatchesView::Solo => &[GameMode::SoloFpp, GameMode::Solo],
            MatchesView::Duo => &[GameMode::DuoFpp, GameMode::Duo],
            MatchesView::Squad => &[GameMode::SquadFpp, GameMode::Squad],
        }
    }
}

/// Everything needed to re-render a matches reply when a reaction arrives.
/// The season snapshot is immutable; transitions only select a view over it.
#[derive(Clone)]
pub struct MatchesSession {
    pub invoker: u64,
    pub username: String,
    pub region: Region,
    pub season: String,
    pub mode: GameMode,
    pub season_data: Arc<PlayerSeason>,
}

pub fn replay_url(region: Region, username: &str, match_id: &str) -> String {
    let (platform, region_part) = region.split_lower();
    format!(
        "{REPLAY_URL_BASE}/match/{platform}/{region_part}/{match_id}?highlight={}",
        urlencoding::encode(username)
    )
}

fn base_embed(session: &MatchesSession) -> EmbedBuilder {
    EmbedBuilder::new()
        .title(format!("Matches for {}", session.username))
        .description(format!(
            "Season:\t{}\nRegion:\t{}",
            session.season,
            session.region.name().replace('_', "-")
        ))
        .color(EMBED_COLOUR)
        .footer(EmbedFooterBuilder::new("Powered by https://pubg-replay.com"))
}

/// Renders one view of the session, fetching match details (cached) for the
/// most recent matches in each bucket.
pub async fn render_view(erangel: &Erangel, session: &MatchesSession, view: MatchesView) -> Embed {
    let mut embed = base_embed(session);

    for mode in view.buckets(session.mode) {
        let ids = session.season_data.match_ids(*mode);

        if ids.is_empty() {
            embed = embed.field(EmbedFieldBuilder::new(
                format!("{} Status", mode.display_name()),
                format!("Player hasn't played {} games this season", mode.display_name()),
            ));
            continue;
        }

        let mut lines = String::new();
        for match_ref in ids.iter().take(MAX_MATCHES) {
            let Some(info) = erangel.pubg.match_info(session.region, &match_ref.id).await else {
                continue;
            };

            let link = format!("{} Match", map_display_name(&info.attributes.map_name)).url(
                replay_url(session.region, &session.username, &info.id),
                None::<&str>,
            );
            lines.push_str(&format!(
                "{link} at {}\n",
                info.attributes.created_at_display().codestring()
            ));
        }

        if lines.is_empty() {
            lines.push_str("No match details available right now.");
        }

        embed = embed.field(EmbedFieldBuilder::new(format!("{} Matches", mode.display_name()), lines).inline());
    }

    embed.build()
}

static METADATA: CommandMetadata = CommandMetadata {
    name: "matches",
    aliases: &[],
    description: "Returns links to the player's last 5 matches. Name is case sensitive.",
    group: Group::Pubg,
    usage: "[username] [season=] [region=] [mode=]",
    examples: &[
        "",
        "Jane",
        "\"Player A\"",
        "Jane season=2018-03",
        "Jane season=2018-03 region=pc-na",
        "Jane season=2018-03 region=pc-na mode=solo-fpp",
    ],
    enabled: true,
    guild_only: false,
    permission_level: 0,
};

pub struct MatchesCommand;

#[async_trait]
impl Command for MatchesCommand {
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

        ctxt.reply("Getting matches ...").await?;

        let region = Region::parse(&params.region).context("validated region failed to parse")?;
        let mode = GameMode::parse(&params.mode).context("validated mode failed to parse")?;

        let players = ctxt.fetcher().players_by_name(region, &username).await;
        let Some(player) = players.first() else {
            ctxt.reply(not_found_message(&username, &params.region, &params.season)).await?;
            return Ok(());
        };

        let Some(season_data) = ctxt.fetcher().season_stats(region, &player.id, &params.season).await else {
            ctxt.reply(not_found_message(&username, &params.region, &params.season)).await?;
            return Ok(());
        };

        let session = MatchesSession {
            invoker: ctxt.data.author.id.get(),
            username,
            region,
            season: params.season.clone(),
            mode,
            season_data: Arc::new(season_data),
        };

        let embed = render_view(ctxt.erangel(), &session, MatchesView::Initial).await;
        let content = format!(
            "{}, use the {}, {}, and {} reactions to switch between {}, {}, and {}.",
            ctxt.data.author.name.bold(),
            "1".bold(),
            "2".bold(),
            "4".bold(),
            "Solo".bold(),
            "Duo".bold(),
            "Squad".bold()
        );
        ctxt.reply((content, embed)).await?;

        // wire the reaction affordances up to the sent reply
        if let Some(reply) = ctxt.erangel().replies.get_reply(ctxt.data.message_id) {
            for emoji in [REACTION_SOLO, REACTION_DUO, REACTION_SQUAD] {
                let request = RequestReactionType::Unicode { name: emoji };
                if let Err(error) = ctxt
                    .erangel()
                    .http_client
                    .create_reaction(Id::new(ctxt.data.channel_id), Id::new(reply.message_id), &request)
                    .await
                {
                    debug!("failed to add reaction affordance: {error}");
                }
            }

            ctxt.erangel().replies.insert_matches_session(reply.message_id, session);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_transitions() {
        assert_eq!(MatchesView::from_reaction(REACTION_SOLO), Some(MatchesView::Solo));
        assert_eq!(MatchesView::from_reaction(REACTION_DUO), Some(MatchesView::Duo));
        assert_eq!(MatchesView::from_reaction(REACTION_SQUAD), Some(MatchesView::Squad));
        assert_eq!(MatchesView::from_reaction("🎉"), None);
    }

    #[test]
    fn initial_view_follows_resolved_mode() {
        assert_eq!(
            MatchesView::Initial.buckets(GameMode::DuoFpp),
            &[GameMode::DuoFpp, GameMode::Duo][..]
        );
        assert_eq!(
            MatchesView::Initial.buckets(GameMode::Squad),
            &[GameMode::SquadFpp, GameMode::Squad][..]
        );
    }

    #[test]
    fn explicit_views_ignore_resolved_mode() {
        assert_eq!(
            MatchesView::Solo.buckets(GameMode::Squad),
            &[GameMode::SoloFpp, GameMode::Solo][..]
        );
    }

    #[test]
    fn replay_url_encodes_username() {
        let url = replay_url(Region::PcNa, "Player A", "m-1");
        assert_eq!(url, "https://pubg-replay.com/match/pc/na/m-1?highlight=Player%20A");
    }
}

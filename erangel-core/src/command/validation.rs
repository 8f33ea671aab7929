//! Validation of resolved parameters against what the API actually supports.
//!
//! Region and mode are static membership checks; the season list is dynamic
//! per region and comes through the cache-aside fetch layer. The three checks
//! run independently so one reply can list every problem at once.

use erangel_common::markdown::Markdown;
use erangel_common::util::join_list;

use super::parameters::ResolvedParameters;
use super::CommandCtxt;
use crate::rest::pubg::{GameMode, Region, Season};

pub fn is_valid_region(value: &str) -> bool {
    Region::parse(value).is_some()
}

pub fn is_valid_mode(value: &str) -> bool {
    GameMode::parse(value).is_some()
}

pub fn is_valid_season(seasons: &[Season], display_id: &str) -> bool {
    seasons.iter().any(|s| s.display_id() == display_id)
}

fn season_error_block(seasons: &[Season], supplied: &str) -> String {
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

    format!(
        "Error:: Invalid season parameter - \"{supplied}\"\n== Available Seasons ==\n{}\n",
        join_list(&listing)
    )
}

fn region_error_block(supplied: &str) -> String {
    format!(
        "Error:: Invalid region parameter - \"{supplied}\"\n== Available Regions ==\n{}\n",
        join_list(&Region::names())
    )
}

fn mode_error_block(supplied: &str) -> String {
    format!(
        "Error:: Invalid mode parameter - \"{supplied}\"\n== Available Modes ==\n{}\n",
        join_list(&GameMode::names())
    )
}

/// Checks every applicable parameter, reporting all failures in a single
/// consolidated reply. Returns `true` only if everything passed; on `false` a
/// message has already been sent and the caller must abort its command.
pub async fn validate_parameters(
    ctxt: &CommandCtxt<'_>,
    params: &ResolvedParameters,
    validate_season: bool,
) -> anyhow::Result<bool> {
    let region = Region::parse(&params.region);
    let valid_mode = is_valid_mode(&params.mode);

    let mut err_message = String::new();

    // no season check is meaningful without a valid region; validation for it
    // is bypassed and the region failure reported on its own
    let mut valid_season = true;
    if validate_season {
        if let Some(region) = region {
            let seasons = ctxt.fetcher().seasons(region).await;
            valid_season = is_valid_season(&seasons, &params.season);

            if !valid_season {
                err_message.push_str(&season_error_block(&seasons, &params.season));
            }
        }
    }

    if region.is_none() {
        err_message.push('\n');
        err_message.push_str(&region_error_block(&params.region));
    }

    if !valid_mode {
        err_message.push('\n');
        err_message.push_str(&mode_error_block(&params.mode));
    }

    if region.is_none() || !valid_season || !valid_mode {
        ctxt.reply(err_message.trim().codeblock("asciidoc")).await?;
        return Ok(false);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::pubg::SeasonAttributes;

    fn season(id: &str, current: bool) -> Season {
        Season {
            id: id.to_owned(),
            attributes: SeasonAttributes {
                is_current_season: current,
                is_offseason: false,
            },
        }
    }

    #[test]
    fn region_membership() {
        assert!(is_valid_region("NA"));
        assert!(is_valid_region("PC_EU"));
        assert!(!is_valid_region("xx"));
    }

    #[test]
    fn mode_membership() {
        assert!(is_valid_mode("SQUAD_FPP"));
        assert!(!is_valid_mode("trios"));
    }

    #[test]
    fn season_membership_uses_display_ids() {
        let seasons = vec![
            season("division.bro.official.2018-03", false),
            season("division.bro.official.2018-09", true),
        ];
        assert!(is_valid_season(&seasons, "2018-03"));
        assert!(!is_valid_season(&seasons, "division.bro.official.2018-03"));
        assert!(!is_valid_season(&seasons, "2019-01"));
    }

    #[test]
    fn season_block_lists_alternatives_with_current_marker() {
        let seasons = vec![
            season("division.bro.official.2018-03", false),
            season("division.bro.official.2018-09", true),
        ];
        let block = season_error_block(&seasons, "2016-01");
        assert!(block.contains("Invalid season parameter - \"2016-01\""));
        assert!(block.contains("2018-03, 2018-09 (current)"));
        assert!(!block.trim_end().ends_with(','));
    }

    #[test]
    fn region_block_lists_every_region() {
        let block = region_error_block("xx");
        assert!(block.contains("== Available Regions =="));
        assert!(block.contains("PC_NA"));
        assert!(block.contains("XBOX_OC"));
    }
}

//! Resolution of tokenized arguments into typed lookup parameters.
//!
//! Tokens are partitioned into named `key=value` parameters and positional
//! text. A single positional token is the username; usernames are opaque and
//! case-sensitive and are never normalized. Each remaining field falls back
//! independently: explicit named parameter, then the invoking guild's stored
//! default, then the invoking user's stored default, then the system default.

use std::collections::HashMap;
use std::fmt::Display;

use erangel_database::model::guild_settings::GuildSettings;
use erangel_database::model::user_settings::UserSettings;

use super::CommandCtxt;
use crate::rest::pubg::Region;

/// Keys recognized in `key=value` tokens, matched case-insensitively.
/// `username` is parsed but never honored as a named value: usernames are
/// positional only.
pub static KNOWN_KEYS: &[&str] = &["username", "season", "region", "mode"];

pub static DEFAULT_REGION: &str = "PC_NA";
pub static DEFAULT_MODE: &str = "SOLO_FPP";

#[derive(Debug)]
pub enum ParameterError {
    /// No username was supplied and none is registered for the invoker.
    MissingUsername,
}
impl Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingUsername => f.write_str(
                "Error:: Must specify a username or register one with the `register` command.",
            ),
        }
    }
}
impl std::error::Error for ParameterError {}

/// The typed result of parameter resolution, owned by one command invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedParameters {
    /// May be empty when the invoker neither supplied nor registered one.
    pub username: String,
    /// Season display identifier, e.g. `2018-09`. May be empty if the current
    /// season could not be determined.
    pub season: String,
    /// Uppercase, underscore-separated, e.g. `PC_NA`.
    pub region: String,
    /// Uppercase, underscore-separated, e.g. `SOLO_FPP`.
    pub mode: String,
}
impl ResolvedParameters {
    pub fn require_username(&self) -> Result<&str, ParameterError> {
        if self.username.is_empty() {
            Err(ParameterError::MissingUsername)
        } else {
            Ok(&self.username)
        }
    }
}

/// Splits tokens into recognized named parameters and positional text.
/// Tokens with an unrecognized key keep their `key=value` form as positional
/// text rather than being dropped.
pub fn partition_tokens(tokens: &[String]) -> (Vec<&str>, HashMap<String, String>) {
    let mut positional = Vec::new();
    let mut named = HashMap::new();

    for token in tokens {
        if let Some((key, value)) = token.split_once('=') {
            let key = key.to_ascii_lowercase();
            if KNOWN_KEYS.contains(&key.as_str()) {
                named.insert(key, value.to_owned());
                continue;
            }
        }
        positional.push(token.as_str());
    }

    (positional, named)
}

fn normalize(value: &str) -> String {
    value.to_ascii_uppercase().replace('-', "_")
}

/// Pure resolution against already-loaded default sources. The season is left
/// empty when no source supplies one; the async wrapper fills it from the
/// current-season lookup.
pub fn resolve_from_sources(
    tokens: &[String],
    guild: Option<&GuildSettings>,
    user: Option<&UserSettings>,
) -> ResolvedParameters {
    let (positional, named) = partition_tokens(tokens);

    let username = positional
        .first()
        .map(|s| (*s).to_owned())
        .or_else(|| user.and_then(|u| u.username.clone()))
        .unwrap_or_default();

    let region = named
        .get("region")
        .cloned()
        .or_else(|| guild.and_then(|g| g.region.clone()))
        .or_else(|| user.and_then(|u| u.region.clone()))
        .unwrap_or_else(|| DEFAULT_REGION.to_owned());

    let mode = named
        .get("mode")
        .cloned()
        .or_else(|| guild.and_then(|g| g.mode.clone()))
        .or_else(|| user.and_then(|u| u.mode.clone()))
        .unwrap_or_else(|| DEFAULT_MODE.to_owned());

    let season = named
        .get("season")
        .cloned()
        .or_else(|| guild.and_then(|g| g.season.clone()))
        .or_else(|| user.and_then(|u| u.season.clone()))
        .unwrap_or_default();

    ResolvedParameters {
        username,
        season,
        region: normalize(&region),
        mode: normalize(&mode),
    }
}

/// Full resolution for one invocation: loads the invoker's stored defaults,
/// applies the fallback chain, and resolves an omitted season to the current
/// season for the resolved region.
pub async fn resolve_parameters(ctxt: &CommandCtxt<'_>, tokens: &[String]) -> anyhow::Result<ResolvedParameters> {
    let user_settings = UserSettings::get(&ctxt.erangel().database_handler, ctxt.data.author.id.get()).await?;

    let mut params = resolve_from_sources(tokens, ctxt.data.guild_settings.as_ref(), user_settings.as_ref());

    if params.season.is_empty() {
        // an invalid region is left for validation to report; no season check
        // is meaningful without one
        if let Some(region) = Region::parse(&params.region) {
            params.season = ctxt
                .fetcher()
                .current_season_display(region)
                .await
                .unwrap_or_default();
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    fn guild_with(region: Option<&str>, season: Option<&str>, mode: Option<&str>) -> GuildSettings {
        GuildSettings {
            prefix: "!".to_owned(),
            region: region.map(ToOwned::to_owned),
            season: season.map(ToOwned::to_owned),
            mode: mode.map(ToOwned::to_owned),
        }
    }

    fn user_with(username: Option<&str>, region: Option<&str>) -> UserSettings {
        UserSettings {
            username: username.map(ToOwned::to_owned),
            region: region.map(ToOwned::to_owned),
            season: None,
            mode: None,
        }
    }

    #[test]
    fn named_parameters_resolve_and_normalize() {
        let params = resolve_from_sources(
            &tokens(&["Player A", "season=2018-03", "region=pc-na"]),
            None,
            None,
        );
        assert_eq!(
            params,
            ResolvedParameters {
                username: "Player A".to_owned(),
                season: "2018-03".to_owned(),
                region: "PC_NA".to_owned(),
                mode: DEFAULT_MODE.to_owned(),
            }
        );
    }

    #[test]
    fn region_normalization_replaces_hyphens() {
        let params = resolve_from_sources(&tokens(&["x", "region=eu-west"]), None, None);
        assert_eq!(params.region, "EU_WEST");
    }

    #[test]
    fn named_keys_are_case_insensitive() {
        let params = resolve_from_sources(&tokens(&["x", "REGION=pc-eu", "Mode=duo"]), None, None);
        assert_eq!(params.region, "PC_EU");
        assert_eq!(params.mode, "DUO");
    }

    #[test]
    fn unrecognized_keys_stay_positional() {
        let params = resolve_from_sources(&tokens(&["foo=bar"]), None, None);
        assert_eq!(params.username, "foo=bar");
    }

    #[test]
    fn named_username_is_not_honored() {
        let params = resolve_from_sources(&tokens(&["username=Jane"]), None, None);
        assert_eq!(params.username, "");
    }

    #[test]
    fn username_case_is_preserved() {
        let params = resolve_from_sources(&tokens(&["ShRoUd"]), None, None);
        assert_eq!(params.username, "ShRoUd");
    }

    #[test]
    fn guild_default_applies_before_user_default() {
        let guild = guild_with(Some("NA"), None, None);
        let user = user_with(None, Some("pc-eu"));
        let params = resolve_from_sources(&tokens(&["x"]), Some(&guild), Some(&user));
        assert_eq!(params.region, "NA");
    }

    #[test]
    fn user_default_applies_without_guild_default() {
        let guild = guild_with(None, None, None);
        let user = user_with(None, Some("pc-eu"));
        let params = resolve_from_sources(&tokens(&["x"]), Some(&guild), Some(&user));
        assert_eq!(params.region, "PC_EU");
    }

    #[test]
    fn explicit_parameter_overrides_stored_defaults() {
        let guild = guild_with(Some("pc-na"), None, Some("squad"));
        let params = resolve_from_sources(&tokens(&["x", "mode=solo-fpp"]), Some(&guild), None);
        assert_eq!(params.mode, "SOLO_FPP");
    }

    #[test]
    fn system_defaults_fill_the_gaps() {
        let params = resolve_from_sources(&tokens(&["x"]), None, None);
        assert_eq!(params.region, DEFAULT_REGION);
        assert_eq!(params.mode, DEFAULT_MODE);
        assert_eq!(params.season, "");
    }

    #[test]
    fn registered_username_fills_missing_positional() {
        let user = user_with(Some("Jane"), None);
        let params = resolve_from_sources(&tokens(&["season=2018-03"]), None, Some(&user));
        assert_eq!(params.username, "Jane");
    }

    #[test]
    fn missing_username_is_an_error_not_a_default() {
        let params = resolve_from_sources(&tokens(&[]), None, None);
        assert!(matches!(params.require_username(), Err(ParameterError::MissingUsername)));
    }

    #[test]
    fn quoted_invocation_resolves_end_to_end() {
        let tokens =
            crate::command::tokenizer::tokenize(r#""Player A" season=2018-03 region=pc-na"#).unwrap();
        let params = resolve_from_sources(&tokens, None, None);
        assert_eq!(
            params,
            ResolvedParameters {
                username: "Player A".to_owned(),
                season: "2018-03".to_owned(),
                region: "PC_NA".to_owned(),
                mode: DEFAULT_MODE.to_owned(),
            }
        );
    }
}

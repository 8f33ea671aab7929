//! Typed client for the official PUBG REST API.
//!
//! The API speaks JSON:API (`application/vnd.api+json`): every payload nests
//! the useful parts under `data`/`attributes`/`relationships`, so the response
//! structs here mirror that nesting and accessors flatten it back out.

use std::collections::HashMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::PUBG_API_BASE;

/// The platform-region shards the API accepts, in their internal `PC_NA` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    PcAs,
    PcEu,
    PcJp,
    PcKakao,
    PcKrjp,
    PcNa,
    PcOc,
    PcRu,
    PcSa,
    PcSea,
    XboxAs,
    XboxEu,
    XboxNa,
    XboxOc,
}
impl Region {
    pub const ALL: &'static [Region] = &[
        Region::PcAs,
        Region::PcEu,
        Region::PcJp,
        Region::PcKakao,
        Region::PcKrjp,
        Region::PcNa,
        Region::PcOc,
        Region::PcRu,
        Region::PcSa,
        Region::PcSea,
        Region::XboxAs,
        Region::XboxEu,
        Region::XboxNa,
        Region::XboxOc,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Region::PcAs => "PC_AS",
            Region::PcEu => "PC_EU",
            Region::PcJp => "PC_JP",
            Region::PcKakao => "PC_KAKAO",
            Region::PcKrjp => "PC_KRJP",
            Region::PcNa => "PC_NA",
            Region::PcOc => "PC_OC",
            Region::PcRu => "PC_RU",
            Region::PcSa => "PC_SA",
            Region::PcSea => "PC_SEA",
            Region::XboxAs => "XBOX_AS",
            Region::XboxEu => "XBOX_EU",
            Region::XboxNa => "XBOX_NA",
            Region::XboxOc => "XBOX_OC",
        }
    }

    /// The shard identifier used in API paths, e.g. `pc-na`.
    pub fn shard(&self) -> String {
        self.name().to_ascii_lowercase().replace('_', "-")
    }

    /// The platform half of the region, e.g. `PC`.
    pub fn platform(&self) -> &'static str {
        match self.name().split_once('_') {
            Some(("XBOX", _)) => "XBOX",
            _ => "PC",
        }
    }

    /// Splits into lowercase platform and region halves, e.g. `("pc", "na")`.
    pub fn split_lower(&self) -> (String, String) {
        let (platform, region) = self.name().split_once('_').unwrap_or(("PC", "NA"));
        (platform.to_ascii_lowercase(), region.to_ascii_lowercase())
    }

    /// Parses a user-supplied region token. Tokens are case-insensitive and
    /// accept hyphens as word separators; a bare region with no platform half
    /// (`na`) is taken as the PC shard (`PC_NA`).
    pub fn parse(value: &str) -> Option<Region> {
        let normalized = value.to_ascii_uppercase().replace('-', "_");
        let candidate = if normalized.contains('_') {
            normalized
        } else {
            format!("PC_{normalized}")
        };

        Region::ALL.iter().find(|r| r.name() == candidate).copied()
    }

    pub fn names() -> Vec<&'static str> {
        Region::ALL.iter().map(Region::name).collect()
    }
}
impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Queue types tracked by the API, in their internal `SOLO_FPP` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Solo,
    SoloFpp,
    Duo,
    DuoFpp,
    Squad,
    SquadFpp,
}
impl GameMode {
    pub const ALL: &'static [GameMode] = &[
        GameMode::Solo,
        GameMode::SoloFpp,
        GameMode::Duo,
        GameMode::DuoFpp,
        GameMode::Squad,
        GameMode::SquadFpp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Solo => "SOLO",
            GameMode::SoloFpp => "SOLO_FPP",
            GameMode::Duo => "DUO",
            GameMode::DuoFpp => "DUO_FPP",
            GameMode::Squad => "SQUAD",
            GameMode::SquadFpp => "SQUAD_FPP",
        }
    }

    /// The key used by the API for this mode, e.g. `solo-fpp`.
    pub fn api_key(&self) -> String {
        self.name().to_ascii_lowercase().replace('_', "-")
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::Solo => "Solo TPP",
            GameMode::SoloFpp => "Solo FPP",
            GameMode::Duo => "Duo TPP",
            GameMode::DuoFpp => "Duo FPP",
            GameMode::Squad => "Squad TPP",
            GameMode::SquadFpp => "Squad FPP",
        }
    }

    pub fn parse(value: &str) -> Option<GameMode> {
        let normalized = value.to_ascii_uppercase().replace('-', "_");
        GameMode::ALL.iter().find(|m| m.name() == normalized).copied()
    }

    pub fn names() -> Vec<&'static str> {
        GameMode::ALL.iter().map(GameMode::name).collect()
    }
}
impl Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Deserialize)]
struct ApiList<T> {
    data: Vec<T>,
}

#[derive(Clone, Deserialize)]
struct ApiSingle<T> {
    data: T,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Player {
    pub id: String,
    pub attributes: PlayerAttributes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerAttributes {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Season {
    pub id: String,
    pub attributes: SeasonAttributes,
}
impl Season {
    /// The short form shown to users and accepted back as input:
    /// `division.bro.official.2018-09` renders as `2018-09`.
    pub fn display_id(&self) -> &str {
        self.id.rsplit("official.").next().unwrap_or(&self.id)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonAttributes {
    pub is_current_season: bool,
    #[serde(default)]
    pub is_offseason: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerSeason {
    pub attributes: PlayerSeasonAttributes,
    pub relationships: PlayerSeasonRelationships,
}
impl PlayerSeason {
    pub fn stats_for(&self, mode: GameMode) -> Option<&GameModeStats> {
        self.attributes.game_mode_stats.get(&mode.api_key())
    }

    pub fn match_ids(&self, mode: GameMode) -> &[MatchRef] {
        let list = match mode {
            GameMode::Solo => &self.relationships.matches_solo,
            GameMode::SoloFpp => &self.relationships.matches_solo_fpp,
            GameMode::Duo => &self.relationships.matches_duo,
            GameMode::DuoFpp => &self.relationships.matches_duo_fpp,
            GameMode::Squad => &self.relationships.matches_squad,
            GameMode::SquadFpp => &self.relationships.matches_squad_fpp,
        };
        &list.data
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonAttributes {
    pub game_mode_stats: HashMap<String, GameModeStats>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeStats {
    pub kills: u64,
    pub assists: u64,
    pub wins: u64,
    pub losses: u64,
    pub top10s: u64,
    pub rounds_played: u64,
    pub damage_dealt: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchRefList {
    pub data: Vec<MatchRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MatchRef {
    pub id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PlayerSeasonRelationships {
    #[serde(rename = "matchesSolo", default)]
    pub matches_solo: MatchRefList,
    #[serde(rename = "matchesSoloFPP", default)]
    pub matches_solo_fpp: MatchRefList,
    #[serde(rename = "matchesDuo", default)]
    pub matches_duo: MatchRefList,
    #[serde(rename = "matchesDuoFPP", default)]
    pub matches_duo_fpp: MatchRefList,
    #[serde(rename = "matchesSquad", default)]
    pub matches_squad: MatchRefList,
    #[serde(rename = "matchesSquadFPP", default)]
    pub matches_squad_fpp: MatchRefList,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MatchInfo {
    pub id: String,
    pub attributes: MatchAttributes,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAttributes {
    pub created_at: String,
    pub duration: u64,
    pub game_mode: String,
    pub map_name: String,
}
impl MatchAttributes {
    /// `2018-09-07T10:40:28Z` without the markers, for embed display.
    pub fn created_at_display(&self) -> String {
        self.created_at.replace('T', " ").trim_end_matches('Z').to_owned()
    }
}

/// The map identifiers the API returns are internal asset names.
pub fn map_display_name(map_name: &str) -> &str {
    match map_name {
        "Erangel_Main" => "Erangel",
        "Baltic_Main" => "Erangel (Remastered)",
        "Desert_Main" => "Miramar",
        "Savage_Main" => "Sanhok",
        "DihorOtok_Main" => "Vikendi",
        "Range_Main" => "Camp Jackal",
        other => other,
    }
}

pub struct PubgApi {
    client: reqwest::Client,
    api_key: String,
}
impl PubgApi {
    pub fn new(api_key: String) -> Self {
        PubgApi {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> anyhow::Result<T> {
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/vnd.api+json")
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?)
    }

    pub async fn players_by_name(&self, region: Region, names: &[&str]) -> anyhow::Result<Vec<Player>> {
        let url = format!(
            "{PUBG_API_BASE}/shards/{}/players?filter[playerNames]={}",
            region.shard(),
            names.join(",")
        );
        Ok(self.get_json::<ApiList<Player>>(url).await?.data)
    }

    pub async fn player_season(
        &self,
        region: Region,
        player_id: &str,
        season_id: &str,
    ) -> anyhow::Result<PlayerSeason> {
        let url = format!(
            "{PUBG_API_BASE}/shards/{}/players/{player_id}/seasons/{season_id}",
            region.shard()
        );
        Ok(self.get_json::<ApiSingle<PlayerSeason>>(url).await?.data)
    }

    pub async fn seasons(&self, region: Region) -> anyhow::Result<Vec<Season>> {
        let url = format!("{PUBG_API_BASE}/shards/{}/seasons", region.shard());
        Ok(self.get_json::<ApiList<Season>>(url).await?.data)
    }

    pub async fn match_info(&self, region: Region, match_id: &str) -> anyhow::Result<MatchInfo> {
        let url = format!("{PUBG_API_BASE}/shards/{}/matches/{match_id}", region.shard());
        Ok(self.get_json::<ApiSingle<MatchInfo>>(url).await?.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parse_platform_form() {
        assert_eq!(Region::parse("pc-na"), Some(Region::PcNa));
        assert_eq!(Region::parse("XBOX_EU"), Some(Region::XboxEu));
    }

    #[test]
    fn region_parse_bare_region_assumes_pc() {
        assert_eq!(Region::parse("NA"), Some(Region::PcNa));
        assert_eq!(Region::parse("krjp"), Some(Region::PcKrjp));
    }

    #[test]
    fn region_parse_unknown() {
        assert_eq!(Region::parse("xx"), None);
    }

    #[test]
    fn region_shard_form() {
        assert_eq!(Region::PcKakao.shard(), "pc-kakao");
    }

    #[test]
    fn region_split_lower() {
        assert_eq!(Region::XboxOc.split_lower(), ("xbox".to_owned(), "oc".to_owned()));
    }

    #[test]
    fn mode_parse_hyphenated() {
        assert_eq!(GameMode::parse("solo-fpp"), Some(GameMode::SoloFpp));
        assert_eq!(GameMode::parse("SQUAD"), Some(GameMode::Squad));
        assert_eq!(GameMode::parse("trios"), None);
    }

    #[test]
    fn mode_api_key() {
        assert_eq!(GameMode::DuoFpp.api_key(), "duo-fpp");
    }

    #[test]
    fn season_display_id_strips_division_prefix() {
        let season = Season {
            id: "division.bro.official.2018-09".to_owned(),
            attributes: SeasonAttributes {
                is_current_season: true,
                is_offseason: false,
            },
        };
        assert_eq!(season.display_id(), "2018-09");
    }

    #[test]
    fn season_display_id_passthrough() {
        let season = Season {
            id: "2017-beta".to_owned(),
            attributes: SeasonAttributes {
                is_current_season: false,
                is_offseason: false,
            },
        };
        assert_eq!(season.display_id(), "2017-beta");
    }

    #[test]
    fn player_season_deserializes_json_api_shape() {
        let raw = r#"{
            "attributes": {
                "gameModeStats": {
                    "solo-fpp": {
                        "kills": 10, "assists": 2, "wins": 1, "losses": 20,
                        "top10s": 5, "roundsPlayed": 21, "damageDealt": 3150.5
                    }
                }
            },
            "relationships": {
                "matchesSoloFPP": { "data": [{ "type": "match", "id": "m-1" }] }
            }
        }"#;
        let season: PlayerSeason = serde_json::from_str(raw).unwrap();
        let stats = season.stats_for(GameMode::SoloFpp).unwrap();
        assert_eq!(stats.kills, 10);
        assert_eq!(stats.rounds_played, 21);
        assert_eq!(season.match_ids(GameMode::SoloFpp).len(), 1);
        assert_eq!(season.match_ids(GameMode::Squad).len(), 0);
    }

    #[test]
    fn match_created_at_display() {
        let attributes = MatchAttributes {
            created_at: "2018-09-07T10:40:28Z".to_owned(),
            duration: 1800,
            game_mode: "solo-fpp".to_owned(),
            map_name: "Erangel_Main".to_owned(),
        };
        assert_eq!(attributes.created_at_display(), "2018-09-07 10:40:28");
    }

    #[test]
    fn map_names() {
        assert_eq!(map_display_name("Desert_Main"), "Miramar");
        assert_eq!(map_display_name("Unknown_Map"), "Unknown_Map");
    }
}

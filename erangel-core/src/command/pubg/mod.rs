use erangel_common::markdown::Markdown;

pub mod matches;
pub mod modes;
pub mod regions;
pub mod seasons;
pub mod stats;

/// The shared "no data upstream" reply. Used whenever a lookup resolves to
/// the empty sentinel rather than surfacing an upstream error.
pub fn not_found_message(username: &str, region: &str, season: &str) -> String {
    format!(
        "Could not find {}'s stats on the {} region for the {} season. \
        Double check the username, region, and ensure you've played this season.",
        username.bold(),
        region.codestring(),
        season.codestring()
    )
}

//! Grouping of episodes into seasons

use std::collections::BTreeMap;

use crate::types::Episode;

/// Display label for a season number, e.g. "Season 3"
pub fn season_label(season_number: u32) -> String {
    format!("Season {}", season_number)
}

/// Group episodes by season number.
///
/// Seasons are ordered ascending; episodes keep their input order within
/// a season.
pub fn group_by_season(episodes: &[Episode]) -> BTreeMap<u32, Vec<Episode>> {
    let mut seasons: BTreeMap<u32, Vec<Episode>> = BTreeMap::new();
    for episode in episodes {
        seasons
            .entry(episode.season_number)
            .or_default()
            .push(episode.clone());
    }
    seasons
}

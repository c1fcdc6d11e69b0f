//! Episode DTOs of the Rick & Morty API

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Deserialize;

use crate::error::{MortyError, Result};
use crate::types::Episode;

use super::ids_from_urls;

/// Episode as sent by `/episode` and `/episode/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEpisode {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    /// Episode code, e.g. "S01E01"
    pub episode: String,
    #[serde(default)]
    pub characters: Vec<String>,
}

fn episode_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)S(\d+)E(\d+)").expect("episode code pattern is valid"))
}

/// Parse an episode code in format SxxExx.
///
/// # Returns
/// * `Some((season, episode))` if a valid code is found
/// * `None` otherwise
///
/// # Examples
/// ```
/// use morty_core::remote::parse_episode_code;
///
/// assert_eq!(parse_episode_code("S01E01"), Some((1, 1)));
/// assert_eq!(parse_episode_code("S10E05"), Some((10, 5)));
/// assert_eq!(parse_episode_code("Pilot"), None);
/// ```
pub fn parse_episode_code(code: &str) -> Option<(u32, u32)> {
    let caps = episode_code_regex().captures(code)?;
    let season: u32 = caps.get(1)?.as_str().parse().ok()?;
    let episode: u32 = caps.get(2)?.as_str().parse().ok()?;
    Some((season, episode))
}

impl TryFrom<RemoteEpisode> for Episode {
    type Error = MortyError;

    fn try_from(remote: RemoteEpisode) -> Result<Self> {
        let (season_number, episode_number) = parse_episode_code(&remote.episode)
            .ok_or_else(|| {
                MortyError::MalformedResource(format!("episode code '{}'", remote.episode))
            })?;
        let character_ids = ids_from_urls(&remote.characters)?;

        Ok(Self {
            id: remote.id,
            name: remote.name,
            episode_code: remote.episode,
            season_number,
            episode_number,
            air_date: remote.air_date,
            character_ids,
        })
    }
}

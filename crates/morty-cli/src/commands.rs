//! Command implementations
//!
//! Each command calls into [`MortyApi`] and renders the result to `out`,
//! either as plain text or as pretty JSON.

use std::io::Write;

use morty_core::{
    group_by_season, season_label, Character, CharacterFilter, Episode, MortyApi, PageInfo,
};
use serde::Serialize;
use serde_json::json;

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn character_line(character: &Character) -> String {
    format!(
        "#{} {} - {} {}",
        character.id, character.name, character.status, character.species
    )
}

fn episode_line(episode: &Episode) -> String {
    format!(
        "#{} {} {} ({})",
        episode.id, episode.episode_code, episode.name, episode.air_date
    )
}

fn page_header(page: u32, info: &PageInfo, noun: &str) -> String {
    format!("Page {}/{} ({} {})", page, info.pages, info.count, noun)
}

/// Show one character with its data points.
pub async fn show_character<W: Write>(
    api: &MortyApi,
    id: u32,
    with_episodes: bool,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let character = api.get_character(id).await?;
    let episodes = if with_episodes {
        Some(api.get_episodes(&character.episode_ids).await?)
    } else {
        None
    };

    match format {
        OutputFormat::Json => write_json(
            out,
            &json!({
                "character": &character,
                "data_points": character.data_points(),
                "episodes": episodes,
            }),
        ),
        OutputFormat::Text => {
            writeln!(out, "#{} {} ({})", character.id, character.name, character.status)?;
            for point in character.data_points() {
                writeln!(out, "  {}: {}", point.title, point.description)?;
            }
            if let Some(episodes) = episodes {
                writeln!(out, "Episodes:")?;
                for episode in &episodes {
                    writeln!(out, "  {}", episode_line(episode))?;
                }
            }
            Ok(())
        }
    }
}

/// List one page of characters.
pub async fn list_characters<W: Write>(
    api: &MortyApi,
    page: u32,
    filter: &CharacterFilter,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let result = api.get_character_page(page, filter).await?;

    match format {
        OutputFormat::Json => write_json(out, &result),
        OutputFormat::Text => {
            writeln!(out, "{}", page_header(page, &result.info, "characters"))?;
            for character in &result.items {
                writeln!(out, "{}", character_line(character))?;
            }
            Ok(())
        }
    }
}

/// Find every character whose name matches `query`.
pub async fn search_characters<W: Write>(
    api: &MortyApi,
    query: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let characters = api.search_all_characters_by_name(query).await?;

    match format {
        OutputFormat::Json => write_json(out, &characters),
        OutputFormat::Text => {
            for character in &characters {
                writeln!(out, "{}", character_line(character))?;
            }
            writeln!(out, "{} characters found", characters.len())?;
            Ok(())
        }
    }
}

/// Show one episode.
pub async fn show_episode<W: Write>(
    api: &MortyApi,
    id: u32,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let episode = api.get_episode(id).await?;

    match format {
        OutputFormat::Json => write_json(out, &episode),
        OutputFormat::Text => {
            writeln!(out, "{}", episode_line(&episode))?;
            writeln!(out, "  Characters: {}", episode.character_ids.len())?;
            Ok(())
        }
    }
}

/// Show several episodes.
pub async fn show_episodes<W: Write>(
    api: &MortyApi,
    ids: &[u32],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let episodes = api.get_episodes(ids).await?;

    match format {
        OutputFormat::Json => write_json(out, &episodes),
        OutputFormat::Text => {
            for episode in &episodes {
                writeln!(out, "{}", episode_line(episode))?;
            }
            Ok(())
        }
    }
}

/// List one page of episodes.
pub async fn list_episodes<W: Write>(
    api: &MortyApi,
    page: u32,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let result = api.get_episode_page(page).await?;

    match format {
        OutputFormat::Json => write_json(out, &result),
        OutputFormat::Text => {
            writeln!(out, "{}", page_header(page, &result.info, "episodes"))?;
            for episode in &result.items {
                writeln!(out, "{}", episode_line(episode))?;
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct SeasonView<'a> {
    season: u32,
    label: String,
    episodes: &'a [Episode],
}

/// List every episode grouped by season.
pub async fn show_seasons<W: Write>(
    api: &MortyApi,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let episodes = api.get_all_episodes().await?;
    let seasons = group_by_season(&episodes);

    match format {
        OutputFormat::Json => {
            let view: Vec<SeasonView<'_>> = seasons
                .iter()
                .map(|(season, episodes)| SeasonView {
                    season: *season,
                    label: season_label(*season),
                    episodes,
                })
                .collect();
            write_json(out, &view)
        }
        OutputFormat::Text => {
            for (season, episodes) in &seasons {
                writeln!(out, "{}", season_label(*season))?;
                for episode in episodes {
                    writeln!(
                        out,
                        "  E{:02} {} ({})",
                        episode.episode_number, episode.name, episode.air_date
                    )?;
                }
            }
            Ok(())
        }
    }
}

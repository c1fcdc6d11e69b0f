//! Command-line front end for the Rick & Morty API
//!
//! This crate wires [`morty_core::MortyApi`] to a `clap` command line. Each
//! subcommand maps to one function in [`commands`].
//!
//! # Commands
//! - `character` - Show one character, optionally with its episodes
//! - `characters` - List one page of characters with filters
//! - `search` - Find every character whose name matches
//! - `episode` - Show one episode
//! - `episodes` - Show several episodes by ID
//! - `episode-page` - List one page of episodes
//! - `seasons` - List every episode grouped by season
//!
//! # Environment variables
//!
//! | Variable             | Default                            |
//! |----------------------|------------------------------------|
//! | `MORTY_BASE_URL`     | `https://rickandmortyapi.com/api`  |
//! | `MORTY_TIMEOUT_SECS` | `30`                               |

pub mod commands;

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use morty_core::{
    CharacterFilter, CharacterGender, CharacterStatus, ClientConfig, MortyApi, MortyClient,
    DEFAULT_BASE_URL,
};

use crate::commands::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "morty",
    version,
    about = "Browse characters and episodes of the Rick & Morty API"
)]
pub struct Cli {
    /// API root URL
    #[arg(long, env = "MORTY_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "MORTY_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Print pretty JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one character
    Character {
        /// Character ID
        id: u32,
        /// Also list the episodes the character appears in
        #[arg(long)]
        with_episodes: bool,
    },
    /// List one page of characters
    Characters {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Filter by name
        #[arg(long)]
        name: Option<String>,
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// Filter by species
        #[arg(long)]
        species: Option<String>,
        /// Filter by type
        #[arg(long = "type")]
        character_type: Option<String>,
        /// Filter by gender
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },
    /// Find every character whose name matches
    Search {
        /// Name or part of a name
        query: String,
    },
    /// Show one episode
    Episode {
        /// Episode ID
        id: u32,
    },
    /// Show several episodes
    Episodes {
        /// Episode IDs, space or comma separated
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        ids: Vec<u32>,
    },
    /// List one page of episodes
    EpisodePage {
        /// Page number (1-based)
        #[arg(default_value_t = 1)]
        page: u32,
    },
    /// List every episode grouped by season
    Seasons,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusArg {
    Alive,
    Dead,
    Unknown,
}

impl From<StatusArg> for CharacterStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Alive => Self::Alive,
            StatusArg::Dead => Self::Dead,
            StatusArg::Unknown => Self::Unknown,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenderArg {
    Male,
    Female,
    Genderless,
    Unknown,
}

impl From<GenderArg> for CharacterGender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Self::Male,
            GenderArg::Female => Self::Female,
            GenderArg::Genderless => Self::Genderless,
            GenderArg::Unknown => Self::Unknown,
        }
    }
}

impl Cli {
    /// Client configuration from flags and environment
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            ..ClientConfig::default()
        }
    }

    /// Selected output format
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Build the API from the command line and run the selected command.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let client = MortyClient::with_config(cli.client_config())?;
    let api = MortyApi::with_client(client);
    let format = cli.output_format();

    tracing::debug!(base_url = %api.client().base_url(), command = ?cli.command, "running command");

    match cli.command {
        Command::Character { id, with_episodes } => {
            commands::show_character(&api, id, with_episodes, format, out).await
        }
        Command::Characters {
            page,
            name,
            status,
            species,
            character_type,
            gender,
        } => {
            let filter = CharacterFilter {
                name,
                status: status.map(Into::into),
                species,
                character_type,
                gender: gender.map(Into::into),
            };
            commands::list_characters(&api, page, &filter, format, out).await
        }
        Command::Search { query } => commands::search_characters(&api, &query, format, out).await,
        Command::Episode { id } => commands::show_episode(&api, id, format, out).await,
        Command::Episodes { ids } => commands::show_episodes(&api, &ids, format, out).await,
        Command::EpisodePage { page } => commands::list_episodes(&api, page, format, out).await,
        Command::Seasons => commands::show_seasons(&api, format, out).await,
    }
}

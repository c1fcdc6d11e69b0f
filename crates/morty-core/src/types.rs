//! Domain types for the Rick & Morty client
//!
//! These are the records handed to callers after mapping from the wire
//! format in [`crate::remote`]. All types implement Serialize and Deserialize
//! so front ends can emit them as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    /// Map the API's status string; anything unrecognised is `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }

    /// Value accepted by the `status` filter of the character listing
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterGender {
    Male,
    Female,
    Genderless,
    Unknown,
}

impl CharacterGender {
    /// Map the API's gender string; anything unrecognised is `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            "genderless" => Self::Genderless,
            _ => Self::Unknown,
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Genderless => "Genderless",
            Self::Unknown => "Unknown",
        }
    }

    /// Value accepted by the `gender` filter of the character listing
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Genderless => "genderless",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Named reference to a location (origin or last known location)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Location name, e.g. "Earth (C-137)"
    pub name: String,
    /// API URL of the location, empty when the API has none
    pub url: String,
}

/// A character of the show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique API identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Life status
    pub status: CharacterStatus,
    /// Species, e.g. "Human"
    pub species: String,
    /// Subspecies or type, often empty
    pub character_type: String,
    /// Gender
    pub gender: CharacterGender,
    /// Place of origin
    pub origin: LocationRef,
    /// Last known location
    pub location: LocationRef,
    /// Avatar image URL
    pub image_url: String,
    /// IDs of the episodes the character appears in
    pub episode_ids: Vec<u32>,
    /// Creation timestamp as reported by the API
    pub created: String,
}

/// Labelled summary row describing a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub title: String,
    pub description: String,
}

impl DataPoint {
    fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }
}

impl Character {
    /// Summary rows for a details view.
    ///
    /// The `Type` row is only present when the character has a type.
    pub fn data_points(&self) -> Vec<DataPoint> {
        let mut points = vec![
            DataPoint::new("Last known location", self.location.name.clone()),
            DataPoint::new("Species", self.species.clone()),
            DataPoint::new("Gender", self.gender.display_name()),
        ];
        if !self.character_type.is_empty() {
            points.push(DataPoint::new("Type", self.character_type.clone()));
        }
        points.push(DataPoint::new("Origin", self.origin.name.clone()));
        points.push(DataPoint::new(
            "Episode count",
            self.episode_ids.len().to_string(),
        ));
        points
    }
}

/// An episode of the show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Unique API identifier
    pub id: u32,
    /// Episode title
    pub name: String,
    /// Episode code in format SxxExx (e.g., S01E01)
    pub episode_code: String,
    /// Season number (1-based)
    pub season_number: u32,
    /// Episode number within the season (1-based)
    pub episode_number: u32,
    /// Air date as reported by the API, e.g. "December 2, 2013"
    pub air_date: String,
    /// IDs of the characters appearing in the episode
    pub character_ids: Vec<u32>,
}

/// Pagination metadata of a listing response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of items across all pages
    pub count: u32,
    /// Total number of pages
    pub pages: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub prev: Option<String>,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Pagination metadata
    pub info: PageInfo,
    /// Items on this page
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Create a new page
    pub fn new(info: PageInfo, items: Vec<T>) -> Self {
        Self { info, items }
    }

    /// Whether there are more pages available
    pub fn has_next_page(&self) -> bool {
        self.info.next.is_some()
    }
}

/// One page of the character listing
pub type CharacterPage = Page<Character>;

/// One page of the episode listing
pub type EpisodePage = Page<Episode>;

/// Query filters for the character listing
///
/// Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    pub name: Option<String>,
    pub status: Option<CharacterStatus>,
    pub species: Option<String>,
    pub character_type: Option<String>,
    pub gender: Option<CharacterGender>,
}

impl CharacterFilter {
    /// Filter on name only
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Query parameters for this filter, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.query_value().to_string()));
        }
        if let Some(species) = &self.species {
            pairs.push(("species", species.clone()));
        }
        if let Some(character_type) = &self.character_type {
            pairs.push(("type", character_type.clone()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.query_value().to_string()));
        }
        pairs
    }
}

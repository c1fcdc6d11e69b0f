//! Character DTOs of the Rick & Morty API

use serde::Deserialize;

use crate::error::{MortyError, Result};
use crate::types::{Character, CharacterGender, CharacterStatus, LocationRef};

use super::ids_from_urls;

/// Location reference as sent by the API
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLocation {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl From<RemoteLocation> for LocationRef {
    fn from(remote: RemoteLocation) -> Self {
        Self {
            name: remote.name,
            url: remote.url,
        }
    }
}

/// Character as sent by `/character` and `/character/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCharacter {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    pub origin: RemoteLocation,
    pub location: RemoteLocation,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl TryFrom<RemoteCharacter> for Character {
    type Error = MortyError;

    fn try_from(remote: RemoteCharacter) -> Result<Self> {
        let episode_ids = ids_from_urls(&remote.episode)?;

        Ok(Self {
            id: remote.id,
            name: remote.name,
            status: CharacterStatus::from_wire(&remote.status),
            species: remote.species,
            character_type: remote.kind,
            gender: CharacterGender::from_wire(&remote.gender),
            origin: remote.origin.into(),
            location: remote.location.into(),
            image_url: remote.image,
            episode_ids,
            created: remote.created,
        })
    }
}

//! Rick & Morty API Client Core Library
//!
//! This crate provides an async client for the public Rick & Morty REST API
//! (<https://rickandmortyapi.com>).
//!
//! # Features
//! - Character lookup by ID with an in-memory cache
//! - Paged character and episode listings
//! - "All pages" aggregation for name searches and the episode list
//! - Mapping of API records to typed domain models
//! - Grouping of episodes by season

pub mod api;
pub mod client;
pub mod error;
pub mod remote;
pub mod season;
pub mod types;

// Re-export main types for convenience
pub use api::MortyApi;
pub use client::{ClientConfig, MortyClient, DEFAULT_BASE_URL};
pub use error::{MortyError, Result};
pub use season::{group_by_season, season_label};
pub use types::{
    Character, CharacterFilter, CharacterGender, CharacterPage, CharacterStatus, DataPoint,
    Episode, EpisodePage, LocationRef, Page, PageInfo,
};

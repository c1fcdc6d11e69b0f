//! High-level Rick & Morty API
//!
//! Combines the HTTP client with the wire mapping to offer single-entity
//! fetches, paged listings and "fetch every page" aggregations. Character
//! lookups by ID are cached in memory for the lifetime of the API value.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::client::MortyClient;
use crate::error::{MortyError, Result};
use crate::remote::{RemoteCharacter, RemoteEpisode, RemotePage};
use crate::types::{Character, CharacterFilter, CharacterPage, Episode, EpisodePage, Page};

/// Main API for browsing characters and episodes
///
/// All operations are sequential: aggregations request one page at a time
/// and stop at the first failure.
///
/// # Example
/// ```no_run
/// use morty_core::MortyApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = MortyApi::new()?;
///
///     let ricks = api.search_all_characters_by_name("rick").await?;
///     println!("Found {} Ricks", ricks.len());
///
///     Ok(())
/// }
/// ```
pub struct MortyApi {
    client: MortyClient,
    character_cache: RwLock<HashMap<u32, Character>>,
}

impl MortyApi {
    /// Create a new API with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(MortyClient::new()?))
    }

    /// Create a new API on top of a pre-configured client.
    pub fn with_client(client: MortyClient) -> Self {
        Self {
            client,
            character_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Underlying HTTP client
    pub fn client(&self) -> &MortyClient {
        &self.client
    }

    /// Get a single character.
    ///
    /// Successful lookups are cached; a cached character is returned without
    /// touching the network.
    ///
    /// # Returns
    /// * `Ok(Character)` on success
    /// * `Err(MortyError::InvalidId)` if id is 0
    /// * `Err(MortyError::NotFound)` if the character doesn't exist
    ///
    /// # Example
    /// ```no_run
    /// use morty_core::MortyApi;
    ///
    /// # async fn example() -> Result<(), morty_core::MortyError> {
    /// let api = MortyApi::new()?;
    /// let rick = api.get_character(1).await?;
    /// println!("{} is {}", rick.name, rick.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_character(&self, id: u32) -> Result<Character> {
        if id == 0 {
            return Err(MortyError::InvalidId(id));
        }

        let cached = self.character_cache.read().await.get(&id).cloned();
        if let Some(character) = cached {
            debug!(id, "character cache hit");
            return Ok(character);
        }

        let path = format!("/character/{}", id);
        let remote: RemoteCharacter = self.client.get_json(&path, &[]).await?;
        let character = Character::try_from(remote)?;

        self.character_cache
            .write()
            .await
            .insert(id, character.clone());

        Ok(character)
    }

    /// Get one page of the character listing.
    ///
    /// # Arguments
    /// * `page` - Page number (1-based)
    /// * `filter` - Listing filters; empty filter lists every character
    pub async fn get_character_page(
        &self,
        page: u32,
        filter: &CharacterFilter,
    ) -> Result<CharacterPage> {
        if page == 0 {
            return Err(MortyError::InvalidPage(page));
        }

        let mut query = vec![("page", page.to_string())];
        query.extend(filter.query_pairs());

        let remote: RemotePage<RemoteCharacter> = self.client.get_json("/character", &query).await?;
        remote.into_domain()
    }

    /// Fetch every page of characters whose name matches `query`.
    ///
    /// Pages are requested in order; the first failing page aborts the
    /// whole search and its error is returned.
    ///
    /// # Example
    /// ```no_run
    /// use morty_core::MortyApi;
    ///
    /// # async fn example() -> Result<(), morty_core::MortyError> {
    /// let api = MortyApi::new()?;
    /// for character in api.search_all_characters_by_name("morty").await? {
    ///     println!("{}: {}", character.id, character.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_all_characters_by_name(&self, query: &str) -> Result<Vec<Character>> {
        let filter = CharacterFilter::by_name(query);
        let filter = &filter;
        collect_all_pages("characters", move |page| self.get_character_page(page, filter)).await
    }

    /// Get a single episode.
    ///
    /// # Returns
    /// * `Err(MortyError::InvalidId)` if id is 0
    /// * `Err(MortyError::NotFound)` if the episode doesn't exist
    pub async fn get_episode(&self, id: u32) -> Result<Episode> {
        if id == 0 {
            return Err(MortyError::InvalidId(id));
        }

        let path = format!("/episode/{}", id);
        let remote: RemoteEpisode = self.client.get_json(&path, &[]).await?;
        Episode::try_from(remote)
    }

    /// Get several episodes in one request.
    ///
    /// A single ID goes through the single-episode endpoint, since the API
    /// answers a one-element list with an object rather than an array.
    /// An empty slice returns an empty list without a request.
    ///
    /// # Example
    /// ```no_run
    /// use morty_core::MortyApi;
    ///
    /// # async fn example() -> Result<(), morty_core::MortyError> {
    /// let api = MortyApi::new()?;
    /// let rick = api.get_character(1).await?;
    /// let episodes = api.get_episodes(&rick.episode_ids).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_episodes(&self, ids: &[u32]) -> Result<Vec<Episode>> {
        if let Some(&invalid) = ids.iter().find(|&&id| id == 0) {
            return Err(MortyError::InvalidId(invalid));
        }

        match ids {
            [] => Ok(Vec::new()),
            [id] => Ok(vec![self.get_episode(*id).await?]),
            _ => {
                let joined = ids
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                let path = format!("/episode/{}", joined);
                let remote: Vec<RemoteEpisode> = self.client.get_json(&path, &[]).await?;
                remote.into_iter().map(Episode::try_from).collect()
            }
        }
    }

    /// Get one page of the episode listing.
    ///
    /// # Arguments
    /// * `page` - Page number (1-based)
    pub async fn get_episode_page(&self, page: u32) -> Result<EpisodePage> {
        if page == 0 {
            return Err(MortyError::InvalidPage(page));
        }

        let query = [("page", page.to_string())];
        let remote: RemotePage<RemoteEpisode> = self.client.get_json("/episode", &query).await?;
        remote.into_domain()
    }

    /// Fetch every page of the episode listing.
    ///
    /// Pages are requested in order; the first failing page aborts and its
    /// error is returned.
    pub async fn get_all_episodes(&self) -> Result<Vec<Episode>> {
        collect_all_pages("episodes", move |page| self.get_episode_page(page)).await
    }

    /// Number of characters currently cached
    pub async fn cached_character_count(&self) -> usize {
        self.character_cache.read().await.len()
    }

    /// Drop every cached character
    pub async fn clear_cache(&self) {
        self.character_cache.write().await.clear();
    }
}

/// Request page 1, then pages 2..=pages one after another.
///
/// The page count comes from the first page. Any failure discards the items
/// collected so far.
async fn collect_all_pages<T, F, Fut>(listing: &str, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let first = fetch_page(1).await?;
    let total_pages = first.info.pages;
    let mut items = first.items;
    debug!(listing, total_pages, "fetched first page");

    for page in 2..=total_pages {
        match fetch_page(page).await {
            Ok(next) => items.extend(next.items),
            Err(e) => {
                warn!(listing, page, total_pages, error = %e, "aborting page aggregation");
                return Err(e);
            }
        }
    }

    info!(listing, total_pages, items = items.len(), "collected all pages");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageInfo;

    fn page_of(pages: u32, items: Vec<u32>) -> Page<u32> {
        Page::new(
            PageInfo {
                count: 0,
                pages,
                next: None,
                prev: None,
            },
            items,
        )
    }

    #[test]
    fn test_api_creation() {
        let api = MortyApi::new();
        assert!(api.is_ok());
    }

    #[tokio::test]
    async fn test_get_character_invalid_id_zero() {
        let api = MortyApi::new().unwrap();
        match api.get_character(0).await {
            Err(MortyError::InvalidId(id)) => assert_eq!(id, 0),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[tokio::test]
    async fn test_get_episode_invalid_id_zero() {
        let api = MortyApi::new().unwrap();
        assert!(matches!(api.get_episode(0).await, Err(MortyError::InvalidId(0))));
    }

    #[tokio::test]
    async fn test_get_episodes_rejects_zero_in_list() {
        let api = MortyApi::new().unwrap();
        assert!(matches!(
            api.get_episodes(&[1, 0, 3]).await,
            Err(MortyError::InvalidId(0))
        ));
    }

    #[tokio::test]
    async fn test_get_episodes_empty_list() {
        let api = MortyApi::new().unwrap();
        assert!(api.get_episodes(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_pages_invalid_zero() {
        let api = MortyApi::new().unwrap();
        assert!(matches!(
            api.get_character_page(0, &CharacterFilter::default()).await,
            Err(MortyError::InvalidPage(0))
        ));
        assert!(matches!(
            api.get_episode_page(0).await,
            Err(MortyError::InvalidPage(0))
        ));
    }

    #[tokio::test]
    async fn test_cache_starts_empty() {
        let api = MortyApi::new().unwrap();
        assert_eq!(api.cached_character_count().await, 0);
        api.clear_cache().await;
        assert_eq!(api.cached_character_count().await, 0);
    }

    #[tokio::test]
    async fn test_collect_all_pages_concatenates_in_order() {
        let mut requested = Vec::new();
        let items = collect_all_pages("test", |page| {
            requested.push(page);
            async move { Ok::<_, MortyError>(page_of(3, vec![page * 10, page * 10 + 1])) }
        })
        .await
        .unwrap();

        assert_eq!(requested, vec![1, 2, 3]);
        assert_eq!(items, vec![10, 11, 20, 21, 30, 31]);
    }

    #[tokio::test]
    async fn test_collect_all_pages_single_page() {
        let mut calls = 0;
        let items = collect_all_pages("test", |_| {
            calls += 1;
            async { Ok::<_, MortyError>(page_of(1, vec![7])) }
        })
        .await
        .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(items, vec![7]);
    }

    #[tokio::test]
    async fn test_collect_all_pages_zero_pages() {
        let items: Vec<u32> = collect_all_pages("test", |_| async {
            Ok::<_, MortyError>(page_of(0, Vec::new()))
        })
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_collect_all_pages_stops_at_first_error() {
        let mut requested = Vec::new();
        let result = collect_all_pages("test", |page| {
            requested.push(page);
            async move {
                if page == 2 {
                    Err(MortyError::RateLimited)
                } else {
                    Ok(page_of(4, vec![page]))
                }
            }
        })
        .await;

        assert!(matches!(result, Err(MortyError::RateLimited)));
        assert_eq!(requested, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_collect_all_pages_first_page_error() {
        let result: Result<Vec<u32>> = collect_all_pages("test", |_| async {
            Err(MortyError::NotFound("/character".to_string()))
        })
        .await;
        assert!(matches!(result, Err(MortyError::NotFound(_))));
    }
}

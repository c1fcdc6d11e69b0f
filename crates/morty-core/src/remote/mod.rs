//! Wire format of the Rick & Morty API and its mapping to domain types
//!
//! - `character`: character DTOs
//! - `episode`: episode DTOs and episode code parsing
//!
//! Listing endpoints share the `{ "info": ..., "results": [...] }` envelope
//! defined here.

pub mod character;
pub mod episode;

use serde::Deserialize;

use crate::error::{MortyError, Result};
use crate::types::{Page, PageInfo};

pub use character::{RemoteCharacter, RemoteLocation};
pub use episode::{parse_episode_code, RemoteEpisode};

/// Pagination block of a listing response
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl From<RemotePageInfo> for PageInfo {
    fn from(remote: RemotePageInfo) -> Self {
        Self {
            count: remote.count,
            pages: remote.pages,
            next: remote.next,
            prev: remote.prev,
        }
    }
}

/// Listing response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePage<T> {
    pub info: RemotePageInfo,
    pub results: Vec<T>,
}

impl<T> RemotePage<T> {
    /// Map every result into its domain type, failing on the first bad one.
    pub fn into_domain<U>(self) -> Result<Page<U>>
    where
        U: TryFrom<T, Error = MortyError>,
    {
        let items = self
            .results
            .into_iter()
            .map(U::try_from)
            .collect::<Result<Vec<U>>>()?;
        Ok(Page::new(self.info.into(), items))
    }
}

/// Extract the numeric ID from the last path segment of a resource URL.
///
/// A single trailing slash is ignored. IDs are 1-based, so `0` is rejected.
///
/// # Examples
/// ```
/// use morty_core::remote::extract_trailing_id;
///
/// assert_eq!(extract_trailing_id("https://rickandmortyapi.com/api/episode/28"), Some(28));
/// assert_eq!(extract_trailing_id("https://rickandmortyapi.com/api/character/7/"), Some(7));
/// assert_eq!(extract_trailing_id("https://rickandmortyapi.com/api/episode"), None);
/// ```
pub fn extract_trailing_id(url: &str) -> Option<u32> {
    let url = url.strip_suffix('/').unwrap_or(url);
    let segment = url.rsplit('/').next()?;
    let id: u32 = segment.parse().ok()?;

    if id > 0 {
        Some(id)
    } else {
        None
    }
}

/// Map a list of resource URLs to their IDs.
pub(crate) fn ids_from_urls(urls: &[String]) -> Result<Vec<u32>> {
    urls.iter()
        .map(|url| {
            extract_trailing_id(url)
                .ok_or_else(|| MortyError::MalformedResource(format!("no ID in URL '{}'", url)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extract_trailing_id() {
        assert_eq!(
            extract_trailing_id("https://rickandmortyapi.com/api/character/1"),
            Some(1)
        );
        assert_eq!(
            extract_trailing_id("https://rickandmortyapi.com/api/episode/10/"),
            Some(10)
        );
        assert_eq!(extract_trailing_id("42"), Some(42));
    }

    #[test]
    fn test_extract_trailing_id_invalid() {
        assert_eq!(extract_trailing_id(""), None);
        assert_eq!(extract_trailing_id("https://rickandmortyapi.com/api/episode/"), None);
        assert_eq!(extract_trailing_id("https://rickandmortyapi.com/api/episode/0"), None);
        assert_eq!(extract_trailing_id("https://rickandmortyapi.com/api/episode/abc"), None);
    }

    #[test]
    fn test_ids_from_urls() {
        let urls = vec![
            "https://rickandmortyapi.com/api/episode/1".to_string(),
            "https://rickandmortyapi.com/api/episode/2".to_string(),
            "https://rickandmortyapi.com/api/episode/10".to_string(),
        ];
        assert_eq!(ids_from_urls(&urls).unwrap(), vec![1, 2, 10]);
        assert!(ids_from_urls(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_ids_from_urls_rejects_bad_url() {
        let urls = vec![
            "https://rickandmortyapi.com/api/episode/1".to_string(),
            "https://rickandmortyapi.com/api/episode/".to_string(),
        ];
        match ids_from_urls(&urls) {
            Err(MortyError::MalformedResource(msg)) => assert!(msg.contains("no ID")),
            other => panic!("Expected MalformedResource error, got {:?}", other),
        }
    }

    #[test]
    fn test_remote_page_into_domain() {
        let json = r#"{
            "info": {"count": 51, "pages": 3, "next": "https://rickandmortyapi.com/api/episode?page=2", "prev": null},
            "results": [
                {"id": 1, "name": "Pilot", "air_date": "December 2, 2013", "episode": "S01E01",
                 "characters": ["https://rickandmortyapi.com/api/character/1"],
                 "url": "https://rickandmortyapi.com/api/episode/1", "created": "2017-11-10T12:56:33.798Z"}
            ]
        }"#;
        let remote: RemotePage<RemoteEpisode> = serde_json::from_str(json).unwrap();
        let page: Page<crate::types::Episode> = remote.into_domain().unwrap();

        assert_eq!(page.info.pages, 3);
        assert_eq!(page.info.count, 51);
        assert!(page.has_next_page());
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Pilot");
    }

    proptest! {
        #[test]
        fn prop_trailing_id_roundtrips_resource_urls(id in 1u32..=u32::MAX, slash in any::<bool>()) {
            let url = format!(
                "https://rickandmortyapi.com/api/character/{}{}",
                id,
                if slash { "/" } else { "" }
            );
            prop_assert_eq!(extract_trailing_id(&url), Some(id));
        }
    }
}

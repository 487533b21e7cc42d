//! Where restaurant documents come from: Firestore or a local JSON file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dinesafe_common::config::{Config, DocumentBackend};
use dinesafe_common::{Document, Restaurant};
use tracing::info;

use super::firestore::{self, FirestoreClient};
use super::StoreError;

#[derive(Debug, Clone)]
pub enum DocumentSource {
    Firestore(FirestoreClient),
    /// Array of plain documents (`[{ "id": "...", "name": "...", ... }]`).
    Fixtures(PathBuf),
}

impl DocumentSource {
    pub fn from_config(config: &Arc<Config>, http: reqwest::Client) -> Self {
        match &config.backend {
            DocumentBackend::Firestore => {
                info!("Reading restaurants from {}", config.collection_url());
                DocumentSource::Firestore(FirestoreClient::new(http, Arc::clone(config)))
            }
            DocumentBackend::Fixtures(path) => {
                info!("Reading restaurants from fixtures {}", path.display());
                DocumentSource::Fixtures(path.clone())
            }
        }
    }

    pub async fn list(&self, limit: u32) -> Result<Vec<Document>, StoreError> {
        match self {
            DocumentSource::Firestore(client) => client.list(limit).await,
            DocumentSource::Fixtures(path) => {
                let mut docs = read_fixtures(path).await?;
                docs.truncate(limit as usize);
                Ok(docs)
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Document>, StoreError> {
        match self {
            DocumentSource::Firestore(client) => client.get(id).await,
            DocumentSource::Fixtures(path) => {
                firestore::validate_id(id)?;
                Ok(read_fixtures(path).await?.into_iter().find(|d| d.id == id))
            }
        }
    }
}

/// List, map and sort restaurants for the listing page.
pub async fn list_restaurants(
    source: &DocumentSource,
    limit: u32,
) -> Result<Vec<Restaurant>, StoreError> {
    let docs = source.list(limit).await?;
    let mut restaurants: Vec<Restaurant> = docs.iter().map(Restaurant::from_document).collect();
    sort_for_listing(&mut restaurants);
    Ok(restaurants)
}

pub async fn get_restaurant(
    source: &DocumentSource,
    id: &str,
) -> Result<Option<Restaurant>, StoreError> {
    Ok(source.get(id).await?.as_ref().map(Restaurant::from_document))
}

/// Case-insensitive by display name, then by id.
fn sort_for_listing(restaurants: &mut [Restaurant]) {
    restaurants.sort_by(|a, b| {
        a.display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
}

async fn read_fixtures(path: &Path) -> Result<Vec<Document>, StoreError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Fixtures {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures(name: &str, content: &str) -> DocumentSource {
        let dir = std::env::temp_dir().join("dinesafe_web_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        DocumentSource::Fixtures(path)
    }

    const FIXTURES: &str = r#"[
        { "id": "z1", "name": "zesty grill", "average_thumbs": 0.4 },
        { "id": "a1", "name": "Alder House", "isMaskRequired": true },
        { "id": "m1" }
    ]"#;

    #[tokio::test]
    async fn test_list_restaurants_sorted() {
        let source = fixtures("list.json", FIXTURES);
        let list = list_restaurants(&source, 10).await.unwrap();
        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "m1", "z1"]);
        assert!(list[0].safety.is_mask_required);
        assert_eq!(list[2].avg_thumbs, Some(40.0));
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let source = fixtures("limit.json", FIXTURES);
        assert_eq!(list_restaurants(&source, 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_restaurant() {
        let source = fixtures("get.json", FIXTURES);
        let r = get_restaurant(&source, "a1").await.unwrap().unwrap();
        assert_eq!(r.name.as_deref(), Some("Alder House"));
        assert!(get_restaurant(&source, "nope").await.unwrap().is_none());
        assert!(matches!(
            get_restaurant(&source, "a/b").await,
            Err(StoreError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_fixtures_file() {
        let source = DocumentSource::Fixtures(PathBuf::from("/nonexistent/dinesafe.json"));
        assert!(matches!(
            source.list(5).await,
            Err(StoreError::Fixtures { .. })
        ));
    }
}

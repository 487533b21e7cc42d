//! Configuration parsing – reads a KEY=VALUE file (`dinesafe.conf`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Where restaurant documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBackend {
    /// Cloud Firestore REST API.
    Firestore,
    /// Local JSON file holding an array of plain documents.
    Fixtures(PathBuf),
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // ── document store ───────────────────────────────────────────────
    pub firestore_project: String,
    pub firestore_collection: String,
    pub firestore_base_url: String,
    pub backend: DocumentBackend,

    // ── object storage (card images) ─────────────────────────────────
    pub storage_bucket: String,
    pub storage_base_url: String,

    /// Optional web API key, appended as `key=` to REST requests.
    pub api_key: Option<String>,

    // ── presentation ─────────────────────────────────────────────────
    /// Shown while a card image resolves, and when it fails to.
    pub placeholder_image: String,
    /// Maximum number of cards on the listing page.
    pub list_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        from_map(&HashMap::new())
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/dinesafe/dinesafe.conf"
    }

    /// Config path from `DINESAFE_CONF`, else [`Config::default_path`].
    pub fn path_from_env() -> PathBuf {
        std::env::var("DINESAFE_CONF")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::default_path()))
    }

    /// Collection URL, e.g.
    /// `https://firestore.googleapis.com/v1/projects/p/databases/(default)/documents/restaurants`.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.firestore_base_url.trim_end_matches('/'),
            self.firestore_project,
            self.firestore_collection,
        )
    }

    /// Metadata URL of one storage object.  `object_path` must already be
    /// percent-encoded.
    pub fn storage_object_url(&self, object_path: &str) -> String {
        format!(
            "{}/v0/b/{}/o/{}",
            self.storage_base_url.trim_end_matches('/'),
            self.storage_bucket,
            object_path,
        )
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let map = parse_conf(&text);
    info!("Loaded config from {}", path.display());
    Ok(from_map(&map))
}

/// Like [`load`], but falls back to defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load(path)
    } else {
        warn!("No config at {} – using defaults", path.display());
        Ok(Config::default())
    }
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let get = |key: &str| -> Option<String> {
        map.get(key).cloned().filter(|v| !v.is_empty())
    };

    let backend = match get("FIXTURES_PATH") {
        Some(p) => DocumentBackend::Fixtures(PathBuf::from(p)),
        None => DocumentBackend::Firestore,
    };

    Config {
        firestore_project: get("FIRESTORE_PROJECT").unwrap_or_else(|| "dinesafe".into()),
        firestore_collection: get("FIRESTORE_COLLECTION")
            .unwrap_or_else(|| "restaurants".into()),
        firestore_base_url: get("FIRESTORE_BASE_URL")
            .unwrap_or_else(|| "https://firestore.googleapis.com/v1".into()),
        backend,
        storage_bucket: get("STORAGE_BUCKET").unwrap_or_else(|| "dinesafe.appspot.com".into()),
        storage_base_url: get("STORAGE_BASE_URL")
            .unwrap_or_else(|| "https://firebasestorage.googleapis.com".into()),
        api_key: get("FIREBASE_API_KEY"),
        placeholder_image: get("PLACEHOLDER_IMAGE")
            .unwrap_or_else(|| "/placeholder.svg".into()),
        list_limit: get("LIST_LIMIT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(50),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

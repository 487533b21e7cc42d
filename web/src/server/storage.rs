//! Firebase Storage lookups with an in-memory cache.
//!
//! Resolves an object reference (`images/noodle-box.jpg`) to a public
//! download URL the way the Firebase SDKs do: fetch the object metadata,
//! take its first download token, and build an `alt=media` URL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dinesafe_common::config::Config;
use serde_json::Value;
use tracing::debug;

use super::StoreError;

/// Thread-safe cache of resolved URLs, shared across requests.
/// Failed lookups are not cached.
pub type UrlCache = Arc<Mutex<HashMap<String, String>>>;

/// Create an empty cache.
pub fn new_cache() -> UrlCache {
    Arc::new(Mutex::new(HashMap::new()))
}

/// Resolve an image reference to a downloadable URL.  Returns a cached
/// result if available, otherwise asks the storage API (and caches it).
pub async fn resolve(
    http: &reqwest::Client,
    cache: &UrlCache,
    config: &Config,
    reference: &str,
) -> Result<String, StoreError> {
    if is_absolute_url(reference) {
        return Ok(reference.to_string());
    }

    {
        let guard = cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(url) = guard.get(reference) {
            return Ok(url.clone());
        }
    }

    let url = fetch_download_url(http, config, reference).await?;
    debug!("Resolved {reference} -> {url}");

    {
        let mut guard = cache.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(reference.to_string(), url.clone());
    }

    Ok(url)
}

async fn fetch_download_url(
    http: &reqwest::Client,
    config: &Config,
    reference: &str,
) -> Result<String, StoreError> {
    let object_url = config.storage_object_url(&encode_object_path(object_path(
        reference,
        &config.storage_bucket,
    )));

    let resp = http.get(&object_url).send().await?;
    if !resp.status().is_success() {
        return Err(StoreError::Status {
            url: object_url,
            status: resp.status().as_u16(),
        });
    }
    let metadata: Value = resp.json().await?;

    let token = first_download_token(&metadata)
        .ok_or_else(|| StoreError::MissingToken(reference.to_string()))?;
    Ok(format!("{object_url}?alt=media&token={token}"))
}

fn is_absolute_url(reference: &str) -> bool {
    reference.starts_with("https://") || reference.starts_with("http://")
}

/// Strip a `gs://<bucket>/` prefix and any leading slash.
fn object_path<'a>(reference: &'a str, bucket: &str) -> &'a str {
    let path = match reference.strip_prefix("gs://") {
        Some(rest) => rest
            .strip_prefix(bucket)
            .and_then(|r| r.strip_prefix('/'))
            .unwrap_or_else(|| rest.split_once('/').map(|(_, p)| p).unwrap_or(rest)),
        None => reference,
    };
    path.trim_start_matches('/')
}

/// Percent-encode an object path as one URL segment (`/` becomes `%2F`).
fn encode_object_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for b in path.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// `downloadTokens` is a comma-separated list; the first one is used.
fn first_download_token(metadata: &Value) -> Option<&str> {
    metadata
        .get("downloadTokens")?
        .as_str()?
        .split(',')
        .map(str::trim)
        .find(|t| !t.is_empty())
}

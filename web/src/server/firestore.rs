//! Cloud Firestore REST client (read-only).
//!
//! Only the two calls the dashboard needs: list a collection and fetch a
//! single document.  Typed field envelopes are flattened by
//! [`Document::from_firestore`].

use std::sync::Arc;

use dinesafe_common::config::Config;
use dinesafe_common::Document;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::StoreError;

#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl FirestoreClient {
    pub fn new(http: reqwest::Client, config: Arc<Config>) -> Self {
        FirestoreClient { http, config }
    }

    /// First `limit` documents of the configured collection, following
    /// `nextPageToken` across pages.
    pub async fn list(&self, limit: u32) -> Result<Vec<Document>, StoreError> {
        let url = self.config.collection_url();
        let mut docs = Vec::new();
        let mut page_token: Option<String> = None;

        while docs.len() < limit as usize {
            let page_size = page_size(limit as usize - docs.len());
            let mut query = vec![("pageSize", page_size.to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }
            if let Some(key) = &self.config.api_key {
                query.push(("key", key.clone()));
            }

            let resp = self.http.get(&url).query(&query).send().await?;
            if !resp.status().is_success() {
                return Err(StoreError::Status {
                    url,
                    status: resp.status().as_u16(),
                });
            }
            let body: Value = resp.json().await?;
            let (page, next) = parse_list_response(&body);
            docs.extend(page);

            match next {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        docs.truncate(limit as usize);
        debug!("Listed {} documents", docs.len());
        Ok(docs)
    }

    /// A single document, or `None` when it does not exist.
    pub async fn get(&self, id: &str) -> Result<Option<Document>, StoreError> {
        validate_id(id)?;

        let url = format!("{}/{id}", self.config.collection_url());
        let mut request = self.http.get(&url);
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key)]);
        }

        let resp = request.send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => {
                let body: Value = resp.json().await?;
                Ok(Document::from_firestore(&body))
            }
            s => Err(StoreError::Status {
                url,
                status: s.as_u16(),
            }),
        }
    }
}

/// Firestore caps `pageSize` at 300 documents per page.
const MAX_PAGE_SIZE: usize = 300;

fn page_size(remaining: usize) -> usize {
    remaining.min(MAX_PAGE_SIZE)
}

/// Decode the body of a `documents.list` call into the page's documents
/// and the token of the next page.  An empty collection has no
/// `documents` key at all.
fn parse_list_response(body: &Value) -> (Vec<Document>, Option<String>) {
    let next = body
        .get("nextPageToken")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    let Some(raw) = body.get("documents").and_then(Value::as_array) else {
        return (Vec::new(), next);
    };
    let docs = raw
        .iter()
        .filter_map(|d| {
            let doc = Document::from_firestore(d);
            if doc.is_none() {
                warn!("Skipping Firestore document without a name");
            }
            doc
        })
        .collect();
    (docs, next)
}

/// Document ids are a single path segment.
pub(crate) fn validate_id(id: &str) -> Result<(), StoreError> {
    if id.is_empty() || id.contains('/') || id == "." || id == ".." {
        return Err(StoreError::InvalidId(id.to_string()));
    }
    Ok(())
}

//! Server-only modules: document source and object-storage clients.

pub mod firestore;
pub mod source;
pub mod storage;

use std::path::PathBuf;

/// Failures talking to the document store or object storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Cannot read fixtures {}: {source}", path.display())]
    Fixtures {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document id: {0:?}")]
    InvalidId(String),

    #[error("No download token for {0}")]
    MissingToken(String),
}

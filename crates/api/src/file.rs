use std::path::PathBuf;

use async_trait::async_trait;
use foodtuck_types::CatalogItem;
use tracing::debug;

use crate::{ContentError, ContentSource, decode_catalog};

/// Reads the catalog from a JSON file holding either a bare document array or
/// the query response envelope.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ContentError> {
        let payload = tokio::fs::read_to_string(&self.path).await?;
        let items = decode_catalog(&payload)?;
        debug!(path = %self.path.display(), count = items.len(), "catalog loaded from file");
        Ok(items)
    }
}

//! Foodtuck content source clients.
//!
//! The catalog of sellable items lives in a hosted document store that
//! answers GROQ queries over HTTP. This crate provides:
//!
//! - [`ContentSource`], the seam the navigation surface fetches through
//! - [`SanityClient`], the HTTP implementation with base URL validation
//! - [`FileContentSource`], which reads the same documents from a local file
//!
//! # Example
//!
//! ```ignore
//! use foodtuck_api::{ContentSource, SanityClient};
//! use foodtuck_util::FoodtuckConfig;
//!
//! async fn print_names() -> anyhow::Result<()> {
//!     let config = FoodtuckConfig::load()?;
//!     let client = SanityClient::new_from_config(&config.content)?;
//!     for item in client.fetch_catalog().await? {
//!         println!("{}", item.name);
//!     }
//!     Ok(())
//! }
//! ```

mod file;
mod sanity;

use std::fmt::Debug;

use async_trait::async_trait;
use foodtuck_types::CatalogItem;
use serde::Deserialize;
use thiserror::Error;

pub use file::FileContentSource;
pub use sanity::{FOOD_CATALOG_QUERY, SanityClient, TOKEN_ENV};

/// Errors raised while fetching the catalog.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content source is not configured: {0}")]
    Config(String),
    #[error("content request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content source returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("content response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content file could not be read: {0}")]
    Io(#[from] std::io::Error),
}

/// A place the product catalog can be fetched from.
#[async_trait]
pub trait ContentSource: Send + Sync + Debug {
    /// Fetch every food document, in the order the source returns them.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ContentError>;
}

/// Accepted payload shapes: the query envelope or a bare document array. Any
/// other object, including an error body, fails to decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Documents(Vec<CatalogItem>),
    Envelope { result: Vec<CatalogItem> },
}

/// Decode a catalog payload as returned by the query endpoint or stored in a
/// content file.
pub fn decode_catalog(payload: &str) -> Result<Vec<CatalogItem>, ContentError> {
    let items = match serde_json::from_str::<CatalogPayload>(payload)? {
        CatalogPayload::Documents(items) => items,
        CatalogPayload::Envelope { result } => result,
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_query_envelope_in_order() {
        let payload = r#"{
            "query": "*[_type == \"food\"]",
            "result": [
                {"name": "Pizza", "description": "Cheesy", "category": "Main", "slug": "pizza", "image": "https://cdn/p.png"},
                {"name": "Burger", "description": "Beefy", "category": "Main", "slug": "burger", "image": null}
            ],
            "ms": 4
        }"#;
        let items = decode_catalog(payload).expect("decode");
        let slugs: Vec<_> = items.iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, ["pizza", "burger"]);
        assert!(items[1].image_url.is_empty());
    }

    #[test]
    fn decodes_bare_array() {
        let items = decode_catalog(r#"[{"name":"Salad","slug":"salad"}]"#).expect("decode");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Salad");
    }

    #[test]
    fn empty_result_is_an_empty_catalog() {
        assert!(decode_catalog(r#"{"result": []}"#).expect("decode").is_empty());
    }

    #[test]
    fn objects_without_result_are_decode_errors() {
        for payload in [
            r#"{"error":{"description":"dataset not found"}}"#,
            r#"{"items":[{"name":"Pizza","slug":"pizza"}]}"#,
            r#"{"result": null}"#,
        ] {
            let error = decode_catalog(payload).expect_err(payload);
            assert!(matches!(error, ContentError::Decode(_)), "{payload}: {error}");
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let error = decode_catalog("<html>oops</html>").expect_err("garbage");
        assert!(matches!(error, ContentError::Decode(_)), "{error}");
    }
}

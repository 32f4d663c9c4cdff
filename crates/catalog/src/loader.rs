//! One-shot catalog fetch.
//!
//! The navigation surface fetches the catalog exactly once per mount. The fetch
//! runs on its own task and resolves to a [`Msg`] for the event loop. There is
//! no retry: a failure is logged and the surface keeps working with whatever
//! catalog it already has.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use foodtuck_api::ContentSource;
use foodtuck_types::Msg;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Handle to an in-flight catalog fetch.
///
/// Awaiting it yields [`Msg::CatalogLoaded`] or [`Msg::CatalogFailed`].
/// Dropping it before completion aborts the fetch.
#[derive(Debug)]
pub struct CatalogFetch {
    handle: JoinHandle<Msg>,
}

/// Start the single catalog fetch for this mount.
pub fn spawn_catalog_fetch(source: Arc<dyn ContentSource>) -> CatalogFetch {
    let handle = tokio::spawn(async move {
        match source.fetch_catalog().await {
            Ok(items) => {
                info!(count = items.len(), "product catalog loaded");
                Msg::CatalogLoaded(items)
            }
            Err(err) => {
                error!(error = %err, "Error fetching products");
                Msg::CatalogFailed(err.to_string())
            }
        }
    });
    CatalogFetch { handle }
}

impl Future for CatalogFetch {
    type Output = Msg;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle).poll(cx).map(|joined| {
            joined.unwrap_or_else(|join_error| {
                error!(error = %join_error, "catalog fetch task failed");
                Msg::CatalogFailed(join_error.to_string())
            })
        })
    }
}

impl Drop for CatalogFetch {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

//! Product catalog for the Foodtuck navigation bar: the fetched item cache,
//! the one-shot loader and the search filter that runs over it.

mod cache;
mod loader;
pub mod search;

pub use cache::{CatalogStatus, ProductCatalog};
pub use loader::{CatalogFetch, spawn_catalog_fetch};
pub use search::{SearchState, filter_catalog};

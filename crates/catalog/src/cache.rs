use std::sync::Arc;

use foodtuck_types::CatalogItem;

/// Lifecycle of the cached catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    /// No fetch has resolved yet.
    #[default]
    Pending,
    /// The last fetch succeeded.
    Ready,
    /// The fetch failed; the cache holds whatever it held before.
    Unavailable(String),
}

/// Items fetched from the content source, held for the lifetime of the
/// navigation surface.
///
/// The list is only ever replaced wholesale; items are never patched in place.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    items: Arc<[CatalogItem]>,
    status: CatalogStatus,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Replace the cached items with a freshly fetched list, keeping its order.
    pub fn replace(&mut self, items: Vec<CatalogItem>) {
        self.items = items.into();
        self.status = CatalogStatus::Ready;
    }

    /// Record a failed fetch without touching the cached items.
    pub fn mark_unavailable(&mut self, reason: impl Into<String>) {
        self.status = CatalogStatus::Unavailable(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_swaps_the_whole_list() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.status(), &CatalogStatus::Pending);

        catalog.replace(vec![CatalogItem::new("Pizza", "", "", "pizza", "")]);
        catalog.replace(vec![
            CatalogItem::new("Soup", "", "", "soup", ""),
            CatalogItem::new("Tea", "", "", "tea", ""),
        ]);

        let slugs: Vec<_> = catalog.items().iter().map(|item| item.slug.as_str()).collect();
        assert_eq!(slugs, ["soup", "tea"]);
        assert_eq!(catalog.status(), &CatalogStatus::Ready);
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut catalog = ProductCatalog::new();
        catalog.replace(vec![CatalogItem::new("Pizza", "", "", "pizza", "")]);
        catalog.mark_unavailable("timeout");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.status(), &CatalogStatus::Unavailable("timeout".into()));
    }
}

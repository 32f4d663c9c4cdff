//! In-memory product search.
//!
//! A linear, case-insensitive substring filter over the catalog snapshot. It
//! is re-run in full on every keystroke and on every catalog replacement;
//! catalogs are small enough that incremental diffing buys nothing.

use foodtuck_types::CatalogItem;

/// Filter `catalog` down to the items matching `query`.
///
/// - An empty query matches nothing (the dropdown is search-only, there is no
///   browse mode).
/// - Otherwise an item matches when its name, description, category or slug
///   contains the query, ignoring case.
/// - Matches keep catalog order; there is no ranking.
pub fn filter_catalog(catalog: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog.iter().filter(|item| matches_query(item, &needle)).cloned().collect()
}

/// `needle` must already be lowercased.
fn matches_query(item: &CatalogItem, needle: &str) -> bool {
    [&item.name, &item.description, &item.category, &item.slug]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Query text plus the results derived from it.
///
/// `results` is never set directly; it is recomputed whenever the query or the
/// catalog changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    results: Vec<CatalogItem>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[CatalogItem] {
        &self.results
    }

    /// Whether the query is non-empty but nothing matched.
    pub fn has_no_matches(&self) -> bool {
        !self.query.is_empty() && self.results.is_empty()
    }

    /// Replace the query and recompute results against `catalog`.
    pub fn set_query(&mut self, query: impl Into<String>, catalog: &[CatalogItem]) {
        self.query = query.into();
        self.refresh(catalog);
    }

    /// Recompute results after the catalog changed.
    pub fn refresh(&mut self, catalog: &[CatalogItem]) {
        self.results = filter_catalog(catalog, &self.query);
    }

    /// Clear the query, which also empties the results.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Pizza", "Stone baked", "Main Course", "pizza", ""),
            CatalogItem::new("Burger", "Beef patty", "Main Course", "burger", ""),
            CatalogItem::new("Lemonade", "Fresh squeezed", "Drink", "lemonade", ""),
        ]
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn prefix_query_matches_name() {
        assert_eq!(names(&filter_catalog(&catalog(), "piz")), ["Pizza"]);
    }

    #[test]
    fn mid_word_query_matches() {
        assert_eq!(names(&filter_catalog(&catalog(), "zza")), ["Pizza"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(filter_catalog(&catalog(), "").is_empty());
        assert!(filter_catalog(&[], "").is_empty());
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        assert_eq!(names(&filter_catalog(&catalog(), "BURG")), ["Burger"]);
        assert_eq!(names(&filter_catalog(&catalog(), "drINK")), ["Lemonade"]);
    }

    #[test]
    fn every_field_is_searched_and_order_is_kept() {
        assert_eq!(names(&filter_catalog(&catalog(), "main")), ["Pizza", "Burger"]);
        assert_eq!(names(&filter_catalog(&catalog(), "squeezed")), ["Lemonade"]);
        assert_eq!(names(&filter_catalog(&catalog(), "lemonade")), ["Lemonade"]);
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        assert_eq!(names(&filter_catalog(&catalog(), " ")), ["Pizza", "Burger", "Lemonade"]);
    }

    #[test]
    fn state_recomputes_on_query_and_catalog_change() {
        let mut state = SearchState::new();
        state.set_query("bur", &[]);
        assert!(state.results().is_empty());
        assert!(state.has_no_matches());

        state.refresh(&catalog());
        assert_eq!(names(state.results()), ["Burger"]);
        assert!(!state.has_no_matches());

        state.clear();
        assert_eq!(state.query(), "");
        assert!(state.results().is_empty());
        assert!(!state.has_no_matches());
    }
}

use foodtuck_catalog::SearchState;
use foodtuck_types::{CatalogItem, Route};
use ratatui::layout::Rect;

use crate::ui::components::common::TextInputState;

/// Search box state: the editable query, the derived results and the
/// dropdown's highlight and scroll position.
///
/// Every edit recomputes the results against the catalog passed in; the
/// results are never edited directly.
#[derive(Debug, Default, Clone)]
pub struct SearchBoxState {
    pub input: TextInputState,
    search: SearchState,
    highlighted: Option<usize>,
    scroll_offset: usize,
    /// Last rendered area of the input box.
    pub last_input_area: Rect,
    /// Last rendered area of the dropdown; empty when hidden.
    pub last_dropdown_area: Rect,
    /// Per-result row areas of the dropdown from the last render.
    pub per_result_areas: Vec<Rect>,
}

impl SearchBoxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn results(&self) -> &[CatalogItem] {
        self.search.results()
    }

    pub fn has_no_matches(&self) -> bool {
        self.search.has_no_matches()
    }

    /// The dropdown shows whenever there is a query, either with results or
    /// with a "no products" notice.
    pub fn dropdown_visible(&self) -> bool {
        !self.search.query().is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn insert_char(&mut self, c: char, catalog: &[CatalogItem]) {
        self.input.insert_char(c);
        self.sync_query(catalog);
    }

    pub fn backspace(&mut self, catalog: &[CatalogItem]) {
        if self.input.backspace() {
            self.sync_query(catalog);
        }
    }

    pub fn delete(&mut self, catalog: &[CatalogItem]) {
        if self.input.delete() {
            self.sync_query(catalog);
        }
    }

    /// Replace the whole query, as if it had been typed.
    pub fn set_query(&mut self, query: &str, catalog: &[CatalogItem]) {
        self.input.clear();
        for c in query.chars() {
            self.input.insert_char(c);
        }
        self.sync_query(catalog);
    }

    /// Recompute results after the catalog was replaced.
    pub fn refresh(&mut self, catalog: &[CatalogItem]) {
        self.search.refresh(catalog);
        self.clamp_highlight();
    }

    /// Clear the query, closing the dropdown.
    pub fn clear(&mut self) {
        self.input.clear();
        self.search.clear();
        self.highlighted = None;
        self.scroll_offset = 0;
    }

    pub fn move_highlight(&mut self, down: bool) {
        let len = self.search.results().len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match (self.highlighted, down) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(index), true) => (index + 1).min(len - 1),
            (Some(index), false) => index.saturating_sub(1),
        });
    }

    /// Keep the highlighted row inside a window of `visible` results.
    pub fn ensure_visible(&mut self, visible: usize) {
        let Some(index) = self.highlighted else {
            self.scroll_offset = self.scroll_offset.min(self.max_scroll(visible));
            return;
        };
        if visible == 0 {
            return;
        }
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + visible {
            self.scroll_offset = index + 1 - visible;
        }
    }

    /// Activate the result at `index`: the query is cleared and the product's
    /// detail route is returned for navigation.
    pub fn activate(&mut self, index: usize) -> Option<Route> {
        let route = self.search.results().get(index)?.detail_route();
        self.clear();
        Some(route)
    }

    /// Activate the highlighted result, or the first one when nothing is
    /// highlighted.
    pub fn activate_highlighted(&mut self) -> Option<Route> {
        self.activate(self.highlighted.unwrap_or(0))
    }

    fn sync_query(&mut self, catalog: &[CatalogItem]) {
        let query = self.input.input().to_string();
        self.search.set_query(query, catalog);
        self.highlighted = None;
        self.scroll_offset = 0;
    }

    fn clamp_highlight(&mut self) {
        let len = self.search.results().len();
        self.highlighted = match self.highlighted {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
        if len == 0 {
            self.scroll_offset = 0;
        }
    }

    fn max_scroll(&self, visible: usize) -> usize {
        self.search.results().len().saturating_sub(visible)
    }
}

use foodtuck_types::{NavItem, default_nav_items};
use ratatui::layout::Rect;

/// State for the navigation menu, shared by the inline entries of the
/// expanded bar and the side sheet of the collapsed bar.
///
/// Holds the fixed item list, the keyboard selection, and the areas recorded
/// during the last render for mouse hit testing.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    /// Items displayed in the menu, in declared order.
    pub items: Vec<NavItem>,
    /// Index of the entry keyboard navigation points at.
    pub selected_index: usize,
    /// Last rendered area of the menu slot.
    pub last_area: Rect,
    /// Per-entry areas of the inline menu from the last render.
    pub per_item_areas: Vec<Rect>,
    /// Area of the collapsed-layout menu trigger from the last render.
    pub trigger_area: Rect,
    /// Area of the open menu sheet from the last render.
    pub sheet_area: Rect,
    /// Per-entry areas inside the menu sheet from the last render.
    pub sheet_item_areas: Vec<Rect>,
}

impl NavBarState {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// The fixed site menu.
    pub fn defaults() -> Self {
        Self::new(default_nav_items())
    }

    pub fn selected_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected_index)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    /// Move the selection one step, wrapping at either end.
    pub fn cycle_selection(&mut self, increment: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.selected_index = if increment {
            (self.selected_index + 1) % len
        } else {
            (self.selected_index + len - 1) % len
        };
    }
}

//! Layout selection and geometry for the navigation surface.
//!
//! The bar has two declarative variants chosen by one breakpoint on the
//! terminal width. Everything that differs between them hangs off
//! [`NavLayout`]; components never test the width themselves.

use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Terminals at least this many columns wide get the expanded bar.
pub const EXPANDED_LAYOUT_MIN_WIDTH: u16 = 100;

/// Height of the navigation bar row, borders included.
pub const NAV_BAR_HEIGHT: u16 = 3;

const SEARCH_BOX_WIDTH: u16 = 32;
const CART_WIDTH: u16 = 12;
const MENU_TRIGGER_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavLayout {
    /// Menu trigger plus cart; entries live in an overlay.
    #[default]
    Collapsed,
    /// Inline entries, search box and cart.
    Expanded,
}

impl NavLayout {
    pub fn for_width(width: u16) -> Self {
        if is_expanded_width(width) {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    pub fn shows_search(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// The single breakpoint predicate.
pub fn is_expanded_width(width: u16) -> bool {
    width >= EXPANDED_LAYOUT_MIN_WIDTH
}

/// Screen regions: bar on top, page in the middle, hints at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub nav_bar: Rect,
    pub page: Rect,
    pub hints: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let [nav_bar, page, hints] = Layout::vertical([
        Constraint::Length(NAV_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas { nav_bar, page, hints }
}

/// Slots inside the navigation bar. `search` is empty in the collapsed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBarAreas {
    pub menu: Rect,
    pub search: Rect,
    pub cart: Rect,
}

pub fn nav_bar_areas(area: Rect, layout: NavLayout) -> NavBarAreas {
    match layout {
        NavLayout::Expanded => {
            let [menu, search, cart] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(SEARCH_BOX_WIDTH),
                Constraint::Length(CART_WIDTH),
            ])
            .areas(area);
            NavBarAreas { menu, search, cart }
        }
        NavLayout::Collapsed => {
            let [menu, _, cart] = Layout::horizontal([
                Constraint::Length(MENU_TRIGGER_WIDTH),
                Constraint::Min(0),
                Constraint::Length(CART_WIDTH),
            ])
            .areas(area);
            NavBarAreas {
                menu,
                search: Rect::default(),
                cart,
            }
        }
    }
}

/// Area directly below `anchor` for `rows` content rows plus borders, clipped
/// to `bounds`.
pub fn dropdown_area(anchor: Rect, rows: u16, bounds: Rect) -> Rect {
    let top = anchor.bottom();
    let available = bounds.bottom().saturating_sub(top);
    let height = rows.saturating_add(2).min(available);
    Rect::new(anchor.x, top, anchor.width, height)
}

/// Side sheet for the collapsed menu, anchored to the right edge.
pub fn sheet_area(bounds: Rect, entries: u16) -> Rect {
    let width = bounds.width.min(24);
    let height = entries.saturating_add(2).min(bounds.height);
    Rect::new(bounds.right().saturating_sub(width), bounds.y, width, height)
}

/// Index of the rect containing the point, if any.
pub fn hit_test(areas: &[Rect], column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    areas.iter().position(|area| area.contains(position))
}

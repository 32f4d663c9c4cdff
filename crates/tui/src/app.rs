//! Application state and logic for the Foodtuck navigation surface.
//!
//! `App` owns every piece of state the components read and mutate: the cached
//! catalog, the search box, the cart badge count, the menu, focus and the
//! current layout. Background results arrive as [`Msg`] values through
//! [`App::update`]; component requests come back as [`Effect`] values and are
//! applied by [`App::apply_effects`].

use foodtuck_catalog::ProductCatalog;
use foodtuck_types::{Effect, Msg, Route};
use tracing::{debug, warn};

use crate::{
    router::Router,
    ui::{
        components::{nav_bar::NavBarState, search::SearchBoxState},
        layout::NavLayout,
        theme::Theme,
    },
};

/// Which part of the bar receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Inline entries (expanded) or the menu trigger (collapsed)
    #[default]
    Menu,
    /// Search input; only reachable in the expanded layout
    Search,
    /// Cart icon
    Cart,
}

impl FocusTarget {
    fn order(layout: NavLayout) -> &'static [FocusTarget] {
        match layout {
            NavLayout::Expanded => &[FocusTarget::Menu, FocusTarget::Search, FocusTarget::Cart],
            NavLayout::Collapsed => &[FocusTarget::Menu, FocusTarget::Cart],
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub theme: Box<dyn Theme>,
    pub catalog: ProductCatalog,
    pub search: SearchBoxState,
    pub nav_bar: NavBarState,
    /// Distinct products in the stored cart; the badge hides at zero.
    pub cart_count: usize,
    pub focus: FocusTarget,
    pub layout: NavLayout,
    /// Collapsed-layout menu sheet visibility.
    pub menu_open: bool,
    pub current_route: Route,
    pub should_quit: bool,
    router: Box<dyn Router>,
}

impl App {
    pub fn new(theme: Box<dyn Theme>, router: Box<dyn Router>) -> Self {
        Self {
            theme,
            catalog: ProductCatalog::new(),
            search: SearchBoxState::new(),
            nav_bar: NavBarState::defaults(),
            cart_count: 0,
            focus: FocusTarget::default(),
            layout: NavLayout::default(),
            menu_open: false,
            current_route: Route::new("/"),
            should_quit: false,
            router,
        }
    }

    /// Apply a message from the runtime.
    pub fn update(&mut self, msg: &Msg) {
        match msg {
            Msg::Resize(width, _) => self.set_layout(NavLayout::for_width(*width)),
            Msg::CatalogLoaded(items) => {
                debug!(count = items.len(), "catalog loaded");
                self.catalog.replace(items.clone());
                self.search.refresh(self.catalog.items());
            }
            Msg::CatalogFailed(reason) => {
                warn!(reason = %reason, "catalog unavailable; search will return no results");
                self.catalog.mark_unavailable(reason.clone());
            }
            Msg::CartCountChanged(count) => self.cart_count = *count,
        }
    }

    /// Switch layout variants. Leaving the collapsed layout closes the menu
    /// sheet; entering it moves focus off the hidden search box.
    pub fn set_layout(&mut self, layout: NavLayout) {
        self.layout = layout;
        match layout {
            NavLayout::Expanded => self.menu_open = false,
            NavLayout::Collapsed => {
                if self.focus == FocusTarget::Search {
                    self.focus = FocusTarget::Menu;
                }
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(false);
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = FocusTarget::order(self.layout);
        let len = order.len();
        let current = order.iter().position(|target| *target == self.focus).unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.focus = order[next];
    }

    /// Hand a path to the router and record it as the current page.
    pub fn navigate(&mut self, route: Route) {
        self.router.push(route.as_str());
        self.current_route = route;
        self.menu_open = false;
    }

    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(route) => self.navigate(route),
                Effect::OpenMenu => {
                    if self.layout == NavLayout::Collapsed {
                        self.menu_open = true;
                    }
                }
                Effect::CloseMenu => self.menu_open = false,
                Effect::Quit => self.should_quit = true,
            }
        }
    }
}

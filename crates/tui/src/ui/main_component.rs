//! Top-level view composing the navigation bar, page area and overlays.
//!
//! `MainView` owns the components and routes input: the open menu sheet takes
//! everything, Tab/BackTab move focus between bar slots, other keys go to the
//! focused slot, and clicks are offered to every visible component.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use foodtuck_types::Effect;
use ratatui::{Frame, layout::Rect, text::Span, widgets::Block};

use super::components::{
    CartBadgeComponent, Component, HintBarComponent, MenuSheetComponent, NavBarComponent, PageComponent, SearchComponent,
};
use super::layout::{nav_bar_areas, screen_areas};
use super::theme::theme_helpers as th;
use crate::app::{App, FocusTarget};

#[derive(Debug, Default)]
pub struct MainView {
    nav_bar: NavBarComponent,
    search: SearchComponent,
    cart: CartBadgeComponent,
    menu_sheet: MenuSheetComponent,
    page: PageComponent,
    hint_bar: HintBarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.menu_open {
            return self.menu_sheet.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Tab => {
                app.focus_next();
                return Vec::new();
            }
            KeyCode::BackTab => {
                app.focus_prev();
                return Vec::new();
            }
            KeyCode::Char('q') if app.focus != FocusTarget::Search => return vec![Effect::Quit],
            _ => {}
        }
        match app.focus {
            FocusTarget::Menu => self.nav_bar.handle_key_events(app, key),
            FocusTarget::Search => self.search.handle_key_events(app, key),
            FocusTarget::Cart => self.cart.handle_key_events(app, key),
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if app.menu_open {
            return self.menu_sheet.handle_mouse_events(app, mouse);
        }
        // The dropdown overlays the page, so it gets the first look.
        let effects = self.search.handle_mouse_events(app, mouse);
        if !effects.is_empty() {
            return effects;
        }
        let effects = self.nav_bar.handle_mouse_events(app, mouse);
        if !effects.is_empty() {
            return effects;
        }
        self.cart.handle_mouse_events(app, mouse)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(th::app_background_style(&*app.theme)), area);

        let screen = screen_areas(area);
        let bar = nav_bar_areas(screen.nav_bar, app.layout);
        self.nav_bar.render(frame, bar.menu, app);
        if app.layout.shows_search() {
            self.search.render(frame, bar.search, app);
        } else {
            app.search.last_input_area = Rect::default();
        }
        self.cart.render(frame, bar.cart, app);
        self.page.render(frame, screen.page, app);

        self.search.render_dropdown(frame, area, app);
        if app.menu_open {
            self.menu_sheet.render(frame, area, app);
        } else {
            app.nav_bar.sheet_area = Rect::default();
            app.nav_bar.sheet_item_areas.clear();
        }

        let hints = self.hint_spans(app);
        self.hint_bar.render(frame, screen.hints, &*app.theme, hints);
    }

    fn hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        if app.menu_open {
            return self.menu_sheet.get_hint_spans(app);
        }
        match app.focus {
            FocusTarget::Menu => self.nav_bar.get_hint_spans(app),
            FocusTarget::Search => self.search.get_hint_spans(app),
            FocusTarget::Cart => self.cart.get_hint_spans(app),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use foodtuck_types::{CatalogItem, Msg, Route};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        router::HistoryRouter,
        ui::theme::{FoodtuckTheme, Theme},
    };

    fn setup(width: u16) -> (App, MainView, HistoryRouter, Terminal<TestBackend>) {
        let router = HistoryRouter::new();
        let mut app = App::new(Box::new(FoodtuckTheme::new()), Box::new(router.clone()));
        app.update(&Msg::Resize(width, 24));
        app.update(&Msg::CatalogLoaded(vec![
            CatalogItem::new("Pizza", "Cheese and tomato", "Main", "pizza", ""),
            CatalogItem::new("Burger", "Beef", "Main", "burger", ""),
        ]));
        let terminal = Terminal::new(TestBackend::new(width, 24)).expect("terminal");
        (app, MainView::new(), router, terminal)
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App, view: &mut MainView) -> String {
        terminal.draw(|frame| view.render(frame, frame.area(), app)).expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn screen_is_filled_with_background_role() {
        let (mut app, mut view, _, mut terminal) = setup(120);
        draw(&mut terminal, &mut app, &mut view);
        let background = app.theme.roles().background;
        let corner = terminal.backend().buffer().cell((119, 20)).map(|cell| cell.bg);
        assert_eq!(corner, Some(background));
    }

    #[test]
    fn expanded_layout_shows_entries_and_search() {
        let (mut app, mut view, _, mut terminal) = setup(120);
        let text = draw(&mut terminal, &mut app, &mut view);
        for label in ["Home", "Menu", "Blog", "Chef", "About", "Shop", "Contact"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Search products"));
        assert!(!text.contains("≡ Menu"));
    }

    #[test]
    fn collapsed_layout_hides_search_and_entries() {
        let (mut app, mut view, _, mut terminal) = setup(60);
        let text = draw(&mut terminal, &mut app, &mut view);
        assert!(text.contains("≡ Menu"));
        assert!(!text.contains("Search products"));
        assert!(!text.contains("Contact"));
    }

    #[test]
    fn tab_cycle_then_type_and_activate() {
        let (mut app, mut view, router, mut terminal) = setup(120);
        draw(&mut terminal, &mut app, &mut view);
        view.handle_key_events(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, FocusTarget::Search);

        for c in "burg".chars() {
            let effects = view.handle_key_events(&mut app, key(KeyCode::Char(c)));
            app.apply_effects(effects);
        }
        let text = draw(&mut terminal, &mut app, &mut view);
        assert!(text.contains("Burger"));

        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter));
        app.apply_effects(effects);
        assert_eq!(router.current(), Some(Route::new("/shoplist/burger")));
        assert_eq!(app.search.query(), "");
        let text = draw(&mut terminal, &mut app, &mut view);
        assert!(!text.contains("Burger"));
        assert!(text.contains("/shoplist/burger"));
    }

    #[test]
    fn q_types_into_search_but_quits_elsewhere() {
        let (mut app, mut view, _, _) = setup(120);
        app.focus = FocusTarget::Search;
        assert!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))).is_empty());
        assert_eq!(app.search.query(), "q");
        app.focus = FocusTarget::Cart;
        assert_eq!(view.handle_key_events(&mut app, key(KeyCode::Char('q'))), vec![Effect::Quit]);
    }

    #[test]
    fn clicking_inline_entry_navigates() {
        let (mut app, mut view, router, mut terminal) = setup(120);
        draw(&mut terminal, &mut app, &mut view);
        let blog = app.nav_bar.per_item_areas[2];
        let effects = view.handle_mouse_events(&mut app, click(blog.x, blog.y));
        app.apply_effects(effects);
        assert_eq!(router.current(), Some(Route::new("/blog")));
    }

    #[test]
    fn collapsed_menu_sheet_opens_and_navigates() {
        let (mut app, mut view, router, mut terminal) = setup(60);
        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter));
        app.apply_effects(effects);
        assert!(app.menu_open);

        let text = draw(&mut terminal, &mut app, &mut view);
        assert!(text.contains("Contact"));
        let contact = app.nav_bar.sheet_item_areas[6];
        let effects = view.handle_mouse_events(&mut app, click(contact.x + 1, contact.y));
        app.apply_effects(effects);
        assert!(!app.menu_open);
        assert_eq!(router.current(), Some(Route::new("/SignUp")));
    }

    #[test]
    fn clicking_outside_sheet_closes_it() {
        let (mut app, mut view, router, mut terminal) = setup(60);
        app.apply_effects(vec![Effect::OpenMenu]);
        draw(&mut terminal, &mut app, &mut view);
        let effects = view.handle_mouse_events(&mut app, click(0, 20));
        app.apply_effects(effects);
        assert!(!app.menu_open);
        assert!(router.history().is_empty());
    }

    #[test]
    fn cart_badge_tracks_count() {
        let (mut app, mut view, router, mut terminal) = setup(120);
        app.update(&Msg::CartCountChanged(4));
        let text = draw(&mut terminal, &mut app, &mut view);
        assert!(text.contains(" 4 "));

        app.focus = FocusTarget::Cart;
        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter));
        app.apply_effects(effects);
        assert_eq!(router.current(), Some(Route::new("/cart")));
    }
}

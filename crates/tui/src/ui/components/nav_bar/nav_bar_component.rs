use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use foodtuck_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, FocusTarget},
    ui::{
        components::Component,
        layout::{NavLayout, hit_test},
        theme::theme_helpers as th,
    },
};

const ENTRY_GAP: u16 = 3;
const TRIGGER_LABEL: &str = "≡ Menu";

/// The menu slot of the navigation bar.
///
/// In the expanded layout it shows every entry inline; in the collapsed
/// layout it shows a single trigger that opens the menu sheet.
#[derive(Debug, Default)]
pub struct NavBarComponent;

impl NavBarComponent {
    pub fn new() -> Self {
        Self
    }

    fn render_entries(frame: &mut Frame, inner: Rect, app: &mut App) {
        let theme = &*app.theme;
        let focused = app.focus == FocusTarget::Menu;
        let state = &mut app.nav_bar;
        state.per_item_areas.clear();

        let mut x = inner.x;
        for (index, item) in state.items.iter().enumerate() {
            let width = u16::try_from(item.label.width()).unwrap_or(u16::MAX);
            if x.saturating_add(width) > inner.right() {
                break;
            }
            let area = Rect::new(x, inner.y, width, 1);
            let style = if focused && index == state.selected_index {
                th::nav_item_style(theme, true)
            } else {
                th::nav_item_style(theme, false)
            };
            frame.render_widget(Paragraph::new(Span::styled(item.label.as_str(), style)), area);
            state.per_item_areas.push(area);
            x = x.saturating_add(width + ENTRY_GAP);
        }
    }

    fn render_trigger(frame: &mut Frame, inner: Rect, app: &App) {
        let style = if app.focus == FocusTarget::Menu {
            app.theme.accent_emphasis_style()
        } else {
            app.theme.accent_primary_style()
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(TRIGGER_LABEL, style))), inner);
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match (app.layout, key.code) {
            (NavLayout::Expanded, KeyCode::Right) => app.nav_bar.cycle_selection(true),
            (NavLayout::Expanded, KeyCode::Left) => app.nav_bar.cycle_selection(false),
            (NavLayout::Expanded, KeyCode::Enter) => {
                if let Some(item) = app.nav_bar.selected_item() {
                    effects.push(Effect::Navigate(item.route.clone()));
                }
            }
            (NavLayout::Collapsed, KeyCode::Enter | KeyCode::Down) => effects.push(Effect::OpenMenu),
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return effects;
        }
        match app.layout {
            NavLayout::Expanded => {
                if let Some(index) = hit_test(&app.nav_bar.per_item_areas, mouse.column, mouse.row)
                    && let Some(item) = app.nav_bar.items.get(index).cloned()
                {
                    app.nav_bar.select(index);
                    app.focus = FocusTarget::Menu;
                    effects.push(Effect::Navigate(item.route));
                }
            }
            NavLayout::Collapsed => {
                if app.nav_bar.trigger_area.contains(Position::new(mouse.column, mouse.row)) {
                    app.focus = FocusTarget::Menu;
                    effects.push(Effect::OpenMenu);
                }
            }
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let focused = app.focus == FocusTarget::Menu;
        let title = match app.layout {
            NavLayout::Expanded => Some("Foodtuck"),
            NavLayout::Collapsed => None,
        };
        let block = th::block(&*app.theme, title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        app.nav_bar.last_area = area;
        match app.layout {
            NavLayout::Expanded => {
                app.nav_bar.trigger_area = Rect::default();
                Self::render_entries(frame, inner, app);
            }
            NavLayout::Collapsed => {
                app.nav_bar.per_item_areas.clear();
                app.nav_bar.trigger_area = area;
                Self::render_trigger(frame, inner, app);
            }
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let hints: &[(&'static str, &'static str)] = match app.layout {
            NavLayout::Expanded => &[(" ←/→", " Select  "), ("Enter", " Open  "), ("Tab", " Next  "), ("q", " Quit ")],
            NavLayout::Collapsed => &[(" Enter", " Menu  "), ("Tab", " Next  "), ("q", " Quit ")],
        };
        th::build_hint_spans(&*app.theme, hints)
    }
}

#[cfg(test)]
mod tests {
    use foodtuck_types::{Msg, Route};
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    use super::*;
    use crate::{router::HistoryRouter, ui::theme::FoodtuckTheme};

    fn entry_fg(terminal: &Terminal<TestBackend>, area: Rect) -> Option<Color> {
        terminal.backend().buffer().cell((area.x, area.y)).map(|cell| cell.fg)
    }

    #[test]
    fn current_page_entry_is_not_styled_differently() {
        let mut app = App::new(Box::new(FoodtuckTheme::new()), Box::new(HistoryRouter::new()));
        app.update(&Msg::Resize(120, 24));
        app.navigate(Route::new("/blog"));
        app.focus = FocusTarget::Cart;

        let mut component = NavBarComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).expect("terminal");
        terminal
            .draw(|frame| component.render(frame, frame.area(), &mut app))
            .expect("draw");

        let blog = app.nav_bar.per_item_areas[2];
        let chef = app.nav_bar.per_item_areas[3];
        assert_eq!(entry_fg(&terminal, blog), entry_fg(&terminal, chef));
    }
}

//! Cart icon with the distinct-product badge.
//!
//! The count comes from the cart poller via `Msg::CartCountChanged`; the
//! badge is hidden while it is zero. Activation navigates to the cart page.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use foodtuck_types::{CART_ROUTE, Effect, Route};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{App, FocusTarget},
    ui::{components::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct CartBadgeComponent {
    last_area: Rect,
}

impl CartBadgeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Badge text; `None` hides the badge.
    pub fn badge_label(count: usize) -> Option<String> {
        (count > 0).then(|| format!(" {count} "))
    }
}

impl Component for CartBadgeComponent {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter => vec![Effect::Navigate(Route::new(CART_ROUTE))],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self.last_area.contains(Position::new(mouse.column, mouse.row))
        {
            app.focus = FocusTarget::Cart;
            return vec![Effect::Navigate(Route::new(CART_ROUTE))];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        self.last_area = area;
        let theme = &*app.theme;
        let focused = app.focus == FocusTarget::Cart;
        let block = th::block(theme, None, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label_style = if focused {
            theme.accent_emphasis_style()
        } else {
            theme.text_primary_style()
        };
        let mut spans = vec![Span::styled("Cart", label_style)];
        if let Some(badge) = Self::badge_label(app.cart_count) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(badge, th::badge_style(theme)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.theme, &[(" Enter", " View cart  "), ("Tab", " Next  "), ("q", " Quit ")])
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use foodtuck_types::Msg;
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{router::HistoryRouter, ui::theme::FoodtuckTheme};

    fn render(app: &mut App, component: &mut CartBadgeComponent) -> String {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).expect("terminal");
        terminal
            .draw(|frame| component.render(frame, frame.area(), app))
            .expect("draw");
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn badge_hidden_at_zero() {
        assert_eq!(CartBadgeComponent::badge_label(0), None);
        assert_eq!(CartBadgeComponent::badge_label(2).as_deref(), Some(" 2 "));
        assert_eq!(CartBadgeComponent::badge_label(250).as_deref(), Some(" 250 "));
    }

    #[test]
    fn renders_count_from_poller() {
        let mut app = App::new(Box::new(FoodtuckTheme::new()), Box::new(HistoryRouter::new()));
        let mut component = CartBadgeComponent::new();
        assert!(!render(&mut app, &mut component).contains('2'));

        app.update(&Msg::CartCountChanged(2));
        assert!(render(&mut app, &mut component).contains(" 2 "));
    }

    #[test]
    fn large_counts_render_in_full() {
        let mut app = App::new(Box::new(FoodtuckTheme::new()), Box::new(HistoryRouter::new()));
        let mut component = CartBadgeComponent::new();
        app.update(&Msg::CartCountChanged(150));
        assert!(render(&mut app, &mut component).contains(" 150 "));
    }

    #[test]
    fn click_navigates_to_cart() {
        let mut app = App::new(Box::new(FoodtuckTheme::new()), Box::new(HistoryRouter::new()));
        let mut component = CartBadgeComponent::new();
        render(&mut app, &mut component);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(component.handle_mouse_events(&mut app, click), vec![Effect::Navigate(Route::new("/cart"))]);
        assert_eq!(app.focus, FocusTarget::Cart);
    }
}

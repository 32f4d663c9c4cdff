use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use foodtuck_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{App, FocusTarget},
    ui::{
        components::Component,
        layout::{dropdown_area, hit_test},
        theme::theme_helpers as th,
    },
};

const PLACEHOLDER: &str = "Search products...";
const NO_RESULTS: &str = "No products found";
/// Rows per result: name, then category.
const ROWS_PER_RESULT: u16 = 2;
const MAX_DROPDOWN_ROWS: u16 = 12;

/// Search input with a results dropdown.
///
/// Every edit refilters the cached catalog. Activating a result (Enter or a
/// click) clears the query and navigates to the product's detail page.
#[derive(Debug, Default)]
pub struct SearchComponent;

impl SearchComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draw the dropdown beneath the input. Called after the page so it
    /// overlays it; `bounds` is the full frame.
    pub fn render_dropdown(&mut self, frame: &mut Frame, bounds: Rect, app: &mut App) {
        let state = &mut app.search;
        state.per_result_areas.clear();
        if !app.layout.shows_search() || !state.dropdown_visible() {
            state.last_dropdown_area = Rect::default();
            return;
        }

        let theme = &*app.theme;
        let rows = if state.has_no_matches() {
            1
        } else {
            u16::try_from(state.results().len())
                .unwrap_or(u16::MAX)
                .saturating_mul(ROWS_PER_RESULT)
                .min(MAX_DROPDOWN_ROWS)
        };
        let area = dropdown_area(state.last_input_area, rows, bounds);
        state.last_dropdown_area = area;
        if area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);
        let block = th::dropdown_block(theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let muted = theme.roles().dropdown_text_muted;
        if state.has_no_matches() {
            frame.render_widget(
                Paragraph::new(Span::styled(NO_RESULTS, Style::default().fg(muted))),
                inner,
            );
            return;
        }

        let visible = usize::from(inner.height / ROWS_PER_RESULT);
        state.ensure_visible(visible);
        let first = state.scroll_offset();
        let highlighted = state.highlighted();
        let mut row_y = inner.y;
        let mut row_areas = Vec::with_capacity(visible);
        for (index, item) in state.results().iter().enumerate().skip(first).take(visible) {
            let row = Rect::new(inner.x, row_y, inner.width, ROWS_PER_RESULT);
            let (name_style, category_style) = if highlighted == Some(index) {
                let selected = theme.selection_style();
                (selected.add_modifier(Modifier::BOLD), selected)
            } else {
                let base = Style::default().fg(theme.roles().dropdown_text);
                (base.add_modifier(Modifier::BOLD), base.fg(muted))
            };
            let lines = vec![
                Line::from(Span::styled(item.name.clone(), name_style)),
                Line::from(Span::styled(item.category.clone(), category_style)),
            ];
            let paragraph = if highlighted == Some(index) {
                Paragraph::new(lines).style(theme.selection_style())
            } else {
                Paragraph::new(lines)
            };
            frame.render_widget(paragraph, row);
            row_areas.push(row);
            row_y += ROWS_PER_RESULT;
        }
        state.per_result_areas = row_areas;
    }
}

impl Component for SearchComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let catalog = app.catalog.items();
        let state = &mut app.search;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => state.insert_char(c, catalog),
            KeyCode::Backspace => state.backspace(catalog),
            KeyCode::Delete => state.delete(catalog),
            KeyCode::Left => state.input.move_left(),
            KeyCode::Right => state.input.move_right(),
            KeyCode::Home => state.input.move_home(),
            KeyCode::End => state.input.move_end(),
            KeyCode::Down => state.move_highlight(true),
            KeyCode::Up => state.move_highlight(false),
            KeyCode::Esc => state.clear(),
            KeyCode::Enter => {
                return state.activate_highlighted().map(Effect::Navigate).into_iter().collect();
            }
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !app.layout.shows_search() {
            return Vec::new();
        }
        let state = &mut app.search;
        if let Some(row) = hit_test(&state.per_result_areas, mouse.column, mouse.row) {
            let route = state.activate(state.scroll_offset() + row);
            app.focus = FocusTarget::Search;
            return route.map(Effect::Navigate).into_iter().collect();
        }
        if state.last_input_area.contains(Position::new(mouse.column, mouse.row)) {
            app.focus = FocusTarget::Search;
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let focused = app.focus == FocusTarget::Search;
        let state = &mut app.search;
        state.last_input_area = area;

        let block = th::search_block(theme, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.input.input().is_empty() {
            frame.render_widget(Paragraph::new(Span::styled(PLACEHOLDER, theme.text_muted_style())), inner);
        } else {
            let scroll = state.input.cursor_column().saturating_sub(inner.width.saturating_sub(1));
            frame.render_widget(
                Paragraph::new(Span::styled(state.input.input().to_string(), theme.text_primary_style()))
                    .scroll((0, scroll)),
                inner,
            );
        }

        if focused && inner.width > 0 {
            let column = state.input.cursor_column().min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(inner.x + column, inner.y));
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let hints: &[(&'static str, &'static str)] = if app.search.results().is_empty() {
            &[(" Type", " Search  "), ("Esc", " Clear  "), ("Tab", " Next ")]
        } else {
            &[(" ↑/↓", " Highlight  "), ("Enter", " Open product  "), ("Esc", " Clear  "), ("Tab", " Next ")]
        };
        th::build_hint_spans(&*app.theme, hints)
    }
}

#[cfg(test)]
mod tests {
    use foodtuck_types::{CatalogItem, Msg};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{router::HistoryRouter, ui::theme::FoodtuckTheme};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_catalog() -> App {
        let mut app = App::new(Box::new(FoodtuckTheme::new()), Box::new(HistoryRouter::new()));
        app.update(&Msg::Resize(120, 30));
        app.update(&Msg::CatalogLoaded(vec![
            CatalogItem::new("Pizza", "Cheese", "Main", "pizza", ""),
            CatalogItem::new("Soup", "Tomato", "Starter", "soup", ""),
        ]));
        app.focus = FocusTarget::Search;
        app
    }

    fn draw(app: &mut App, component: &mut SearchComponent) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).expect("terminal");
        terminal
            .draw(|frame| {
                component.render(frame, Rect::new(0, 0, 32, 3), app);
                component.render_dropdown(frame, frame.area(), app);
            })
            .expect("draw");
        terminal
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn typing_then_enter_navigates_and_clears() {
        let mut app = app_with_catalog();
        let mut component = SearchComponent::new();
        for c in "SOU".chars() {
            component.handle_key_events(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.search.results().len(), 1);

        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Navigate("/shoplist/soup".into())]);
        assert_eq!(app.search.query(), "");
    }

    #[test]
    fn enter_with_empty_query_does_nothing() {
        let mut app = app_with_catalog();
        let mut component = SearchComponent::new();
        assert!(component.handle_key_events(&mut app, key(KeyCode::Enter)).is_empty());
    }

    #[test]
    fn dropdown_lists_name_and_category() {
        let mut app = app_with_catalog();
        let mut component = SearchComponent::new();
        component.handle_key_events(&mut app, key(KeyCode::Char('p')));
        component.handle_key_events(&mut app, key(KeyCode::Char('i')));
        let terminal = draw(&mut app, &mut component);
        let text = buffer_text(&terminal);
        assert!(text.contains("Pizza"));
        assert!(text.contains("Main"));
        assert!(!text.contains("Soup"));
        assert_eq!(app.search.per_result_areas.len(), 1);
    }

    #[test]
    fn dropdown_reports_no_matches() {
        let mut app = app_with_catalog();
        let mut component = SearchComponent::new();
        component.handle_key_events(&mut app, key(KeyCode::Char('z')));
        let terminal = draw(&mut app, &mut component);
        assert!(buffer_text(&terminal).contains(NO_RESULTS));
        assert!(app.search.per_result_areas.is_empty());
    }

    #[test]
    fn clicking_a_result_activates_it() {
        let mut app = app_with_catalog();
        let mut component = SearchComponent::new();
        component.handle_key_events(&mut app, key(KeyCode::Char('p')));
        draw(&mut app, &mut component);
        let second = app.search.per_result_areas[1];

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: second.x + 1,
            row: second.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        let effects = component.handle_mouse_events(&mut app, click);
        assert_eq!(effects, vec![Effect::Navigate("/shoplist/soup".into())]);
        assert!(!app.search.dropdown_visible());
    }

    #[test]
    fn escape_clears_query() {
        let mut app = app_with_catalog();
        let mut component = SearchComponent::new();
        component.handle_key_events(&mut app, key(KeyCode::Char('p')));
        component.handle_key_events(&mut app, key(KeyCode::Esc));
        assert_eq!(app.search.query(), "");
        assert!(app.search.results().is_empty());
    }
}

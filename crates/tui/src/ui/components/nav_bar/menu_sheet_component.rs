use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use foodtuck_types::Effect;
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Clear, Paragraph},
};

use crate::{
    app::App,
    ui::{
        components::Component,
        layout::{hit_test, sheet_area},
        theme::theme_helpers as th,
    },
};

/// Side sheet listing the menu entries vertically.
///
/// Only shown in the collapsed layout while `App::menu_open` is set. It owns
/// all input while open; clicking outside it closes it.
#[derive(Debug, Default)]
pub struct MenuSheetComponent;

impl MenuSheetComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for MenuSheetComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match key.code {
            KeyCode::Down | KeyCode::Tab => app.nav_bar.cycle_selection(true),
            KeyCode::Up | KeyCode::BackTab => app.nav_bar.cycle_selection(false),
            KeyCode::Enter => {
                if let Some(item) = app.nav_bar.selected_item() {
                    effects.push(Effect::Navigate(item.route.clone()));
                }
            }
            KeyCode::Esc => effects.push(Effect::CloseMenu),
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return effects;
        }
        if let Some(index) = hit_test(&app.nav_bar.sheet_item_areas, mouse.column, mouse.row) {
            if let Some(item) = app.nav_bar.items.get(index).cloned() {
                app.nav_bar.select(index);
                effects.push(Effect::Navigate(item.route));
            }
        } else if !app.nav_bar.sheet_area.contains(Position::new(mouse.column, mouse.row)) {
            effects.push(Effect::CloseMenu);
        }
        effects
    }

    /// `rect` is the full frame; the sheet anchors to its right edge.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let state = &mut app.nav_bar;
        let entries = u16::try_from(state.items.len()).unwrap_or(u16::MAX);
        let area = sheet_area(rect, entries);
        frame.render_widget(Clear, area);
        let block = th::block(theme, Some("Menu"), true);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        state.sheet_area = area;
        state.sheet_item_areas.clear();
        for (index, item) in state.items.iter().enumerate() {
            let Ok(offset) = u16::try_from(index) else { break };
            if offset >= inner.height {
                break;
            }
            let row = Rect::new(inner.x, inner.y + offset, inner.width, 1);
            let style = if index == state.selected_index {
                theme.selection_style()
            } else {
                theme.text_primary_style()
            };
            frame.render_widget(Paragraph::new(Span::styled(format!(" {}", item.label), style)).style(style), row);
            state.sheet_item_areas.push(row);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.theme, &[(" ↑/↓", " Select  "), ("Enter", " Open  "), ("Esc", " Close ")])
    }
}

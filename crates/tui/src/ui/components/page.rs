//! Page area below the bar.
//!
//! Pages themselves are out of scope for the navigation surface; this view
//! only shows which route the router was last asked for.

use foodtuck_catalog::CatalogStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }
}

impl Component for PageComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme;
        let block = th::block(theme, None, false).style(th::app_background_style(theme));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut lines = vec![
            Line::from(Span::styled("Foodtuck", theme.accent_emphasis_style())),
            Line::from(vec![
                Span::styled("Current page ", theme.text_muted_style()),
                Span::styled(app.current_route.to_string(), theme.text_primary_style()),
            ]),
        ];
        if app.catalog.status() == &CatalogStatus::Pending {
            lines.push(Line::from(Span::styled("Loading menu...", theme.text_muted_style())));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

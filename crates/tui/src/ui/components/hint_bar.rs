//! Hint bar component for keyboard shortcuts.
//!
//! Renders the single-line strip at the bottom of the screen. The spans come
//! from whichever component currently owns input.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

#[derive(Debug, Default)]
pub struct HintBarComponent;

impl HintBarComponent {
    pub fn render(&mut self, frame: &mut Frame, rect: Rect, theme: &dyn Theme, spans: Vec<Span<'static>>) {
        let mut line = spans;
        line.push(Span::styled("  Ctrl+C", theme.accent_emphasis_style()));
        line.push(Span::styled(" Exit", theme.text_muted_style()));
        frame.render_widget(Paragraph::new(Line::from(line)), rect);
    }
}

use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Full-screen fill drawn beneath every panel.
pub fn app_background_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { background, text, .. } = *theme.roles();
    Style::default().bg(background).fg(text)
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Rounded, accent-outlined block for the search input.
pub fn search_block<T: Theme + ?Sized>(theme: &T, focused: bool) -> Block<'static> {
    let mut border = theme.accent_primary_style();
    if focused {
        border = border.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(panel_style(theme))
}

/// Light card used for the results dropdown.
pub fn dropdown_block<T: Theme + ?Sized>(theme: &T) -> Block<'static> {
    let ThemeRoles {
        dropdown_bg,
        dropdown_text,
        dropdown_text_muted,
        ..
    } = *theme.roles();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(dropdown_text_muted).bg(dropdown_bg))
        .style(Style::default().bg(dropdown_bg).fg(dropdown_text))
}

/// Style for a navigation entry; focused entries use the accent color.
pub fn nav_item_style<T: Theme + ?Sized>(theme: &T, focused: bool) -> Style {
    if focused {
        theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.text_primary_style()
    }
}

/// Badge/tag style (filled accent, readable text).
pub fn badge_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles {
        accent_primary,
        accent_contrast,
        ..
    } = *theme.roles();
    Style::default().bg(accent_primary).fg(accent_contrast).add_modifier(Modifier::BOLD)
}

/// Build `key description` hint spans for the hint bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

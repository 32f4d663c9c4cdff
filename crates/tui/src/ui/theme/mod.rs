//! Theme styling for the navigation surface.
//!
//! A truecolor brand palette plus an indexed-color fallback, semantic roles,
//! and helper builders for Ratatui widgets. Prefer these helpers over
//! hard-coding colors in components.

use std::env;

use tracing::debug;

pub mod foodtuck;
pub mod roles;
pub mod theme_helpers;

pub use foodtuck::{FoodtuckAnsiTheme, FoodtuckTheme};
pub use roles::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Pick the palette the terminal can display.
pub fn load() -> Box<dyn Theme> {
    match detect_color_capability() {
        ColorCapability::Truecolor => Box::new(FoodtuckTheme::new()),
        ColorCapability::Ansi256 => {
            debug!("ANSI-only terminal detected; using indexed palette");
            Box::new(FoodtuckAnsiTheme::new())
        }
    }
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

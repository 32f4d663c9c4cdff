use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Brand palette: black bar, orange accent, white dropdown card.
pub const BLACK: Color = Color::Rgb(0x0D, 0x0D, 0x0D);
pub const CHARCOAL: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const ORANGE: Color = Color::Rgb(0xFF, 0x9F, 0x0D); // #ff9f0d
pub const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
pub const GRAY_600: Color = Color::Rgb(0x4B, 0x55, 0x63);
pub const GRAY_800: Color = Color::Rgb(0x1F, 0x29, 0x37);
pub const GRAY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF);

/// Default truecolor theme.
#[derive(Debug, Clone)]
pub struct FoodtuckTheme {
    roles: ThemeRoles,
}

impl FoodtuckTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: BLACK,
                surface: BLACK,
                border: CHARCOAL,

                text: WHITE,
                text_secondary: GRAY_400,
                text_muted: GRAY_600,

                accent_primary: ORANGE,
                accent_contrast: WHITE,

                dropdown_bg: WHITE,
                dropdown_text: GRAY_800,
                dropdown_text_muted: GRAY_600,

                selection_bg: GRAY_100,
                selection_fg: GRAY_800,
                focus: ORANGE,
            },
        }
    }
}

impl Theme for FoodtuckTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Fallback for terminals without truecolor support; sticks to indexed colors.
#[derive(Debug, Clone)]
pub struct FoodtuckAnsiTheme {
    roles: ThemeRoles,
}

impl FoodtuckAnsiTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Black,
                surface: Color::Black,
                border: Color::DarkGray,

                text: Color::White,
                text_secondary: Color::Gray,
                text_muted: Color::DarkGray,

                accent_primary: Color::Indexed(208),
                accent_contrast: Color::White,

                dropdown_bg: Color::White,
                dropdown_text: Color::Black,
                dropdown_text_muted: Color::DarkGray,

                selection_bg: Color::Indexed(254),
                selection_fg: Color::Black,
                focus: Color::Indexed(208),
            },
        }
    }
}

impl Theme for FoodtuckAnsiTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

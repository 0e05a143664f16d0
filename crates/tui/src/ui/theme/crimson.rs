//! Red and black palette matching the events site (truecolor).

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const GRAY_50: Color = Color::Rgb(0xF9, 0xFA, 0xFB);
pub const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
pub const GRAY_200: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
pub const SLATE_400: Color = Color::Rgb(0x94, 0xA3, 0xB8);
pub const SLATE_500: Color = Color::Rgb(0x64, 0x74, 0x8B);
pub const SLATE_700: Color = Color::Rgb(0x33, 0x41, 0x55);
pub const SLATE_800: Color = Color::Rgb(0x1E, 0x29, 0x3B);
pub const SLATE_900: Color = Color::Rgb(0x0F, 0x17, 0x2A);
pub const SLATE_950: Color = Color::Rgb(0x02, 0x06, 0x17);
pub const RED_100: Color = Color::Rgb(0xFE, 0xE2, 0xE2);
pub const RED_400: Color = Color::Rgb(0xF8, 0x71, 0x71);
pub const RED_700: Color = Color::Rgb(0xB9, 0x1C, 0x1C);
pub const RED_900: Color = Color::Rgb(0x7F, 0x1D, 0x1D);

#[derive(Debug, Clone)]
pub struct CrimsonTheme {
    roles: ThemeRoles,
}

impl CrimsonTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: GRAY_50,
                surface: WHITE,
                surface_elevated: GRAY_100,
                border: GRAY_200,
                shadow: SLATE_400,

                text: SLATE_900,
                text_secondary: SLATE_700,
                text_muted: SLATE_500,

                accent_primary: RED_900,
                accent_secondary: RED_700,
                accent_subtle: RED_100,
                on_accent: WHITE,

                overlay_bg: SLATE_950,
                overlay_text: GRAY_200,
                overlay_divider: SLATE_800,

                focus: RED_400,
            },
        }
    }
}

impl Default for CrimsonTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for CrimsonTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

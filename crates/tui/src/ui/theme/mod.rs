//! Theme styling for the terminal host.
//!
//! Two palettes are available: the crimson truecolor palette that mirrors the
//! events site, and an ANSI 256-color fallback. Prefer the helpers in
//! `theme_helpers` over hard-coded colors.

use std::env;

use tracing::debug;

pub mod ansi256;
pub mod catalog;
pub mod crimson;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use crimson::CrimsonTheme;
pub use roles::Theme;

/// Environment variable naming a theme; wins over settings.
pub const THEME_ENV: &str = "TECHEVENTS_THEME";
/// Environment variable forcing a color mode (`truecolor` or `ansi256`).
pub const COLOR_MODE_ENV: &str = "TECHEVENTS_COLOR_MODE";

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the environment, the settings preference and terminal capabilities.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    let capability = detect_color_capability();
    if matches!(capability, ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; using fallback palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    if let Ok(theme_name) = env::var(THEME_ENV)
        && let Some(definition) = catalog::resolve(&theme_name)
    {
        return LoadedTheme::from_definition(definition);
    }

    if let Some(name) = preferred_theme
        && let Some(definition) = catalog::resolve(name)
    {
        return LoadedTheme::from_definition(definition);
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var(COLOR_MODE_ENV).ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_modes_parse_case_insensitively() {
        assert_eq!(parse_color_mode("TrueColor"), Some(ColorCapability::Truecolor));
        assert_eq!(parse_color_mode("8bit"), Some(ColorCapability::Ansi256));
        assert_eq!(parse_color_mode("sixteen"), None);
    }
}

use super::{Ansi256Theme, CrimsonTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used in settings.
    pub id: &'static str,
    pub label: &'static str,
    /// Alternate spellings accepted from settings and the environment.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "crimson",
        label: "Crimson",
        aliases: &["crimson", "red", "default"],
        is_ansi_fallback: false,
        factory: || Box::new(CrimsonTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Finds a definition by id or alias, ignoring case and surrounding whitespace.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let needle = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS
        .iter()
        .find(|definition| definition.id == needle || definition.aliases.contains(&needle.as_str()))
}

pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ids_and_aliases() {
        assert_eq!(resolve("Crimson").map(|definition| definition.id), Some("crimson"));
        assert_eq!(resolve(" 256 ").map(|definition| definition.id), Some("ansi256"));
        assert!(resolve("dracula").is_none());
    }

    #[test]
    fn defaults_match_capabilities() {
        assert!(!default_truecolor().is_ansi_fallback);
        assert!(default_ansi().is_ansi_fallback);
    }
}

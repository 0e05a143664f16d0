use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Directory name used under the platform configuration directory.
pub const APP_DIR_NAME: &str = "techevents";

/// Expands a leading `~` (either separator style) to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if trimmed == "~" {
        return home();
    }
    match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        Some(rest) => home().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Resolves a file path from an environment override, falling back to
/// `<config_dir>/techevents/<file_name>`.
pub fn app_file_path(env_var: &str, file_name: &str) -> PathBuf {
    if let Ok(value) = std::env::var(env_var) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde(" /tmp/settings.json "), PathBuf::from("/tmp/settings.json"));
    }

    #[test]
    fn tilde_prefix_expands_to_home() {
        if let Some(home) = home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/nav/settings.json"), home.join("nav/settings.json"));
        }
    }

    #[test]
    fn environment_override_wins() {
        temp_env::with_var("TECHEVENTS_TEST_PATH", Some("/tmp/override.json"), || {
            assert_eq!(
                app_file_path("TECHEVENTS_TEST_PATH", "settings.json"),
                PathBuf::from("/tmp/override.json")
            );
        });
        temp_env::with_var("TECHEVENTS_TEST_PATH", Some("   "), || {
            let path = app_file_path("TECHEVENTS_TEST_PATH", "settings.json");
            assert!(path.ends_with("techevents/settings.json"));
        });
    }
}

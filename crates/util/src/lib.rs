//! Settings and filesystem helpers shared by the Tech Events binaries.

mod path_processing;
mod settings;

pub use path_processing::{APP_DIR_NAME, app_file_path, expand_tilde};
pub use settings::{
    LOG_FILE_NAME, LOG_PATH_ENV, SETTINGS_FILE_NAME, SETTINGS_PATH_ENV, Settings, SettingsError, default_log_path,
    default_settings_path,
};

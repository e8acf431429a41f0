use std::path::{Path, PathBuf};

/// File name of the config file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".heroku-review-apps.ini";

/// `~/.heroku-review-apps.ini`
pub fn config(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

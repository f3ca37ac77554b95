// Runtime configuration. The base directory is fixed next to the
// installed binary and nothing is read from the environment.

use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_LOG_FILE: &str = "cli.log";
const FILES_DIR: &str = "files";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the categorized store.
    pub base_dir: PathBuf,
    /// Append-only log file, `None` disables it.
    pub log_file: Option<PathBuf>,
    pub random_user_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_dir: default_base_dir(),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            random_user_url: DEFAULT_RANDOM_USER_URL.into(),
        }
    }
}

impl AppConfig {
    /// Configuration rooted at `base_dir` with no log file.
    pub fn rooted_at(base_dir: impl AsRef<Path>) -> Self {
        AppConfig {
            base_dir: base_dir.as_ref().to_path_buf(),
            log_file: None,
            random_user_url: DEFAULT_RANDOM_USER_URL.into(),
        }
    }
}

/// `<exe dir>/files`, or the platform data dir if the executable path
/// cannot be resolved.
fn default_base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(FILES_DIR)))
        .or_else(|| dirs::data_local_dir().map(|d| d.join("filebox").join(FILES_DIR)))
        .unwrap_or_else(|| PathBuf::from(FILES_DIR))
}

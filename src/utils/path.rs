//! Path utilities: expand ~, validate absolute paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    PathBuf::from(path).is_absolute()
}

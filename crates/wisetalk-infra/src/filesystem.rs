//! Data directory layout for WiseTalk.

use std::path::{Path, PathBuf};

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `WISETALK_DATA_DIR` environment variable
/// 2. `~/.wisetalk`
/// 3. `./.wisetalk`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WISETALK_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".wisetalk");
    }

    PathBuf::from(".wisetalk")
}

/// `{data_dir}/wisetalk.db`
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("wisetalk.db")
}

/// `{data_dir}/config.toml`
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let data_dir = PathBuf::from("/home/user/.wisetalk");
        assert_eq!(
            database_path(&data_dir),
            PathBuf::from("/home/user/.wisetalk/wisetalk.db")
        );
        assert_eq!(
            config_path(&data_dir),
            PathBuf::from("/home/user/.wisetalk/config.toml")
        );
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("WISETALK_DATA_DIR", "/tmp/test-wisetalk");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-wisetalk"));
        unsafe {
            std::env::remove_var("WISETALK_DATA_DIR");
        }
    }
}

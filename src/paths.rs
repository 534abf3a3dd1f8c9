//! Path resolution for trivia data files.
//!
//! Provides XDG-compliant path resolution with an environment override for
//! the database file.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "trivia";

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "TRIVIA_DB_PATH";

/// Get XDG-compliant data directory for trivia.
///
/// # Returns
/// `$XDG_DATA_HOME/trivia`, else `~/.local/share/trivia`, else `./trivia`
/// when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Get database file path.
///
/// # Returns
/// `$TRIVIA_DB_PATH` if set, else `{data_dir}/trivia.db`
pub fn get_db_path() -> PathBuf {
    env::var(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| get_data_dir().join("trivia.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_data_dir_ends_with_app_dir() {
        let path = get_data_dir();
        assert!(path.ends_with("trivia"));
    }

    #[test]
    #[serial]
    fn test_get_db_path_respects_env_var() {
        unsafe {
            env::set_var(DB_PATH_ENV, "/tmp/trivia-paths-test.db");
        }

        assert_eq!(get_db_path(), PathBuf::from("/tmp/trivia-paths-test.db"));

        unsafe {
            env::remove_var(DB_PATH_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_get_db_path_defaults_under_data_dir() {
        unsafe {
            env::remove_var(DB_PATH_ENV);
        }

        let path = get_db_path();
        assert!(path.ends_with("trivia/trivia.db"));
    }
}

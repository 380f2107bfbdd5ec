//! XDG-style path utilities for the configuration directory.

use std::path::PathBuf;

/// Returns the configuration directory for lingo.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/lingo` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/lingo` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join("lingo"),
        |xdg| PathBuf::from(xdg).join("lingo"),
    )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_config_dir_default() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::remove_var("XDG_CONFIG_HOME") };

        let dir = config_dir();
        assert!(dir.ends_with(".config/lingo"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe { std::env::set_var("XDG_CONFIG_HOME", "/custom/config") };

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/lingo"));

        if let Some(val) = original {
            unsafe { std::env::set_var("XDG_CONFIG_HOME", val) };
        } else {
            unsafe { std::env::remove_var("XDG_CONFIG_HOME") };
        }
    }
}

//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which is
//! where the user's home directory lives as far as the plugin can see.

use std::path::PathBuf;

/// Mount point of the host home directory inside the sandbox.
pub const HOST_ROOT: &str = "/host";

/// Directory for plugin-owned files such as trace output.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local")
        .join("share")
        .join("zellij")
        .join("warranty-ratings")
}

/// Maps a leading `~` onto the sandbox home mount.
///
/// ```rust
/// use warranty_ratings::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/ratings.json"), PathBuf::from("/host/ratings.json"));
/// assert_eq!(expand_tilde("/data/ratings.json"), PathBuf::from("/data/ratings.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}

/// Turns a configured path value into a sandbox path.
///
/// Blank values mean "not configured" and return `None`.
#[must_use]
pub fn resolve_config_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(expand_tilde(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tilde_is_host_root() {
        assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
    }

    #[test]
    fn other_users_home_is_not_expanded() {
        assert_eq!(expand_tilde("~alice/data.json"), PathBuf::from("~alice/data.json"));
    }

    #[test]
    fn relative_paths_pass_through() {
        assert_eq!(expand_tilde("themes/dark.toml"), PathBuf::from("themes/dark.toml"));
    }

    #[test]
    fn config_paths_are_trimmed() {
        assert_eq!(
            resolve_config_path("  ~/.config/ratings.toml "),
            Some(PathBuf::from("/host/.config/ratings.toml"))
        );
        assert_eq!(resolve_config_path("   "), None);
    }

    #[test]
    fn data_dir_is_under_host() {
        let dir = data_dir();
        assert!(dir.starts_with(HOST_ROOT));
        assert!(dir.ends_with("warranty-ratings"));
    }
}

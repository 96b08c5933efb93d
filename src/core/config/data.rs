use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name of the root command; the root scope is stored under this key.
pub const ROOT_SCOPE: &str = "twitch";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Values scoped to a command node.
    /// Outer key: space-separated command path (e.g., "twitch bot commands")
    /// Inner key: configuration key (e.g., "file")
    /// Value: configuration value (e.g., "~/live/twitch/commands.yaml")
    #[serde(default)]
    pub scope: BTreeMap<String, BTreeMap<String, String>>,
    /// User-defined shortcuts expanding a single root token into a command path
    /// (e.g., `so = ["bot", "commands", "sync", "shoutout"]`)
    #[serde(default)]
    pub shortcuts: BTreeMap<String, Vec<String>>,
}

impl Config {
    pub fn get(&self, scope: &str, key: &str) -> Option<&str> {
        self.scope
            .get(scope)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    pub fn set(&mut self, scope: &str, key: String, value: String) {
        self.scope
            .entry(scope.to_string())
            .or_default()
            .insert(key, value);
    }

    pub fn set_root(&mut self, key: String, value: String) {
        self.set(ROOT_SCOPE, key, value);
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without the prefix, or systems where no home directory can be
/// determined, are returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let rest = match trimmed.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return PathBuf::from(trimmed),
    };

    match directories::BaseDirs::new() {
        Some(dirs) if rest.is_empty() => dirs.home_dir().to_path_buf(),
        Some(dirs) => dirs.home_dir().join(rest),
        None => PathBuf::from(trimmed),
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/twitch/config.toml` → `~/.config/twitch/config.toml`
/// - Windows: `C:\\Users\\user\\AppData\\Roaming\\twitch` → `C:\\Users\\user\\AppData\\Roaming\\twitch`
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

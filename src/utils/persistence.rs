//! JSON persistence helpers for ~/.darkfort/ files.
//!
//! Only the binary touches the disk. The rules library hands over plain
//! serializable values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CHALLENGES_FILE: &str = "challenges.json";
pub const RULES_FILE: &str = "rules.json";
pub const LOG_FILE: &str = "darkfort.log";

/// Get the ~/.darkfort/ directory path, creating it if needed.
pub fn darkfort_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".darkfort");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load `dir/filename`, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + DeserializeOwned>(dir: &Path, filename: &str) -> T {
    let path = dir.join(filename);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON to `dir/filename`.
pub fn save_json<T: Serialize>(dir: &Path, filename: &str, data: &T) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(dir.join(filename), json)
}

mod config;
mod store;

pub use config::Config;
pub use store::{keys, Store};

use std::path::PathBuf;

/// Returns `~/.config/focusdeck[-dev]/` based on FOCUSDECK_ENV.
///
/// Set FOCUSDECK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusdeck-dev")
    } else {
        base_dir.join("focusdeck")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

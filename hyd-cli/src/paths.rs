//! Default locations for the settings file and the stored lists.

use std::path::PathBuf;

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/hyd/settings.json`
/// - Windows: `%APPDATA%/Hyd/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Hyd").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("hyd").join("settings.json")
    }
}

/// Returns the directory holding `exportedFiles.json` and `drafts.json`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share")
        })
        .join("hyd")
}
